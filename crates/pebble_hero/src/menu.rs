//! # Menu Hover Toggle
//!
//! Pointer-enter widens the container and hides the hamburger lines,
//! then chains the nav list fade/slide. Pointer-leave waits a beat,
//! shrinks the container while the nav list slides out, then restores
//! the hamburger lines.
//!
//! Rapid enter/leave mid-transition retargets the same tweens in place
//! from their current values - the most recent request wins, nothing is
//! queued. Redundant requests (enter while already open or opening)
//! no-op.

use pebble_motion::{Easing, Tween};

use crate::config::MenuConfig;
use crate::stage::{PanelState, Stage, TargetId};

/// The menu expand/collapse state machine.
pub struct MenuToggle {
    /// Current expansion state.
    state: PanelState,
    /// Timings and sizes.
    config: MenuConfig,
    /// Container width.
    width: Tween,
    /// Hamburger line opacity.
    lines: Tween,
    /// Nav list reveal progress (0 hidden, 1 in place).
    nav: Tween,
    /// Remaining shrink delay after a pointer leave.
    collapse_delay: Option<f32>,
    /// Whether the nav chain fired for the current expand.
    nav_chained: bool,
}

impl MenuToggle {
    /// Creates a collapsed menu toggle.
    #[must_use]
    pub fn new(config: MenuConfig) -> Self {
        Self {
            state: PanelState::Collapsed,
            config,
            width: Tween::new(config.collapsed_width, Easing::CubicInOut),
            lines: Tween::new(1.0, Easing::CubicInOut),
            nav: Tween::new(0.0, Easing::CubicOut),
            collapse_delay: None,
            nav_chained: false,
        }
    }

    /// Current expansion state.
    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// Pointer entered the container.
    ///
    /// Returns `false` when ignored (already expanded or expanding).
    pub fn pointer_enter(&mut self) -> bool {
        if self.state.is_open_or_opening() {
            return false;
        }
        tracing::debug!("menu expanding");
        self.state = PanelState::Expanding;
        self.collapse_delay = None;
        self.nav_chained = false;
        self.width
            .retarget(self.config.expanded_width, self.config.expand);
        self.lines.retarget(0.0, self.config.expand);
        true
    }

    /// Pointer left the container.
    ///
    /// Returns `false` when ignored (already collapsed or collapsing).
    pub fn pointer_leave(&mut self) -> bool {
        if self.state.is_closed_or_closing() {
            return false;
        }
        tracing::debug!("menu collapsing");
        self.state = PanelState::Collapsing;
        self.collapse_delay = Some(self.config.collapse_delay);
        true
    }

    /// Advances the toggle and writes its targets to the stage.
    ///
    /// Returns the new state when the toggle *settles* this tick.
    pub fn update(&mut self, dt: f32, stage: &mut Stage) -> Option<PanelState> {
        // The shrink waits out its delay; anything already in flight keeps
        // animating toward its old target until the retarget lands.
        if self.state == PanelState::Collapsing {
            if let Some(remaining) = self.collapse_delay.as_mut() {
                *remaining -= dt;
                if *remaining <= 0.0 {
                    self.collapse_delay = None;
                    self.width
                        .retarget(self.config.collapsed_width, self.config.collapse);
                    self.nav.retarget(0.0, self.config.collapse);
                }
            }
        }

        self.width.update(dt);
        self.lines.update(dt);
        self.nav.update(dt);

        let settled = match self.state {
            PanelState::Expanding => {
                // Nav list reveal chains off the widen
                if self.width.is_complete() && !self.nav_chained {
                    self.nav_chained = true;
                    self.nav.retarget(1.0, self.config.nav_reveal);
                }
                if self.nav_chained && self.nav.is_complete() {
                    self.state = PanelState::Expanded;
                    Some(PanelState::Expanded)
                } else {
                    None
                }
            }
            PanelState::Collapsing => {
                // Hamburger lines come back only after the shrink settles
                if self.collapse_delay.is_none() && self.width.is_complete() && self.nav.is_complete()
                {
                    if self.lines.target() < 1.0 {
                        self.lines.retarget(1.0, self.config.line_restore);
                        None
                    } else if self.lines.is_complete() {
                        self.state = PanelState::Collapsed;
                        Some(PanelState::Collapsed)
                    } else {
                        None
                    }
                } else {
                    None
                }
            }
            PanelState::Collapsed | PanelState::Expanded => None,
        };

        self.apply(stage);
        settled
    }

    /// Writes current tween values to the stage targets.
    ///
    /// The container is anchored at its right edge and grows leftward.
    fn apply(&self, stage: &mut Stage) {
        if let Some(menu) = stage.get_mut(TargetId::Menu) {
            let right = menu.rect.x + menu.rect.width;
            menu.rect.width = self.width.value();
            menu.rect.x = right - menu.rect.width;
        }
        if let Some(lines) = stage.get_mut(TargetId::HamburgerLines) {
            lines.opacity = self.lines.value();
        }
        if let Some(nav) = stage.get_mut(TargetId::NavList) {
            let progress = self.nav.value();
            nav.visible = progress > 0.0;
            nav.opacity = progress;
            nav.y_offset = 100.0 * (1.0 - progress);
        }
    }
}
