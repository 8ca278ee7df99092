//! # Video Panel Toggle
//!
//! Click on the collapsed preview grows the panel to near-fullscreen and
//! raises it above everything else; the close control appears and the
//! play icon hides once the growth settles. Clicking the close control
//! shrinks the panel back to exactly its original corner rect, restores
//! its resting stacking order and brings the play icon back.
//!
//! Redundant requests no-op; reversing mid-flight retargets the rect
//! tweens in place.

use pebble_motion::{Easing, Tween};

use crate::config::VideoConfig;
use crate::stage::{PanelState, Rect, Stage, TargetId};

/// The video preview expand/collapse state machine.
pub struct VideoToggle {
    /// Current expansion state.
    state: PanelState,
    /// Timings, sizes and stacking orders.
    config: VideoConfig,
    /// Panel rect, one tween per component.
    x: Tween,
    y: Tween,
    width: Tween,
    height: Tween,
    /// Close-control reveal progress (play icon shows its inverse).
    overlay: Tween,
    /// Rect the panel returns to on collapse.
    resting_rect: Rect,
    /// Rect the panel grows to on expand.
    expanded_rect: Rect,
    /// Stacking order written to the stage every tick.
    z_current: i32,
}

impl VideoToggle {
    /// Creates a collapsed toggle for the given viewport.
    #[must_use]
    pub fn new(config: VideoConfig, viewport: (f32, f32)) -> Self {
        let resting_rect = Rect::new(
            viewport.0 - config.collapsed_width - config.margin,
            viewport.1 - config.collapsed_height - config.margin,
            config.collapsed_width,
            config.collapsed_height,
        );
        let expanded_rect = Rect::centered_on(
            (viewport.0 * 0.5, viewport.1 * 0.5),
            viewport.0 * config.expanded_fraction,
            viewport.1 * config.expanded_fraction,
        );
        Self {
            state: PanelState::Collapsed,
            config,
            x: Tween::new(resting_rect.x, Easing::CubicOut),
            y: Tween::new(resting_rect.y, Easing::CubicOut),
            width: Tween::new(resting_rect.width, Easing::CubicOut),
            height: Tween::new(resting_rect.height, Easing::CubicOut),
            overlay: Tween::new(0.0, Easing::CubicOut),
            resting_rect,
            expanded_rect,
            z_current: config.resting_z,
        }
    }

    /// Current expansion state.
    #[must_use]
    pub fn state(&self) -> PanelState {
        self.state
    }

    /// The rect the panel rests in while collapsed.
    #[must_use]
    pub fn resting_rect(&self) -> Rect {
        self.resting_rect
    }

    /// Click on the preview panel.
    ///
    /// Returns `false` when ignored (already expanded or expanding).
    pub fn expand(&mut self) -> bool {
        if self.state.is_open_or_opening() {
            return false;
        }
        tracing::debug!("video expanding");
        self.state = PanelState::Expanding;
        // Raised above everything for the whole flight
        self.z_current = self.config.raised_z;
        self.retarget_rect(self.expanded_rect, self.config.expand, Easing::CubicOut);
        true
    }

    /// Click on the close control.
    ///
    /// Returns `false` when ignored (already collapsed or collapsing).
    pub fn collapse(&mut self) -> bool {
        if self.state.is_closed_or_closing() {
            return false;
        }
        tracing::debug!("video collapsing");
        self.state = PanelState::Collapsing;
        self.retarget_rect(self.resting_rect, self.config.collapse, Easing::CubicInOut);
        true
    }

    /// Advances the toggle and writes its targets to the stage.
    ///
    /// Returns the new state when the toggle *settles* this tick.
    pub fn update(&mut self, dt: f32, stage: &mut Stage) -> Option<PanelState> {
        self.x.update(dt);
        self.y.update(dt);
        self.width.update(dt);
        self.height.update(dt);
        self.overlay.update(dt);

        let settled = match self.state {
            PanelState::Expanding => {
                // Close control appears only once the growth settles
                if self.rect_complete() && self.overlay.target() < 1.0 {
                    self.overlay.retarget(1.0, self.config.close_fade);
                }
                if self.rect_complete() && self.overlay.is_complete() && self.overlay.target() >= 1.0
                {
                    self.state = PanelState::Expanded;
                    Some(PanelState::Expanded)
                } else {
                    None
                }
            }
            PanelState::Collapsing => {
                if self.rect_complete() {
                    if self.z_current != self.config.resting_z {
                        // Original stacking order comes back with the rect
                        self.z_current = self.config.resting_z;
                    }
                    if self.overlay.target() > 0.0 {
                        self.overlay.retarget(0.0, self.config.close_fade);
                    }
                    if self.overlay.is_complete() {
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

    /// Current panel rect from the component tweens.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(
            self.x.value(),
            self.y.value(),
            self.width.value(),
            self.height.value(),
        )
    }

    fn rect_complete(&self) -> bool {
        self.x.is_complete()
            && self.y.is_complete()
            && self.width.is_complete()
            && self.height.is_complete()
    }

    fn retarget_rect(&mut self, target: Rect, duration: f32, easing: Easing) {
        for (tween, value) in [
            (&mut self.x, target.x),
            (&mut self.y, target.y),
            (&mut self.width, target.width),
            (&mut self.height, target.height),
        ] {
            tween.set_easing(easing);
            tween.retarget(value, duration);
        }
    }

    /// Writes current tween values to the stage targets.
    fn apply(&self, stage: &mut Stage) {
        let rect = self.rect();
        if let Some(video) = stage.get_mut(TargetId::Video) {
            video.rect = rect;
            video.z_index = self.z_current;
        }
        let overlay = self.overlay.value();
        if let Some(close) = stage.get_mut(TargetId::VideoCloseButton) {
            close.visible = overlay > 0.0;
            close.opacity = overlay;
            close.scale = overlay;
        }
        if let Some(play) = stage.get_mut(TargetId::PlayIcon) {
            play.visible = overlay < 1.0;
            play.opacity = 1.0 - overlay;
        }
    }
}
