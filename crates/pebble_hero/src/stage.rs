//! # Stage
//!
//! The set of named visual targets the choreography drives. The stage is
//! the engine's only output surface: animators mutate visuals, hosts read
//! snapshots and render them however they like.
//!
//! Lookups are guarded. A missing target is skipped by every animator,
//! never an error - a host that strips the video panel out of its layout
//! still gets the rest of the sequence.

use std::collections::HashMap;

use crate::config::HeroConfig;

/// A rectangle in stage coordinates.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position (top edge).
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self {
        x: 0.0,
        y: 0.0,
        width: 0.0,
        height: 0.0,
    };

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle of the given size centered on a point.
    #[must_use]
    pub fn centered_on(center: (f32, f32), width: f32, height: f32) -> Self {
        Self::new(center.0 - width * 0.5, center.1 - height * 0.5, width, height)
    }

    /// Returns the center point.
    #[must_use]
    pub fn center(&self) -> (f32, f32) {
        (self.x + self.width * 0.5, self.y + self.height * 0.5)
    }

    /// Linearly interpolates between two rectangles.
    #[must_use]
    pub fn lerp(&self, other: &Self, t: f32) -> Self {
        Self::new(
            self.x + (other.x - self.x) * t,
            self.y + (other.y - self.y) * t,
            self.width + (other.width - self.width) * t,
            self.height + (other.height - self.height) * t,
        )
    }
}

/// Clip path applied to a visual.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipShape {
    /// Upward-pointing triangular silhouette.
    Triangle,
}

/// Expansion state of a toggleable panel (menu, video).
///
/// Explicit tagged state instead of "whichever animation last ran":
/// handlers no-op when asked for the state they are already in, and
/// retarget in place when reversed mid-transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PanelState {
    /// At rest in the small/closed configuration.
    #[default]
    Collapsed,
    /// Animating toward the open configuration.
    Expanding,
    /// At rest in the open configuration.
    Expanded,
    /// Animating toward the closed configuration.
    Collapsing,
}

impl PanelState {
    /// Returns true for `Expanding` and `Expanded`.
    #[must_use]
    pub const fn is_open_or_opening(self) -> bool {
        matches!(self, Self::Expanding | Self::Expanded)
    }

    /// Returns true for `Collapsing` and `Collapsed`.
    #[must_use]
    pub const fn is_closed_or_closing(self) -> bool {
        matches!(self, Self::Collapsing | Self::Collapsed)
    }
}

/// Stable identifier for a choreographed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TargetId {
    /// Circular loader container.
    Loader,
    /// Brand mark centered in the loader.
    Logo,
    /// Orbiting dot starting at 12 o'clock.
    OrbitDotA,
    /// Orbiting dot starting at 6 o'clock.
    OrbitDotB,
    /// Numeric loading counter below the loader.
    Counter,
    /// The morphing shape (point → triangle → fullscreen square).
    Shape,
    /// Headline text block.
    Headline,
    /// One headline character, indexed across all words.
    Glyph(u8),
    /// Menu container.
    Menu,
    /// Hamburger glyph lines inside the menu container.
    HamburgerLines,
    /// Navigation list revealed on menu expand.
    NavList,
    /// Video preview panel.
    Video,
    /// Close control shown while the video is expanded.
    VideoCloseButton,
    /// Play icon overlay shown while the video is collapsed.
    PlayIcon,
}

/// Render state of a single target.
#[derive(Debug, Clone, PartialEq)]
pub struct Visual {
    /// Bounding rectangle.
    pub rect: Rect,
    /// Opacity in 0-1.
    pub opacity: f32,
    /// Uniform scale factor.
    pub scale: f32,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Corner rounding as a percentage (0 = sharp, 50 = circle).
    pub corner_radius: f32,
    /// Active clip path, if any.
    pub clip: Option<ClipShape>,
    /// Stacking order.
    pub z_index: i32,
    /// Whether the target participates in rendering at all.
    pub visible: bool,
    /// Vertical offset as a percentage of own height (slide-ins).
    pub y_offset: f32,
}

impl Default for Visual {
    fn default() -> Self {
        Self {
            rect: Rect::ZERO,
            opacity: 1.0,
            scale: 1.0,
            rotation: 0.0,
            corner_radius: 0.0,
            clip: None,
            z_index: 0,
            visible: true,
            y_offset: 0.0,
        }
    }
}

impl Visual {
    /// A hidden visual (invisible until an animator reveals it).
    #[must_use]
    pub fn hidden() -> Self {
        Self {
            visible: false,
            opacity: 0.0,
            ..Self::default()
        }
    }

    /// Sets the bounding rectangle.
    #[must_use]
    pub fn with_rect(mut self, rect: Rect) -> Self {
        self.rect = rect;
        self
    }

    /// Sets the stacking order.
    #[must_use]
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Sets the opacity.
    #[must_use]
    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

/// The full set of targets for one mounted hero scene.
pub struct Stage {
    /// Visuals indexed by target.
    visuals: HashMap<TargetId, Visual>,
    /// Viewport size the layout was built against.
    viewport: (f32, f32),
}

impl Stage {
    /// Creates an empty stage for the given viewport.
    #[must_use]
    pub fn new(viewport_width: f32, viewport_height: f32) -> Self {
        Self {
            visuals: HashMap::with_capacity(32),
            viewport: (viewport_width, viewport_height),
        }
    }

    /// Builds the initial hero layout from a configuration.
    ///
    /// Loader centered with the logo inside it and the counter below;
    /// the morphing shape hidden at the viewport center; the video panel
    /// parked bottom-right at opacity zero; menu collapsed with hamburger
    /// lines visible and the nav list hidden; one glyph entry per
    /// headline character.
    #[must_use]
    pub fn hero(config: &HeroConfig) -> Self {
        let (vw, vh) = (config.viewport.width, config.viewport.height);
        let mut stage = Self::new(vw, vh);
        let center = (vw * 0.5, vh * 0.5);

        let loader_size = config.orbit.loader_size;
        stage.insert(
            TargetId::Loader,
            Visual::default()
                .with_rect(Rect::centered_on(center, loader_size, loader_size))
                .with_z_index(1),
        );
        stage.insert(
            TargetId::Logo,
            Visual::default()
                .with_rect(Rect::centered_on(center, loader_size * 0.5, loader_size * 0.3))
                .with_z_index(2),
        );

        let dot = config.orbit.dot_size;
        stage.insert(
            TargetId::OrbitDotA,
            Visual::default().with_rect(Rect::centered_on(
                (center.0, center.1 - config.orbit.radius),
                dot,
                dot,
            )),
        );
        stage.insert(
            TargetId::OrbitDotB,
            Visual::default().with_rect(Rect::centered_on(
                (center.0, center.1 + config.orbit.radius),
                dot,
                dot,
            )),
        );

        stage.insert(
            TargetId::Counter,
            Visual::default().with_rect(Rect::centered_on(
                (center.0, center.1 + config.orbit.radius + 60.0),
                120.0,
                24.0,
            )),
        );

        // Invisible until the loader fade completes
        stage.insert(
            TargetId::Shape,
            Visual::hidden().with_rect(Rect::centered_on(center, 0.0, 0.0)),
        );

        stage.insert(
            TargetId::Headline,
            Visual::hidden()
                .with_rect(Rect::centered_on(center, vw * 0.6, vh * 0.4))
                .with_z_index(2),
        );
        let glyph_total = config.glyph_count().min(usize::from(u8::MAX));
        for index in 0..glyph_total {
            #[allow(clippy::cast_possible_truncation)]
            let id = TargetId::Glyph(index as u8);
            let mut glyph = Visual::hidden();
            glyph.y_offset = 100.0;
            stage.insert(id, glyph);
        }

        stage.insert(
            TargetId::Menu,
            Visual::hidden()
                .with_rect(Rect::new(
                    vw - config.menu.collapsed_width - 24.0,
                    24.0,
                    config.menu.collapsed_width,
                    config.menu.collapsed_width,
                ))
                .with_z_index(10),
        );
        stage.insert(TargetId::HamburgerLines, Visual::default().with_z_index(11));
        stage.insert(
            TargetId::NavList,
            {
                let mut nav = Visual::hidden().with_z_index(11);
                nav.y_offset = 100.0;
                nav
            },
        );

        stage.insert(
            TargetId::Video,
            Visual::hidden()
                .with_rect(Rect::new(
                    vw - config.video.collapsed_width - config.video.margin,
                    vh - config.video.collapsed_height - config.video.margin,
                    config.video.collapsed_width,
                    config.video.collapsed_height,
                ))
                .with_z_index(config.video.resting_z),
        );
        stage.insert(
            TargetId::VideoCloseButton,
            {
                let mut close = Visual::hidden().with_z_index(config.video.raised_z + 1);
                close.scale = 0.0;
                close
            },
        );
        stage.insert(
            TargetId::PlayIcon,
            Visual::default().with_z_index(config.video.resting_z + 1),
        );

        stage
    }

    /// Viewport size the layout was built against.
    #[must_use]
    pub fn viewport(&self) -> (f32, f32) {
        self.viewport
    }

    /// Inserts or replaces a target.
    pub fn insert(&mut self, id: TargetId, visual: Visual) {
        self.visuals.insert(id, visual);
    }

    /// Removes a target, returning its last visual.
    pub fn remove(&mut self, id: TargetId) -> Option<Visual> {
        self.visuals.remove(&id)
    }

    /// Returns true if the target exists on this stage.
    #[must_use]
    pub fn contains(&self, id: TargetId) -> bool {
        self.visuals.contains_key(&id)
    }

    /// Gets a target's visual.
    #[must_use]
    pub fn get(&self, id: TargetId) -> Option<&Visual> {
        self.visuals.get(&id)
    }

    /// Gets mutable access to a target's visual.
    ///
    /// Animators call this every tick; a `None` means the host removed
    /// the target and the write is silently skipped.
    #[must_use]
    pub fn get_mut(&mut self, id: TargetId) -> Option<&mut Visual> {
        self.visuals.get_mut(&id)
    }

    /// Number of targets on the stage.
    #[must_use]
    pub fn len(&self) -> usize {
        self.visuals.len()
    }

    /// Returns true if the stage has no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.visuals.is_empty()
    }
}
