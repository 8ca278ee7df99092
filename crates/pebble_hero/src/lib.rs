//! # Pebble Hero
//!
//! The "Meet Pebble" landing-page hero sequence as a headless,
//! tick-driven choreography engine.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                        HERO SCENE                            │
//! ├──────────────────────────────────────────────────────────────┤
//! │  Pointer Events → Toggles (menu / video)                     │
//! │                        │                                     │
//! │  update(dt) ──┬── CounterDriver   (1 → 100, independent)     │
//! │               ├── OrbitAnimator   (perpetual, independent)   │
//! │               ├── HeroSequence    (loader → triangle →       │
//! │               │                    hold → square, ordered)   │
//! │               └── Reveals         (glyph stagger + panels,   │
//! │                                    started on completion)    │
//! │                        │                                     │
//! │                   Stage (named visual targets)               │
//! │                        │                                     │
//! │              Host reads snapshots + drains events            │
//! └──────────────────────────────────────────────────────────────┘
//! ```
//!
//! The primary timeline is strictly ordered and non-cancellable; the
//! counter and orbits run concurrently with it from mount. Completion of
//! the final morph fans out the glyph reveal and the panel slide-ins and
//! fires the host notification exactly once.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod config;
pub mod counter;
pub mod error;
pub mod events;
pub mod menu;
pub mod orbit;
pub mod reveal;
pub mod scene;
pub mod sequence;
pub mod stage;
pub mod video;

pub use config::HeroConfig;
pub use counter::CounterDriver;
pub use error::HeroError;
pub use events::{EventBus, EventReceiver, EventSender, HeroEvent, PointerEvent};
pub use menu::MenuToggle;
pub use orbit::OrbitAnimator;
pub use reveal::{PanelReveal, TextReveal};
pub use scene::HeroScene;
pub use sequence::{HeroSequence, Phase};
pub use stage::{ClipShape, PanelState, Rect, Stage, TargetId, Visual};
pub use video::VideoToggle;
