//! # Pebble
//!
//! Integration crate for the Pebble landing page hero. Re-exports the
//! choreography engine and the motion primitives under one roof so hosts
//! depend on a single crate.
//!
//! ```text
//! ┌───────────────────────────────────────────────┐
//! │                   PEBBLE                      │
//! ├───────────────────────────────────────────────┤
//! │  pebble_motion   tweens / easings / spins     │
//! │       │                                       │
//! │  pebble_hero     stage + choreography + bus   │
//! │       │                                       │
//! │  host            render loop + input wiring   │
//! └───────────────────────────────────────────────┘
//! ```

#![deny(missing_docs)]
#![deny(unsafe_code)]

/// Animation primitives.
pub mod motion {
    pub use pebble_motion::*;
}

/// The hero choreography engine.
pub mod hero {
    pub use pebble_hero::*;
}

pub use pebble_hero::{HeroConfig, HeroError, HeroScene};
