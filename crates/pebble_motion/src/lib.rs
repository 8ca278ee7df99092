//! # Pebble Motion
//!
//! Animation primitives for the Pebble hero choreography:
//!
//! - [`Easing`] - curve shapes (linear + cubic family)
//! - [`Tween`] - a retargetable scalar animation
//! - [`Spin`] - a perpetual rotation that never completes
//!
//! Everything here is driven by explicit `update(dt)` calls from the
//! owner's tick loop. Nothing schedules work on its own; dropping a
//! value is all the teardown there is.

#![deny(missing_docs)]
#![deny(unsafe_code)]

pub mod easing;
pub mod spin;
pub mod tween;

pub use easing::Easing;
pub use spin::{Spin, SpinDirection};
pub use tween::Tween;
