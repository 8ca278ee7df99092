//! # Counter Driver
//!
//! The loading counter: 1 → target over a fixed wall-clock duration,
//! independent of the primary timeline. Purely cosmetic; the only output
//! is the displayed integer.

use pebble_motion::{Easing, Tween};

/// Drives the displayed loading percentage.
#[derive(Debug, Clone)]
pub struct CounterDriver {
    /// Underlying linear tween from 1 to the target.
    tween: Tween,
    /// Final displayed value.
    target: u32,
}

impl CounterDriver {
    /// Creates a driver counting 1 → `target` over `duration` seconds.
    #[must_use]
    pub fn new(target: u32, duration: f32) -> Self {
        let mut tween = Tween::new(1.0, Easing::Linear).with_duration(duration);
        #[allow(clippy::cast_precision_loss)]
        tween.set_target(target.max(1) as f32);
        Self {
            tween,
            target: target.max(1),
        }
    }

    /// Advances the counter by `dt` seconds.
    ///
    /// Further increments are ignored once the target is reached.
    pub fn update(&mut self, dt: f32) {
        self.tween.update(dt);
    }

    /// Currently displayed value, always within `[1, target]`.
    #[must_use]
    pub fn value(&self) -> u32 {
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        let raw = self.tween.value().floor().max(1.0) as u32;
        raw.min(self.target)
    }

    /// Final value the counter stops at.
    #[must_use]
    pub fn target(&self) -> u32 {
        self.target
    }

    /// Returns true once the target is displayed.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.tween.is_complete()
    }
}
