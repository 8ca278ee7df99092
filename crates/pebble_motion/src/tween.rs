//! Retargetable scalar tweens.
//!
//! Retargeting contract: `set_target` always restarts from the *current*
//! interpolated value, so an in-flight tween redirected mid-animation
//! continues smoothly toward the new target. The most recent request wins;
//! nothing is queued.

use crate::easing::Easing;

/// A single animated value.
#[derive(Debug, Clone)]
pub struct Tween {
    /// Current value.
    current: f32,
    /// Target value.
    target: f32,
    /// Animation progress (0-1).
    progress: f32,
    /// Animation duration (seconds).
    duration: f32,
    /// Easing function.
    easing: Easing,
    /// Start value (for interpolation).
    start: f32,
}

impl Tween {
    /// Default animation duration.
    pub const DEFAULT_DURATION: f32 = 0.6;

    /// Creates a new tween resting at the given value.
    #[must_use]
    pub fn new(value: f32, easing: Easing) -> Self {
        Self {
            current: value,
            target: value,
            progress: 1.0,
            duration: Self::DEFAULT_DURATION,
            easing,
            start: value,
        }
    }

    /// Creates a tween with custom duration.
    #[must_use]
    pub fn with_duration(mut self, duration: f32) -> Self {
        self.duration = duration;
        self
    }

    /// Returns the current value.
    #[must_use]
    pub fn value(&self) -> f32 {
        self.current
    }

    /// Returns the raw (uneased) progress in 0-1.
    #[must_use]
    pub fn progress(&self) -> f32 {
        self.progress
    }

    /// Returns the target value.
    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// Returns true if the tween has settled on its target.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.progress >= 1.0
    }

    /// Sets a new target value, restarting from the current value.
    pub fn set_target(&mut self, target: f32) {
        if (target - self.target).abs() > 0.0001 {
            self.start = self.current;
            self.target = target;
            self.progress = 0.0;
        }
    }

    /// Sets a new target and duration in one call (retarget with new timing).
    pub fn retarget(&mut self, target: f32, duration: f32) {
        self.duration = duration;
        self.set_target(target);
    }

    /// Swaps the easing curve used for interpolation.
    pub fn set_easing(&mut self, easing: Easing) {
        self.easing = easing;
    }

    /// Immediately sets the value without animation.
    pub fn set_immediate(&mut self, value: f32) {
        self.current = value;
        self.target = value;
        self.start = value;
        self.progress = 1.0;
    }

    /// Updates the tween.
    ///
    /// `dt` is delta time in seconds.
    pub fn update(&mut self, dt: f32) {
        if self.progress >= 1.0 {
            return;
        }

        if self.duration > 0.0 {
            self.progress += dt / self.duration;
        } else {
            self.progress = 1.0;
        }

        self.progress = self.progress.min(1.0);

        let eased = self.easing.apply(self.progress);
        self.current = self.start + (self.target - self.start) * eased;

        // Snap to target when complete
        if self.progress >= 1.0 {
            self.current = self.target;
        }
    }
}

impl Default for Tween {
    fn default() -> Self {
        Self::new(0.0, Easing::CubicInOut)
    }
}
