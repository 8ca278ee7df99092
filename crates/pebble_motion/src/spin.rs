//! Perpetual rotations.
//!
//! A [`Spin`] never completes. It accumulates angle every tick until its
//! owner is dropped; teardown is the owner's responsibility.

/// Rotation direction around the pivot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpinDirection {
    /// Positive angle accumulation.
    Clockwise,
    /// Negative angle accumulation.
    CounterClockwise,
}

impl SpinDirection {
    /// Returns the sign applied to angular velocity.
    #[must_use]
    pub const fn sign(self) -> f32 {
        match self {
            Self::Clockwise => 1.0,
            Self::CounterClockwise => -1.0,
        }
    }
}

/// A looping rotation with a fixed period.
#[derive(Debug, Clone)]
pub struct Spin {
    /// Accumulated angle in degrees (unwrapped).
    angle: f32,
    /// Seconds per full revolution.
    period: f32,
    /// Rotation direction.
    direction: SpinDirection,
}

impl Spin {
    /// Creates a new spin at angle zero.
    ///
    /// `period` is seconds per full 360-degree revolution.
    #[must_use]
    pub fn new(period: f32, direction: SpinDirection) -> Self {
        Self {
            angle: 0.0,
            period,
            direction,
        }
    }

    /// Creates a spin starting at the given angle in degrees.
    #[must_use]
    pub fn with_start_angle(mut self, angle: f32) -> Self {
        self.angle = angle;
        self
    }

    /// Returns the current angle wrapped into [0, 360).
    #[must_use]
    pub fn angle(&self) -> f32 {
        self.angle.rem_euclid(360.0)
    }

    /// Returns the number of completed revolutions.
    #[must_use]
    pub fn revolutions(&self) -> u32 {
        if self.period <= 0.0 {
            return 0;
        }
        // Truncation is fine: partial revolutions round down.
        #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
        {
            (self.angle.abs() / 360.0) as u32
        }
    }

    /// Advances the rotation by `dt` seconds.
    pub fn update(&mut self, dt: f32) {
        if self.period <= 0.0 {
            return;
        }
        self.angle += self.direction.sign() * 360.0 * dt / self.period;
    }

    /// Maps the current angle to a point on the orbit circle.
    ///
    /// Angle zero is straight up from the pivot (12 o'clock), matching the
    /// loader's dot resting positions.
    #[must_use]
    pub fn orbit_position(&self, pivot: (f32, f32), radius: f32) -> (f32, f32) {
        let radians = self.angle().to_radians();
        (
            pivot.0 + radius * radians.sin(),
            pivot.1 - radius * radians.cos(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spin_full_revolution_wraps() {
        let mut spin = Spin::new(3.0, SpinDirection::Clockwise);
        spin.update(3.0);
        assert!(spin.angle().abs() < 0.001 || (spin.angle() - 360.0).abs() < 0.001);
        assert_eq!(spin.revolutions(), 1);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let mut cw = Spin::new(3.0, SpinDirection::Clockwise);
        let mut ccw = Spin::new(3.0, SpinDirection::CounterClockwise);

        cw.update(0.75);
        ccw.update(0.75);

        assert!((cw.angle() - 90.0).abs() < 0.001);
        assert!((ccw.angle() - 270.0).abs() < 0.001);
    }

    #[test]
    fn test_orbit_position_at_rest_is_above_pivot() {
        let spin = Spin::new(3.0, SpinDirection::Clockwise);
        let (x, y) = spin.orbit_position((100.0, 100.0), 50.0);
        assert!((x - 100.0).abs() < 0.001);
        assert!((y - 50.0).abs() < 0.001);
    }

    #[test]
    fn test_quarter_turn_is_right_of_pivot() {
        let mut spin = Spin::new(4.0, SpinDirection::Clockwise);
        spin.update(1.0);
        let (x, y) = spin.orbit_position((0.0, 0.0), 10.0);
        assert!((x - 10.0).abs() < 0.001);
        assert!(y.abs() < 0.001);
    }

    #[test]
    fn test_spin_never_completes() {
        let mut spin = Spin::new(3.0, SpinDirection::Clockwise);
        for _ in 0..10_000 {
            spin.update(0.016);
        }
        // Still accumulating, still in range
        assert!(spin.angle() >= 0.0 && spin.angle() < 360.0);
        assert!(spin.revolutions() > 50);
    }
}
