//! Easing curves for the hero choreography.
//!
//! The sequence leans on the cubic family: accelerate-decelerate for the
//! shape morphs, decelerate-only for reveals, linear for orbits.

/// Easing function type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (orbits, counters).
    Linear,
    /// Cubic ease-in (accelerating from rest).
    CubicIn,
    /// Cubic ease-out (decelerating into place).
    CubicOut,
    /// Cubic ease-in-out (shape morph default).
    #[default]
    CubicInOut,
    /// Instant (no animation).
    Instant,
}

impl Easing {
    /// Applies the easing function to a t value (0-1).
    #[must_use]
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);

        match self {
            Self::Linear => t,
            Self::CubicIn => t * t * t,
            Self::CubicOut => {
                let inv = 1.0 - t;
                1.0 - inv * inv * inv
            }
            Self::CubicInOut => {
                if t < 0.5 {
                    4.0 * t * t * t
                } else {
                    let inv = -2.0 * t + 2.0;
                    1.0 - inv * inv * inv / 2.0
                }
            }
            Self::Instant => 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints_are_exact() {
        for easing in [Easing::Linear, Easing::CubicIn, Easing::CubicOut, Easing::CubicInOut] {
            assert!((easing.apply(0.0) - 0.0).abs() < f32::EPSILON, "{easing:?} at 0");
            assert!((easing.apply(1.0) - 1.0).abs() < f32::EPSILON, "{easing:?} at 1");
        }
    }

    #[test]
    fn test_cubic_out_decelerates() {
        // Ease-out covers most of the distance early
        let value = Easing::CubicOut.apply(0.5);
        assert!(value > 0.8, "cubic out should be front-loaded: {value}");
    }

    #[test]
    fn test_cubic_in_out_is_symmetric() {
        let a = Easing::CubicInOut.apply(0.25);
        let b = Easing::CubicInOut.apply(0.75);
        assert!((a + b - 1.0).abs() < 1e-5);
    }

    #[test]
    fn test_apply_clamps_input() {
        assert!((Easing::CubicInOut.apply(-2.0)).abs() < f32::EPSILON);
        assert!((Easing::CubicInOut.apply(3.0) - 1.0).abs() < f32::EPSILON);
    }
}
