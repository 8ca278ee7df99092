//! # Orbit Animator
//!
//! Two decorative dots orbiting the loader center in opposite directions,
//! started on mount and never stopped while the scene is alive. Dropping
//! the animator is the only teardown.

use pebble_motion::{Spin, SpinDirection};

use crate::config::OrbitConfig;
use crate::stage::{Rect, Stage, TargetId};

/// Drives the two orbiting loader dots.
#[derive(Debug, Clone)]
pub struct OrbitAnimator {
    /// Dot A, clockwise from 12 o'clock.
    dot_a: Spin,
    /// Dot B, counter-clockwise from 6 o'clock.
    dot_b: Spin,
    /// Shared pivot (loader center).
    pivot: (f32, f32),
    /// Orbit radius in pixels.
    radius: f32,
    /// Dot diameter in pixels.
    dot_size: f32,
}

impl OrbitAnimator {
    /// Creates the animator around the given pivot.
    #[must_use]
    pub fn new(config: &OrbitConfig, pivot: (f32, f32)) -> Self {
        Self {
            dot_a: Spin::new(config.period, SpinDirection::Clockwise),
            dot_b: Spin::new(config.period, SpinDirection::CounterClockwise)
                .with_start_angle(180.0),
            pivot,
            radius: config.radius,
            dot_size: config.dot_size,
        }
    }

    /// Advances both rotations and writes the dot positions to the stage.
    ///
    /// Missing dot targets are skipped.
    pub fn update(&mut self, dt: f32, stage: &mut Stage) {
        self.dot_a.update(dt);
        self.dot_b.update(dt);

        for (spin, id) in [
            (&self.dot_a, TargetId::OrbitDotA),
            (&self.dot_b, TargetId::OrbitDotB),
        ] {
            if let Some(visual) = stage.get_mut(id) {
                let center = spin.orbit_position(self.pivot, self.radius);
                visual.rect = Rect::centered_on(center, self.dot_size, self.dot_size);
            }
        }
    }

    /// Current angle of dot A in [0, 360).
    #[must_use]
    pub fn angle_a(&self) -> f32 {
        self.dot_a.angle()
    }

    /// Current angle of dot B in [0, 360).
    #[must_use]
    pub fn angle_b(&self) -> f32 {
        self.dot_b.angle()
    }
}
