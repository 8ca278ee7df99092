//! # Primary Timeline
//!
//! The ordered hero sequence as an explicit state machine:
//!
//! ```text
//! Idle ──(start delay)──> LoaderFadeOut ──> TriangleReveal ──> Hold ──> SquareMorph ──> Complete
//! ```
//!
//! Each phase begins only after the previous one finishes; leftover tick
//! time at a phase boundary carries into the next phase so a coarse
//! timestep cannot stretch the choreography. The timeline is linear and
//! non-cancellable: once started it runs to its terminal state and never
//! loops or resets.

use pebble_motion::Easing;

use crate::config::TimelineConfig;
use crate::stage::{ClipShape, Rect, Stage, TargetId};

/// Corner rounding during the square morph, in percent.
///
/// Recomputed from raw phase progress every tick rather than eased:
/// rounding climbs to 50% over the first half of the morph, then snaps
/// sharp for the back half.
#[must_use]
pub fn morph_roundness(progress: f32) -> f32 {
    if progress < 0.5 {
        50.0 * 2.0 * progress
    } else {
        0.0
    }
}

/// States of the primary timeline, in execution order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Waiting out the start delay.
    Idle,
    /// Loader fades and shrinks.
    LoaderFadeOut,
    /// The shape grows from a point to a small rotated triangle.
    TriangleReveal,
    /// Dramatic beat, no visual change.
    Hold,
    /// The shape morphs to a full-bleed square.
    SquareMorph,
    /// Terminal state.
    Complete,
}

/// The primary timeline state machine.
pub struct HeroSequence {
    /// Current phase.
    phase: Phase,
    /// Remaining start delay while `Idle`.
    delay_remaining: f32,
    /// Seconds elapsed in the current phase.
    elapsed: f32,
    /// Phase durations.
    timeline: TimelineConfig,
    /// Viewport the shape morphs against.
    viewport: (f32, f32),
    /// Shape rect at the start of the triangle reveal (a point).
    point_rect: Rect,
    /// Shape rect at the end of the triangle reveal.
    triangle_rect: Rect,
}

impl HeroSequence {
    /// Triangle size as a fraction of the viewport.
    const TRIANGLE_FRACTION: f32 = 0.1;
    /// Triangle rest rotation in degrees.
    const TRIANGLE_ROTATION: f32 = 45.0;
    /// Triangle corner rounding in percent.
    const TRIANGLE_ROUNDING: f32 = 5.0;

    /// Creates the sequence for the given timings and viewport.
    #[must_use]
    pub fn new(timeline: TimelineConfig, viewport_width: f32, viewport_height: f32) -> Self {
        let center = (viewport_width * 0.5, viewport_height * 0.5);
        Self {
            phase: Phase::Idle,
            delay_remaining: timeline.start_delay,
            elapsed: 0.0,
            timeline,
            viewport: (viewport_width, viewport_height),
            point_rect: Rect::centered_on(center, 0.0, 0.0),
            triangle_rect: Rect::centered_on(
                center,
                viewport_width * Self::TRIANGLE_FRACTION,
                viewport_height * Self::TRIANGLE_FRACTION,
            ),
        }
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Returns true once the terminal state is reached.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.phase == Phase::Complete
    }

    /// Raw progress of the current phase in 0-1 (1 when not timed).
    #[must_use]
    pub fn phase_progress(&self) -> f32 {
        let duration = match self.phase {
            Phase::LoaderFadeOut => self.timeline.loader_fade,
            Phase::TriangleReveal => self.timeline.triangle,
            Phase::Hold => self.timeline.hold,
            Phase::SquareMorph => self.timeline.square_morph,
            Phase::Idle | Phase::Complete => return 1.0,
        };
        (self.elapsed / duration).min(1.0)
    }

    /// Advances the timeline and writes the current frame to the stage.
    ///
    /// Returns the phases *entered* during this tick, in order. Entering
    /// [`Phase::Complete`] is the one-shot completion signal the scene
    /// fans out on.
    pub fn update(&mut self, dt: f32, stage: &mut Stage) -> Vec<Phase> {
        let mut entered = Vec::new();
        let mut budget = dt;

        loop {
            match self.phase {
                Phase::Idle => {
                    self.delay_remaining -= budget;
                    if self.delay_remaining > 0.0 {
                        break;
                    }
                    budget = -self.delay_remaining;
                    self.enter(Phase::LoaderFadeOut, &mut entered);
                }
                Phase::LoaderFadeOut => {
                    self.elapsed += budget;
                    let progress = self.phase_progress();
                    self.apply_loader_fade(progress, stage);
                    if progress < 1.0 {
                        break;
                    }
                    // The shape becomes visible only at this exact point
                    if let Some(loader) = stage.get_mut(TargetId::Loader) {
                        loader.visible = false;
                    }
                    if let Some(shape) = stage.get_mut(TargetId::Shape) {
                        shape.visible = true;
                        shape.clip = Some(ClipShape::Triangle);
                    }
                    budget = self.elapsed - self.timeline.loader_fade;
                    self.enter(Phase::TriangleReveal, &mut entered);
                }
                Phase::TriangleReveal => {
                    self.elapsed += budget;
                    let progress = self.phase_progress();
                    self.apply_triangle(progress, stage);
                    if progress < 1.0 {
                        break;
                    }
                    budget = self.elapsed - self.timeline.triangle;
                    self.enter(Phase::Hold, &mut entered);
                }
                Phase::Hold => {
                    self.elapsed += budget;
                    if self.elapsed < self.timeline.hold {
                        break;
                    }
                    budget = self.elapsed - self.timeline.hold;
                    self.enter(Phase::SquareMorph, &mut entered);
                }
                Phase::SquareMorph => {
                    self.elapsed += budget;
                    let progress = self.phase_progress();
                    self.apply_morph(progress, stage);
                    if progress < 1.0 {
                        break;
                    }
                    self.finish_morph(stage);
                    self.enter(Phase::Complete, &mut entered);
                }
                Phase::Complete => break,
            }
        }

        entered
    }

    /// Moves to the next phase and records the transition.
    fn enter(&mut self, phase: Phase, entered: &mut Vec<Phase>) {
        self.phase = phase;
        self.elapsed = 0.0;
        entered.push(phase);
    }

    fn apply_loader_fade(&self, progress: f32, stage: &mut Stage) {
        let eased = Easing::CubicInOut.apply(progress);
        if let Some(loader) = stage.get_mut(TargetId::Loader) {
            loader.opacity = 1.0 - eased;
            loader.scale = 1.0 - 0.5 * eased;
        }
        // The logo and counter ride the loader out
        for id in [TargetId::Logo, TargetId::Counter] {
            if let Some(visual) = stage.get_mut(id) {
                visual.opacity = 1.0 - eased;
            }
        }
    }

    fn apply_triangle(&self, progress: f32, stage: &mut Stage) {
        let eased = Easing::CubicInOut.apply(progress);
        if let Some(shape) = stage.get_mut(TargetId::Shape) {
            shape.rect = self.point_rect.lerp(&self.triangle_rect, eased);
            shape.rotation = Self::TRIANGLE_ROTATION * eased;
            shape.corner_radius = Self::TRIANGLE_ROUNDING * eased;
        }
    }

    fn apply_morph(&self, progress: f32, stage: &mut Stage) {
        let eased = Easing::CubicInOut.apply(progress);
        let full = Rect::new(0.0, 0.0, self.viewport.0, self.viewport.1);
        if let Some(shape) = stage.get_mut(TargetId::Shape) {
            shape.rect = self.triangle_rect.lerp(&full, eased);
            shape.rotation = Self::TRIANGLE_ROTATION * (1.0 - eased);
            // Rounding tracks raw progress, not the eased curve
            shape.corner_radius = morph_roundness(progress);
        }
    }

    fn finish_morph(&self, stage: &mut Stage) {
        if let Some(shape) = stage.get_mut(TargetId::Shape) {
            shape.rect = Rect::new(0.0, 0.0, self.viewport.0, self.viewport.1);
            shape.rotation = 0.0;
            shape.corner_radius = 0.0;
            shape.clip = None;
        }
        if let Some(headline) = stage.get_mut(TargetId::Headline) {
            headline.visible = true;
            headline.opacity = 1.0;
            headline.scale = 1.0;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::HeroConfig;

    fn sequence_and_stage() -> (HeroSequence, Stage) {
        let config = HeroConfig::default();
        let sequence = HeroSequence::new(config.timeline, 1920.0, 1080.0);
        let stage = Stage::hero(&config);
        (sequence, stage)
    }

    #[test]
    fn test_morph_roundness_contract() {
        assert!((morph_roundness(0.25) - 25.0).abs() < f32::EPSILON);
        assert!((morph_roundness(0.6)).abs() < f32::EPSILON);
        assert!((morph_roundness(0.0)).abs() < f32::EPSILON);
        assert!((morph_roundness(0.499) - 49.9).abs() < 0.01);
        assert!((morph_roundness(0.5)).abs() < f32::EPSILON);
    }

    #[test]
    fn test_phases_advance_in_order() {
        let (mut sequence, mut stage) = sequence_and_stage();
        assert_eq!(sequence.phase(), Phase::Idle);

        let mut seen = Vec::new();
        // 2.0 delay + 2.0 fade + 0.5 triangle + 0.6 hold + 0.6 morph = 5.7s
        for _ in 0..600 {
            seen.extend(sequence.update(0.01, &mut stage));
        }

        assert_eq!(
            seen,
            vec![
                Phase::LoaderFadeOut,
                Phase::TriangleReveal,
                Phase::Hold,
                Phase::SquareMorph,
                Phase::Complete,
            ]
        );
        assert!(sequence.is_complete());
    }

    #[test]
    fn test_one_huge_tick_runs_to_completion() {
        let (mut sequence, mut stage) = sequence_and_stage();
        let entered = sequence.update(60.0, &mut stage);

        assert_eq!(entered.last(), Some(&Phase::Complete));
        assert_eq!(entered.len(), 5);

        // Shape settled full-bleed, sharp, unclipped
        let shape = stage.get(TargetId::Shape).unwrap();
        assert_eq!(shape.rect, Rect::new(0.0, 0.0, 1920.0, 1080.0));
        assert!(shape.corner_radius.abs() < f32::EPSILON);
        assert!(shape.clip.is_none());
        assert!(shape.rotation.abs() < f32::EPSILON);
    }

    #[test]
    fn test_shape_hidden_until_loader_fade_completes() {
        let (mut sequence, mut stage) = sequence_and_stage();

        // Just shy of delay + fade
        sequence.update(3.99, &mut stage);
        assert!(!stage.get(TargetId::Shape).unwrap().visible);
        assert_eq!(sequence.phase(), Phase::LoaderFadeOut);

        sequence.update(0.02, &mut stage);
        assert!(stage.get(TargetId::Shape).unwrap().visible);
        assert!(!stage.get(TargetId::Loader).unwrap().visible);
        assert_eq!(sequence.phase(), Phase::TriangleReveal);
    }

    #[test]
    fn test_leftover_time_carries_across_boundaries() {
        let (mut sequence, mut stage) = sequence_and_stage();

        // Land 0.3s past the fade boundary in a single tick
        sequence.update(4.3, &mut stage);
        assert_eq!(sequence.phase(), Phase::TriangleReveal);
        assert!((sequence.phase_progress() - 0.6).abs() < 0.001); // 0.3 / 0.5
    }

    #[test]
    fn test_headline_revealed_only_at_completion() {
        let (mut sequence, mut stage) = sequence_and_stage();

        sequence.update(5.69, &mut stage);
        assert!(!stage.get(TargetId::Headline).unwrap().visible);

        sequence.update(0.02, &mut stage);
        assert!(stage.get(TargetId::Headline).unwrap().visible);
    }

    #[test]
    fn test_terminal_state_never_resets() {
        let (mut sequence, mut stage) = sequence_and_stage();
        sequence.update(60.0, &mut stage);

        assert!(sequence.update(10.0, &mut stage).is_empty());
        assert!(sequence.is_complete());
    }

    #[test]
    fn test_triangle_is_rotated_and_clipped() {
        let (mut sequence, mut stage) = sequence_and_stage();

        // Delay + fade + full triangle reveal
        sequence.update(4.5, &mut stage);
        assert_eq!(sequence.phase(), Phase::Hold);

        let shape = stage.get(TargetId::Shape).unwrap();
        assert!((shape.rotation - 45.0).abs() < 0.001);
        assert_eq!(shape.clip, Some(ClipShape::Triangle));
        assert!((shape.rect.width - 192.0).abs() < 0.001); // 10% of 1920
    }

    #[test]
    fn test_sequence_survives_missing_targets() {
        let config = HeroConfig::default();
        let mut sequence = HeroSequence::new(config.timeline, 1920.0, 1080.0);
        let mut stage = Stage::new(1920.0, 1080.0); // empty stage

        let entered = sequence.update(60.0, &mut stage);
        assert_eq!(entered.last(), Some(&Phase::Complete));
    }
}
