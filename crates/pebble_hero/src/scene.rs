//! # Hero Scene
//!
//! The facade a host mounts. Owns the stage and every animator, routes
//! pointer events to the toggles, fans the completion of the square
//! morph out to the reveals, and notifies the host exactly once.
//!
//! Teardown detaches the interaction handlers and silences the scene:
//! further updates and pointer events are no-ops, never panics, so
//! unmounting mid-sequence is always safe.

use crate::config::HeroConfig;
use crate::counter::CounterDriver;
use crate::error::HeroError;
use crate::events::{EventBus, EventReceiver, EventSender, HeroEvent, PointerEvent};
use crate::menu::MenuToggle;
use crate::orbit::OrbitAnimator;
use crate::reveal::{PanelReveal, TextReveal};
use crate::sequence::{HeroSequence, Phase};
use crate::stage::{Stage, TargetId};
use crate::video::VideoToggle;

/// One-shot host notification fired when the sequence completes.
pub type CompletionCallback = Box<dyn FnOnce() + Send>;

/// A mounted hero scene.
pub struct HeroScene {
    /// The visual targets being driven.
    stage: Stage,
    /// Loading counter, independent of the timeline.
    counter: CounterDriver,
    /// Perpetual loader dot orbits.
    orbit: OrbitAnimator,
    /// The ordered primary timeline.
    sequence: HeroSequence,
    /// Glyph-staggered headline reveal, started on completion.
    text_reveal: TextReveal,
    /// Panel slide-ins (menu, logo, video), started on completion.
    panel_reveals: Vec<PanelReveal>,
    /// Menu hover toggle; `None` when its target is missing or after teardown.
    menu: Option<MenuToggle>,
    /// Video click toggle; `None` when its target is missing or after teardown.
    video: Option<VideoToggle>,
    /// Sender half of the event bus.
    events: EventSender,
    /// Receiver half handed out to the host.
    receiver: EventReceiver,
    /// Host completion notification, taken exactly once.
    on_complete: Option<CompletionCallback>,
    /// Set when the terminal phase is reached; never reset.
    complete: bool,
    /// Counter-finished event latch.
    counter_reported: bool,
    /// Set by `teardown`; the scene goes inert.
    torn_down: bool,
}

impl HeroScene {
    /// Mounts a scene with the standard hero stage for `config`.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::InvalidConfig`] when the configuration fails
    /// validation.
    pub fn new(config: HeroConfig) -> Result<Self, HeroError> {
        let stage = Stage::hero(&config);
        Self::with_stage(config, stage)
    }

    /// Mounts a scene over a host-provided stage.
    ///
    /// Interaction handlers attach only when their target exists on the
    /// stage; a missing target means the handler is skipped, not an
    /// error.
    ///
    /// # Errors
    ///
    /// Returns [`HeroError::InvalidConfig`] when the configuration fails
    /// validation.
    pub fn with_stage(config: HeroConfig, stage: Stage) -> Result<Self, HeroError> {
        config.validate()?;

        let (vw, vh) = stage.viewport();
        let center = (vw * 0.5, vh * 0.5);

        let menu = if stage.contains(TargetId::Menu) {
            Some(MenuToggle::new(config.menu))
        } else {
            tracing::warn!("menu target missing, hover handlers not attached");
            None
        };
        let video = if stage.contains(TargetId::Video) {
            Some(VideoToggle::new(config.video, (vw, vh)))
        } else {
            tracing::warn!("video target missing, click handlers not attached");
            None
        };

        let panel_reveals = vec![
            PanelReveal::new(TargetId::Menu, config.reveal.panel_duration),
            PanelReveal::new(TargetId::Logo, config.reveal.panel_duration),
            PanelReveal::new(TargetId::Video, config.reveal.video_duration),
        ];

        let bus = EventBus::default();
        let events = bus.sender();
        let receiver = bus.receiver();

        Ok(Self {
            counter: CounterDriver::new(config.counter.target, config.counter.duration),
            orbit: OrbitAnimator::new(&config.orbit, center),
            sequence: HeroSequence::new(config.timeline, vw, vh),
            text_reveal: TextReveal::new(&config.reveal),
            panel_reveals,
            menu,
            video,
            stage,
            events,
            receiver,
            on_complete: None,
            complete: false,
            counter_reported: false,
            torn_down: false,
        })
    }

    /// Registers the one-shot completion notification.
    ///
    /// Invoked exactly once, when the square morph finishes, never
    /// before. Registering after completion invokes immediately.
    pub fn on_complete(&mut self, callback: CompletionCallback) {
        if self.complete {
            callback();
        } else {
            self.on_complete = Some(callback);
        }
    }

    /// A receiver for the scene's event stream.
    #[must_use]
    pub fn events(&self) -> EventReceiver {
        self.receiver.clone()
    }

    /// The stage being driven.
    #[must_use]
    pub fn stage(&self) -> &Stage {
        &self.stage
    }

    /// Currently displayed counter value.
    #[must_use]
    pub fn counter_value(&self) -> u32 {
        self.counter.value()
    }

    /// Current primary timeline phase.
    #[must_use]
    pub fn phase(&self) -> Phase {
        self.sequence.phase()
    }

    /// True once the primary timeline reached its terminal state.
    ///
    /// Once true, stays true for the scene's lifetime.
    #[must_use]
    pub fn is_sequence_complete(&self) -> bool {
        self.complete
    }

    /// True after `teardown`.
    #[must_use]
    pub fn is_torn_down(&self) -> bool {
        self.torn_down
    }

    /// Advances every animator by `dt` seconds.
    ///
    /// The counter, orbits and primary timeline run concurrently with no
    /// ordering guarantee between them; the timeline is strictly ordered
    /// internally. No-op after teardown.
    pub fn update(&mut self, dt: f32) {
        if self.torn_down {
            return;
        }

        self.counter.update(dt);
        if self.counter.is_finished() && !self.counter_reported {
            self.counter_reported = true;
            self.events.send(HeroEvent::CounterFinished);
        }

        self.orbit.update(dt, &mut self.stage);

        for phase in self.sequence.update(dt, &mut self.stage) {
            tracing::debug!(?phase, "timeline phase entered");
            self.events.send(HeroEvent::PhaseStarted(phase));
            if phase == Phase::Complete {
                self.finish_sequence();
            }
        }

        self.text_reveal.update(dt, &mut self.stage);
        for reveal in &mut self.panel_reveals {
            reveal.update(dt, &mut self.stage);
        }

        if let Some(menu) = self.menu.as_mut() {
            if let Some(state) = menu.update(dt, &mut self.stage) {
                tracing::debug!(?state, "menu settled");
                self.events.send(HeroEvent::MenuStateChanged(state));
            }
        }
        if let Some(video) = self.video.as_mut() {
            if let Some(state) = video.update(dt, &mut self.stage) {
                tracing::debug!(?state, "video settled");
                self.events.send(HeroEvent::VideoStateChanged(state));
            }
        }
    }

    /// Routes a pointer event to its handler.
    ///
    /// Events against detached or missing handlers are ignored. No-op
    /// after teardown.
    pub fn handle_pointer(&mut self, event: PointerEvent) {
        if self.torn_down {
            return;
        }
        match event {
            PointerEvent::MenuEnter => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.pointer_enter();
                }
            }
            PointerEvent::MenuLeave => {
                if let Some(menu) = self.menu.as_mut() {
                    menu.pointer_leave();
                }
            }
            PointerEvent::VideoClick => {
                if let Some(video) = self.video.as_mut() {
                    video.expand();
                }
            }
            PointerEvent::CloseClick => {
                if let Some(video) = self.video.as_mut() {
                    video.collapse();
                }
            }
        }
    }

    /// Unmounts the scene: detaches interaction handlers and goes inert.
    ///
    /// Idempotent; safe mid-sequence. After teardown no handler runs and
    /// no event is emitted.
    pub fn teardown(&mut self) {
        if self.torn_down {
            return;
        }
        tracing::info!(phase = ?self.sequence.phase(), "hero scene torn down");
        self.torn_down = true;
        self.menu = None;
        self.video = None;
        self.on_complete = None;
    }

    /// Completion fan-out: reveals start, host is notified once.
    fn finish_sequence(&mut self) {
        self.complete = true;
        self.text_reveal.start();
        for reveal in &mut self.panel_reveals {
            reveal.start();
        }
        self.events.send(HeroEvent::SequenceComplete);
        if let Some(callback) = self.on_complete.take() {
            callback();
        }
        tracing::info!("hero sequence complete");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicU32, Ordering};
    use std::sync::Arc;

    #[test]
    fn test_completion_callback_fires_exactly_once() {
        let mut scene = HeroScene::new(HeroConfig::default()).unwrap();
        let fired = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&fired);
        scene.on_complete(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));

        // Not before completion
        scene.update(5.0);
        assert_eq!(fired.load(Ordering::SeqCst), 0);

        scene.update(1.0); // crosses 5.7s total
        assert_eq!(fired.load(Ordering::SeqCst), 1);

        scene.update(10.0);
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_callback_registered_late_fires_immediately() {
        let mut scene = HeroScene::new(HeroConfig::default()).unwrap();
        scene.update(10.0);
        assert!(scene.is_sequence_complete());

        let fired = Arc::new(AtomicU32::new(0));
        let counter = Arc::clone(&fired);
        scene.on_complete(Box::new(move || {
            counter.fetch_add(1, Ordering::SeqCst);
        }));
        assert_eq!(fired.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_teardown_is_idempotent_and_silences_everything() {
        let mut scene = HeroScene::new(HeroConfig::default()).unwrap();
        let receiver = scene.events();

        scene.update(3.0); // mid-sequence
        scene.teardown();
        scene.teardown();
        assert!(scene.is_torn_down());

        receiver.drain();
        let phase = scene.phase();
        scene.update(10.0);
        scene.handle_pointer(PointerEvent::VideoClick);
        scene.handle_pointer(PointerEvent::MenuEnter);

        assert_eq!(scene.phase(), phase, "sequence advanced after teardown");
        assert!(receiver.drain().is_empty(), "events emitted after teardown");
        assert!(!scene.is_sequence_complete());
    }

    #[test]
    fn test_events_report_the_whole_arc() {
        let mut scene = HeroScene::new(HeroConfig::default()).unwrap();
        let receiver = scene.events();

        for _ in 0..400 {
            scene.update(0.016);
        }

        let events = receiver.drain();
        assert!(events.contains(&HeroEvent::CounterFinished));
        assert!(events.contains(&HeroEvent::PhaseStarted(Phase::SquareMorph)));
        let completions = events
            .iter()
            .filter(|e| **e == HeroEvent::SequenceComplete)
            .count();
        assert_eq!(completions, 1);
    }

    #[test]
    fn test_counter_independent_of_timeline() {
        let mut scene = HeroScene::new(HeroConfig::default()).unwrap();

        // Counter finishes at 3s, while the timeline is still fading
        for _ in 0..200 {
            scene.update(0.016);
        }
        assert_eq!(scene.counter_value(), 100);
        assert!(!scene.is_sequence_complete());
    }

    #[test]
    fn test_pointer_events_on_missing_targets_are_ignored() {
        let config = HeroConfig::default();
        let stage = Stage::new(config.viewport.width, config.viewport.height);
        let mut scene = HeroScene::with_stage(config, stage).unwrap();

        // No menu or video targets: nothing to route to, nothing panics
        scene.handle_pointer(PointerEvent::MenuEnter);
        scene.handle_pointer(PointerEvent::VideoClick);
        scene.update(1.0);
    }

    #[test]
    fn test_invalid_config_is_rejected_at_mount() {
        let mut config = HeroConfig::default();
        config.counter.duration = -1.0;
        assert!(matches!(
            HeroScene::new(config),
            Err(HeroError::InvalidConfig(_))
        ));
    }
}
