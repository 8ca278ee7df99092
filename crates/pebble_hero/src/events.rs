//! # Hero Event System
//!
//! Bounded event bus between the choreography and its host. Events flow
//! one way: the scene emits, the host drains. Sends never block; when the
//! channel is full the event is dropped rather than stalling the tick.

use crossbeam_channel::{bounded, Receiver, Sender, TrySendError};

use crate::sequence::Phase;
use crate::stage::PanelState;

/// Pointer input routed into the scene by the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEvent {
    /// Pointer entered the menu container.
    MenuEnter,
    /// Pointer left the menu container.
    MenuLeave,
    /// Click on the video preview panel.
    VideoClick,
    /// Click on the video close control.
    CloseClick,
}

/// Notifications emitted by the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HeroEvent {
    /// A primary timeline phase began.
    PhaseStarted(Phase),
    /// The primary timeline reached its terminal state.
    ///
    /// Emitted exactly once per mount; the host uses it to reveal the
    /// page content below the hero.
    SequenceComplete,
    /// The loading counter reached its target.
    CounterFinished,
    /// The menu toggle settled in a new state.
    MenuStateChanged(PanelState),
    /// The video toggle settled in a new state.
    VideoStateChanged(PanelState),
}

/// Event bus between the scene and its host.
///
/// Pre-allocates a bounded channel so a host that never drains cannot
/// grow memory from a long-running hero loop.
pub struct EventBus {
    /// Sender end - held by the scene.
    sender: Sender<HeroEvent>,
    /// Receiver end - cloned out to consumers.
    receiver: Receiver<HeroEvent>,
}

impl EventBus {
    /// Default channel capacity; the whole sequence emits well under this.
    pub const DEFAULT_CAPACITY: usize = 256;

    /// Creates a new event bus.
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let (sender, receiver) = bounded(capacity);
        Self { sender, receiver }
    }

    /// Creates a sender handle.
    #[must_use]
    pub fn sender(&self) -> EventSender {
        EventSender {
            sender: self.sender.clone(),
        }
    }

    /// Creates a receiver handle.
    #[must_use]
    pub fn receiver(&self) -> EventReceiver {
        EventReceiver {
            receiver: self.receiver.clone(),
        }
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(Self::DEFAULT_CAPACITY)
    }
}

/// Handle for emitting events.
#[derive(Clone)]
pub struct EventSender {
    sender: Sender<HeroEvent>,
}

impl EventSender {
    /// Sends an event (non-blocking).
    ///
    /// Returns `false` if the channel is full and the event was dropped.
    #[inline]
    pub fn send(&self, event: HeroEvent) -> bool {
        match self.sender.try_send(event) {
            Ok(()) => true,
            Err(TrySendError::Full(_) | TrySendError::Disconnected(_)) => false,
        }
    }
}

/// Handle for receiving events.
#[derive(Clone)]
pub struct EventReceiver {
    receiver: Receiver<HeroEvent>,
}

impl EventReceiver {
    /// Receives all pending events (non-blocking).
    #[inline]
    #[must_use]
    pub fn drain(&self) -> Vec<HeroEvent> {
        let mut events = Vec::with_capacity(16);
        while let Ok(event) = self.receiver.try_recv() {
            events.push(event);
        }
        events
    }

    /// Receives a single pending event, if any.
    #[inline]
    #[must_use]
    pub fn try_recv(&self) -> Option<HeroEvent> {
        self.receiver.try_recv().ok()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_send_and_drain() {
        let bus = EventBus::new(8);
        let sender = bus.sender();
        let receiver = bus.receiver();

        assert!(sender.send(HeroEvent::SequenceComplete));
        assert!(sender.send(HeroEvent::CounterFinished));

        let events = receiver.drain();
        assert_eq!(
            events,
            vec![HeroEvent::SequenceComplete, HeroEvent::CounterFinished]
        );
        assert!(receiver.drain().is_empty());
    }

    #[test]
    fn test_full_channel_drops_event() {
        let bus = EventBus::new(1);
        let sender = bus.sender();

        assert!(sender.send(HeroEvent::SequenceComplete));
        assert!(!sender.send(HeroEvent::CounterFinished));
    }
}
