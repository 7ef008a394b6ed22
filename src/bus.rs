//! Shared state between the producer, button and render tasks
//!
//! Every field has a single writer:
//! - pattern mailboxes and frame ready events: the producers
//! - control queue: the button task
//! - active pattern and palette rotation: the render task
//!
//! Other tasks only read, so plain atomic loads and stores are enough.

use core::sync::atomic::{AtomicU8, Ordering};

use crate::channel::{Channel, Mailbox, Receiver, Sender};
use crate::color::PALETTE_ROTATIONS;
use crate::control::ControlEvent;
use crate::frame::Frame;
use crate::pattern::PatternId;

/// Capacity of the frame ready queue
pub const EVENT_QUEUE_SIZE: usize = 20;

/// Capacity of the button event queue
pub const CONTROL_QUEUE_SIZE: usize = 8;

/// Notification that a producer published a fresh frame.
///
/// Only used to wake the render loop; the payload is informational.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameReady(pub PatternId);

/// Type alias for the frame ready queue
pub type EventChannel = Channel<FrameReady, EVENT_QUEUE_SIZE>;

/// Type alias for the button event queue
pub type ControlChannel = Channel<ControlEvent, CONTROL_QUEUE_SIZE>;

/// Type alias for button event sender
pub type ControlSender<'a> = Sender<'a, ControlEvent, CONTROL_QUEUE_SIZE>;

/// Type alias for button event receiver
pub type ControlReceiver<'a> = Receiver<'a, ControlEvent, CONTROL_QUEUE_SIZE>;

/// Type alias for a per-pattern snapshot slot
pub type FrameMailbox<const N: usize> = Mailbox<Frame<N>>;

/// Everything the tasks share, sized for `N` LEDs.
///
/// Const-constructible so it can live in a `static`.
pub struct LightBus<const N: usize> {
    events: EventChannel,
    controls: ControlChannel,
    fire: FrameMailbox<N>,
    rainbow: FrameMailbox<N>,
    active_pattern: AtomicU8,
    palette_rotation: AtomicU8,
}

impl<const N: usize> LightBus<N> {
    pub const fn new() -> Self {
        Self {
            events: Channel::new(),
            controls: Channel::new(),
            fire: Mailbox::new(),
            rainbow: Mailbox::new(),
            active_pattern: AtomicU8::new(PatternId::Fire.as_raw()),
            palette_rotation: AtomicU8::new(0),
        }
    }

    /// Handle for the button task
    pub const fn control_sender(&self) -> ControlSender<'_> {
        self.controls.sender()
    }

    pub(crate) const fn control_receiver(&self) -> ControlReceiver<'_> {
        self.controls.receiver()
    }

    /// Snapshot slot of a pattern
    pub const fn mailbox(&self, pattern: PatternId) -> &FrameMailbox<N> {
        match pattern {
            PatternId::Fire => &self.fire,
            PatternId::Rainbow => &self.rainbow,
        }
    }

    /// Publish a finished frame and wake the render loop.
    ///
    /// A full event queue drops the notification; the frame itself is kept.
    pub fn post_frame(&self, pattern: PatternId, frame: Frame<N>) {
        self.mailbox(pattern).publish(frame);
        let _ = self.events.try_send(FrameReady(pattern));
    }

    /// Check whether a frame ready event is waiting
    pub fn frame_ready_pending(&self) -> bool {
        !self.events.is_empty()
    }

    /// Drain all frame ready events, returning how many were queued
    pub fn drain_events(&self) -> usize {
        let mut drained = 0;
        while self.events.try_receive().is_ok() {
            drained += 1;
        }
        drained
    }

    /// Pattern currently shown by the render task
    pub fn active_pattern(&self) -> PatternId {
        PatternId::from_raw(self.active_pattern.load(Ordering::Relaxed)).unwrap_or_default()
    }

    pub(crate) fn set_active_pattern(&self, pattern: PatternId) {
        self.active_pattern.store(pattern.as_raw(), Ordering::Relaxed);
    }

    /// Palette rotation the fire should use, always below 6
    pub fn palette_rotation(&self) -> u8 {
        self.palette_rotation.load(Ordering::Relaxed) % PALETTE_ROTATIONS
    }

    pub(crate) fn set_palette_rotation(&self, rotation: u8) {
        self.palette_rotation
            .store(rotation % PALETTE_ROTATIONS, Ordering::Relaxed);
    }
}

impl<const N: usize> Default for LightBus<N> {
    fn default() -> Self {
        Self::new()
    }
}
