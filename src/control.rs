//! Button handling
//!
//! Buttons are sampled periodically. A press is the transition from the
//! released level to the pressed level (active low), so holding a button
//! produces one event. Presses are posted to the render task, which owns
//! everything they change.

use embassy_time::Duration;

use crate::bus::{ControlReceiver, ControlSender};
use crate::config::TickTimings;

/// Discrete request from a button press
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControlEvent {
    /// Advance the fire palette rotation
    PaletteNext,
    /// Toggle power; the strip wipes on or off
    PowerToggle,
    /// Request the next pattern with a cross-fade
    ProgramNext,
}

/// Press detector for one active-low input
#[derive(Debug, Clone, Copy)]
pub struct EdgeDetector {
    last_level: bool,
}

impl EdgeDetector {
    /// Create a detector primed with the current input level
    pub const fn new(level: bool) -> Self {
        Self { last_level: level }
    }

    /// Feed a sample; returns `true` when the button was just pressed
    pub fn update(&mut self, level: bool) -> bool {
        let pressed = !level && self.last_level;
        self.last_level = level;
        pressed
    }
}

/// Raw sampled input levels, `true` meaning released (pulled up)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonLevels {
    pub palette: bool,
    pub power: bool,
    pub program: bool,
}

impl ButtonLevels {
    /// All buttons released
    pub const RELEASED: Self = Self {
        palette: true,
        power: true,
        program: true,
    };
}

/// Outcome of one button sample
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPoll {
    /// Presses posted to the render task
    pub posted: usize,
    /// How long to wait before sampling again
    pub sleep: Duration,
}

/// The three control buttons
pub struct Buttons<'a> {
    palette: EdgeDetector,
    power: EdgeDetector,
    program: EdgeDetector,
    events: ControlSender<'a>,
    interval: Duration,
}

impl<'a> Buttons<'a> {
    /// Create the poller from the levels sampled at startup
    pub const fn new(
        events: ControlSender<'a>,
        initial: ButtonLevels,
        timings: &TickTimings,
    ) -> Self {
        Self {
            palette: EdgeDetector::new(initial.palette),
            power: EdgeDetector::new(initial.power),
            program: EdgeDetector::new(initial.program),
            events,
            interval: timings.button_interval,
        }
    }

    /// Process one sample of all buttons.
    ///
    /// Presses that do not fit into the queue are dropped.
    pub fn poll(&mut self, levels: ButtonLevels) -> ButtonPoll {
        let mut posted = 0;
        let presses = [
            (self.palette.update(levels.palette), ControlEvent::PaletteNext),
            (self.power.update(levels.power), ControlEvent::PowerToggle),
            (self.program.update(levels.program), ControlEvent::ProgramNext),
        ];
        for (pressed, event) in presses {
            if pressed && self.events.try_send(event).is_ok() {
                posted += 1;
            }
        }
        ButtonPoll {
            posted,
            sleep: self.interval,
        }
    }
}

/// Accumulated result of draining the control queue
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ControlEffects {
    /// Power should be flipped (odd number of toggles)
    pub toggle_power: bool,
    /// Number of program button presses
    pub program_requests: usize,
    /// Number of palette button presses
    pub palette_steps: usize,
}

impl ControlEffects {
    /// Check if any effects need to be applied
    pub const fn has_effects(&self) -> bool {
        self.toggle_power || self.program_requests > 0 || self.palette_steps > 0
    }
}

/// Drains button events on the render task
pub struct ControlProcessor<'a> {
    events: ControlReceiver<'a>,
}

impl<'a> ControlProcessor<'a> {
    pub const fn new(events: ControlReceiver<'a>) -> Self {
        Self { events }
    }

    /// Process all pending events (non-blocking)
    pub fn process_pending(&mut self) -> ControlEffects {
        let mut effects = ControlEffects::default();

        while let Ok(event) = self.events.try_receive() {
            match event {
                ControlEvent::PaletteNext => effects.palette_steps += 1,
                ControlEvent::PowerToggle => effects.toggle_power ^= true,
                ControlEvent::ProgramNext => effects.program_requests += 1,
            }
        }

        effects
    }
}
