//! Rotating rainbow
//!
//! Every pixel sits one degree further along the color wheel than the
//! previous one; the whole wheel advances one degree per step.

use super::{Pattern, PatternId};
use crate::color::{HUE_CIRCLE, Rgb, wheel_point};

/// Fill `leds` with the wheel starting at `phase` and return the next phase
#[allow(clippy::cast_possible_truncation)]
pub fn step_rainbow(phase: u16, leds: &mut [Rgb]) -> u16 {
    let phase = phase % HUE_CIRCLE;
    for (i, led) in leds.iter_mut().enumerate() {
        let offset = (i % usize::from(HUE_CIRCLE)) as u16;
        *led = wheel_point(phase + offset);
    }
    (phase + 1) % HUE_CIRCLE
}

/// Rainbow generator keeping its rotation between steps
#[derive(Debug, Clone, Default)]
pub struct RainbowGenerator {
    phase: u16,
}

impl RainbowGenerator {
    pub const fn new() -> Self {
        Self { phase: 0 }
    }

    /// Start at a given angle in degrees
    pub const fn with_phase(phase: u16) -> Self {
        Self {
            phase: phase % HUE_CIRCLE,
        }
    }

    /// Angle of the first pixel on the next step
    pub const fn phase(&self) -> u16 {
        self.phase
    }
}

impl Pattern for RainbowGenerator {
    const ID: PatternId = PatternId::Rainbow;

    fn step(&mut self, leds: &mut [Rgb]) {
        self.phase = step_rainbow(self.phase, leds);
    }
}
