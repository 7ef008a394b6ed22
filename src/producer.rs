//! Periodic pattern producers
//!
//! Each pattern runs in its own task. A producer only steps while its
//! pattern is the active one and publishes whole frames into its mailbox
//! on the bus. The caller sleeps for the returned duration between ticks.

use embassy_time::Duration;

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bus::LightBus;
use crate::color::Rgb;
use crate::config::{ConfigError, LightConfig, TickTimings};
use crate::frame::Frame;
use crate::pattern::Pattern;

/// Producer task state for one pattern
pub struct Producer<'a, P: Pattern, const MAX_LEDS: usize> {
    bus: &'a LightBus<MAX_LEDS>,
    pattern: P,
    frame: Frame<MAX_LEDS>,
    warmup_left: usize,
    /// Rotation last pushed to the pattern, `None` until the first tick
    palette_rotation: Option<u8>,
    timings: TickTimings,
}

impl<'a, P: Pattern, const MAX_LEDS: usize> Producer<'a, P, MAX_LEDS> {
    pub fn new(
        bus: &'a LightBus<MAX_LEDS>,
        pattern: P,
        config: &LightConfig,
    ) -> Result<Self, ConfigError> {
        config.validate::<MAX_LEDS>()?;
        let warmup_left = pattern.warmup_steps();
        Ok(Self {
            bus,
            pattern,
            frame: Frame::new(config.strip_length),
            warmup_left,
            palette_rotation: None,
            timings: config.timings,
        })
    }

    /// Run one iteration and return how long to sleep before the next one
    pub fn tick(&mut self) -> Duration {
        let rotation = self.bus.palette_rotation();
        if self.palette_rotation != Some(rotation) {
            #[cfg(feature = "esp32-log")]
            println!("[Producer.tick] {} palette -> {}", P::ID.as_str(), rotation);
            self.pattern.set_palette_rotation(rotation);
            self.palette_rotation = Some(rotation);
        }

        if self.bus.active_pattern() != P::ID {
            return self.timings.idle_interval;
        }

        self.pattern.step(self.frame.as_mut_slice());

        if self.warmup_left > 0 {
            self.warmup_left -= 1;
            return Duration::from_millis(0);
        }

        self.bus.post_frame(P::ID, self.frame);
        self.timings.frame_interval
    }

    /// Check whether the pattern is still filling up before its first frame
    pub const fn is_warming_up(&self) -> bool {
        self.warmup_left > 0
    }

    /// Most recently generated frame
    pub fn frame(&self) -> &[Rgb] {
        self.frame.as_slice()
    }

    pub const fn pattern(&self) -> &P {
        &self.pattern
    }
}
