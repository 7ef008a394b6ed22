#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::bus::LightBus;
use crate::color::{Rgb, next_rotation};
use crate::compositor::composite;
use crate::config::{ConfigError, LightConfig};
use crate::control::{ControlEffects, ControlProcessor};
use crate::fade::{FadeMachine, FadeState};
use crate::frame::Frame;
use crate::pattern::PatternId;
use crate::reveal::RevealRamp;

/// Render task state - owns the selector, brightness and reveal
///
/// Reads the newest snapshot of each pattern from the bus and composes the
/// output frame once per tick.
pub struct Renderer<'a, const MAX_LEDS: usize> {
    // External dependencies
    bus: &'a LightBus<MAX_LEDS>,
    controls: ControlProcessor<'a>,

    // Internal state
    powered: bool,
    palette_rotation: u8,
    fade: FadeMachine<MAX_LEDS>,
    reveal: RevealRamp,
    fire: Frame<MAX_LEDS>,
    rainbow: Frame<MAX_LEDS>,
    frame_buffer: Frame<MAX_LEDS>,
    events_seen: usize,
}

impl<'a, const MAX_LEDS: usize> Renderer<'a, MAX_LEDS> {
    /// Create the render state; fails on an invalid configuration
    pub fn new(bus: &'a LightBus<MAX_LEDS>, config: &LightConfig) -> Result<Self, ConfigError> {
        config.validate::<MAX_LEDS>().inspect_err(|_err| {
            #[cfg(feature = "esp32-log")]
            println!("[Renderer.new] invalid config: {}", _err);
        })?;

        let len = config.strip_length;
        bus.set_active_pattern(config.initial_pattern);

        Ok(Self {
            bus,
            controls: ControlProcessor::new(bus.control_receiver()),
            powered: config.power_on,
            palette_rotation: bus.palette_rotation(),
            fade: FadeMachine::new(config.initial_pattern, len, config.nominal_brightness),
            reveal: RevealRamp::new(len),
            fire: Frame::new(len),
            rainbow: Frame::new(len),
            frame_buffer: Frame::new(len),
            events_seen: 0,
        })
    }

    /// Process one tick
    ///
    /// Applies button presses, picks up fresh pattern snapshots, advances
    /// the reveal and fade ramps, and composes the output frame.
    pub fn render(&mut self) -> &[Rgb] {
        let effects = self.controls.process_pending();
        self.apply_effects(&effects);

        self.events_seen = self.bus.drain_events();
        self.collect_snapshots();

        self.reveal.tick(self.powered);
        if let Some(pattern) = self.fade.tick() {
            self.bus.set_active_pattern(pattern);
        }

        let Self {
            fade,
            reveal,
            fire,
            rainbow,
            frame_buffer,
            ..
        } = self;
        let pattern = match fade.active() {
            PatternId::Fire => fire.as_slice(),
            PatternId::Rainbow => rainbow.as_slice(),
        };
        composite(
            pattern,
            fade.brightness().levels(),
            reveal.length(),
            frame_buffer.as_mut_slice(),
        );

        frame_buffer.as_slice()
    }

    /// Apply side effects from button presses
    fn apply_effects(&mut self, effects: &ControlEffects) {
        if !effects.has_effects() {
            return;
        }

        if effects.toggle_power {
            self.powered = !self.powered;
        }

        for _ in 0..effects.program_requests {
            self.fade.request_next();
        }

        if effects.palette_steps > 0 {
            for _ in 0..effects.palette_steps {
                self.palette_rotation = next_rotation(self.palette_rotation);
            }
            self.bus.set_palette_rotation(self.palette_rotation);
        }

        #[cfg(feature = "esp32-log")]
        println!(
            "[Renderer.apply_effects] powered: {}, requested: {}, palette: {}",
            self.powered,
            self.fade.selector().requested().as_str(),
            self.palette_rotation
        );
    }

    /// Replace the local pattern buffers with any newer snapshots
    fn collect_snapshots(&mut self) {
        if let Some(frame) = self.bus.mailbox(PatternId::Fire).take() {
            self.fire = frame;
        }
        if let Some(frame) = self.bus.mailbox(PatternId::Rainbow).take() {
            self.rainbow = frame;
        }
    }

    /// Last composed frame
    pub fn frame(&self) -> &[Rgb] {
        self.frame_buffer.as_slice()
    }

    pub const fn active_pattern(&self) -> PatternId {
        self.fade.active()
    }

    pub const fn fade_state(&self) -> FadeState {
        self.fade.state()
    }

    /// Scalar fade brightness
    pub const fn brightness(&self) -> u8 {
        self.fade.brightness().tracker()
    }

    pub fn brightness_levels(&self) -> &[u8] {
        self.fade.brightness().levels()
    }

    pub const fn reveal_length(&self) -> usize {
        self.reveal.length()
    }

    pub const fn is_powered(&self) -> bool {
        self.powered
    }

    pub const fn palette_rotation(&self) -> u8 {
        self.palette_rotation
    }

    /// Frame ready events drained on the last tick
    pub const fn events_seen(&self) -> usize {
        self.events_seen
    }
}
