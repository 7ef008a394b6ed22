#![no_std]

pub mod bus;
pub mod channel;
pub mod color;
pub mod compositor;
pub mod config;
pub mod control;
pub mod fade;
pub mod frame;
pub mod frame_scheduler;
pub mod output;
pub mod pattern;
pub mod producer;
pub mod renderer;
pub mod reveal;

pub use bus::{ControlSender, FrameReady, LightBus};
pub use config::{ConfigError, LightConfig, TickTimings};
pub use control::{ButtonLevels, ButtonPoll, Buttons, ControlEvent};
pub use fade::{FadeMachine, FadeState, ProgramSelector};
pub use frame::Frame;
pub use frame_scheduler::{FrameResult, FrameScheduler};
pub use output::StripBuffer;
pub use pattern::{FireSimulator, Pattern, PatternId, RainbowGenerator};
pub use producer::Producer;
pub use renderer::Renderer;
pub use reveal::RevealRamp;

pub use color::{Palette, Rgb};
pub use embassy_time::{Duration, Instant};

/// Abstract LED sink trait
///
/// Implement this trait to support different hardware platforms.
/// Both calls may fail; a failed frame is dropped and the next one retried.
pub trait OutputDriver {
    type Error: core::fmt::Debug;

    /// Stage one pixel of the next frame
    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error>;

    /// Commit the staged frame to the LEDs
    fn refresh(&mut self, timeout: Duration) -> Result<(), Self::Error>;
}
