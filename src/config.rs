//! Runtime configuration and its validation.

use core::fmt;

use embassy_time::Duration;

use crate::color::{DEFAULT_PALETTE_SIZE, MAX_PALETTE_SIZE};
use crate::pattern::PatternId;

/// Default number of LEDs on the strip
pub const DEFAULT_STRIP_LENGTH: usize = 360;

/// Default per-pixel brightness level when fully faded in
pub const DEFAULT_NOMINAL_BRIGHTNESS: u8 = 64;

/// Default height of the fire heat grid
pub const DEFAULT_FIRE_ROWS: usize = 10;

/// Upper bound for the fire heat grid height
pub const MAX_FIRE_ROWS: usize = 16;

/// Fewest rows that still leave room for diffusion above the ignition rows
pub const MIN_FIRE_ROWS: usize = 3;

/// Periods of every periodic task
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickTimings {
    /// Render loop period, also the longest wait for a frame ready event
    pub render_interval: Duration,
    /// Sleep of an active producer after publishing a frame
    pub frame_interval: Duration,
    /// Sleep of a producer whose pattern is not shown
    pub idle_interval: Duration,
    /// Timeout handed to the sink when committing a frame
    pub refresh_timeout: Duration,
    /// Button sampling period
    pub button_interval: Duration,
}

impl Default for TickTimings {
    fn default() -> Self {
        Self {
            render_interval: Duration::from_millis(10),
            frame_interval: Duration::from_millis(100),
            idle_interval: Duration::from_millis(10),
            refresh_timeout: Duration::from_millis(100),
            button_interval: Duration::from_millis(10),
        }
    }
}

/// Configuration for the whole animation pipeline
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LightConfig {
    /// Number of LEDs driven, at most the compile-time capacity
    pub strip_length: usize,
    /// Brightness level every pixel converges to when faded in
    pub nominal_brightness: u8,
    /// Number of fire palette entries, also the number of heat levels
    pub palette_size: usize,
    /// Height of the fire heat grid
    pub fire_rows: usize,
    /// Pattern shown after startup
    pub initial_pattern: PatternId,
    /// Whether the strip starts revealing right away
    pub power_on: bool,
    pub timings: TickTimings,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            strip_length: DEFAULT_STRIP_LENGTH,
            nominal_brightness: DEFAULT_NOMINAL_BRIGHTNESS,
            palette_size: DEFAULT_PALETTE_SIZE,
            fire_rows: DEFAULT_FIRE_ROWS,
            initial_pattern: PatternId::Fire,
            power_on: true,
            timings: TickTimings::default(),
        }
    }
}

impl LightConfig {
    /// Check the configuration against a strip capacity of `MAX_LEDS`
    pub fn validate<const MAX_LEDS: usize>(&self) -> Result<(), ConfigError> {
        if self.strip_length == 0 {
            return Err(ConfigError::EmptyStrip);
        }
        if self.strip_length > MAX_LEDS {
            return Err(ConfigError::StripTooLong {
                length: self.strip_length,
                capacity: MAX_LEDS,
            });
        }
        if !(2..=MAX_PALETTE_SIZE).contains(&self.palette_size)
            || !self.palette_size.is_multiple_of(2)
        {
            return Err(ConfigError::PaletteSize(self.palette_size));
        }
        if !(MIN_FIRE_ROWS..=MAX_FIRE_ROWS).contains(&self.fire_rows) {
            return Err(ConfigError::FireRows(self.fire_rows));
        }
        Ok(())
    }

    /// Builder-style strip length override
    #[must_use]
    pub const fn with_strip_length(mut self, strip_length: usize) -> Self {
        self.strip_length = strip_length;
        self
    }

    /// Builder-style nominal brightness override
    #[must_use]
    pub const fn with_nominal_brightness(mut self, brightness: u8) -> Self {
        self.nominal_brightness = brightness;
        self
    }
}

/// Invalid configuration, fatal at startup
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// Strip length is zero
    EmptyStrip,
    /// Strip length exceeds the compile-time capacity
    StripTooLong { length: usize, capacity: usize },
    /// Palette size is odd or outside `2..=256`
    PaletteSize(usize),
    /// Fire grid height outside the supported range
    FireRows(usize),
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyStrip => f.write_str("strip length must be positive"),
            Self::StripTooLong { length, capacity } => {
                write!(f, "strip length {length} exceeds capacity {capacity}")
            }
            Self::PaletteSize(size) => {
                write!(
                    f,
                    "palette size {size} must be even and within 2..={MAX_PALETTE_SIZE}"
                )
            }
            Self::FireRows(rows) => write!(
                f,
                "fire grid needs {MIN_FIRE_ROWS}..={MAX_FIRE_ROWS} rows, got {rows}"
            ),
        }
    }
}

impl core::error::Error for ConfigError {}
