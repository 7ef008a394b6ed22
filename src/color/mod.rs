mod palette;
mod wheel;

pub use palette::{
    DEFAULT_PALETTE_SIZE, MAX_PALETTE_SIZE, PALETTE_ROTATIONS, Palette, next_rotation,
};
pub use wheel::{HUE_CIRCLE, wheel_point};

use smart_leds::RGB8;

pub type Rgb = RGB8;

/// Black pixel, used for the unlit part of the strip
pub const BLACK: Rgb = Rgb { r: 0, g: 0, b: 0 };

/// Scale a channel by a brightness level (0-255 = 0.0-1.0)
///
/// Integer truncation after the multiply, so 255 leaves the value untouched.
#[inline]
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn scale_channel(value: u8, level: u8) -> u8 {
    ((value as u16 * level as u16) / 255) as u8
}

/// Scale every channel of a color by a brightness level
#[inline]
pub const fn scale_color(color: Rgb, level: u8) -> Rgb {
    Rgb {
        r: scale_channel(color.r, level),
        g: scale_channel(color.g, level),
        b: scale_channel(color.b, level),
    }
}
