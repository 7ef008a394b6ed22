use crate::color::Rgb;

/// Degrees in one full turn of the color wheel
pub const HUE_CIRCLE: u16 = 360;

const SEGMENT: u32 = 120;
// Last angle inside a segment; the ramp reaches 255 there
const SEGMENT_SPAN: u32 = SEGMENT - 1;

/// Map a hue angle in degrees to a fully saturated color.
///
/// Three linear segments of 120 degrees: red to green, green to blue,
/// blue to red. Angles outside `0..360` wrap.
#[allow(clippy::cast_possible_truncation, clippy::cast_lossless)]
pub const fn wheel_point(angle: u16) -> Rgb {
    let angle = (angle % HUE_CIRCLE) as u32;

    if angle < SEGMENT {
        let g = (angle * 255 / SEGMENT_SPAN) as u8;
        Rgb { r: 255 - g, g, b: 0 }
    } else if angle < 2 * SEGMENT {
        let b = ((angle - SEGMENT) * 255 / SEGMENT_SPAN) as u8;
        Rgb { r: 0, g: 255 - b, b }
    } else {
        let r = ((angle - 2 * SEGMENT) * 255 / SEGMENT_SPAN) as u8;
        Rgb { r, g: 0, b: 255 - r }
    }
}
