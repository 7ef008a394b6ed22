//! Final per-pixel output
//!
//! The lit prefix of the strip shows the active pattern scaled by each
//! pixel's brightness level, the rest is black.

use embassy_time::Duration;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb, scale_color};

/// Compose one output frame into `out`.
///
/// Pixels in `0..reveal` take `pattern[i]` scaled by `levels[i] / 255`,
/// pixels from `reveal` on are black. Missing pattern pixels or levels
/// count as black and zero.
pub fn composite(pattern: &[Rgb], levels: &[u8], reveal: usize, out: &mut [Rgb]) {
    for (i, pixel) in out.iter_mut().enumerate() {
        *pixel = if i < reveal {
            let color = pattern.get(i).copied().unwrap_or(BLACK);
            let level = levels.get(i).copied().unwrap_or(0);
            scale_color(color, level)
        } else {
            BLACK
        };
    }
}

/// Write every pixel of `frame` to the sink and commit it once.
///
/// The first failing call aborts the flush; the caller retries with the
/// next frame.
pub fn flush<D: OutputDriver>(
    driver: &mut D,
    frame: &[Rgb],
    timeout: Duration,
) -> Result<(), D::Error> {
    for (index, color) in frame.iter().enumerate() {
        driver.set_pixel(index, *color)?;
    }
    driver.refresh(timeout)
}
