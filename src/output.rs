//! Adapter from the pixel-by-pixel sink interface to `smart-leds` writers.

use embassy_time::Duration;
use smart_leds::SmartLedsWrite;

use crate::OutputDriver;
use crate::color::{BLACK, Rgb};

/// Error of a [`StripBuffer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripError<E> {
    /// Pixel index past the end of the strip
    OutOfRange(usize),
    /// The underlying writer failed
    Write(E),
}

/// Buffers pixels and pushes them to a `SmartLedsWrite` on refresh
pub struct StripBuffer<W, const N: usize> {
    writer: W,
    pixels: [Rgb; N],
    len: usize,
}

impl<W, const N: usize> StripBuffer<W, N> {
    /// Wrap a writer driving `len` LEDs, `len` clamped to the capacity
    pub const fn new(writer: W, len: usize) -> Self {
        Self {
            writer,
            pixels: [BLACK; N],
            len: if len > N { N } else { len },
        }
    }

    /// Pixels staged for the next refresh
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    pub fn into_inner(self) -> W {
        self.writer
    }
}

impl<W, const N: usize> OutputDriver for StripBuffer<W, N>
where
    W: SmartLedsWrite,
    W::Color: From<Rgb>,
    W::Error: core::fmt::Debug,
{
    type Error = StripError<W::Error>;

    fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), Self::Error> {
        let pixel = self
            .pixels
            .get_mut(..self.len)
            .and_then(|pixels| pixels.get_mut(index))
            .ok_or(StripError::OutOfRange(index))?;
        *pixel = color;
        Ok(())
    }

    // smart-leds writers block until the frame is out, so the timeout is unused
    fn refresh(&mut self, _timeout: Duration) -> Result<(), Self::Error> {
        self.writer
            .write(self.pixels[..self.len].iter().copied())
            .map_err(StripError::Write)
    }
}
