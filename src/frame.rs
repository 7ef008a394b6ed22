use crate::color::{BLACK, Rgb};

/// Fixed-capacity strip-length color buffer
///
/// `N` is the capacity; only the first `len` pixels belong to the strip.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame<const N: usize> {
    pixels: [Rgb; N],
    len: usize,
}

impl<const N: usize> Frame<N> {
    /// Create a black frame of `len` pixels, clamped to the capacity
    pub const fn new(len: usize) -> Self {
        Self {
            pixels: [BLACK; N],
            len: if len > N { N } else { len },
        }
    }

    /// Create a frame with every pixel set to `color`
    pub fn filled(len: usize, color: Rgb) -> Self {
        let mut frame = Self::new(len);
        frame.as_mut_slice().fill(color);
        frame
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn as_slice(&self) -> &[Rgb] {
        &self.pixels[..self.len]
    }

    pub fn as_mut_slice(&mut self) -> &mut [Rgb] {
        &mut self.pixels[..self.len]
    }
}

impl<const N: usize> Default for Frame<N> {
    fn default() -> Self {
        Self::new(N)
    }
}
