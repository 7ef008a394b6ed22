//! Fire palette
//!
//! A two-segment gradient: the first half ramps one channel up from black,
//! the second half keeps it saturated and ramps a second channel up.
//! The third channel stays dark. Six rotations pick which channels play
//! which role.

use heapless::Vec;

use crate::color::Rgb;

/// Number of entries in the default palette
pub const DEFAULT_PALETTE_SIZE: usize = 64;

/// Largest palette the fire grid can index with a `u8` heat value
pub const MAX_PALETTE_SIZE: usize = 256;

/// Number of distinct channel assignments
pub const PALETTE_ROTATIONS: u8 = 6;

// (ramped first, ramped second); the remaining channel is pinned to 0
const CHANNEL_PAIRS: [(usize, usize); PALETTE_ROTATIONS as usize] =
    [(0, 1), (0, 2), (1, 0), (1, 2), (2, 0), (2, 1)];

/// Advance a palette rotation, wrapping at [`PALETTE_ROTATIONS`]
pub const fn next_rotation(rotation: u8) -> u8 {
    (rotation % PALETTE_ROTATIONS + 1) % PALETTE_ROTATIONS
}

/// Ordered color gradient indexed by fire heat
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    entries: Vec<Rgb, MAX_PALETTE_SIZE>,
    rotation: u8,
}

impl Palette {
    /// Build the default 64 entry palette for a rotation
    pub fn build(rotation: usize) -> Self {
        Self::with_size(rotation, DEFAULT_PALETTE_SIZE)
    }

    /// Build a palette of `size` entries for a rotation.
    ///
    /// The rotation is reduced modulo [`PALETTE_ROTATIONS`]. `size` is
    /// clamped to `2..=MAX_PALETTE_SIZE` and rounded down to an even count.
    #[allow(clippy::cast_possible_truncation)]
    pub fn with_size(rotation: usize, size: usize) -> Self {
        let size = size.clamp(2, MAX_PALETTE_SIZE) & !1;
        let rotation = (rotation % PALETTE_ROTATIONS as usize) as u8;
        let (first, second) = CHANNEL_PAIRS[rotation as usize];

        let half = size / 2;
        let step = 512 / size;

        let entries = (0..size)
            .map(|i| {
                let mut channels = [0u8; 3];
                if i < half {
                    channels[first] = (i * step) as u8;
                } else {
                    channels[first] = 255;
                    channels[second] = ((i - half) * step) as u8;
                }
                let [r, g, b] = channels;
                Rgb { r, g, b }
            })
            .collect();

        Self { entries, rotation }
    }

    /// Rotation this palette was built for (already reduced)
    pub const fn rotation(&self) -> u8 {
        self.rotation
    }

    /// Number of entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Hottest heat value the palette can represent
    #[allow(clippy::cast_possible_truncation)]
    pub fn max_heat(&self) -> u8 {
        (self.entries.len().saturating_sub(1)) as u8
    }

    /// Color for a heat value, saturating at the hottest entry
    pub fn color(&self, heat: u8) -> Rgb {
        let index = usize::from(heat).min(self.entries.len().saturating_sub(1));
        self.entries.get(index).copied().unwrap_or_default()
    }

    pub fn entries(&self) -> &[Rgb] {
        &self.entries
    }
}

impl Default for Palette {
    fn default() -> Self {
        Self::build(0)
    }
}
