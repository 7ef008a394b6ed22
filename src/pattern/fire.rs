//! Fire simulation
//!
//! A small cellular heat grid is seeded with random hot and cold pairs at
//! its base, diffused upward with a decay of one level per row, and the top
//! row is projected through the palette onto the strip.
//!
//! Two grids alternate: one is read while the other is written, then they
//! swap. Each grid carries [`FIRE_MARGIN`] extra columns on both sides so
//! neighbor averaging never leaves the grid.

use rand_core::RngCore;

use super::{Pattern, PatternId};
use crate::color::{Palette, Rgb};
use crate::config::{ConfigError, LightConfig, MAX_FIRE_ROWS, MIN_FIRE_ROWS};

/// Columns added on each side of the visible strip
pub const FIRE_MARGIN: usize = 1;

// Rows reseeded every step
const IGNITION_ROWS: usize = 2;

/// One heat buffer: `rows x (strip length + 2 * FIRE_MARGIN)` cells
#[derive(Debug, Clone)]
pub struct HeatGrid<const N: usize> {
    cells: [[u8; N]; MAX_FIRE_ROWS],
    margins: [[u8; 2 * FIRE_MARGIN]; MAX_FIRE_ROWS],
    width: usize,
}

impl<const N: usize> HeatGrid<N> {
    const fn new(len: usize) -> Self {
        Self {
            cells: [[0; N]; MAX_FIRE_ROWS],
            margins: [[0; 2 * FIRE_MARGIN]; MAX_FIRE_ROWS],
            width: len + 2 * FIRE_MARGIN,
        }
    }

    /// Grid width including both margins
    pub const fn width(&self) -> usize {
        self.width
    }

    /// Heat at `row`, `col`; `col` counts from the left margin.
    ///
    /// Returns `None` outside the grid.
    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        if col >= self.width {
            return None;
        }
        let visible = self.width - 2 * FIRE_MARGIN;
        if col < FIRE_MARGIN {
            self.margins.get(row)?.get(col).copied()
        } else if col < FIRE_MARGIN + visible {
            self.cells.get(row)?.get(col - FIRE_MARGIN).copied()
        } else {
            self.margins.get(row)?.get(col - visible).copied()
        }
    }

    // Callers stay inside the active rows and the grid width
    fn heat_at(&self, row: usize, col: usize) -> u8 {
        self.get(row, col).unwrap_or(0)
    }

    fn set(&mut self, row: usize, col: usize, heat: u8) {
        let visible = self.width - 2 * FIRE_MARGIN;
        if col < FIRE_MARGIN {
            self.margins[row][col] = heat;
        } else if col < FIRE_MARGIN + visible {
            self.cells[row][col - FIRE_MARGIN] = heat;
        } else {
            self.margins[row][col - visible] = heat;
        }
    }
}

/// Double-buffered fire simulation for up to `N` LEDs
pub struct FireSimulator<R: RngCore, const N: usize> {
    grids: [HeatGrid<N>; 2],
    /// Index of the grid read this step, the other one is written
    current: usize,
    rows: usize,
    len: usize,
    palette: Palette,
    rng: R,
}

impl<R: RngCore, const N: usize> FireSimulator<R, N> {
    /// Create a cold simulation.
    ///
    /// `len` is clamped to the capacity `N` (at least one LED when `N` is
    /// non-zero) and `rows` to the supported grid heights.
    pub fn new(rng: R, len: usize, rows: usize, palette: Palette) -> Self {
        let len = if N == 0 { 0 } else { len.clamp(1, N) };
        Self {
            grids: [HeatGrid::new(len), HeatGrid::new(len)],
            current: 0,
            rows: rows.clamp(MIN_FIRE_ROWS, MAX_FIRE_ROWS),
            len,
            palette,
            rng,
        }
    }

    /// Create a simulation sized and colored from a validated config
    pub fn from_config(rng: R, config: &LightConfig) -> Result<Self, ConfigError> {
        config.validate::<N>()?;
        let palette = Palette::with_size(0, config.palette_size);
        Ok(Self::new(rng, config.strip_length, config.fire_rows, palette))
    }

    /// Advance the grid by one step and swap buffers
    pub fn advance(&mut self) {
        let Self {
            grids,
            current,
            rows,
            palette,
            rng,
            ..
        } = self;
        let rows = *rows;
        let hottest = palette.max_heat();

        let [first, second] = grids;
        let (read, write) = if *current == 0 {
            (first, second)
        } else {
            (second, first)
        };
        let width = read.width();

        // Ignition: adjacent column pairs share one random draw
        for row in 0..IGNITION_ROWS {
            for pair in (0..width).step_by(2) {
                let heat = if rng.next_u32() < u32::MAX / 2 {
                    0
                } else {
                    hottest
                };
                for col in pair..(pair + 2).min(width) {
                    read.set(row, col, heat);
                    write.set(row, col, heat);
                }
            }
        }

        // Diffusion: each cell feeds the one above it in the other grid
        for row in 1..rows - 1 {
            for col in FIRE_MARGIN..width - FIRE_MARGIN {
                let sum = u16::from(read.heat_at(row, col - 1))
                    + u16::from(read.heat_at(row, col + 1))
                    + u16::from(read.heat_at(row, col))
                    + u16::from(read.heat_at(row - 1, col));
                #[allow(clippy::cast_possible_truncation)]
                let heat = (sum / 4).saturating_sub(1) as u8;
                write.set(row + 1, col, heat);
            }
        }

        *current ^= 1;
    }

    /// Map the top row of the current grid through the palette
    pub fn project(&self, leds: &mut [Rgb]) {
        let grid = &self.grids[self.current];
        let top = self.rows - 1;
        for (i, led) in leds.iter_mut().take(self.len).enumerate() {
            *led = self.palette.color(grid.heat_at(top, i + FIRE_MARGIN));
        }
    }

    /// Heat of a cell in the current grid, `None` outside the active rows
    pub fn heat(&self, row: usize, col: usize) -> Option<u8> {
        if row >= self.rows {
            return None;
        }
        self.grids[self.current].get(row, col)
    }

    /// Grid currently read (0 or 1)
    pub const fn current_grid(&self) -> usize {
        self.current
    }

    pub const fn rows(&self) -> usize {
        self.rows
    }

    /// Grid width including both margins
    pub const fn width(&self) -> usize {
        self.len + 2 * FIRE_MARGIN
    }

    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn palette(&self) -> &Palette {
        &self.palette
    }

    /// Replace the palette; heat values keep their meaning if sizes match
    pub fn set_palette(&mut self, palette: Palette) {
        self.palette = palette;
    }
}

impl<R: RngCore, const N: usize> Pattern for FireSimulator<R, N> {
    const ID: PatternId = PatternId::Fire;

    fn step(&mut self, leds: &mut [Rgb]) {
        self.advance();
        self.project(leds);
    }

    fn warmup_steps(&self) -> usize {
        self.rows * 2 + 1
    }

    fn set_palette_rotation(&mut self, rotation: u8) {
        if rotation == self.palette.rotation() {
            return;
        }
        self.palette = Palette::with_size(usize::from(rotation), self.palette.len());
    }
}
