//! Pattern system with compile-time known pattern variants
//!
//! Each pattern is a frame generator stepped by its own producer task.
//! Patterns implement the `Pattern` trait.

mod fire;
mod rainbow;

pub use fire::{FIRE_MARGIN, FireSimulator, HeatGrid};
pub use rainbow::{RainbowGenerator, step_rainbow};

use crate::color::Rgb;

const PATTERN_NAME_FIRE: &str = "fire";
const PATTERN_NAME_RAINBOW: &str = "rainbow";

const PATTERN_ID_FIRE: u8 = 0;
const PATTERN_ID_RAINBOW: u8 = 1;

/// Number of selectable patterns
pub const PATTERN_COUNT: u8 = 2;

pub trait Pattern {
    /// Pattern this generator renders
    const ID: PatternId;

    /// Advance one tick and write a full strip into `leds`
    fn step(&mut self, leds: &mut [Rgb]);

    /// Steps to run back-to-back before the first frame is worth showing
    fn warmup_steps(&self) -> usize {
        0
    }

    /// Switch to another palette rotation, if the pattern uses one
    fn set_palette_rotation(&mut self, _rotation: u8) {}
}

/// Known pattern ids that can be selected.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum PatternId {
    #[default]
    Fire = PATTERN_ID_FIRE,
    Rainbow = PATTERN_ID_RAINBOW,
}

impl PatternId {
    pub const fn from_raw(value: u8) -> Option<Self> {
        Some(match value {
            PATTERN_ID_FIRE => Self::Fire,
            PATTERN_ID_RAINBOW => Self::Rainbow,
            _ => return None,
        })
    }

    pub const fn as_raw(self) -> u8 {
        self as u8
    }

    /// Pattern selected by the next press of the program button
    pub const fn next(self) -> Self {
        match self {
            Self::Fire => Self::Rainbow,
            Self::Rainbow => Self::Fire,
        }
    }

    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fire => PATTERN_NAME_FIRE,
            Self::Rainbow => PATTERN_NAME_RAINBOW,
        }
    }

    pub fn parse_from_str(s: &str) -> Option<Self> {
        match s {
            PATTERN_NAME_FIRE => Some(Self::Fire),
            PATTERN_NAME_RAINBOW => Some(Self::Rainbow),
            _ => None,
        }
    }
}
