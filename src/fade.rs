//! Pattern switch cross-fade
//!
//! Switching patterns walks every pixel's brightness down to zero, swaps
//! the active pattern at the bottom, and walks it back up to nominal.
//! One level per render tick in both directions.

#[cfg(feature = "esp32-log")]
use esp_println::println;

use crate::pattern::PatternId;

/// Phase of the pattern switch transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum FadeState {
    /// Showing the active pattern at nominal brightness
    #[default]
    Steady,
    /// Dimming the old pattern
    FadingOut,
    /// Brightening the new pattern
    FadingIn,
}

/// Active and requested pattern plus the transition phase
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgramSelector {
    active: PatternId,
    requested: PatternId,
    state: FadeState,
}

impl ProgramSelector {
    pub const fn new(active: PatternId) -> Self {
        Self {
            active,
            requested: active,
            state: FadeState::Steady,
        }
    }

    /// Ask for a pattern.
    ///
    /// Starts fading out when steady. During a fade only the request is
    /// recorded; it is honored once the fade completes.
    pub fn request(&mut self, pattern: PatternId) {
        self.requested = pattern;
        if self.state == FadeState::Steady && self.requested != self.active {
            self.state = FadeState::FadingOut;
        }
    }

    /// Ask for the pattern after the last requested one
    pub fn request_next(&mut self) {
        self.request(self.requested.next());
    }

    pub const fn active(&self) -> PatternId {
        self.active
    }

    pub const fn requested(&self) -> PatternId {
        self.requested
    }

    pub const fn state(&self) -> FadeState {
        self.state
    }
}

/// Per-pixel brightness levels plus the scalar that tracks the fade
#[derive(Debug, Clone)]
pub struct BrightnessVector<const N: usize> {
    levels: [u8; N],
    len: usize,
    tracker: u8,
    nominal: u8,
}

impl<const N: usize> BrightnessVector<N> {
    /// Create `len` levels at `nominal`, `len` clamped to the capacity
    pub const fn new(len: usize, nominal: u8) -> Self {
        Self {
            levels: [nominal; N],
            len: if len > N { N } else { len },
            tracker: nominal,
            nominal,
        }
    }

    /// Lower the tracker and every lit pixel by one level
    pub fn step_down(&mut self) {
        if self.tracker == 0 {
            return;
        }
        self.tracker -= 1;
        for level in &mut self.levels[..self.len] {
            *level = level.saturating_sub(1);
        }
    }

    /// Raise the tracker and every pixel below nominal by one level
    pub fn step_up(&mut self) {
        if self.tracker >= self.nominal {
            return;
        }
        self.tracker += 1;
        for level in &mut self.levels[..self.len] {
            if *level < self.nominal {
                *level += 1;
            }
        }
    }

    /// Scalar brightness of the fade
    pub const fn tracker(&self) -> u8 {
        self.tracker
    }

    pub const fn nominal(&self) -> u8 {
        self.nominal
    }

    pub fn levels(&self) -> &[u8] {
        &self.levels[..self.len]
    }

    pub fn level(&self, index: usize) -> Option<u8> {
        self.levels().get(index).copied()
    }
}

/// Cross-fade state machine
#[derive(Debug, Clone)]
pub struct FadeMachine<const N: usize> {
    selector: ProgramSelector,
    brightness: BrightnessVector<N>,
}

impl<const N: usize> FadeMachine<N> {
    pub const fn new(active: PatternId, len: usize, nominal: u8) -> Self {
        Self {
            selector: ProgramSelector::new(active),
            brightness: BrightnessVector::new(len, nominal),
        }
    }

    /// Advance one render tick.
    ///
    /// Returns the pattern committed on this tick, if any.
    pub fn tick(&mut self) -> Option<PatternId> {
        match self.selector.state {
            FadeState::Steady => None,
            FadeState::FadingOut => {
                self.brightness.step_down();
                if self.brightness.tracker() > 0 {
                    return None;
                }
                self.selector.state = FadeState::FadingIn;
                self.selector.active = self.selector.requested;
                #[cfg(feature = "esp32-log")]
                println!(
                    "[FadeMachine.tick] switching to {}",
                    self.selector.active.as_str()
                );
                Some(self.selector.active)
            }
            FadeState::FadingIn => {
                self.brightness.step_up();
                if self.brightness.tracker() >= self.brightness.nominal() {
                    self.selector.state = if self.selector.requested == self.selector.active {
                        FadeState::Steady
                    } else {
                        FadeState::FadingOut
                    };
                }
                None
            }
        }
    }

    pub fn request(&mut self, pattern: PatternId) {
        self.selector.request(pattern);
    }

    pub fn request_next(&mut self) {
        self.selector.request_next();
    }

    pub const fn selector(&self) -> &ProgramSelector {
        &self.selector
    }

    pub const fn brightness(&self) -> &BrightnessVector<N> {
        &self.brightness
    }

    pub const fn state(&self) -> FadeState {
        self.selector.state
    }

    pub const fn active(&self) -> PatternId {
        self.selector.active
    }
}
