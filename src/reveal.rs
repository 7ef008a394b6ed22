/// Power on/off wipe: how many leading pixels are lit.
///
/// Moves one pixel per tick toward the full strip while powered and toward
/// zero while off, independently of any cross-fade.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealRamp {
    length: usize,
    limit: usize,
}

impl RevealRamp {
    /// Start fully dark on a strip of `limit` pixels
    pub const fn new(limit: usize) -> Self {
        Self { length: 0, limit }
    }

    /// Start at a given length, clamped to the strip
    pub const fn with_length(limit: usize, length: usize) -> Self {
        Self {
            length: if length > limit { limit } else { length },
            limit,
        }
    }

    /// Advance one tick and return the new length
    pub const fn tick(&mut self, powered: bool) -> usize {
        if powered {
            if self.length < self.limit {
                self.length += 1;
            }
        } else if self.length > 0 {
            self.length -= 1;
        }
        self.length
    }

    pub const fn length(&self) -> usize {
        self.length
    }

    pub const fn limit(&self) -> usize {
        self.limit
    }

    /// Fully lit or fully dark, nothing left to animate for `powered`
    pub const fn is_settled(&self, powered: bool) -> bool {
        if powered {
            self.length == self.limit
        } else {
            self.length == 0
        }
    }
}
