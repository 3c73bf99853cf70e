/// A source of context tokens for address generation.
///
/// Every call to [`Clock::tick`] must yield a token distinct from the previous
/// ones for the lifetime of a tree, so that two nodes inserted with the same
/// value under the same parent still receive different addresses.
pub trait Clock {
    /// Advance the clock and return the new context token.
    fn tick(&mut self) -> u64;
}

/// A [`Clock`] backed by a plain insertion sequence number.
///
/// Deterministic: a fresh `SequenceClock` replays the same sequence of tokens,
/// which makes the addresses of a tree reproducible under test.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SequenceClock {
    next: u64,
}

impl SequenceClock {
    /// Create a clock whose first tick yields `start`.
    pub fn starting_at(start: u64) -> Self {
        Self { next: start }
    }

    /// The token the next tick will yield.
    pub fn peek(&self) -> u64 {
        self.next
    }
}

impl Clock for SequenceClock {
    fn tick(&mut self) -> u64 {
        let token = self.next;
        self.next = self.next.wrapping_add(1);
        token
    }
}
