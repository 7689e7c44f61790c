//! Threefold-repetition bookkeeping. Positions are reduced to the first
//! four fields of their FEN (pieces, side to move, castling rights,
//! en-passant target); the move counters do not distinguish repetitions.

use std::collections::HashMap;

#[derive(Clone, Debug, Default)]
pub struct RepetitionTracker {
    counts: HashMap<String, u8>,
    threefold: bool,
}

impl RepetitionTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one occurrence of the position described by `fen`. The third
    /// occurrence of a reduced position sets a one-shot flag; counting
    /// stops there.
    pub fn record(&mut self, fen: &str) {
        if self.threefold {
            return;
        }
        let key: String = fen.split(' ').take(4).collect();
        match self.counts.get(&key).copied() {
            None => {
                self.counts.insert(key, 1);
            }
            Some(2) => {
                self.threefold = true;
            }
            Some(_) => {
                self.counts.insert(key, 2);
            }
        }
    }

    pub fn threefold(&self) -> bool {
        self.threefold
    }
}

#[cfg(test)]
#[path = "repetition_tests.rs"]
mod repetition_tests;
