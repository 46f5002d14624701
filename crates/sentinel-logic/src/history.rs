//! Fixed-length sliding window of trend samples.
//!
//! Each member carries one of these for the heart-rate/gas chart. The
//! window is seeded full at creation so charts render a flat baseline
//! before the first real tick; every push drops the oldest sample, keeping
//! the length pinned at capacity.

use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

/// One charted sample — wall-clock label plus the two trended signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistorySample {
    /// Wall-clock label, `H:M:S`. Empty for pre-fill samples.
    pub time: String,
    pub heart_rate: u32,
    pub gas: u32,
}

/// Sliding window over the most recent samples, oldest first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TelemetryHistory {
    samples: VecDeque<HistorySample>,
    capacity: usize,
}

impl TelemetryHistory {
    /// Build a window holding `capacity` copies of `seed`.
    pub fn filled(capacity: usize, seed: HistorySample) -> Self {
        let mut samples = VecDeque::with_capacity(capacity);
        for _ in 0..capacity {
            samples.push_back(seed.clone());
        }
        Self { samples, capacity }
    }

    /// Slide the window: drop the oldest sample, append the new one.
    pub fn push(&mut self, sample: HistorySample) {
        if self.capacity == 0 {
            return;
        }
        while self.samples.len() >= self.capacity {
            self.samples.pop_front();
        }
        self.samples.push_back(sample);
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Oldest-to-newest iteration.
    pub fn iter(&self) -> impl Iterator<Item = &HistorySample> {
        self.samples.iter()
    }

    /// The most recently pushed sample.
    pub fn latest(&self) -> Option<&HistorySample> {
        self.samples.back()
    }
}
