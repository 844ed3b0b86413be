//! Core count type.
//!
//! A LaTeX document is measured in two units that are kept apart:
//!
//! - **chinese**: individual CJK Unified Ideographs (U+4E00..=U+9FFF), one per character
//! - **english**: whitespace-separated tokens once CJK and punctuation are removed
//!
//! `total` is always the sum of the two.

use serde::{Deserialize, Serialize};
use std::iter::Sum;
use std::ops::{Add, AddAssign};

/// Chinese character and English word counts for a piece of text.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCounts {
    /// CJK ideographs, each counted on its own
    pub chinese: u64,
    /// English (non-CJK) words
    pub english: u64,
    /// Precomputed `chinese + english`
    pub total: u64,
}

impl WordCounts {
    /// Create counts from the two components, computing the total.
    pub fn new(chinese: u64, english: u64) -> Self {
        Self {
            chinese,
            english,
            total: chinese + english,
        }
    }

    /// All zeros.
    pub fn zero() -> Self {
        Self::default()
    }

    /// Total units (returns precomputed `total` field).
    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }
}

impl Add for WordCounts {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            chinese: self.chinese + other.chinese,
            english: self.english + other.english,
            total: self.total + other.total,
        }
    }
}

impl AddAssign for WordCounts {
    fn add_assign(&mut self, other: Self) {
        self.chinese += other.chinese;
        self.english += other.english;
        self.total += other.total;
    }
}

impl Sum for WordCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::zero(), Add::add)
    }
}
