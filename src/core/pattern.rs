//! Single-channel feedback pattern calculation and representation
//!
//! A pattern encodes the feedback for one channel of a guess using base-3
//! encoding:
//! - 0 = Absent (value not in the answer's channel)
//! - 1 = Present (value elsewhere in the answer's channel)
//! - 2 = Exact (value in the same slot)
//!
//! The pattern is stored as a single u8 value (0-80), where each slot
//! contributes digit × 3^slot to the total.

use super::IDIOM_LEN;

/// Feedback mark for one slot of one channel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Mark {
    Absent,
    Present,
    Exact,
}

impl Mark {
    const fn digit(self) -> u8 {
        match self {
            Self::Absent => 0,
            Self::Present => 1,
            Self::Exact => 2,
        }
    }

    const fn from_digit(digit: u8) -> Self {
        match digit {
            2 => Self::Exact,
            1 => Self::Present,
            _ => Self::Absent,
        }
    }
}

/// Feedback pattern for one channel of a guess
///
/// Value range: 0-80 (3^4 - 1 = 81 possible patterns)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pattern(u8);

impl Pattern {
    /// All exact (perfect match)
    pub const PERFECT: Self = Self(80); // 2 + 2×3 + 2×9 + 2×27

    /// Build a pattern from per-slot marks
    #[must_use]
    pub fn from_marks(marks: [Mark; IDIOM_LEN]) -> Self {
        let mut pattern = 0u8;
        let mut multiplier = 1u8;
        for mark in marks {
            pattern += mark.digit() * multiplier;
            multiplier *= 3;
        }
        Self(pattern)
    }

    /// Get the raw pattern value (0-80)
    #[inline]
    #[must_use]
    pub const fn value(self) -> u8 {
        self.0
    }

    /// Check if every slot is exact
    #[inline]
    #[must_use]
    pub const fn is_perfect(self) -> bool {
        self.0 == Self::PERFECT.0
    }

    /// Mark of one slot (0-3)
    #[must_use]
    pub fn mark(self, slot: usize) -> Mark {
        debug_assert!(slot < IDIOM_LEN);
        Mark::from_digit(self.0 / 3u8.pow(slot as u32) % 3)
    }

    /// All four marks, slot order
    #[must_use]
    pub fn marks(self) -> [Mark; IDIOM_LEN] {
        std::array::from_fn(|slot| self.mark(slot))
    }

    /// Calculate the pattern of one channel when `guess` is scored against
    /// `answer`
    ///
    /// Works on any channel whose values compare with `==`: characters,
    /// initials, finals or tones.
    ///
    /// # Algorithm
    /// 1. First pass: mark exact slots and consume the matching answer slot
    /// 2. Second pass: for every slot still unmarked, consume the first
    ///    unconsumed answer slot holding the same value and mark it present
    /// 3. Encode as base-3 number
    ///
    /// A value repeated in the guess is credited at most as many times as it
    /// occurs in the answer.
    ///
    /// # Examples
    /// ```
    /// use handle_wordle::core::{Mark, Pattern};
    ///
    /// let pattern = Pattern::calculate(&['B', 'A', 'A', 'A'], &['A', 'B', 'A', 'C']);
    /// assert_eq!(
    ///     pattern.marks(),
    ///     [Mark::Present, Mark::Present, Mark::Exact, Mark::Absent]
    /// );
    /// ```
    #[must_use]
    pub fn calculate<T: PartialEq>(guess: &[T; IDIOM_LEN], answer: &[T; IDIOM_LEN]) -> Self {
        let mut result = [Mark::Absent; IDIOM_LEN];
        let mut consumed = [false; IDIOM_LEN];

        // First pass: exact slot matches
        // Allow: Index needed to access guess[i], answer[i], and set result[i]
        #[allow(clippy::needless_range_loop)]
        for i in 0..IDIOM_LEN {
            if guess[i] == answer[i] {
                result[i] = Mark::Exact;
                consumed[i] = true;
            }
        }

        // Second pass: present elsewhere, first unconsumed answer slot wins
        #[allow(clippy::needless_range_loop)]
        for i in 0..IDIOM_LEN {
            if result[i] != Mark::Absent {
                continue;
            }
            if let Some(j) = (0..IDIOM_LEN).find(|&j| !consumed[j] && answer[j] == guess[i]) {
                consumed[j] = true;
                result[i] = Mark::Present;
            }
        }

        Self::from_marks(result)
    }

    /// Convert pattern to emoji string, e.g. "🟩🟨⬜🟩"
    #[must_use]
    pub fn to_emoji(self) -> String {
        self.marks()
            .iter()
            .map(|mark| match mark {
                Mark::Exact => '🟩',
                Mark::Present => '🟨',
                Mark::Absent => '⬜',
            })
            .collect()
    }
}
