//! Core domain types for Handle
//!
//! Syllables, idioms and the duplicate-aware scoring rule. Everything here is
//! pure and deterministic.

mod feedback;
mod idiom;
mod pattern;
mod syllable;

pub use feedback::{Channel, Feedback};
pub use idiom::{IDIOM_LEN, Idiom, IdiomError};
pub use pattern::{Mark, Pattern};
pub use syllable::{FINALS, INITIALS, Syllable, SyllableError, Tone};
