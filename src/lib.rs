//! Handle
//!
//! A Wordle-style guessing game over four-character Chinese idioms, scored
//! on four channels: character, pinyin initial, final and tone.
//!
//! # Quick Start
//!
//! ```rust
//! use handle_wordle::core::{Channel, Feedback, Idiom, Mark};
//!
//! let answer = Idiom::from_pinyin("人山人海", "ren2 shan1 ren2 hai3").unwrap();
//! let guess = Idiom::from_pinyin("一心一意", "yi1 xin1 yi1 yi4").unwrap();
//!
//! let feedback = Feedback::evaluate(&answer, &guess);
//! assert!(!feedback.is_win());
//! assert_eq!(feedback.mark(0, Channel::Glyph), Mark::Absent);
//! ```
//!
//! Games run through [`game::GameSession`], and several games at once
//! through [`game::SessionRegistry`].

// Core domain types
pub mod core;

// Answer corpora
pub mod corpus;

// Answer selection, sessions and the registry
pub mod game;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
