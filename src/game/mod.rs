//! Game rules: answer selection, sessions and the session registry
//!
//! Everything here is synchronous. Randomness only enters through the
//! `Rng` passed to [`select`].

mod error;
mod hint;
mod options;
mod registry;
mod selector;
mod session;

pub use error::GameError;
pub use hint::{Hint, HintSlot};
pub use options::GameOptions;
pub use registry::{SessionRegistry, SharedSession};
pub use selector::{Selection, select};
pub use session::{GameSession, GameStatus, GuessOutcome, GuessRecord, Summary};

use std::time::Duration;

/// Whether games only score corpus words unless configured otherwise
pub const DEFAULT_STRICT_MODE: bool = true;

/// Guesses per game
pub const DEFAULT_MAX_GUESSES: usize = 10;

/// Guesses per game in hard mode
pub const HARD_MAX_GUESSES: usize = 5;

/// Scored guesses required between two hints
pub const HINT_COOLDOWN: usize = 3;

/// Fewest categories sampled for one round's pool
pub const MIN_CATEGORY_COUNT: usize = 3;

/// Most categories sampled for one round's pool
pub const MAX_CATEGORY_COUNT: usize = 5;

/// Idle time after which a surrounding scheduler should end a game
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(300);
