use crate::corpus::PronounceError;
use std::fmt;

/// Errors raised by sessions, the registry and the selector
///
/// All are recoverable: the registry and corpus stay valid after any of them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    InvalidGuessLength { expected: usize, actual: usize },
    UnknownPronunciation(char),
    SessionAlreadyActive(String),
    SessionNotFound(String),
    HintOnCooldown { remaining: usize },
    HintsDisabled,
    GameOver,
    EmptyCorpus,
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidGuessLength { expected, actual } => {
                write!(f, "Guess must be {expected} characters, got {actual}")
            }
            Self::UnknownPronunciation(ch) => write!(f, "No known reading for '{ch}'"),
            Self::SessionAlreadyActive(key) => write!(f, "A game is already running for {key}"),
            Self::SessionNotFound(key) => write!(f, "No game is running for {key}"),
            Self::HintOnCooldown { remaining } => {
                write!(f, "Hint on cooldown, {remaining} more guess(es) needed")
            }
            Self::HintsDisabled => write!(f, "Hints are disabled for this game"),
            Self::GameOver => write!(f, "The game has already ended"),
            Self::EmptyCorpus => write!(f, "Corpus has no answers to choose from"),
        }
    }
}

impl std::error::Error for GameError {}

impl From<PronounceError> for GameError {
    fn from(e: PronounceError) -> Self {
        match e {
            PronounceError::InvalidLength(actual) => Self::InvalidGuessLength {
                expected: crate::core::IDIOM_LEN,
                actual,
            },
            PronounceError::UnknownReading(ch) => Self::UnknownPronunciation(ch),
        }
    }
}
