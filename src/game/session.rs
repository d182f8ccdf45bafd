//! One in-progress game
//!
//! A session moves from `AwaitingGuess` to exactly one of `Won`, `Lost` or
//! `Stopped`. Terminal sessions reject guesses and hints.

use super::{GameError, GameOptions, HINT_COOLDOWN, Hint, Selection, select};
use crate::core::{Channel, Feedback, IDIOM_LEN, Idiom};
use crate::corpus::{Answer, Corpus};
use rand::Rng;
use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Lifecycle state of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    AwaitingGuess,
    Won,
    Lost,
    Stopped,
}

impl GameStatus {
    #[inline]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        !matches!(self, Self::AwaitingGuess)
    }
}

/// A scored guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuessRecord {
    pub idiom: Idiom,
    pub feedback: Feedback,
}

/// Result of submitting a guess
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GuessOutcome {
    /// Scored, game goes on
    Continue(Feedback),
    /// Scored, every glyph exact
    Win(Feedback),
    /// Scored, guess limit reached without a win
    Loss(Feedback),
    /// Already guessed; no turn consumed
    Duplicate,
    /// Strict mode and not a corpus answer; no turn consumed. With `confirm`
    /// the caller should ask the player to re-check the word.
    Illegal { confirm: bool },
}

impl GuessOutcome {
    /// Feedback of a scored guess
    #[must_use]
    pub const fn feedback(&self) -> Option<&Feedback> {
        match self {
            Self::Continue(f) | Self::Win(f) | Self::Loss(f) => Some(f),
            Self::Duplicate | Self::Illegal { .. } => None,
        }
    }

    #[must_use]
    pub const fn is_terminal(&self) -> bool {
        matches!(self, Self::Win(_) | Self::Loss(_))
    }
}

/// End-of-game report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub mode: String,
    pub name: String,
    pub answer: Answer,
    pub selected_categories: Vec<String>,
    pub guesses_used: usize,
    pub max_guesses: usize,
    pub status: GameStatus,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.answer.card())
    }
}

/// One game: the secret answer, guess history and rule flags
#[derive(Debug, Clone)]
pub struct GameSession {
    corpus: Arc<Corpus>,
    answer: Answer,
    selected_categories: Vec<String>,
    options: GameOptions,
    guesses: Vec<GuessRecord>,
    last_hint_at: Option<usize>,
    revealed: Vec<(usize, Channel)>,
    status: GameStatus,
    last_activity: Instant,
}

impl GameSession {
    /// Create a session for an already selected answer
    ///
    /// Options are normalized, so hard mode always wins over lesser flags.
    #[must_use]
    pub fn new(corpus: Arc<Corpus>, selection: Selection, options: GameOptions) -> Self {
        Self {
            corpus,
            answer: selection.answer,
            selected_categories: selection.categories,
            options: options.normalized(),
            guesses: Vec::new(),
            last_hint_at: None,
            revealed: Vec::new(),
            status: GameStatus::AwaitingGuess,
            last_activity: Instant::now(),
        }
    }

    /// Select an answer from `corpus` and start a session on it
    ///
    /// # Errors
    ///
    /// Returns `GameError::EmptyCorpus` if there is nothing to select.
    pub fn start<R: Rng + ?Sized>(
        corpus: Arc<Corpus>,
        allowed_categories: &[String],
        options: GameOptions,
        rng: &mut R,
    ) -> Result<Self, GameError> {
        let selection = select(&corpus, allowed_categories, rng)?;
        Ok(Self::new(corpus, selection, options))
    }

    #[must_use]
    pub fn mode(&self) -> &str {
        self.corpus.mode()
    }

    /// Display name of the mode, e.g. `成语`
    #[must_use]
    pub fn name(&self) -> &str {
        self.corpus.name()
    }

    #[must_use]
    pub const fn answer(&self) -> &Answer {
        &self.answer
    }

    #[must_use]
    pub fn selected_categories(&self) -> &[String] {
        &self.selected_categories
    }

    #[must_use]
    pub const fn options(&self) -> &GameOptions {
        &self.options
    }

    #[must_use]
    pub const fn max_guesses(&self) -> usize {
        self.options.max_guesses
    }

    #[must_use]
    pub fn guesses(&self) -> &[GuessRecord] {
        &self.guesses
    }

    #[must_use]
    pub fn guesses_used(&self) -> usize {
        self.guesses.len()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> usize {
        self.max_guesses().saturating_sub(self.guesses.len())
    }

    #[must_use]
    pub const fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub const fn last_hint_at(&self) -> Option<usize> {
        self.last_hint_at
    }

    #[must_use]
    pub fn idle_for(&self) -> Duration {
        self.last_activity.elapsed()
    }

    /// Submit a guess
    ///
    /// Checks run in order: game still running, length, strict-mode
    /// legality, repetition. Only a scored guess consumes a turn.
    ///
    /// # Errors
    ///
    /// - `GameOver` if the session already ended
    /// - `InvalidGuessLength` if the word is not 4 characters
    /// - `UnknownPronunciation` if a character has no known reading
    pub fn guess(&mut self, word: &str) -> Result<GuessOutcome, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        self.last_activity = Instant::now();

        let word = word.trim();
        let len = word.chars().count();
        if len != IDIOM_LEN {
            return Err(GameError::InvalidGuessLength {
                expected: IDIOM_LEN,
                actual: len,
            });
        }

        if self.options.strict && !self.corpus.contains(word) {
            tracing::debug!(word, confirm = self.options.confirm, "illegal guess");
            return Ok(GuessOutcome::Illegal {
                confirm: self.options.confirm,
            });
        }

        if self.guesses.iter().any(|g| g.idiom.text() == word) {
            return Ok(GuessOutcome::Duplicate);
        }

        let idiom = self.corpus.pronounce(word)?;
        let feedback = Feedback::evaluate(self.answer.idiom(), &idiom);
        tracing::debug!(
            word,
            glyph = %feedback.channel(Channel::Glyph).to_emoji(),
            turn = self.guesses.len() + 1,
            "guess scored"
        );
        self.guesses.push(GuessRecord { idiom, feedback });

        let outcome = if feedback.is_win() {
            self.status = GameStatus::Won;
            GuessOutcome::Win(feedback)
        } else if self.guesses.len() >= self.max_guesses() {
            self.status = GameStatus::Lost;
            GuessOutcome::Loss(feedback)
        } else {
            GuessOutcome::Continue(feedback)
        };

        if outcome.is_terminal() {
            tracing::info!(
                mode = self.mode(),
                status = ?self.status,
                guesses = self.guesses.len(),
                "game finished"
            );
        }

        Ok(outcome)
    }

    /// Whether a hint may be taken now
    ///
    /// # Errors
    ///
    /// `GameOver`, `HintsDisabled`, or `HintOnCooldown` with the number of
    /// scored guesses still needed.
    pub fn hint_available(&self) -> Result<(), GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }
        if !self.options.hint_enabled {
            return Err(GameError::HintsDisabled);
        }
        if let Some(last) = self.last_hint_at
            && self.guesses.len() - last < HINT_COOLDOWN
        {
            return Err(GameError::HintOnCooldown {
                remaining: HINT_COOLDOWN - (self.guesses.len() - last),
            });
        }
        Ok(())
    }

    /// Take a hint
    ///
    /// # Errors
    ///
    /// See [`GameSession::hint_available`].
    pub fn hint(&mut self) -> Result<Hint, GameError> {
        self.hint_available()?;
        self.last_activity = Instant::now();

        let hint = Hint::build(self.answer.idiom(), &self.guesses, &self.revealed);
        // A hint with nothing new to show does not start the cooldown
        if let Some(revealed) = hint.revealed {
            self.revealed.push(revealed);
            self.last_hint_at = Some(self.guesses.len());
        }
        tracing::debug!(at = self.guesses.len(), revealed = ?hint.revealed, "hint taken");

        Ok(hint)
    }

    /// End the game
    ///
    /// A running game becomes `Stopped`; a finished one keeps its status.
    pub fn stop(&mut self) -> Summary {
        if !self.status.is_terminal() {
            self.status = GameStatus::Stopped;
            tracing::info!(mode = self.mode(), guesses = self.guesses.len(), "game stopped");
        }
        self.summary()
    }

    #[must_use]
    pub fn summary(&self) -> Summary {
        Summary {
            mode: self.mode().to_string(),
            name: self.name().to_string(),
            answer: self.answer.clone(),
            selected_categories: self.selected_categories.clone(),
            guesses_used: self.guesses.len(),
            max_guesses: self.max_guesses(),
            status: self.status,
        }
    }
}
