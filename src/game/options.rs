//! Per-game configuration flags

use super::{DEFAULT_MAX_GUESSES, DEFAULT_STRICT_MODE, HARD_MAX_GUESSES};

/// Flags chosen when a game starts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameOptions {
    /// Fewer guesses, strict mode and no hints
    pub hard: bool,
    /// Guesses must be corpus answers to be scored
    pub strict: bool,
    pub hint_enabled: bool,
    /// Illegal guesses are re-confirmed with the player instead of ignored
    pub confirm: bool,
    pub max_guesses: usize,
}

impl Default for GameOptions {
    fn default() -> Self {
        Self {
            hard: false,
            strict: DEFAULT_STRICT_MODE,
            hint_enabled: true,
            confirm: false,
            max_guesses: DEFAULT_MAX_GUESSES,
        }
    }
}

impl GameOptions {
    /// Default options with strict mode switched off: any word with a
    /// known reading is scored
    #[must_use]
    pub fn loose() -> Self {
        Self {
            strict: false,
            ..Self::default()
        }
    }

    /// Options with hard mode switched on
    #[must_use]
    pub fn hard() -> Self {
        Self {
            hard: true,
            ..Self::default()
        }
    }

    /// Apply the flag interactions
    ///
    /// Hard mode overrides the guess limit, forces strict mode and disables
    /// hints. Confirm mode only applies together with strict mode. A zero
    /// guess limit is raised to one.
    #[must_use]
    pub fn normalized(self) -> Self {
        let mut options = self;
        if options.hard {
            options.max_guesses = HARD_MAX_GUESSES;
            options.strict = true;
            options.hint_enabled = false;
        }
        options.confirm &= options.strict;
        options.max_guesses = options.max_guesses.max(1);
        options
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_options() {
        let options = GameOptions::default().normalized();
        assert_eq!(options.max_guesses, 10);
        assert!(options.hint_enabled);
        assert!(options.strict);
        assert!(!options.confirm);
    }

    #[test]
    fn loose_options_turn_strict_off() {
        let options = GameOptions::loose().normalized();
        assert!(!options.strict);
        assert_eq!(options.max_guesses, 10);
        assert!(options.hint_enabled);

        // Hard mode is strict even from loose options
        let hard = GameOptions {
            hard: true,
            ..GameOptions::loose()
        }
        .normalized();
        assert!(hard.strict);
    }

    #[test]
    fn hard_mode_overrides_lesser_flags() {
        let options = GameOptions {
            hard: true,
            strict: false,
            hint_enabled: true,
            confirm: false,
            max_guesses: 20,
        }
        .normalized();

        assert_eq!(options.max_guesses, 5);
        assert!(options.strict);
        assert!(!options.hint_enabled);
    }

    #[test]
    fn confirm_requires_strict() {
        let loose = GameOptions {
            confirm: true,
            ..GameOptions::loose()
        }
        .normalized();
        assert!(!loose.confirm);

        let strict = GameOptions {
            confirm: true,
            strict: true,
            ..GameOptions::default()
        }
        .normalized();
        assert!(strict.confirm);

        let hard = GameOptions {
            confirm: true,
            ..GameOptions::hard()
        }
        .normalized();
        assert!(hard.confirm);
    }

    #[test]
    fn zero_guess_limit_raised() {
        let options = GameOptions {
            max_guesses: 0,
            ..GameOptions::default()
        }
        .normalized();
        assert_eq!(options.max_guesses, 1);
    }
}
