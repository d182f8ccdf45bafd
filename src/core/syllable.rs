//! Pinyin syllables split into initial, final and tone
//!
//! Syllables arrive precomputed as TONE3 strings (`zhong1`, `lv4`, `de`).
//! Splitting uses two fixed tables, scanned in order: the first initial that
//! prefixes the syllable and the first final that suffixes it win.

use std::fmt;

/// Initials (声母), longest-first where prefixes overlap
pub const INITIALS: [&str; 23] = [
    "zh", "z", "y", "x", "w", "t", "sh", "s", "r", "q", "p", "n", "m", "l", "k", "j", "h", "g",
    "f", "d", "ch", "c", "b",
];

/// Finals (韵母), longest-first where suffixes overlap
pub const FINALS: [&str; 37] = [
    "ün", "üe", "üan", "ü", "uo", "un", "ui", "ue", "uang", "uan", "uai", "ua", "ou", "iu", "iong",
    "ong", "io", "ing", "in", "ie", "iao", "iang", "ian", "ia", "er", "eng", "en", "ei", "ao",
    "ang", "an", "ai", "u", "o", "i", "e", "a",
];

/// Mandarin tone (声调)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Tone {
    First,
    Second,
    Third,
    Fourth,
    Neutral,
}

impl Tone {
    /// Tone from its TONE3 digit (1-5, 5 = neutral)
    #[must_use]
    pub const fn from_digit(digit: u8) -> Option<Self> {
        match digit {
            1 => Some(Self::First),
            2 => Some(Self::Second),
            3 => Some(Self::Third),
            4 => Some(Self::Fourth),
            5 => Some(Self::Neutral),
            _ => None,
        }
    }

    /// TONE3 digit of this tone
    #[must_use]
    pub const fn digit(self) -> u8 {
        match self {
            Self::First => 1,
            Self::Second => 2,
            Self::Third => 3,
            Self::Fourth => 4,
            Self::Neutral => 5,
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.digit())
    }
}

/// Error type for unparseable pinyin
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SyllableError {
    Empty,
    InvalidTone(char),
    InvalidCharacters(String),
}

impl fmt::Display for SyllableError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Empty => write!(f, "Pinyin syllable is empty"),
            Self::InvalidTone(digit) => write!(f, "Tone must be 1-5, got '{digit}'"),
            Self::InvalidCharacters(text) => {
                write!(f, "Pinyin syllable '{text}' contains invalid characters")
            }
        }
    }
}

impl std::error::Error for SyllableError {}

/// One decomposed pinyin syllable
///
/// `rime` is the final (韵母); either part may be empty, e.g. `er` has no
/// initial.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Syllable {
    initial: String,
    rime: String,
    tone: Tone,
}

impl Syllable {
    /// Create a syllable from already separated parts
    pub fn new(initial: impl Into<String>, rime: impl Into<String>, tone: Tone) -> Self {
        Self {
            initial: initial.into(),
            rime: rime.into(),
            tone,
        }
    }

    /// Parse a TONE3 syllable such as `zhong1`, `lv4` or `de`
    ///
    /// A missing tone digit means the neutral tone. `v` is read as `ü`.
    ///
    /// # Errors
    /// Returns `SyllableError` if the text is empty, carries a digit outside
    /// 1-5, or contains anything other than lowercase latin letters and `ü`.
    ///
    /// # Examples
    /// ```
    /// use handle_wordle::core::{Syllable, Tone};
    ///
    /// let s = Syllable::parse("zhong1").unwrap();
    /// assert_eq!(s.initial(), "zh");
    /// assert_eq!(s.rime(), "ong");
    /// assert_eq!(s.tone(), Tone::First);
    /// ```
    pub fn parse(text: &str) -> Result<Self, SyllableError> {
        let text = text.trim().to_lowercase().replace('v', "ü");
        if text.is_empty() {
            return Err(SyllableError::Empty);
        }

        let (body, tone) = match text.chars().last() {
            Some(last) if last.is_ascii_digit() => {
                let digit = last as u8 - b'0';
                let tone = Tone::from_digit(digit).ok_or(SyllableError::InvalidTone(last))?;
                (&text[..text.len() - 1], tone)
            }
            _ => (text.as_str(), Tone::Neutral),
        };

        if body.is_empty() || !body.chars().all(|c| c.is_ascii_lowercase() || c == 'ü') {
            return Err(SyllableError::InvalidCharacters(text.clone()));
        }

        let initial = INITIALS
            .iter()
            .find(|i| body.starts_with(*i))
            .copied()
            .unwrap_or_default();
        let rime = FINALS
            .iter()
            .find(|f| body.ends_with(*f))
            .copied()
            .unwrap_or_default();

        Ok(Self::new(initial, rime, tone))
    }

    #[inline]
    #[must_use]
    pub fn initial(&self) -> &str {
        &self.initial
    }

    #[inline]
    #[must_use]
    pub fn rime(&self) -> &str {
        &self.rime
    }

    #[inline]
    #[must_use]
    pub const fn tone(&self) -> Tone {
        self.tone
    }
}

/// TONE3 rendering, e.g. `zhong1`
///
/// The neutral tone is written without a digit.
impl fmt::Display for Syllable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.initial, self.rime)?;
        if self.tone != Tone::Neutral {
            write!(f, "{}", self.tone)?;
        }
        Ok(())
    }
}
