//! Four-character idiom representation
//!
//! An Idiom stores its four characters together with the syllable of each
//! slot.

use super::Syllable;
use std::fmt;

/// Number of character slots in every idiom
pub const IDIOM_LEN: usize = 4;

/// A four-character word with one syllable per character
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Idiom {
    text: String,
    chars: [char; IDIOM_LEN],
    syllables: [Syllable; IDIOM_LEN],
}

/// Error type for invalid idioms
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum IdiomError {
    InvalidLength(usize),
    SyllableCount { chars: usize, syllables: usize },
    Whitespace,
}

impl fmt::Display for IdiomError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Idiom must be exactly {IDIOM_LEN} characters, got {len}")
            }
            Self::SyllableCount { chars, syllables } => {
                write!(f, "Idiom has {chars} characters but {syllables} syllables")
            }
            Self::Whitespace => write!(f, "Idiom must not contain whitespace"),
        }
    }
}

impl std::error::Error for IdiomError {}

impl Idiom {
    /// Create a new Idiom from its text and one syllable per character
    ///
    /// # Errors
    /// Returns `IdiomError` if:
    /// - The text is not exactly 4 characters
    /// - The number of syllables differs from the number of characters
    /// - The text contains whitespace
    ///
    /// # Examples
    /// ```
    /// use handle_wordle::core::{Idiom, Syllable};
    ///
    /// let syllables = ["yi1", "xin1", "yi1", "yi4"].map(|p| Syllable::parse(p).unwrap());
    /// let idiom = Idiom::new("一心一意", syllables.to_vec()).unwrap();
    /// assert_eq!(idiom.text(), "一心一意");
    /// assert!(idiom.has_char('心'));
    /// ```
    pub fn new(text: impl Into<String>, syllables: Vec<Syllable>) -> Result<Self, IdiomError> {
        let text: String = text.into().trim().to_string();
        let chars: Vec<char> = text.chars().collect();

        if chars.len() != IDIOM_LEN {
            return Err(IdiomError::InvalidLength(chars.len()));
        }

        if chars.iter().any(|c| c.is_whitespace()) {
            return Err(IdiomError::Whitespace);
        }

        let syllables: [Syllable; IDIOM_LEN] =
            syllables
                .try_into()
                .map_err(|rest: Vec<Syllable>| IdiomError::SyllableCount {
                    chars: IDIOM_LEN,
                    syllables: rest.len(),
                })?;

        let mut fixed = [' '; IDIOM_LEN];
        fixed.copy_from_slice(&chars);

        Ok(Self {
            text,
            chars: fixed,
            syllables,
        })
    }

    /// Parse an idiom from its text and a space-separated TONE3 pinyin string
    ///
    /// # Errors
    /// Returns a description of the first syllable or idiom error.
    pub fn from_pinyin(text: &str, pinyin: &str) -> Result<Self, String> {
        let syllables = pinyin
            .split_whitespace()
            .map(Syllable::parse)
            .collect::<Result<Vec<_>, _>>()
            .map_err(|e| format!("{text}: {e}"))?;
        Self::new(text, syllables).map_err(|e| format!("{text}: {e}"))
    }

    #[inline]
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[inline]
    #[must_use]
    pub const fn chars(&self) -> &[char; IDIOM_LEN] {
        &self.chars
    }

    #[inline]
    #[must_use]
    pub const fn syllables(&self) -> &[Syllable; IDIOM_LEN] {
        &self.syllables
    }

    /// Character at a slot (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn char_at(&self, position: usize) -> char {
        self.chars[position]
    }

    /// Syllable at a slot (0-3)
    ///
    /// # Panics
    /// Panics if position >= 4
    #[inline]
    #[must_use]
    pub const fn syllable_at(&self, position: usize) -> &Syllable {
        &self.syllables[position]
    }

    /// Whether `ch` occurs in any slot
    #[inline]
    #[must_use]
    pub fn has_char(&self, ch: char) -> bool {
        self.chars.contains(&ch)
    }

    /// Space-separated TONE3 pinyin, e.g. `yi1 xin1 yi1 yi4`
    #[must_use]
    pub fn pinyin(&self) -> String {
        self.syllables
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(" ")
    }
}

impl fmt::Display for Idiom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn syllables(pinyin: &str) -> Vec<Syllable> {
        pinyin
            .split_whitespace()
            .map(|p| Syllable::parse(p).unwrap())
            .collect()
    }

    #[test]
    fn idiom_creation_valid() {
        let idiom = Idiom::new("画蛇添足", syllables("hua4 she2 tian1 zu2")).unwrap();
        assert_eq!(idiom.text(), "画蛇添足");
        assert_eq!(idiom.chars(), &['画', '蛇', '添', '足']);
        assert_eq!(idiom.syllable_at(1).initial(), "sh");
        assert_eq!(idiom.pinyin(), "hua4 she2 tian1 zu2");
    }

    #[test]
    fn idiom_creation_trims() {
        let idiom = Idiom::new(" 画蛇添足\n", syllables("hua4 she2 tian1 zu2")).unwrap();
        assert_eq!(idiom.text(), "画蛇添足");
    }

    #[test]
    fn idiom_creation_invalid_length() {
        assert!(matches!(
            Idiom::new("画蛇", syllables("hua4 she2")),
            Err(IdiomError::InvalidLength(2))
        ));
        assert!(matches!(
            Idiom::new("画蛇添足了", syllables("hua4 she2 tian1 zu2 le")),
            Err(IdiomError::InvalidLength(5))
        ));
        assert!(matches!(
            Idiom::new("", Vec::new()),
            Err(IdiomError::InvalidLength(0))
        ));
    }

    #[test]
    fn idiom_creation_syllable_mismatch() {
        assert_eq!(
            Idiom::new("画蛇添足", syllables("hua4 she2 tian1")),
            Err(IdiomError::SyllableCount {
                chars: 4,
                syllables: 3
            })
        );
    }

    #[test]
    fn idiom_creation_whitespace() {
        assert_eq!(
            Idiom::new("画 添足", syllables("hua4 she2 tian1 zu2")),
            Err(IdiomError::Whitespace)
        );
    }

    #[test]
    fn idiom_has_char() {
        let idiom = Idiom::from_pinyin("人山人海", "ren2 shan1 ren2 hai3").unwrap();
        assert!(idiom.has_char('人'));
        assert!(idiom.has_char('海'));
        assert!(idiom.has_char('山'));
        assert!(!idiom.has_char('水'));
    }

    #[test]
    fn idiom_from_pinyin_reports_bad_syllable() {
        let err = Idiom::from_pinyin("人山人海", "ren2 shan9 ren2 hai3").unwrap_err();
        assert!(err.contains("人山人海"));
    }

    #[test]
    fn idiom_display() {
        let idiom = Idiom::from_pinyin("人山人海", "ren2 shan1 ren2 hai3").unwrap();
        assert_eq!(format!("{idiom}"), "人山人海");
    }
}
