//! Idiom corpora
//!
//! A corpus is the read-only pool of candidate answers for one game mode.
//! It also acts as the phonetic source for guesses: readings come from the
//! corpus entries, never from a dictionary.

mod embedded;
pub mod loader;
pub mod modes;

pub use embedded::{EmbeddedIdiom, IDIOMS, IDIOMS_COUNT, embedded_corpus};
pub use modes::{GameMode, JI_PRESET, MODES, ModeError, ModeRegistry};

use crate::core::{IDIOM_LEN, Idiom, Syllable};
use rustc_hash::FxHashMap;
use std::collections::BTreeMap;
use std::fmt;

/// One candidate answer: the idiom, its explanation and category tags
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Answer {
    idiom: Idiom,
    explanation: String,
    categories: Vec<String>,
}

impl Answer {
    #[must_use]
    pub fn new(idiom: Idiom, explanation: impl Into<String>, categories: Vec<String>) -> Self {
        Self {
            idiom,
            explanation: explanation.into(),
            categories,
        }
    }

    #[inline]
    #[must_use]
    pub const fn idiom(&self) -> &Idiom {
        &self.idiom
    }

    #[inline]
    #[must_use]
    pub fn word(&self) -> &str {
        self.idiom.text()
    }

    #[inline]
    #[must_use]
    pub fn explanation(&self) -> &str {
        &self.explanation
    }

    #[inline]
    #[must_use]
    pub fn categories(&self) -> &[String] {
        &self.categories
    }

    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c == category)
    }

    /// Text card: word, pinyin, categories and explanation
    #[must_use]
    pub fn card(&self) -> String {
        format!(
            "【{}】\n拼音：{}\n所属范围：{}\n释义：{}",
            self.word(),
            self.idiom.pinyin(),
            self.categories.join("、"),
            self.explanation.replace('；', "\n")
        )
    }
}

/// Error loading a corpus
#[derive(Debug)]
pub enum CorpusError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Empty,
}

impl fmt::Display for CorpusError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "Failed to read corpus: {e}"),
            Self::Json(e) => write!(f, "Failed to parse corpus: {e}"),
            Self::Empty => write!(f, "Corpus contains no usable entries"),
        }
    }
}

impl std::error::Error for CorpusError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Empty => None,
        }
    }
}

impl From<std::io::Error> for CorpusError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for CorpusError {
    fn from(e: serde_json::Error) -> Self {
        Self::Json(e)
    }
}

/// Error pronouncing a guessed word
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PronounceError {
    InvalidLength(usize),
    UnknownReading(char),
}

impl fmt::Display for PronounceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength(len) => {
                write!(f, "Word must be exactly {IDIOM_LEN} characters, got {len}")
            }
            Self::UnknownReading(ch) => write!(f, "No known reading for '{ch}'"),
        }
    }
}

impl std::error::Error for PronounceError {}

/// The candidate answers of one game mode
#[derive(Debug, Clone)]
pub struct Corpus {
    mode: String,
    name: String,
    answers: Vec<Answer>,
    index: FxHashMap<String, usize>,
    readings: FxHashMap<char, Syllable>,
}

impl Corpus {
    /// Build a corpus from answers
    ///
    /// `mode` is the identifier (e.g. `handle`), `name` the display name
    /// (e.g. `成语`). Later duplicates of a word are dropped.
    #[must_use]
    pub fn new(mode: impl Into<String>, name: impl Into<String>, answers: Vec<Answer>) -> Self {
        let mut index = FxHashMap::default();
        let mut readings = FxHashMap::default();
        let mut unique = Vec::with_capacity(answers.len());

        for answer in answers {
            if index.contains_key(answer.word()) {
                tracing::debug!(word = answer.word(), "duplicate corpus entry dropped");
                continue;
            }
            for (&ch, syllable) in answer.idiom().chars().iter().zip(answer.idiom().syllables()) {
                readings.entry(ch).or_insert_with(|| syllable.clone());
            }
            index.insert(answer.word().to_string(), unique.len());
            unique.push(answer);
        }

        Self {
            mode: mode.into(),
            name: name.into(),
            answers: unique,
            index,
            readings,
        }
    }

    #[inline]
    #[must_use]
    pub fn mode(&self) -> &str {
        &self.mode
    }

    #[inline]
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[inline]
    #[must_use]
    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    #[must_use]
    pub fn get(&self, word: &str) -> Option<&Answer> {
        self.index.get(word).map(|&i| &self.answers[i])
    }

    /// Whether `word` is a legal answer of this mode
    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.index.contains_key(word)
    }

    /// Every category tag present in the corpus, sorted
    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        self.category_counts().into_keys().map(str::to_string).collect()
    }

    /// Number of answers carrying each category
    #[must_use]
    pub fn category_counts(&self) -> BTreeMap<&str, usize> {
        let mut counts = BTreeMap::new();
        for answer in &self.answers {
            for category in answer.categories() {
                *counts.entry(category.as_str()).or_insert(0) += 1;
            }
        }
        counts
    }

    /// Reading of a single character, from the first corpus word using it
    #[must_use]
    pub fn reading(&self, ch: char) -> Option<&Syllable> {
        self.readings.get(&ch)
    }

    /// Pair every character of `word` with a syllable
    ///
    /// A corpus word keeps its own readings; any other word is read
    /// character by character.
    ///
    /// # Errors
    /// Returns `PronounceError` if the word is not 4 characters or a
    /// character has no known reading.
    pub fn pronounce(&self, word: &str) -> Result<Idiom, PronounceError> {
        let word = word.trim();
        if let Some(answer) = self.get(word) {
            return Ok(answer.idiom().clone());
        }

        let len = word.chars().count();
        if len != IDIOM_LEN {
            return Err(PronounceError::InvalidLength(len));
        }

        let syllables = word
            .chars()
            .map(|ch| {
                self.reading(ch)
                    .cloned()
                    .ok_or(PronounceError::UnknownReading(ch))
            })
            .collect::<Result<Vec<_>, _>>()?;

        Idiom::new(word, syllables).map_err(|_| PronounceError::InvalidLength(len))
    }

    /// Text card for a corpus word: pinyin, categories and explanation
    #[must_use]
    pub fn describe(&self, word: &str) -> Option<String> {
        self.get(word.trim()).map(Answer::card)
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn answer(word: &str, pinyin: &str, categories: &[&str]) -> Answer {
        Answer::new(
            Idiom::from_pinyin(word, pinyin).unwrap(),
            format!("{word}的释义"),
            categories.iter().map(|c| (*c).to_string()).collect(),
        )
    }

    pub(crate) fn sample_corpus() -> Corpus {
        Corpus::new(
            "handle",
            "成语",
            vec![
                answer("一心一意", "yi1 xin1 yi1 yi4", &["数字", "情感"]),
                answer("三心二意", "san1 xin1 er4 yi4", &["数字", "情感"]),
                answer("画蛇添足", "hua4 she2 tian1 zu2", &["动物", "典故"]),
                answer("守株待兔", "shou3 zhu1 dai4 tu4", &["动物", "典故"]),
                answer("人山人海", "ren2 shan1 ren2 hai3", &["人物", "自然"]),
                answer("山清水秀", "shan1 qing1 shui3 xiu4", &["自然"]),
                answer("温故知新", "wen1 gu4 zhi1 xin1", &["学习"]),
                answer("四面八方", "si4 mian4 ba1 fang1", &[]),
            ],
        )
    }

    #[test]
    fn corpus_lookup() {
        let corpus = sample_corpus();
        assert_eq!(corpus.len(), 8);
        assert!(corpus.contains("画蛇添足"));
        assert!(!corpus.contains("画蛇添手"));
        assert_eq!(corpus.get("人山人海").unwrap().explanation(), "人山人海的释义");
        assert_eq!(corpus.mode(), "handle");
        assert_eq!(corpus.name(), "成语");
    }

    #[test]
    fn corpus_drops_duplicate_words() {
        let corpus = Corpus::new(
            "handle",
            "成语",
            vec![
                answer("一心一意", "yi1 xin1 yi1 yi4", &["数字"]),
                answer("一心一意", "yi1 xin1 yi1 yi4", &["情感"]),
            ],
        );
        assert_eq!(corpus.len(), 1);
        assert_eq!(corpus.get("一心一意").unwrap().categories(), ["数字"]);
    }

    #[test]
    fn corpus_categories_sorted_and_counted() {
        let corpus = sample_corpus();
        let categories = corpus.categories();
        let mut sorted = categories.clone();
        sorted.sort();
        assert_eq!(categories, sorted);
        assert_eq!(categories.len(), 7);

        let counts = corpus.category_counts();
        assert_eq!(counts["数字"], 2);
        assert_eq!(counts["自然"], 2);
        assert_eq!(counts["学习"], 1);
    }

    #[test]
    fn pronounce_corpus_word_uses_entry() {
        let corpus = sample_corpus();
        let idiom = corpus.pronounce("一心一意").unwrap();
        assert_eq!(idiom.pinyin(), "yi1 xin1 yi1 yi4");
    }

    #[test]
    fn pronounce_non_corpus_word_by_character() {
        let corpus = sample_corpus();
        // Every character appears somewhere in the corpus
        let idiom = corpus.pronounce("山心人意").unwrap();
        assert_eq!(idiom.pinyin(), "shan1 xin1 ren2 yi4");
        // 一 first read as yi1
        let idiom = corpus.pronounce("一山一海").unwrap();
        assert_eq!(idiom.pinyin(), "yi1 shan1 yi1 hai3");
    }

    #[test]
    fn pronounce_errors() {
        let corpus = sample_corpus();
        assert_eq!(
            corpus.pronounce("山心人"),
            Err(PronounceError::InvalidLength(3))
        );
        assert_eq!(
            corpus.pronounce("山心人龙"),
            Err(PronounceError::UnknownReading('龙'))
        );
    }

    #[test]
    fn describe_formats_card() {
        let corpus = sample_corpus();
        let card = corpus.describe("画蛇添足").unwrap();
        assert_eq!(
            card,
            "【画蛇添足】\n拼音：hua4 she2 tian1 zu2\n所属范围：动物、典故\n释义：画蛇添足的释义"
        );
        assert!(corpus.describe("不存在的").is_none());
    }
}
