//! Idiom lookup command
//!
//! Prints the answer card for a word in the corpus, or in the corpus of
//! any mode named by its word name (`查询舟语<word>`).

use crate::core::IDIOM_LEN;
use crate::corpus::modes::mode_by_name;
use crate::corpus::{Corpus, ModeRegistry};

/// Prefix of an in-game lookup request
const QUERY_PREFIX: &str = "查询";

/// Look up `word` and render its card
///
/// # Errors
///
/// Returns an error if:
/// - The word is not four characters long
/// - The word is not in the corpus
pub fn query_word(corpus: &Corpus, word: &str) -> Result<String, String> {
    let word = word.trim();
    let len = word.chars().count();
    if len != IDIOM_LEN {
        return Err(format!("请输入{IDIOM_LEN}个字的{}，而不是{len}个字", corpus.name()));
    }

    corpus
        .describe(word)
        .ok_or_else(|| format!("你确定这是个四字{}吗？", corpus.name()))
}

/// Split `查询<name><word>` into a mode's word name and the word
///
/// Returns `None` unless the name belongs to a known mode and a word
/// follows it.
#[must_use]
pub fn parse_query(line: &str) -> Option<(&str, &str)> {
    let rest = line.trim().strip_prefix(QUERY_PREFIX)?;
    let split = rest.char_indices().nth(2).map(|(i, _)| i)?;
    let (name, word) = rest.split_at(split);
    let word = word.trim();
    (mode_by_name(name).is_some() && !word.is_empty()).then_some((name, word))
}

/// Look up `word` in the mode whose words are called `name`
///
/// # Errors
///
/// Returns an error if no mode uses `name`, its corpus cannot be loaded,
/// or [`query_word`] rejects the word.
pub fn query_in_mode(modes: &ModeRegistry, name: &str, word: &str) -> Result<String, String> {
    let corpus = modes.load_by_name(name).map_err(|e| e.to_string())?;
    query_word(&corpus, word)
}
