//! Corpus loading utilities
//!
//! Reads corpora in the `answers.json` layout: a JSON array of objects with
//! `word`, `explanation`, an optional `category` list and a `pinyin` list of
//! TONE3 syllables.

use super::{Answer, Corpus, CorpusError};
use crate::core::Idiom;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct RawAnswer {
    word: String,
    #[serde(default)]
    explanation: String,
    #[serde(default, rename = "category")]
    categories: Vec<String>,
    #[serde(default)]
    pinyin: Vec<String>,
}

/// Load a corpus from a JSON file
///
/// Entries that are not four characters, or whose pinyin does not parse or
/// does not match the word, are skipped.
///
/// # Errors
///
/// Returns `CorpusError` if the file cannot be read, is not valid JSON, or
/// has no usable entries.
///
/// # Examples
/// ```no_run
/// use handle_wordle::corpus::loader::load_from_file;
///
/// let corpus = load_from_file("data/answers_arknights.json", "arkdle", "舟语").unwrap();
/// println!("Loaded {} {}", corpus.len(), corpus.name());
/// ```
pub fn load_from_file<P: AsRef<Path>>(
    path: P,
    mode: &str,
    name: &str,
) -> Result<Corpus, CorpusError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path)?;
    let corpus = from_json_str(&content, mode, name)?;
    tracing::info!(
        path = %path.display(),
        mode,
        answers = corpus.len(),
        "corpus loaded"
    );
    Ok(corpus)
}

/// Parse a corpus from JSON text
///
/// # Errors
///
/// Returns `CorpusError::Json` on malformed JSON and `CorpusError::Empty`
/// when no entry survives validation.
///
/// # Examples
/// ```
/// use handle_wordle::corpus::loader::from_json_str;
///
/// let json = r#"[{"word": "一心一意", "explanation": "专心", "category": ["数字"],
///                 "pinyin": ["yi1", "xin1", "yi1", "yi4"]}]"#;
/// let corpus = from_json_str(json, "handle", "成语").unwrap();
/// assert!(corpus.contains("一心一意"));
/// ```
pub fn from_json_str(json: &str, mode: &str, name: &str) -> Result<Corpus, CorpusError> {
    let raw: Vec<RawAnswer> = serde_json::from_str(json)?;
    let total = raw.len();

    let answers: Vec<Answer> = raw.into_iter().filter_map(to_answer).collect();

    if answers.is_empty() {
        return Err(CorpusError::Empty);
    }
    if answers.len() < total {
        tracing::warn!(
            skipped = total - answers.len(),
            mode,
            "corpus entries skipped"
        );
    }

    Ok(Corpus::new(mode, name, answers))
}

fn to_answer(raw: RawAnswer) -> Option<Answer> {
    let pinyin = raw.pinyin.join(" ");
    match Idiom::from_pinyin(&raw.word, &pinyin) {
        Ok(idiom) => Some(Answer::new(idiom, raw.explanation, raw.categories)),
        Err(e) => {
            tracing::warn!(error = %e, "skipping corpus entry");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_json_parses_entries() {
        let json = r#"[
            {"word": "守株待兔", "explanation": "死守经验；不知变通", "category": ["动物", "典故"],
             "pinyin": ["shou3", "zhu1", "dai4", "tu4"]},
            {"word": "人山人海", "explanation": "人多", "pinyin": ["ren2", "shan1", "ren2", "hai3"]}
        ]"#;
        let corpus = from_json_str(json, "handle", "成语").unwrap();

        assert_eq!(corpus.len(), 2);
        assert_eq!(
            corpus.get("守株待兔").unwrap().categories(),
            ["动物", "典故"]
        );
        assert!(corpus.get("人山人海").unwrap().categories().is_empty());
        assert_eq!(
            corpus.describe("守株待兔").unwrap().lines().last(),
            Some("不知变通")
        );
    }

    #[test]
    fn from_json_skips_invalid_entries() {
        let json = r#"[
            {"word": "守株待兔", "explanation": "", "pinyin": ["shou3", "zhu1", "dai4", "tu4"]},
            {"word": "待兔", "explanation": "", "pinyin": ["dai4", "tu4"]},
            {"word": "人山人海", "explanation": "", "pinyin": ["ren2", "shan1"]},
            {"word": "山清水秀", "explanation": "", "pinyin": ["shan1", "qing9", "shui3", "xiu4"]}
        ]"#;
        let corpus = from_json_str(json, "handle", "成语").unwrap();

        assert_eq!(corpus.len(), 1);
        assert!(corpus.contains("守株待兔"));
    }

    #[test]
    fn from_json_empty_is_error() {
        assert!(matches!(
            from_json_str("[]", "handle", "成语"),
            Err(CorpusError::Empty)
        ));
        let json = r#"[{"word": "待兔", "pinyin": ["dai4", "tu4"]}]"#;
        assert!(matches!(
            from_json_str(json, "handle", "成语"),
            Err(CorpusError::Empty)
        ));
    }

    #[test]
    fn from_json_malformed_is_error() {
        assert!(matches!(
            from_json_str("{not json", "handle", "成语"),
            Err(CorpusError::Json(_))
        ));
        assert!(matches!(
            from_json_str(r#"[{"explanation": "no word"}]"#, "handle", "成语"),
            Err(CorpusError::Json(_))
        ));
    }

    #[test]
    fn load_missing_file_is_io_error() {
        assert!(matches!(
            load_from_file("/nonexistent/answers.json", "handle", "成语"),
            Err(CorpusError::Io(_))
        ));
    }
}
