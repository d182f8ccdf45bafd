//! Embedded sample corpus
//!
//! Idioms compiled into the binary at build time.

use super::{Answer, Corpus};
use crate::core::Idiom;

/// `(word, pinyin, categories, explanation)`
pub type EmbeddedIdiom = (&'static str, &'static str, &'static str, &'static str);

// Include generated idiom list from build script
include!(concat!(env!("OUT_DIR"), "/idioms.rs"));

/// The embedded idiom corpus (`handle` mode, `成语`)
///
/// Rows that fail to parse are skipped with a warning.
#[must_use]
pub fn embedded_corpus() -> Corpus {
    let answers = IDIOMS
        .iter()
        .filter_map(|&(word, pinyin, categories, explanation)| {
            match Idiom::from_pinyin(word, pinyin) {
                Ok(idiom) => Some(Answer::new(
                    idiom,
                    explanation,
                    categories
                        .split('、')
                        .map(str::trim)
                        .filter(|c| !c.is_empty())
                        .map(str::to_string)
                        .collect(),
                )),
                Err(e) => {
                    tracing::warn!(error = %e, "skipping embedded idiom");
                    None
                }
            }
        })
        .collect();

    Corpus::new("handle", "成语", answers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn idioms_count_matches_const() {
        assert_eq!(IDIOMS.len(), IDIOMS_COUNT);
    }

    #[test]
    fn embedded_rows_all_parse() {
        let corpus = embedded_corpus();
        assert_eq!(corpus.len(), IDIOMS_COUNT);
        assert!(corpus.answers().iter().all(|a| !a.categories().is_empty()));
    }

    #[test]
    fn embedded_corpus_has_enough_categories_to_sample() {
        let corpus = embedded_corpus();
        assert!(corpus.categories().len() >= 5);
    }

    #[test]
    fn embedded_known_entry() {
        let corpus = embedded_corpus();
        let answer = corpus.get("守株待兔").unwrap();
        assert_eq!(answer.idiom().pinyin(), "shou3 zhu1 dai4 tu4");
        assert!(answer.has_category("典故"));
    }
}
