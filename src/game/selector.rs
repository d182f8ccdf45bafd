//! Secret answer selection
//!
//! Each round samples a few categories and draws the answer from every
//! corpus entry tagged with at least one of them.

use super::{GameError, MAX_CATEGORY_COUNT, MIN_CATEGORY_COUNT};
use crate::corpus::{Answer, Corpus};
use rand::Rng;
use rand::prelude::IndexedRandom;

/// A chosen answer and the categories its pool was built from
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub answer: Answer,
    /// Sampled categories, empty when the pool was the whole corpus
    pub categories: Vec<String>,
}

/// Pick a secret answer
///
/// `allowed` restricts the categories that may be sampled; when empty every
/// category of the corpus is available. Between 3 and 5 categories are
/// sampled (never more than are available), the pool is every answer
/// carrying any of them, and the answer is drawn uniformly from the pool.
/// An empty pool falls back to the whole corpus and reports no categories.
///
/// # Errors
///
/// Returns `GameError::EmptyCorpus` if the corpus has no answers.
///
/// # Examples
/// ```
/// use handle_wordle::corpus::embedded_corpus;
/// use handle_wordle::game::select;
/// use rand::SeedableRng;
/// use rand::rngs::StdRng;
///
/// let corpus = embedded_corpus();
/// let mut rng = StdRng::seed_from_u64(7);
/// let selection = select(&corpus, &[], &mut rng).unwrap();
/// assert!(corpus.contains(selection.answer.word()));
/// ```
pub fn select<R: Rng + ?Sized>(
    corpus: &Corpus,
    allowed: &[String],
    rng: &mut R,
) -> Result<Selection, GameError> {
    if corpus.is_empty() {
        return Err(GameError::EmptyCorpus);
    }

    let available: Vec<String> = if allowed.is_empty() {
        corpus.categories()
    } else {
        let mut allowed = allowed.to_vec();
        allowed.sort();
        allowed.dedup();
        allowed
    };

    let count = rng
        .random_range(MIN_CATEGORY_COUNT..=MAX_CATEGORY_COUNT)
        .min(available.len());
    let categories: Vec<String> = available.choose_multiple(rng, count).cloned().collect();

    let pool: Vec<&Answer> = corpus
        .answers()
        .iter()
        .filter(|answer| categories.iter().any(|c| answer.has_category(c)))
        .collect();

    let (answer, categories) = if let Some(&answer) = pool.choose(rng) {
        (answer, categories)
    } else {
        tracing::debug!(?categories, "empty category pool, drawing from whole corpus");
        let answer = corpus
            .answers()
            .choose(rng)
            .ok_or(GameError::EmptyCorpus)?;
        (answer, Vec::new())
    };

    tracing::debug!(word = answer.word(), ?categories, "answer selected");

    Ok(Selection {
        answer: answer.clone(),
        categories,
    })
}
