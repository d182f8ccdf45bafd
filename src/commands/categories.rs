//! Category listing command

use crate::corpus::Corpus;

/// Categories of the corpus with their answer counts, largest first
///
/// Ties keep name order. Answers with several categories count toward each.
#[must_use]
pub fn list_categories(corpus: &Corpus) -> Vec<(String, usize)> {
    let mut counts: Vec<(String, usize)> = corpus
        .category_counts()
        .into_iter()
        .map(|(category, count)| (category.to_string(), count))
        .collect();
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::corpus::tests::sample_corpus;

    #[test]
    fn counts_sorted_descending() {
        let counts = list_categories(&sample_corpus());
        assert_eq!(counts.len(), 7);
        assert!(counts.windows(2).all(|w| w[0].1 >= w[1].1));

        let total: usize = counts.iter().map(|(_, n)| n).sum();
        assert!(total >= sample_corpus().len() - 1);
    }

    #[test]
    fn empty_corpus_has_no_categories() {
        let corpus = Corpus::new("handle", "成语", Vec::new());
        assert!(list_categories(&corpus).is_empty());
    }
}
