//! Article sufficiency detection.
//!
//! Boilerplate-only pages (link farms, navigation shells, cookie walls)
//! produce many short chunks; genuine articles produce a few long ones.
//! Summing only the chunks that clear a minimum length separates the two
//! surprisingly well.

use crate::chunk::Chunk;

/// Decides whether a chunk sequence carries enough real content to count
/// as an article.
#[derive(Debug, Clone)]
pub struct ArticleDetector {
    /// Minimum total characters across qualifying chunks.
    ///
    /// Default: `1000`
    pub min_article_length: usize,

    /// Minimum length for a chunk to qualify toward the sum.
    ///
    /// Default: `50`
    pub min_chunk_length: usize,
}

impl Default for ArticleDetector {
    fn default() -> Self {
        Self {
            min_article_length: 1000,
            min_chunk_length: 50,
        }
    }
}

impl ArticleDetector {
    /// Create a detector with explicit thresholds.
    #[must_use]
    pub fn new(min_article_length: usize, min_chunk_length: usize) -> Self {
        Self {
            min_article_length,
            min_chunk_length,
        }
    }

    /// True iff the qualifying chunks together reach the article minimum.
    ///
    /// Both comparisons are inclusive. An empty sequence is never an
    /// article. Pure function of the input; no state, no error conditions.
    #[must_use]
    pub fn is_article(&self, chunks: &[Chunk]) -> bool {
        let qualifying_characters: usize = chunks
            .iter()
            .map(Chunk::len)
            .filter(|&length| length >= self.min_chunk_length)
            .sum();
        qualifying_characters >= self.min_article_length
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_sequence_is_not_an_article() {
        assert!(!ArticleDetector::default().is_article(&[]));
    }

    #[test]
    fn short_chunks_do_not_qualify() {
        let detector = ArticleDetector::new(5, 3);
        assert!(!detector.is_article(&[Chunk::new("bu"), Chunk::new("ba")]));
    }

    #[test]
    fn qualifying_sum_below_article_minimum() {
        let detector = ArticleDetector::new(5, 1);
        assert!(!detector.is_article(&[Chunk::new("bu"), Chunk::new("ba")]));
    }

    #[test]
    fn qualifying_sum_reaches_article_minimum() {
        let detector = ArticleDetector::new(5, 2);
        assert!(detector.is_article(&[Chunk::new("buz"), Chunk::new("baz")]));
    }

    #[test]
    fn partially_qualifying_chunks() {
        let detector = ArticleDetector::new(5, 3);
        assert!(detector.is_article(&[Chunk::new("batzen"), Chunk::new("ba")]));
    }

    #[test]
    fn chunk_length_comparison_is_inclusive() {
        let detector = ArticleDetector::new(1, 2);
        assert!(detector.is_article(&[Chunk::new("bu"), Chunk::new("ba")]));
    }

    #[test]
    fn article_length_comparison_is_inclusive() {
        let detector = ArticleDetector::new(4, 0);
        assert!(detector.is_article(&[Chunk::new("bu"), Chunk::new("ba")]));
    }

    #[test]
    fn default_article_length_boundary() {
        let detector = ArticleDetector {
            min_chunk_length: 0,
            ..ArticleDetector::default()
        };
        assert!(detector.is_article(&[Chunk::new("b".repeat(1000))]));
        assert!(!detector.is_article(&[Chunk::new("b".repeat(999))]));
    }

    #[test]
    fn default_chunk_length_boundary() {
        let detector = ArticleDetector {
            min_article_length: 1,
            ..ArticleDetector::default()
        };
        assert!(detector.is_article(&[Chunk::new("b".repeat(50))]));
        assert!(!detector.is_article(&[Chunk::new("b".repeat(49))]));
    }

    #[test]
    fn adding_a_qualifying_chunk_never_flips_true_to_false() {
        let detector = ArticleDetector::new(6, 3);
        let mut chunks = vec![Chunk::new("abc"), Chunk::new("def")];
        assert!(detector.is_article(&chunks));
        chunks.push(Chunk::new("ghi"));
        assert!(detector.is_article(&chunks));
    }
}
