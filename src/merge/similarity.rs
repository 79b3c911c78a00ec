/*!
 * Text similarity scoring for the similar-text heuristic.
 *
 * The merge only consumes a score and compares it against a fixed
 * threshold; any scorer can be plugged in through `SimilarityScorer`.
 */

/// Minimum score for two source texts to be considered revisions of the
/// same message.
pub const TEXT_SIMILARITY_THRESHOLD: f32 = 0.6;

/// Scores how similar two strings are. Higher means more similar.
pub trait SimilarityScorer {
    fn score(&self, a: &str, b: &str) -> f32;

    /// True if `a` and `b` reach `TEXT_SIMILARITY_THRESHOLD`.
    fn is_similar(&self, a: &str, b: &str) -> bool {
        self.score(a, b) >= TEXT_SIMILARITY_THRESHOLD
    }
}

/// Case-insensitive normalized Levenshtein similarity in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LevenshteinScorer;

impl SimilarityScorer for LevenshteinScorer {
    fn score(&self, a: &str, b: &str) -> f32 {
        let a: Vec<char> = a.to_lowercase().chars().collect();
        let b: Vec<char> = b.to_lowercase().chars().collect();
        let longest = a.len().max(b.len());
        if longest == 0 {
            return 1.0;
        }
        if a.is_empty() || b.is_empty() {
            return 0.0;
        }

        // costs[j]: edits turning the prefix of `a` seen so far into b[..j]
        let mut costs: Vec<usize> = (0..=b.len()).collect();
        for (i, &ca) in a.iter().enumerate() {
            let mut diagonal = costs[0];
            costs[0] = i + 1;
            for (j, &cb) in b.iter().enumerate() {
                let substitution = diagonal + usize::from(ca != cb);
                diagonal = costs[j + 1];
                costs[j + 1] = substitution.min(costs[j] + 1).min(diagonal + 1);
            }
        }

        1.0 - costs[b.len()] as f32 / longest as f32
    }
}

impl<F> SimilarityScorer for F
where
    F: Fn(&str, &str) -> f32,
{
    fn score(&self, a: &str, b: &str) -> f32 {
        self(a, b)
    }
}
