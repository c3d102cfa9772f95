use serde::Serialize;
use std::cmp::Ordering;

use crate::tfidf::{TermVector, TfIdfIndex};
use crate::{Error, Escalation, Result};

/// Default minimum cosine score for a record to be reported as similar.
pub const DEFAULT_THRESHOLD: f64 = 0.15;
/// Default maximum number of similar records returned.
pub const DEFAULT_MAX_RESULTS: usize = 2;

/// Knobs for [`rank_similar`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimilarityConfig {
    /// Minimum cosine score, within [0, 1].
    pub threshold: f64,
    /// Result list cap.
    pub max_results: usize,
}

impl Default for SimilarityConfig {
    fn default() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            max_results: DEFAULT_MAX_RESULTS,
        }
    }
}

impl SimilarityConfig {
    fn validate(&self) -> Result<()> {
        if !self.threshold.is_finite() || !(0.0..=1.0).contains(&self.threshold) {
            return Err(Error::InvalidInput(format!(
                "similarity threshold must be within [0, 1], got {}",
                self.threshold
            )));
        }
        Ok(())
    }
}

/// A record paired with its similarity score against the query target.
#[derive(Debug, Clone, Serialize)]
pub struct ScoredEscalation {
    pub escalation: Escalation,
    pub score: f64,
}

/// Cosine similarity of two sparse tf-idf vectors.
///
/// Returns 0.0 whenever either magnitude is zero, which covers documents with
/// no extractable terms.
#[must_use]
pub fn cosine_similarity(a: &TermVector, b: &TermVector) -> f64 {
    let mut dot = 0.0;
    for (term, weight_a) in a.iter() {
        if let Some(weight_b) = b.get(term) {
            dot += weight_a * weight_b;
        }
    }

    let magnitude_a = a.values().map(|w| w * w).sum::<f64>().sqrt();
    let magnitude_b = b.values().map(|w| w * w).sum::<f64>().sqrt();

    if magnitude_a == 0.0 || magnitude_b == 0.0 {
        return 0.0;
    }
    dot / (magnitude_a * magnitude_b)
}

/// Rank every other record in the corpus by cosine similarity to the target.
///
/// The TF-IDF index is rebuilt from the full corpus on every call; there is
/// no incremental maintenance. The target itself is skipped, so it never
/// appears in its own results. Scores below `config.threshold` are dropped,
/// the survivors are sorted descending (stable, so ties keep corpus order),
/// capped at `config.max_results` and rounded to 3 decimal places.
///
/// # Errors
///
/// [`Error::NotFound`] when `target_id` is not in the corpus,
/// [`Error::InvalidInput`] when the threshold is outside [0, 1].
pub fn rank_similar(
    corpus: &[Escalation],
    target_id: &str,
    config: &SimilarityConfig,
) -> Result<Vec<ScoredEscalation>> {
    config.validate()?;

    let target = corpus
        .iter()
        .position(|e| e.id == target_id)
        .ok_or_else(|| Error::NotFound(target_id.to_string()))?;

    let index = TfIdfIndex::from_corpus(corpus);
    let target_vector = index.term_vector(target);

    let mut similarities: Vec<(usize, f64)> = (0..corpus.len())
        .filter(|&i| i != target)
        .map(|i| (i, cosine_similarity(&target_vector, &index.term_vector(i))))
        .filter(|&(_, score)| score >= config.threshold)
        .collect();

    similarities.sort_by(|a, b| b.1.partial_cmp(&a.1).unwrap_or(Ordering::Equal));
    similarities.truncate(config.max_results);

    Ok(similarities
        .into_iter()
        .map(|(i, score)| ScoredEscalation {
            escalation: corpus[i].clone(),
            score: (score * 1000.0).round() / 1000.0,
        })
        .collect())
}
