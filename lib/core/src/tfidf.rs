// TF-IDF index rebuilt from the full corpus before each similarity query
use ahash::RandomState;
use std::collections::HashMap;

use crate::document::build_document;
use crate::Escalation;

/// Sparse term -> weight vector for one document.
///
/// Valid only for the corpus snapshot it was built from.
pub type TermVector = HashMap<String, f64, RandomState>;

#[derive(Debug, Clone, Default)]
pub struct TfIdfIndex {
    // per-document raw term counts, in corpus order
    doc_terms: Vec<HashMap<String, u32, RandomState>>,
    // term -> number of documents containing it
    doc_freqs: HashMap<String, u32, RandomState>,
}

impl TfIdfIndex {
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Tokenize text for indexing: lowercase, split on any non-alphanumeric
    /// character. No stopword removal, no stemming, no length filtering.
    #[inline]
    pub fn tokenize(text: &str) -> Vec<String> {
        text.to_lowercase()
            .split(|c: char| !c.is_alphanumeric())
            .filter(|s| !s.is_empty())
            .map(str::to_string)
            .collect()
    }

    /// Build an index over the derived document of every record, in corpus
    /// order. Document i corresponds to `corpus[i]`.
    #[must_use]
    pub fn from_corpus(corpus: &[Escalation]) -> Self {
        let mut index = Self::new();
        for escalation in corpus {
            index.add_document(&build_document(escalation));
        }
        index
    }

    pub fn add_document(&mut self, text: &str) {
        let mut term_freqs: HashMap<String, u32, RandomState> = HashMap::default();
        for token in Self::tokenize(text) {
            *term_freqs.entry(token).or_insert(0) += 1;
        }

        for term in term_freqs.keys() {
            *self.doc_freqs.entry(term.clone()).or_insert(0) += 1;
        }

        self.doc_terms.push(term_freqs);
    }

    /// Inverse document frequency: `1 + ln(N / (1 + df))`.
    ///
    /// The `1 + df` denominator keeps the log finite for every indexed term;
    /// a term absent from all documents scores 0 and never reaches a vector.
    #[must_use]
    pub fn idf(&self, term: &str) -> f64 {
        let df = self.doc_freqs.get(term).copied().unwrap_or(0);
        if df == 0 {
            return 0.0;
        }
        1.0 + (self.doc_terms.len() as f64 / (1.0 + f64::from(df))).ln()
    }

    /// The full tf-idf weight vector of document `index`: every term with a
    /// nonzero weight mapped to `tf * idf`. Out-of-range indexes yield an
    /// empty vector.
    #[must_use]
    pub fn term_vector(&self, index: usize) -> TermVector {
        let Some(term_freqs) = self.doc_terms.get(index) else {
            return TermVector::default();
        };

        term_freqs
            .iter()
            .map(|(term, &tf)| (term.clone(), f64::from(tf) * self.idf(term)))
            .filter(|(_, weight)| *weight != 0.0)
            .collect()
    }

    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.doc_terms.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.doc_terms.is_empty()
    }
}
