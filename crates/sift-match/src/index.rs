//! TF-IDF lexical index.
//!
//! The index is fit once over a corpus of resumes and then scores query texts against every
//! document by cosine similarity. Vectors are sparse: each document stores only the
//! vocabulary columns it actually uses.

use std::collections::HashMap;

use sift_config::{DEFAULT_MAX_FEATURES, DEFAULT_NGRAM_RANGE, RankingSettings};
use tracing::debug;

use crate::{MatchError, text::analyze};

/// Sparse vector as `(column, weight)` pairs sorted by column.
type SparseVector = Vec<(usize, f64)>;

/// Parameters controlling how an index is fit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndexOptions {
    /// Maximum vocabulary size; the most frequent terms across the corpus are kept.
    pub max_features: usize,
    /// Inclusive range of n-gram sizes.
    pub ngram_range: (usize, usize),
    /// Use `1 + ln(tf)` instead of raw term counts.
    pub sublinear_tf: bool,
}

impl Default for IndexOptions {
    fn default() -> Self {
        Self {
            max_features: DEFAULT_MAX_FEATURES,
            ngram_range: DEFAULT_NGRAM_RANGE,
            sublinear_tf: true,
        }
    }
}

impl From<&RankingSettings> for IndexOptions {
    fn from(settings: &RankingSettings) -> Self {
        Self {
            max_features: settings.max_features,
            ngram_range: settings.ngram_range,
            sublinear_tf: settings.sublinear_tf,
        }
    }
}

/// A TF-IDF index fit over a fixed corpus.
#[derive(Debug, Clone)]
pub struct LexicalIndex {
    /// Document ids, in the order given to [`LexicalIndex::build`].
    ids: Vec<String>,
    /// Term to column.
    vocabulary: HashMap<String, usize>,
    /// Inverse document frequency per column.
    idf: Vec<f64>,
    /// L2-normalized document vectors, aligned with `ids`.
    documents: Vec<SparseVector>,
    /// Options the index was fit with.
    options: IndexOptions,
}

impl LexicalIndex {
    /// Fits an index over parallel `ids` and `texts`.
    ///
    /// The vocabulary keeps the `max_features` terms with the highest total count across the
    /// corpus, breaking ties alphabetically. IDF is smoothed as `ln((1 + N) / (1 + df)) + 1`.
    pub fn build<S, T>(ids: &[S], texts: &[T], options: &IndexOptions) -> Result<Self, MatchError>
    where
        S: AsRef<str>,
        T: AsRef<str>,
    {
        if ids.len() != texts.len() {
            return Err(MatchError::LengthMismatch {
                ids: ids.len(),
                texts: texts.len(),
            });
        }
        if texts.is_empty() {
            return Err(MatchError::EmptyCorpus);
        }

        let counts: Vec<HashMap<String, usize>> = texts
            .iter()
            .map(|text| term_counts(text.as_ref(), options.ngram_range))
            .collect();

        let mut corpus_freq: HashMap<&str, usize> = HashMap::new();
        let mut doc_freq: HashMap<&str, usize> = HashMap::new();
        for doc in &counts {
            for (term, count) in doc {
                *corpus_freq.entry(term).or_default() += count;
                *doc_freq.entry(term).or_default() += 1;
            }
        }

        let vocabulary = select_vocabulary(&corpus_freq, options.max_features);

        let n_docs = texts.len() as f64;
        let mut idf = vec![0.0; vocabulary.len()];
        for (term, &column) in &vocabulary {
            let df = doc_freq.get(term.as_str()).copied().unwrap_or(0) as f64;
            idf[column] = ((1.0 + n_docs) / (1.0 + df)).ln() + 1.0;
        }

        let mut index = Self {
            ids: ids.iter().map(|id| id.as_ref().to_string()).collect(),
            vocabulary,
            idf,
            documents: Vec::with_capacity(counts.len()),
            options: *options,
        };
        index.documents = counts.iter().map(|doc| index.vectorize(doc)).collect();

        debug!(
            documents = index.len(),
            vocabulary = index.vocabulary_len(),
            "built lexical index"
        );
        Ok(index)
    }

    /// Scores each query text against every document.
    ///
    /// Returns one row per query; each row holds one cosine similarity per document, in
    /// document order. Terms outside the fitted vocabulary contribute nothing, so a query with
    /// no known terms scores zero everywhere.
    pub fn query<T: AsRef<str>>(&self, texts: &[T]) -> Vec<Vec<f64>> {
        texts
            .iter()
            .map(|text| {
                let counts = term_counts(text.as_ref(), self.options.ngram_range);
                let query = self.vectorize(&counts);
                let mut dense = vec![0.0; self.vocabulary.len()];
                for &(column, weight) in &query {
                    dense[column] = weight;
                }
                self.documents
                    .iter()
                    .map(|doc| {
                        // Fold from +0.0: an empty f64 sum is -0.0
                        doc.iter()
                            .fold(0.0, |acc, &(column, w)| w.mul_add(dense[column], acc))
                    })
                    .collect()
            })
            .collect()
    }

    /// Document ids in index order.
    pub fn ids(&self) -> &[String] {
        &self.ids
    }

    /// Number of indexed documents.
    pub fn len(&self) -> usize {
        self.ids.len()
    }

    /// Whether the index holds no documents. Always false for a successfully built index.
    pub fn is_empty(&self) -> bool {
        self.ids.is_empty()
    }

    /// Number of terms in the fitted vocabulary.
    pub fn vocabulary_len(&self) -> usize {
        self.vocabulary.len()
    }

    /// Inverse document frequency of a term, if it is in the vocabulary.
    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&column| self.idf[column])
    }

    /// Weighted, L2-normalized vector for a bag of term counts.
    fn vectorize(&self, counts: &HashMap<String, usize>) -> SparseVector {
        let mut vector: SparseVector = counts
            .iter()
            .filter_map(|(term, &count)| {
                let column = *self.vocabulary.get(term)?;
                Some((column, self.term_weight(count) * self.idf[column]))
            })
            .collect();
        vector.sort_unstable_by_key(|&(column, _)| column);

        let norm = vector.iter().map(|(_, w)| w * w).sum::<f64>().sqrt();
        if norm > 0.0 {
            for (_, w) in &mut vector {
                *w /= norm;
            }
        }
        vector
    }

    /// Term-frequency component of a weight.
    fn term_weight(&self, count: usize) -> f64 {
        let tf = count as f64;
        if self.options.sublinear_tf {
            1.0 + tf.ln()
        } else {
            tf
        }
    }
}

/// Counts the terms of one text.
fn term_counts(text: &str, ngram_range: (usize, usize)) -> HashMap<String, usize> {
    let mut counts = HashMap::new();
    for term in analyze(text, ngram_range) {
        *counts.entry(term).or_default() += 1;
    }
    counts
}

/// Keeps the `max_features` most frequent terms and assigns columns alphabetically.
fn select_vocabulary(corpus_freq: &HashMap<&str, usize>, max_features: usize) -> HashMap<String, usize> {
    let mut ranked: Vec<(&str, usize)> = corpus_freq.iter().map(|(&t, &f)| (t, f)).collect();
    ranked.sort_unstable_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
    ranked.truncate(max_features);

    let mut kept: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
    kept.sort_unstable();
    kept.into_iter()
        .enumerate()
        .map(|(column, term)| (term.to_string(), column))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    fn unigrams() -> IndexOptions {
        IndexOptions {
            ngram_range: (1, 1),
            ..IndexOptions::default()
        }
    }

    fn norm(v: &SparseVector) -> f64 {
        v.iter().map(|(_, w)| w * w).sum::<f64>().sqrt()
    }

    #[test]
    fn test_empty_corpus() {
        let ids: [&str; 0] = [];
        let result = LexicalIndex::build(&ids, &ids, &IndexOptions::default());
        assert_eq!(result.unwrap_err(), MatchError::EmptyCorpus);
    }

    #[test]
    fn test_length_mismatch() {
        let result = LexicalIndex::build(&["a", "b"], &["text"], &IndexOptions::default());
        assert_eq!(
            result.unwrap_err(),
            MatchError::LengthMismatch { ids: 2, texts: 1 }
        );
    }

    #[test]
    fn test_idf_formula() {
        let index = LexicalIndex::build(
            &["a", "b", "c"],
            &["python teaching", "python research", "python"],
            &unigrams(),
        )
        .unwrap();

        // N = 3; python in all three, teaching in one
        let expected_python = (4.0_f64 / 4.0).ln() + 1.0;
        let expected_teaching = (4.0_f64 / 2.0).ln() + 1.0;
        assert!((index.idf("python").unwrap() - expected_python).abs() < EPS);
        assert!((index.idf("teaching").unwrap() - expected_teaching).abs() < EPS);
        assert!(index.idf("missing").is_none());
    }

    #[test]
    fn test_document_vectors_unit_norm() {
        let index = LexicalIndex::build(
            &["a", "b", "c"],
            &[
                "machine learning machine learning data",
                "teaching statistics",
                "x",
            ],
            &IndexOptions::default(),
        )
        .unwrap();

        assert!((norm(&index.documents[0]) - 1.0).abs() < EPS);
        assert!((norm(&index.documents[1]) - 1.0).abs() < EPS);
        // No terms survive tokenization: the vector stays zero
        assert!(index.documents[2].is_empty());
    }

    #[test]
    fn test_unknown_query_terms_score_zero() {
        let index =
            LexicalIndex::build(&["a", "b"], &["algorithms", "databases"], &unigrams()).unwrap();
        let sims = index.query(&["quantum chemistry"]);
        assert_eq!(sims, vec![vec![0.0, 0.0]]);
    }

    #[test]
    fn test_query_identical_document_scores_one() {
        let index = LexicalIndex::build(
            &["a", "b"],
            &["distributed systems research", "organic chemistry"],
            &IndexOptions::default(),
        )
        .unwrap();
        let sims = index.query(&["distributed systems research"]);
        assert!((sims[0][0] - 1.0).abs() < EPS);
        assert!(sims[0][1].abs() < EPS);
    }

    #[test]
    fn test_query_rows_align_with_ids() {
        let index = LexicalIndex::build(
            &["first", "second"],
            &["cryptography", "robotics"],
            &unigrams(),
        )
        .unwrap();
        let sims = index.query(&["robotics", "cryptography"]);
        assert_eq!(index.ids(), ["first".to_string(), "second".to_string()]);
        assert!(sims[0][1] > sims[0][0]);
        assert!(sims[1][0] > sims[1][1]);
    }

    #[test]
    fn test_vocabulary_cap_keeps_most_frequent() {
        let index = LexicalIndex::build(
            &["a", "b"],
            &["alpha alpha beta gamma", "alpha beta delta"],
            &IndexOptions {
                max_features: 2,
                ..unigrams()
            },
        )
        .unwrap();

        assert_eq!(index.vocabulary_len(), 2);
        assert!(index.idf("alpha").is_some());
        assert!(index.idf("beta").is_some());
        assert!(index.idf("gamma").is_none());
    }

    #[test]
    fn test_vocabulary_ties_break_alphabetically() {
        let index = LexicalIndex::build(
            &["a"],
            &["zeta eta theta"],
            &IndexOptions {
                max_features: 2,
                ..unigrams()
            },
        )
        .unwrap();
        assert!(index.idf("eta").is_some());
        assert!(index.idf("theta").is_some());
        assert!(index.idf("zeta").is_none());
    }

    #[test]
    fn test_bigrams_indexed() {
        let index = LexicalIndex::build(&["a"], &["machine learning"], &IndexOptions::default())
            .unwrap();
        assert_eq!(index.vocabulary_len(), 3);
        assert!(index.idf("machine learning").is_some());
    }

    #[test]
    fn test_sublinear_weight_exact() {
        let ids = ["a", "b"];
        let texts = ["aa aa aa bb", "cc"];
        let index = LexicalIndex::build(&ids, &texts, &unigrams()).unwrap();
        let idf = 1.5_f64.ln() + 1.0;
        let aa = (1.0 + 3.0_f64.ln()) * idf;
        let expected = aa / aa.hypot(idf);

        let scores = &index.query(&["aa"])[0];
        assert!((scores[0] - expected).abs() < EPS);
        assert!((scores[0] - 0.902_75).abs() < 1e-5);
    }

    #[test]
    fn test_tokenless_document_scores_positive_zero() {
        let ids = ["ml", "blank"];
        let texts = ["machine learning", "!!!"];
        let index = LexicalIndex::build(&ids, &texts, &unigrams()).unwrap();

        let blank = index.query(&["machine learning"])[0][1];
        assert_eq!(blank, 0.0);
        assert!(!blank.is_sign_negative());
    }

    #[test]
    fn test_sublinear_dampens_repeats() {
        let texts = ["python python python python rust", "rust"];
        let ids = ["a", "b"];
        let sublinear = LexicalIndex::build(&ids, &texts, &unigrams()).unwrap();
        let raw = LexicalIndex::build(
            &ids,
            &texts,
            &IndexOptions {
                sublinear_tf: false,
                ..unigrams()
            },
        )
        .unwrap();

        let rust_sublinear = sublinear.query(&["rust"])[0][0];
        let rust_raw = raw.query(&["rust"])[0][0];
        assert!(rust_sublinear > rust_raw);
    }

    #[test]
    fn test_from_settings() {
        let settings = RankingSettings {
            max_features: 10,
            ngram_range: (1, 3),
            sublinear_tf: false,
            ..RankingSettings::default()
        };
        let options = IndexOptions::from(&settings);
        assert_eq!(options.max_features, 10);
        assert_eq!(options.ngram_range, (1, 3));
        assert!(!options.sublinear_tf);
    }
}
