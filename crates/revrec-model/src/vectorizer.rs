//! TF-IDF text vectorization from a serialized artifact.

use std::collections::{BTreeMap, HashMap};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::ModelError;

/// Sparse feature vector: `(column index, value)` pairs, indices ascending.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SparseVector {
    pub entries: Vec<(usize, f64)>,
}

impl SparseVector {
    /// Dot product against a dense weight vector. Out-of-range indices are
    /// ignored; the classifier validates shapes at load so this only happens
    /// with hand-built stubs.
    #[must_use]
    pub fn dot(&self, dense: &[f64]) -> f64 {
        self.entries
            .iter()
            .filter_map(|&(idx, value)| dense.get(idx).map(|w| w * value))
            .sum()
    }

    #[must_use]
    pub fn l2_norm(&self) -> f64 {
        self.entries
            .iter()
            .map(|&(_, v)| v * v)
            .sum::<f64>()
            .sqrt()
    }
}

/// Capability interface for turning review text into features.
///
/// Handlers depend on this trait, not on [`TfidfVectorizer`], so tests can
/// substitute a deterministic stub.
pub trait TextVectorizer: Send + Sync {
    fn transform(&self, text: &str) -> SparseVector;
}

/// On-disk vectorizer artifact: term -> column index, plus per-column IDF.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VectorizerArtifact {
    pub vocabulary: HashMap<String, usize>,
    pub idf: Vec<f64>,
}

/// TF-IDF vectorizer backed by a fixed vocabulary and IDF table.
///
/// Transform pipeline: lowercase, tokenize on word characters (tokens of two
/// or more characters), count terms, multiply counts by IDF, L2-normalize.
/// Unknown terms are dropped silently.
pub struct TfidfVectorizer {
    vocabulary: HashMap<String, usize>,
    idf: Vec<f64>,
    token_re: Regex,
}

impl TfidfVectorizer {
    /// Load the artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] on I/O or parse failure, or when the artifact
    /// shape is inconsistent.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        let artifact: VectorizerArtifact = serde_json::from_reader(BufReader::new(file))?;
        Self::from_artifact(artifact)
    }

    /// Build a vectorizer from an in-memory artifact.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError::Shape`] when the IDF table length differs from
    /// the vocabulary size, and [`ModelError::Vocabulary`] when a term maps
    /// outside the IDF table.
    pub fn from_artifact(artifact: VectorizerArtifact) -> Result<Self, ModelError> {
        if artifact.idf.len() != artifact.vocabulary.len() {
            return Err(ModelError::Shape {
                expected: artifact.vocabulary.len(),
                got: artifact.idf.len(),
            });
        }
        if let Some((term, &idx)) = artifact
            .vocabulary
            .iter()
            .find(|&(_, &idx)| idx >= artifact.idf.len())
        {
            return Err(ModelError::Vocabulary(format!(
                "term {term:?} maps to column {idx}, but the IDF table has {} entries",
                artifact.idf.len()
            )));
        }

        let token_re = Regex::new(r"\b\w\w+\b").expect("valid token regex");
        Ok(Self {
            vocabulary: artifact.vocabulary,
            idf: artifact.idf,
            token_re,
        })
    }

    /// Number of feature columns.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.idf.len()
    }
}

impl TextVectorizer for TfidfVectorizer {
    fn transform(&self, text: &str) -> SparseVector {
        let lowered = text.to_lowercase();

        let mut counts: BTreeMap<usize, f64> = BTreeMap::new();
        for token in self.token_re.find_iter(&lowered) {
            if let Some(&idx) = self.vocabulary.get(token.as_str()) {
                *counts.entry(idx).or_insert(0.0) += 1.0;
            }
        }

        let mut vector = SparseVector {
            entries: counts
                .into_iter()
                .map(|(idx, count)| (idx, count * self.idf[idx]))
                .collect(),
        };

        let norm = vector.l2_norm();
        if norm > 0.0 {
            for entry in &mut vector.entries {
                entry.1 /= norm;
            }
        }
        vector
    }
}
