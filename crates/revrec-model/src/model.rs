//! Binary logistic regression over TF-IDF features.

use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use revrec_core::SentimentLabel;

use crate::error::ModelError;
use crate::vectorizer::SparseVector;

/// Capability interface for the serialized classifier.
///
/// `predict_proba` returns `[p(Negative), p(Positive)]`; the two entries sum
/// to 1. `predict` must agree with the larger probability.
pub trait SentimentModel: Send + Sync {
    fn predict(&self, features: &SparseVector) -> SentimentLabel;
    fn predict_proba(&self, features: &SparseVector) -> [f64; 2];
}

/// On-disk model artifact: one weight per feature column, plus intercept.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ModelArtifact {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

/// Logistic regression with a sigmoid link; class 1 is Positive.
#[derive(Debug, Clone)]
pub struct LinearSentimentModel {
    weights: Vec<f64>,
    intercept: f64,
}

impl LinearSentimentModel {
    /// Load the artifact from a JSON file.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] on I/O or parse failure.
    pub fn from_path(path: &Path) -> Result<Self, ModelError> {
        let file = File::open(path)?;
        let artifact: ModelArtifact = serde_json::from_reader(BufReader::new(file))?;
        Ok(Self::from_artifact(artifact))
    }

    #[must_use]
    pub fn from_artifact(artifact: ModelArtifact) -> Self {
        Self {
            weights: artifact.weights,
            intercept: artifact.intercept,
        }
    }

    /// Number of feature columns this model expects.
    #[must_use]
    pub fn dimensions(&self) -> usize {
        self.weights.len()
    }

    fn positive_probability(&self, features: &SparseVector) -> f64 {
        sigmoid(features.dot(&self.weights) + self.intercept)
    }
}

impl SentimentModel for LinearSentimentModel {
    fn predict(&self, features: &SparseVector) -> SentimentLabel {
        let [negative, positive] = self.predict_proba(features);
        if positive >= negative {
            SentimentLabel::Positive
        } else {
            SentimentLabel::Negative
        }
    }

    fn predict_proba(&self, features: &SparseVector) -> [f64; 2] {
        let p = self.positive_probability(features);
        [1.0 - p, p]
    }
}

fn sigmoid(z: f64) -> f64 {
    1.0 / (1.0 + (-z).exp())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model(weights: Vec<f64>, intercept: f64) -> LinearSentimentModel {
        LinearSentimentModel::from_artifact(ModelArtifact { weights, intercept })
    }

    fn features(entries: Vec<(usize, f64)>) -> SparseVector {
        SparseVector { entries }
    }

    #[test]
    fn sigmoid_is_centered_at_half() {
        assert!((sigmoid(0.0) - 0.5).abs() < 1e-12);
        assert!(sigmoid(10.0) > 0.99);
        assert!(sigmoid(-10.0) < 0.01);
    }

    #[test]
    fn probabilities_sum_to_one() {
        let m = model(vec![1.5, -2.0], 0.1);
        let proba = m.predict_proba(&features(vec![(0, 0.7), (1, 0.3)]));
        assert!((proba[0] + proba[1] - 1.0).abs() < 1e-12);
    }

    #[test]
    fn positive_weights_push_toward_positive() {
        let m = model(vec![3.0], 0.0);
        assert_eq!(
            m.predict(&features(vec![(0, 1.0)])),
            SentimentLabel::Positive
        );
    }

    #[test]
    fn negative_weights_push_toward_negative() {
        let m = model(vec![-3.0], 0.0);
        assert_eq!(
            m.predict(&features(vec![(0, 1.0)])),
            SentimentLabel::Negative
        );
    }

    #[test]
    fn predict_agrees_with_larger_probability() {
        let m = model(vec![2.0, -4.0], -0.2);
        for entries in [
            vec![(0, 0.9)],
            vec![(1, 0.9)],
            vec![(0, 0.5), (1, 0.5)],
            vec![],
        ] {
            let x = features(entries);
            let [negative, positive] = m.predict_proba(&x);
            let expected = if positive >= negative {
                SentimentLabel::Positive
            } else {
                SentimentLabel::Negative
            };
            assert_eq!(m.predict(&x), expected);
        }
    }

    #[test]
    fn empty_features_fall_back_to_intercept() {
        let m = model(vec![5.0], -1.0);
        let [_, positive] = m.predict_proba(&features(vec![]));
        assert!((positive - sigmoid(-1.0)).abs() < 1e-12);
        assert_eq!(m.predict(&features(vec![])), SentimentLabel::Negative);
    }
}
