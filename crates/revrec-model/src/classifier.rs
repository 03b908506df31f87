//! Composed review classifier: vectorize, predict, report confidence.

use std::path::Path;

use revrec_core::SentimentResult;

use crate::error::ModelError;
use crate::model::{LinearSentimentModel, SentimentModel};
use crate::vectorizer::{TextVectorizer, TfidfVectorizer};

/// Pre-trained classifier over boxed capability traits.
///
/// Built from serialized artifacts via [`Classifier::load`] in production,
/// or from stubs via [`Classifier::new`] in tests.
pub struct Classifier {
    vectorizer: Box<dyn TextVectorizer>,
    model: Box<dyn SentimentModel>,
}

impl Classifier {
    #[must_use]
    pub fn new(vectorizer: Box<dyn TextVectorizer>, model: Box<dyn SentimentModel>) -> Self {
        Self { vectorizer, model }
    }

    /// Load both artifacts and cross-check their shapes.
    ///
    /// # Errors
    ///
    /// Returns [`ModelError`] when either artifact fails to load or when the
    /// model weight count does not match the vectorizer vocabulary size.
    pub fn load(vectorizer_path: &Path, model_path: &Path) -> Result<Self, ModelError> {
        let vectorizer = TfidfVectorizer::from_path(vectorizer_path)?;
        let model = LinearSentimentModel::from_path(model_path)?;

        if model.dimensions() != vectorizer.dimensions() {
            return Err(ModelError::Shape {
                expected: vectorizer.dimensions(),
                got: model.dimensions(),
            });
        }

        tracing::info!(
            vocabulary = vectorizer.dimensions(),
            "classifier artifacts loaded"
        );

        Ok(Self::new(Box::new(vectorizer), Box::new(model)))
    }

    /// Classify a review: transform -> predict -> predict_proba.
    ///
    /// Confidence is the winning-class probability scaled to `[0, 100]` and
    /// rounded to two decimals.
    #[must_use]
    pub fn classify(&self, review: &str) -> SentimentResult {
        let features = self.vectorizer.transform(review);
        let label = self.model.predict(&features);
        let proba = self.model.predict_proba(&features);
        let confidence = round2(proba[0].max(proba[1]) * 100.0);

        tracing::debug!(%label, confidence, "review classified");
        SentimentResult { label, confidence }
    }
}

fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}
