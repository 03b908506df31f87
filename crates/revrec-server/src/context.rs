//! Per-process prediction context.
//!
//! Everything a request needs, loaded once at startup and shared immutably
//! behind an `Arc`: the classifier artifacts, the compiled keyword detector,
//! and the product catalog.

use anyhow::Context as _;

use revrec_core::{
    recommend, AppConfig, KeywordDetector, ProductCatalog, RecommendationOutcome, SentimentResult,
};
use revrec_model::Classifier;

pub struct PredictContext {
    pub classifier: Classifier,
    pub detector: KeywordDetector,
    pub catalog: ProductCatalog,
}

/// Output of the full pipeline for one review. Borrows catalog rows.
pub struct Prediction<'a> {
    pub sentiment: SentimentResult,
    pub keyword: Option<&'static str>,
    pub recommendations: RecommendationOutcome<'a>,
}

impl PredictContext {
    #[must_use]
    pub fn new(classifier: Classifier, detector: KeywordDetector, catalog: ProductCatalog) -> Self {
        Self {
            classifier,
            detector,
            catalog,
        }
    }

    /// Load all startup dependencies from configured paths.
    ///
    /// # Errors
    ///
    /// Any artifact or dataset failure is returned as-is; the caller treats
    /// it as fatal.
    pub fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let classifier = Classifier::load(&config.vectorizer_path, &config.model_path)
            .with_context(|| {
                format!(
                    "failed to load classifier artifacts ({} / {})",
                    config.vectorizer_path.display(),
                    config.model_path.display()
                )
            })?;
        let catalog = ProductCatalog::from_path(&config.dataset_path).with_context(|| {
            format!("failed to load dataset {}", config.dataset_path.display())
        })?;
        Ok(Self::new(classifier, KeywordDetector::new(), catalog))
    }

    /// Run the three-step pipeline: classify, detect, recommend.
    #[must_use]
    pub fn predict(&self, review: &str) -> Prediction<'_> {
        let sentiment = self.classifier.classify(review);
        let keyword = self.detector.detect(review);
        let recommendations = recommend(self.catalog.records(), sentiment.label, keyword);

        tracing::debug!(
            label = %sentiment.label,
            confidence = sentiment.confidence,
            keyword = keyword.unwrap_or("none"),
            "prediction complete"
        );

        Prediction {
            sentiment,
            keyword,
            recommendations,
        }
    }
}
