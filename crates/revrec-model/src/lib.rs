//! Pre-trained sentiment classifier for revrec.
//!
//! Wraps two serialized artifacts — a TF-IDF vectorizer and a binary logistic
//! regression — behind small capability traits so request handlers (and
//! tests) never care how features are produced or scored. Artifacts are
//! loaded once at startup and are immutable afterwards; there is no
//! retraining and no online update.

pub mod classifier;
pub mod error;
pub mod model;
pub mod vectorizer;

pub use classifier::Classifier;
pub use error::ModelError;
pub use model::{LinearSentimentModel, SentimentModel};
pub use vectorizer::{SparseVector, TextVectorizer, TfidfVectorizer};
