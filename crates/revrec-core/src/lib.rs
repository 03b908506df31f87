//! Core domain logic for revrec.
//!
//! Holds the pieces that need no web framework and no model artifacts:
//! application configuration, the product catalog loader, the ordered
//! keyword detector, and the recommendation filter/ranker. Everything here
//! is synchronous and immutable after construction, so request handlers can
//! share it behind an `Arc` without locking.

pub mod app_config;
pub mod catalog;
pub mod config;
pub mod keywords;
pub mod recommend;
pub mod types;

pub use app_config::{AppConfig, Environment};
pub use catalog::{CatalogError, ProductCatalog};
pub use config::{load_app_config, load_app_config_from_env, ConfigError};
pub use keywords::{KeywordDetector, PRODUCT_KEYWORDS};
pub use recommend::{recommend, RecommendationOutcome};
pub use types::{ProductRecord, SentimentLabel, SentimentResult};
