use serde::{Deserialize, Serialize};

/// Binary sentiment polarity predicted for a review.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SentimentLabel {
    Positive,
    Negative,
}

impl std::fmt::Display for SentimentLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SentimentLabel::Positive => write!(f, "Positive"),
            SentimentLabel::Negative => write!(f, "Negative"),
        }
    }
}

/// Per-request classification output. Never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SentimentResult {
    pub label: SentimentLabel,
    /// Winning-class probability scaled to `[0, 100]`, rounded to 2 decimals.
    pub confidence: f64,
}

/// One row of the product catalog, normalized at load time.
///
/// `price` and `rating` are `None` when the source cell was non-empty but
/// unparsable; rows with *empty* cells never make it into the catalog.
/// `sentiment` is lowercased (`"positive"` / `"negative"`) at load.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductRecord {
    pub name: String,
    pub price: Option<f64>,
    pub rating: Option<f64>,
    pub review: String,
    pub sentiment: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sentiment_label_displays_capitalized() {
        assert_eq!(SentimentLabel::Positive.to_string(), "Positive");
        assert_eq!(SentimentLabel::Negative.to_string(), "Negative");
    }

    #[test]
    fn product_record_serde_roundtrip() {
        let record = ProductRecord {
            name: "Arctic Breeze Air Cooler".to_string(),
            price: Some(5499.0),
            rating: Some(4.3),
            review: "Cools the room fast".to_string(),
            sentiment: "positive".to_string(),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        let decoded: ProductRecord = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, record);
    }

    #[test]
    fn product_record_null_numerics_serialize_as_null() {
        let record = ProductRecord {
            name: "Mystery Fan".to_string(),
            price: None,
            rating: None,
            review: "?".to_string(),
            sentiment: "negative".to_string(),
        };
        let json = serde_json::to_string(&record).expect("serialize");
        assert!(json.contains("\"price\":null"));
        assert!(json.contains("\"rating\":null"));
    }
}
