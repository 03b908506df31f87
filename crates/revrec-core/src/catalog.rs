//! Product catalog loading.
//!
//! The catalog is a CSV export with columns `product_name`, `product_price`,
//! `Rate`, `Review`, and `Sentiment` (extra columns are ignored). It is read
//! once at startup and never mutated afterwards: every request borrows the
//! same immutable record slice.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::types::ProductRecord;

const COL_NAME: &str = "product_name";
const COL_PRICE: &str = "product_price";
const COL_RATE: &str = "Rate";
const COL_REVIEW: &str = "Review";
const COL_SENTIMENT: &str = "Sentiment";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to open dataset: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read dataset: {0}")]
    Csv(#[from] csv::Error),

    #[error("dataset is missing required column: {0}")]
    MissingColumn(String),
}

/// Immutable in-memory product table.
#[derive(Debug, Clone)]
pub struct ProductCatalog {
    records: Vec<ProductRecord>,
}

impl ProductCatalog {
    /// Load the catalog from a CSV file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] if the file cannot be opened, the CSV is
    /// malformed, or a required column is absent from the header.
    pub fn from_path(path: &Path) -> Result<Self, CatalogError> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Load the catalog from any CSV reader.
    ///
    /// Rows with an empty value in any required column are dropped. Non-empty
    /// but unparsable price/rating values coerce to `None`; the row itself is
    /// kept. Stored sentiment is lowercased.
    ///
    /// # Errors
    ///
    /// Returns [`CatalogError`] on read failures or a missing header column.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers = csv_reader.headers()?.clone();
        let column = |name: &str| -> Result<usize, CatalogError> {
            headers
                .iter()
                .position(|h| h == name)
                .ok_or_else(|| CatalogError::MissingColumn(name.to_string()))
        };

        let name_col = column(COL_NAME)?;
        let price_col = column(COL_PRICE)?;
        let rate_col = column(COL_RATE)?;
        let review_col = column(COL_REVIEW)?;
        let sentiment_col = column(COL_SENTIMENT)?;

        let mut records = Vec::new();
        let mut dropped = 0_usize;

        for row in csv_reader.records() {
            let row = row?;
            let field = |idx: usize| row.get(idx).unwrap_or("");

            let name = field(name_col);
            let price_raw = field(price_col);
            let rate_raw = field(rate_col);
            let review = field(review_col);
            let sentiment = field(sentiment_col);

            // Empty cell in any required column drops the whole row; non-empty
            // junk in the numeric columns merely nulls that value.
            if name.is_empty()
                || price_raw.is_empty()
                || rate_raw.is_empty()
                || review.is_empty()
                || sentiment.is_empty()
            {
                dropped += 1;
                continue;
            }

            records.push(ProductRecord {
                name: name.to_string(),
                price: coerce_numeric(price_raw),
                rating: coerce_numeric(rate_raw),
                review: review.to_string(),
                sentiment: sentiment.to_lowercase(),
            });
        }

        tracing::info!(
            rows = records.len(),
            dropped,
            "product catalog loaded"
        );

        Ok(Self { records })
    }

    #[must_use]
    pub fn records(&self) -> &[ProductRecord] {
        &self.records
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Parse a numeric cell, treating junk and non-finite values as null.
fn coerce_numeric(raw: &str) -> Option<f64> {
    match raw.trim().parse::<f64>() {
        Ok(v) if v.is_finite() => Some(v),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str = "product_name,product_price,Rate,Review,Sentiment";

    fn load(csv_body: &str) -> ProductCatalog {
        ProductCatalog::from_reader(csv_body.as_bytes()).expect("catalog should load")
    }

    #[test]
    fn loads_well_formed_rows() {
        let catalog = load(&format!(
            "{HEADER}\nCoolWave Fan,1499,4.5,Great airflow,Positive\n"
        ));
        assert_eq!(catalog.len(), 1);
        let record = &catalog.records()[0];
        assert_eq!(record.name, "CoolWave Fan");
        assert_eq!(record.price, Some(1499.0));
        assert_eq!(record.rating, Some(4.5));
        assert_eq!(record.sentiment, "positive");
    }

    #[test]
    fn drops_rows_with_empty_required_fields() {
        let catalog = load(&format!(
            "{HEADER}\n\
             ,999,4.0,ok,positive\n\
             NoPrice Fan,,4.0,ok,positive\n\
             NoRate Fan,999,,ok,positive\n\
             NoReview Fan,999,4.0,,positive\n\
             NoSentiment Fan,999,4.0,ok,\n\
             Kept Fan,999,4.0,ok,positive\n"
        ));
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].name, "Kept Fan");
    }

    #[test]
    fn unparsable_numerics_coerce_to_none_but_keep_the_row() {
        let catalog = load(&format!(
            "{HEADER}\nOddball TV,\"1,299\",four,meh,negative\n"
        ));
        assert_eq!(catalog.len(), 1);
        let record = &catalog.records()[0];
        assert_eq!(record.price, None);
        assert_eq!(record.rating, None);
    }

    #[test]
    fn non_finite_numerics_coerce_to_none() {
        let catalog = load(&format!("{HEADER}\nWeird AC,NaN,inf,meh,negative\n"));
        let record = &catalog.records()[0];
        assert_eq!(record.price, None);
        assert_eq!(record.rating, None);
    }

    #[test]
    fn sentiment_is_lowercased_at_load() {
        let catalog = load(&format!("{HEADER}\nLoud Speaker,799,2.0,tinny,NEGATIVE\n"));
        assert_eq!(catalog.records()[0].sentiment, "negative");
    }

    #[test]
    fn extra_columns_and_reordered_headers_are_tolerated() {
        let catalog = load(
            "id,Review,Sentiment,product_name,product_price,Rate\n\
             7,solid,positive,Sturdy Laptop,45999,4.2\n",
        );
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.records()[0].name, "Sturdy Laptop");
        assert_eq!(catalog.records()[0].rating, Some(4.2));
    }

    #[test]
    fn missing_column_is_a_load_error() {
        let result =
            ProductCatalog::from_reader("product_name,product_price,Rate,Review\na,1,2,b\n".as_bytes());
        assert!(
            matches!(result, Err(CatalogError::MissingColumn(ref c)) if c == "Sentiment"),
            "expected MissingColumn(Sentiment), got: {result:?}"
        );
    }

    #[test]
    fn short_rows_count_as_missing_fields() {
        let catalog = load(&format!("{HEADER}\nLonely Fan,999\n"));
        assert!(catalog.is_empty());
    }
}
