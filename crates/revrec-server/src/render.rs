//! HTML rendering for the form page.
//!
//! The page is small enough that we build it with plain string assembly; the
//! only invariant that matters is that every catalog-derived value is escaped
//! before it reaches the document.

use revrec_core::RecommendationOutcome;

use crate::context::Prediction;

const NO_MATCHES_HTML: &str =
    "<p style='color:red; font-weight:bold;'>No matching product recommendations found.</p>";

/// Render the full page: input form plus, after a prediction, the results.
#[must_use]
pub fn page(prediction: Option<&Prediction<'_>>) -> String {
    let mut body = String::from(
        "<h1>Product Review Sentiment</h1>\n\
         <form action=\"/predict\" method=\"post\">\n\
         <textarea name=\"review\" rows=\"5\" cols=\"60\" \
         placeholder=\"Write your product review here...\" required></textarea><br>\n\
         <button type=\"submit\">Analyze</button>\n\
         </form>\n",
    );

    if let Some(prediction) = prediction {
        body.push_str(&results_section(prediction));
    }

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n\
         <title>revrec</title>\n</head>\n<body>\n{body}</body>\n</html>\n"
    )
}

fn results_section(prediction: &Prediction<'_>) -> String {
    let sentiment = &prediction.sentiment;
    let product = prediction.keyword.unwrap_or("General");

    let table = match &prediction.recommendations {
        RecommendationOutcome::Matches(rows) => {
            let mut table = String::from(
                "<table border=\"1\" class=\"table table-striped table-bordered\">\n\
                 <thead><tr><th>product_name</th><th>product_price</th>\
                 <th>Rate</th><th>Sentiment</th></tr></thead>\n<tbody>\n",
            );
            for row in rows {
                table.push_str(&format!(
                    "<tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
                    escape_html(&row.name),
                    format_numeric(row.price),
                    format_numeric(row.rating),
                    escape_html(&row.sentiment),
                ));
            }
            table.push_str("</tbody>\n</table>\n");
            table
        }
        RecommendationOutcome::NoMatches => format!("{NO_MATCHES_HTML}\n"),
    };

    format!(
        "<hr>\n\
         <p>Predicted Sentiment: {}</p>\n\
         <p>Confidence: {}%</p>\n\
         <p>Detected Product: {}</p>\n\
         {table}",
        sentiment.label,
        sentiment.confidence,
        escape_html(product),
    )
}

/// Blank cell for null numerics, bare number otherwise.
fn format_numeric(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{v}"),
        None => String::new(),
    }
}

fn escape_html(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use revrec_core::{ProductRecord, SentimentLabel, SentimentResult};

    fn record(name: &str) -> ProductRecord {
        ProductRecord {
            name: name.to_string(),
            price: Some(1499.0),
            rating: Some(4.5),
            review: "fixture".to_string(),
            sentiment: "positive".to_string(),
        }
    }

    fn prediction<'a>(outcome: RecommendationOutcome<'a>) -> Prediction<'a> {
        Prediction {
            sentiment: SentimentResult {
                label: SentimentLabel::Positive,
                confidence: 92.5,
            },
            keyword: Some("fan"),
            recommendations: outcome,
        }
    }

    #[test]
    fn bare_page_contains_the_form() {
        let html = page(None);
        assert!(html.contains("<form action=\"/predict\""));
        assert!(html.contains("name=\"review\""));
        assert!(!html.contains("Predicted Sentiment"));
    }

    #[test]
    fn results_page_contains_texts_and_table() {
        let row = record("CoolWave Fan");
        let prediction = prediction(RecommendationOutcome::Matches(vec![&row]));
        let html = page(Some(&prediction));
        assert!(html.contains("Predicted Sentiment: Positive"));
        assert!(html.contains("Confidence: 92.5%"));
        assert!(html.contains("Detected Product: fan"));
        assert!(html.contains("<td>CoolWave Fan</td>"));
        assert!(html.contains("<td>1499</td>"));
        assert!(html.contains("<td>4.5</td>"));
    }

    #[test]
    fn no_matches_renders_the_explicit_message_not_an_empty_table() {
        let prediction = prediction(RecommendationOutcome::NoMatches);
        let html = page(Some(&prediction));
        assert!(html.contains("No matching product recommendations found."));
        assert!(!html.contains("<table"));
    }

    #[test]
    fn catalog_values_are_escaped() {
        let row = record("<script>alert('fan')</script>");
        let prediction = prediction(RecommendationOutcome::Matches(vec![&row]));
        let html = page(Some(&prediction));
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }

    #[test]
    fn null_price_renders_as_blank_cell() {
        let mut row = record("No Price Fan");
        row.price = None;
        let prediction = prediction(RecommendationOutcome::Matches(vec![&row]));
        let html = page(Some(&prediction));
        assert!(html.contains("<td>No Price Fan</td><td></td>"));
    }
}
