use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};

use revrec_core::RecommendationOutcome;

use crate::middleware::RequestId;

use super::{ApiError, ApiResponse, AppState, ResponseMeta};

#[derive(Debug, Deserialize)]
pub(super) struct PredictRequest {
    pub review: String,
}

#[derive(Debug, Serialize)]
pub(super) struct PredictionData {
    pub sentiment: String,
    pub confidence: f64,
    /// Detected keyword, or `"General"` when nothing matched.
    pub detected_product: String,
    /// True when the filters left nothing to recommend; `recommendations` is
    /// then empty. Kept explicit so clients never treat an empty list as a
    /// rendering artifact.
    pub no_matches: bool,
    pub recommendations: Vec<RecommendationItem>,
}

#[derive(Debug, Serialize)]
pub(super) struct RecommendationItem {
    pub product_name: String,
    pub product_price: Option<f64>,
    pub rate: Option<f64>,
    pub sentiment: String,
}

/// `POST /api/v1/predict` — JSON counterpart of the form route.
pub(super) async fn predict_api(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<PredictRequest>,
) -> Result<Json<ApiResponse<PredictionData>>, ApiError> {
    if body.review.trim().is_empty() {
        return Err(ApiError::new(
            req_id.0,
            "validation_error",
            "review must not be empty",
        ));
    }

    let prediction = state.ctx.predict(&body.review);

    let (no_matches, recommendations) = match &prediction.recommendations {
        RecommendationOutcome::Matches(rows) => (
            false,
            rows.iter()
                .map(|row| RecommendationItem {
                    product_name: row.name.clone(),
                    product_price: row.price,
                    rate: row.rating,
                    sentiment: row.sentiment.clone(),
                })
                .collect(),
        ),
        RecommendationOutcome::NoMatches => (true, Vec::new()),
    };

    Ok(Json(ApiResponse {
        data: PredictionData {
            sentiment: prediction.sentiment.label.to_string(),
            confidence: prediction.sentiment.confidence,
            detected_product: prediction.keyword.unwrap_or("General").to_string(),
            no_matches,
            recommendations,
        },
        meta: ResponseMeta::new(req_id.0),
    }))
}
