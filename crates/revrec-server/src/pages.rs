//! HTML routes: the input form and the form-post prediction page.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::api::AppState;
use crate::render;

#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub review: String,
}

/// `GET /` — static input form.
pub async fn home() -> Html<String> {
    Html(render::page(None))
}

/// `POST /predict` — run the pipeline and render the results page.
///
/// A request without a `review` field never reaches this handler: the `Form`
/// extractor rejects it with a client error.
pub async fn predict(
    State(state): State<AppState>,
    Form(form): Form<PredictForm>,
) -> Html<String> {
    let prediction = state.ctx.predict(&form.review);
    Html(render::page(Some(&prediction)))
}
