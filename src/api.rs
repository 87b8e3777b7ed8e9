use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, post},
    Json, Router,
};
use tower_http::cors::CorsLayer;
use tracing::warn;

use crate::extract::Extractor;
use crate::record::ExtractionOutcome;

#[derive(Clone)]
pub struct AppState {
    extractor: Arc<Extractor>,
}

pub fn create_router(extractor: Arc<Extractor>) -> Router {
    let state = AppState { extractor };

    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/extract", post(extract))
        .layer(CorsLayer::very_permissive())
        .with_state(state)
}

#[derive(serde::Deserialize)]
struct ExtractReq {
    text: String,
}

/// One extraction per request. Parse failures come back as a normal 200
/// with the failure record; only provider/network trouble is an HTTP error.
async fn extract(
    State(state): State<AppState>,
    Json(body): Json<ExtractReq>,
) -> Result<Json<ExtractionOutcome>, (StatusCode, String)> {
    match state.extractor.extract(&body.text).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(err) => {
            warn!(error = ?err, "extraction failed");
            Err((StatusCode::BAD_GATEWAY, format!("extraction failed: {err:#}")))
        }
    }
}
