//! Aerator comparison endpoint
//!
//! `POST /api/v1/compare` runs the full comparison pipeline. Validation
//! failures map to 400, malformed request bodies to axum's own 400/422
//! rejections, and internal faults to 500. Successful comparisons are
//! appended to the history log in the background.

use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::post,
    Router,
};
use serde::{Deserialize, Serialize};

use aerator_models::{Aerator, FarmContext, FinancialAssumptions};

use super::AppState;
use crate::history::HistoryEntry;

/// Comparison request body
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CompareRequest {
    /// Farm and pond environment
    pub farm: FarmContext,
    /// Economic assumptions
    pub financial: FinancialAssumptions,
    /// Candidate aerators, at least two
    pub aerators: Vec<Aerator>,
}

/// Error payload for failed comparisons
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Machine-readable error class
    pub error: String,
    /// Human-readable description
    pub message: String,
}

/// Build the compare routes
pub fn routes() -> Router<AppState> {
    Router::new().route("/api/v1/compare", post(compare_handler))
}

/// POST /api/v1/compare - Run an aerator comparison
async fn compare_handler(
    State(state): State<AppState>,
    Json(request): Json<CompareRequest>,
) -> Response {
    match state
        .engine
        .compare(&request.farm, &request.financial, &request.aerators)
    {
        Ok(result) => {
            if let Some(history) = &state.history {
                history.record(HistoryEntry::from_result(&result));
            }
            (StatusCode::OK, Json(result)).into_response()
        }
        Err(err) if err.is_validation() => {
            tracing::debug!(error = %err, "comparison request rejected");
            let response = ErrorResponse {
                error: "validation_error".to_string(),
                message: err.to_string(),
            };
            (StatusCode::BAD_REQUEST, Json(response)).into_response()
        }
        Err(err) => {
            tracing::error!(error = %err, "comparison failed");
            let response = ErrorResponse {
                error: "internal_error".to_string(),
                message: err.to_string(),
            };
            (StatusCode::INTERNAL_SERVER_ERROR, Json(response)).into_response()
        }
    }
}
