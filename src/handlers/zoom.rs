use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::Json;

use crate::errors::AppError;
use crate::models::{MeetingRequest, MeetingResult, ZoomStatus};
use crate::services::interview;
use crate::state::AppState;

// GET /api/zoom/status
pub async fn get_status(State(state): State<Arc<AppState>>) -> Json<ZoomStatus> {
    Json(ZoomStatus::from_config(&state.config))
}

// POST /api/zoom/create-meeting
pub async fn create_meeting(
    State(state): State<Arc<AppState>>,
    payload: Result<Json<MeetingRequest>, JsonRejection>,
) -> Result<Json<MeetingResult>, AppError> {
    let Json(request) = payload.map_err(|rejection| {
        tracing::debug!(error = %rejection, "rejected create-meeting body");
        AppError::Validation(vec![rejection.body_text()])
    })?;

    match interview::create_meeting(&state, &request).await {
        Ok(result) => Ok(Json(result)),
        Err(e) => {
            tracing::warn!(
                kind = e.kind(),
                upstream_status = ?e.upstream_status(),
                error = %e,
                "create-meeting failed"
            );
            Err(e)
        }
    }
}
