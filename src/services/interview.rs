use crate::errors::AppError;
use crate::models::{MeetingRequest, MeetingResult};
use crate::state::AppState;

/// Validate, then hand off to the provider. Invalid input or missing
/// credentials never reach the provider.
pub async fn create_meeting(
    state: &AppState,
    request: &MeetingRequest,
) -> Result<MeetingResult, AppError> {
    let meeting = request.validate()?;

    let missing = state.config.zoom.missing();
    if !missing.is_empty() {
        tracing::error!(?missing, "meeting requested but Zoom credentials are not configured");
        return Err(AppError::NotConfigured(missing));
    }

    state.meetings.create_meeting(&meeting).await
}
