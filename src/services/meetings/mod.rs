pub mod oauth;
pub mod zoom;

use async_trait::async_trait;

use crate::errors::AppError;
use crate::models::{MeetingResult, ScheduledMeeting};

#[async_trait]
pub trait MeetingProvider: Send + Sync {
    async fn create_meeting(&self, meeting: &ScheduledMeeting) -> Result<MeetingResult, AppError>;
}

/// Pull a human-readable message out of a provider error body.
pub(crate) fn provider_message(body: &str) -> String {
    if let Ok(value) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["message", "reason", "error_description", "error"] {
            if let Some(msg) = value[key].as_str().filter(|m| !m.is_empty()) {
                return msg.to_string();
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        "empty response body".to_string()
    } else {
        trimmed.to_string()
    }
}
