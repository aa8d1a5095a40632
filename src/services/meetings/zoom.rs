use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};

use super::oauth::ZoomOAuth;
use super::{provider_message, MeetingProvider};
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::models::meeting::{format_zoom_time, parse_start_time};
use crate::models::{MeetingResult, ScheduledMeeting};

const SCHEDULED_MEETING: u8 = 2;

#[derive(Debug, Serialize)]
pub struct CreateMeetingPayload {
    pub topic: String,
    #[serde(rename = "type")]
    pub meeting_type: u8,
    pub start_time: String,
    pub duration: u32,
    pub settings: MeetingSettings,
}

// Interview policy, not caller-configurable.
#[derive(Debug, Serialize)]
pub struct MeetingSettings {
    pub join_before_host: bool,
    pub waiting_room: bool,
    pub host_video: bool,
    pub participant_video: bool,
    pub auto_recording: &'static str,
}

impl Default for MeetingSettings {
    fn default() -> Self {
        Self {
            join_before_host: true,
            waiting_room: false,
            host_video: true,
            participant_video: true,
            auto_recording: "none",
        }
    }
}

impl CreateMeetingPayload {
    pub fn for_interview(meeting: &ScheduledMeeting) -> Self {
        Self {
            topic: meeting.topic.clone(),
            meeting_type: SCHEDULED_MEETING,
            start_time: format_zoom_time(&meeting.start_time),
            duration: meeting.duration,
            settings: MeetingSettings::default(),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ZoomMeeting {
    id: Option<serde_json::Value>,
    join_url: Option<String>,
    password: Option<String>,
    start_time: Option<String>,
    duration: Option<u32>,
}

pub struct ZoomProvider {
    client: Client,
    oauth: ZoomOAuth,
    meetings_url: String,
}

impl ZoomProvider {
    pub fn new(config: &AppConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.http_timeout_secs))
            .build()?;

        Ok(Self {
            oauth: ZoomOAuth::new(
                client.clone(),
                config.zoom_oauth_url.clone(),
                config.zoom.clone(),
            ),
            meetings_url: format!(
                "{}/users/{}/meetings",
                config.zoom_api_base_url, config.zoom_user_id
            ),
            client,
        })
    }

    async fn post_meeting(
        &self,
        access_token: &str,
        payload: &CreateMeetingPayload,
    ) -> Result<ZoomMeeting, AppError> {
        let resp = self
            .client
            .post(&self.meetings_url)
            .bearer_auth(access_token)
            .json(payload)
            .send()
            .await
            .map_err(|e| AppError::from_transport("meeting request failed", e))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AppError::from_transport("failed to read meeting response", e))?;

        if !status.is_success() {
            let message = provider_message(&body);
            tracing::warn!(status = status.as_u16(), %message, "Zoom rejected meeting creation");
            return Err(match status {
                StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN => AppError::Auth {
                    status: status.as_u16(),
                    message,
                },
                StatusCode::BAD_REQUEST => AppError::Validation(vec![message]),
                _ => AppError::Upstream {
                    status: Some(status.as_u16()),
                    message,
                },
            });
        }

        serde_json::from_str(&body).map_err(|e| AppError::Upstream {
            status: Some(status.as_u16()),
            message: format!("unexpected meeting response: {e}"),
        })
    }
}

#[async_trait]
impl MeetingProvider for ZoomProvider {
    async fn create_meeting(&self, meeting: &ScheduledMeeting) -> Result<MeetingResult, AppError> {
        let token = self.oauth.acquire_access_token().await?;

        let payload = CreateMeetingPayload::for_interview(meeting);
        tracing::info!(
            start_time = %payload.start_time,
            duration = payload.duration,
            "creating Zoom meeting"
        );

        let created = self.post_meeting(&token.access_token, &payload).await?;
        into_result(created, meeting)
    }
}

fn into_result(created: ZoomMeeting, meeting: &ScheduledMeeting) -> Result<MeetingResult, AppError> {
    let incomplete = |field: &str| AppError::Upstream {
        status: None,
        message: format!("Zoom response is missing {field}"),
    };

    let meeting_id = match created.id {
        Some(serde_json::Value::Number(n)) => n.to_string(),
        Some(serde_json::Value::String(s)) if !s.is_empty() => s,
        _ => return Err(incomplete("id")),
    };
    let join_url = created
        .join_url
        .filter(|u| !u.is_empty())
        .ok_or_else(|| incomplete("join_url"))?;
    let password = created.password.ok_or_else(|| incomplete("password"))?;

    let start_time = created
        .start_time
        .as_deref()
        .and_then(parse_start_time)
        .unwrap_or(meeting.start_time);

    tracing::info!(meeting_id = %meeting_id, "Zoom meeting created");

    Ok(MeetingResult {
        join_url,
        meeting_id,
        password,
        start_time: format_zoom_time(&start_time),
        duration: created.duration.unwrap_or(meeting.duration),
        topic: meeting.topic.clone(),
    })
}
