use chrono::{DateTime, NaiveDateTime, Utc};
use email_address::{EmailAddress, Options};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;

const ZOOM_TIME_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

#[derive(Debug, Clone, Deserialize)]
pub struct MeetingRequest {
    pub candidate_name: String,
    pub user_email: String,
    pub start_time: String,
    pub duration: i64,
}

/// A request that passed validation, ready to send to a provider.
#[derive(Debug, Clone, PartialEq)]
pub struct ScheduledMeeting {
    pub topic: String,
    pub user_email: String,
    pub start_time: DateTime<Utc>,
    pub duration: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeetingResult {
    pub join_url: String,
    pub meeting_id: String,
    pub password: String,
    pub start_time: String,
    pub duration: u32,
    pub topic: String,
}

impl MeetingRequest {
    pub fn validate(&self) -> Result<ScheduledMeeting, AppError> {
        let mut problems = Vec::new();

        let candidate_name = self.candidate_name.trim();
        if candidate_name.is_empty() {
            problems.push("candidate_name must not be empty".to_string());
        }

        let user_email = parse_email(&self.user_email);
        if user_email.is_none() {
            problems.push("user_email is not a valid email address".to_string());
        }

        let start_time = parse_start_time(&self.start_time);
        if start_time.is_none() {
            problems.push("start_time must be an ISO 8601 timestamp".to_string());
        }

        let duration = u32::try_from(self.duration).ok().filter(|d| *d > 0);
        if duration.is_none() {
            problems.push("duration must be a positive number of minutes".to_string());
        }

        match (user_email, start_time, duration) {
            (Some(user_email), Some(start_time), Some(duration)) if problems.is_empty() => Ok(ScheduledMeeting {
                topic: interview_topic(&self.candidate_name),
                user_email,
                start_time,
                duration,
            }),
            _ => Err(AppError::Validation(problems)),
        }
    }
}

/// Bare `local@domain.tld` only: no display name, no IP literal, no dotless host.
fn parse_email(raw: &str) -> Option<String> {
    let options = Options::default()
        .with_required_tld()
        .without_display_text()
        .without_domain_literal();
    EmailAddress::parse_with_options(raw.trim(), options)
        .ok()
        .map(|address| address.email())
}

pub fn interview_topic(candidate_name: &str) -> String {
    format!("Interview with {candidate_name}")
}

/// Timestamps with an offset are converted to UTC; naive ones are taken as UTC.
pub fn parse_start_time(raw: &str) -> Option<DateTime<Utc>> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.with_timezone(&Utc));
    }

    raw.parse::<NaiveDateTime>()
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M"))
        .ok()
        .map(|naive| naive.and_utc())
}

pub fn format_zoom_time(dt: &DateTime<Utc>) -> String {
    dt.format(ZOOM_TIME_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, email: &str, start: &str, duration: i64) -> MeetingRequest {
        MeetingRequest {
            candidate_name: name.to_string(),
            user_email: email.to_string(),
            start_time: start.to_string(),
            duration,
        }
    }

    fn problems(err: AppError) -> Vec<String> {
        match err {
            AppError::Validation(problems) => problems,
            other => panic!("expected validation error, got {other:?}"),
        }
    }

    #[test]
    fn test_valid_request() {
        let meeting = request("Jane Smith", "jane@example.com", "2025-12-20T14:30:00", 45)
            .validate()
            .unwrap();
        assert_eq!(meeting.topic, "Interview with Jane Smith");
        assert_eq!(meeting.duration, 45);
        assert_eq!(format_zoom_time(&meeting.start_time), "2025-12-20T14:30:00Z");
    }

    #[test]
    fn test_invalid_email() {
        let err = request("Jane", "not-an-email", "2025-12-20T14:30:00", 45)
            .validate()
            .unwrap_err();
        assert_eq!(
            problems(err),
            vec!["user_email is not a valid email address".to_string()]
        );
    }

    #[test]
    fn test_rejects_loose_email_forms() {
        for email in [
            "jane@localhost",
            "a@b",
            "Jane Smith <jane@example.com>",
            "jane@[127.0.0.1]",
        ] {
            let err = request("Jane", email, "2025-12-20T14:30:00", 45)
                .validate()
                .unwrap_err();
            assert_eq!(
                problems(err),
                vec!["user_email is not a valid email address".to_string()],
                "accepted {email}"
            );
        }
    }

    #[test]
    fn test_email_trimmed_to_bare_address() {
        let meeting = request("Jane", "  jane@example.com ", "2025-12-20T14:30:00", 45)
            .validate()
            .unwrap();
        assert_eq!(meeting.user_email, "jane@example.com");
    }

    #[test]
    fn test_zero_and_negative_duration() {
        for duration in [0, -30] {
            let err = request("Jane", "jane@example.com", "2025-12-20T14:30:00", duration)
                .validate()
                .unwrap_err();
            assert_eq!(problems(err).len(), 1);
        }
    }

    #[test]
    fn test_unparseable_start_time() {
        let err = request("Jane", "jane@example.com", "next tuesday", 30)
            .validate()
            .unwrap_err();
        assert!(problems(err)[0].contains("start_time"));
    }

    #[test]
    fn test_collects_every_offending_field() {
        let err = request("  ", "nope", "garbage", 0).validate().unwrap_err();
        assert_eq!(problems(err).len(), 4);
    }

    #[test]
    fn test_offset_timestamp_converted_to_utc() {
        let dt = parse_start_time("2025-12-20T09:30:00-05:00").unwrap();
        assert_eq!(format_zoom_time(&dt), "2025-12-20T14:30:00Z");
    }

    #[test]
    fn test_accepted_timestamp_shapes() {
        for raw in [
            "2025-12-20T14:30:00",
            "2025-12-20T14:30:00.000",
            "2025-12-20T14:30",
            "2025-12-20T14:30:00Z",
        ] {
            let dt = parse_start_time(raw).unwrap_or_else(|| panic!("failed to parse {raw}"));
            assert_eq!(format_zoom_time(&dt), "2025-12-20T14:30:00Z");
        }
    }

    #[test]
    fn test_topic_keeps_name_verbatim() {
        assert_eq!(interview_topic("Zoë O'Neil"), "Interview with Zoë O'Neil");
    }
}
