use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("invalid meeting request: {}", .0.join("; "))]
    Validation(Vec<String>),

    #[error("Zoom authentication failed ({status}): {message}")]
    Auth { status: u16, message: String },

    #[error("Zoom credentials not configured: missing {}", .0.join(", "))]
    NotConfigured(Vec<&'static str>),

    #[error("Zoom API error: {message}")]
    Upstream { status: Option<u16>, message: String },

    #[error("Zoom API timed out: {0}")]
    Timeout(String),
}

impl AppError {
    pub fn kind(&self) -> &'static str {
        match self {
            AppError::Validation(_) => "validation_error",
            AppError::Auth { .. } => "auth_error",
            AppError::NotConfigured(_) => "not_configured",
            AppError::Upstream { .. } => "upstream_error",
            AppError::Timeout(_) => "upstream_timeout",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AppError::Auth { status: 403, .. } => StatusCode::FORBIDDEN,
            AppError::Auth { .. } => StatusCode::UNAUTHORIZED,
            AppError::NotConfigured(_) => StatusCode::SERVICE_UNAVAILABLE,
            AppError::Upstream { .. } => StatusCode::BAD_GATEWAY,
            AppError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
        }
    }

    /// Status code Zoom answered with, when the failure came from a response.
    pub fn upstream_status(&self) -> Option<u16> {
        match self {
            AppError::Auth { status, .. } => Some(*status),
            AppError::Upstream { status, .. } => *status,
            _ => None,
        }
    }

    pub(crate) fn from_transport(context: &str, err: reqwest::Error) -> Self {
        if err.is_timeout() {
            AppError::Timeout(context.to_string())
        } else {
            AppError::Upstream {
                status: err.status().map(|s| s.as_u16()),
                message: format!("{context}: {err}"),
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();

        let mut body = serde_json::json!({
            "error": self.kind(),
            "message": self.to_string(),
        });
        if let AppError::Validation(details) = &self {
            body["details"] = serde_json::json!(details);
        }

        (status, axum::Json(body)).into_response()
    }
}
