use reqwest::{Client, StatusCode};
use serde::Deserialize;

use super::provider_message;
use crate::config::ZoomCredentials;
use crate::errors::AppError;

#[derive(Debug, Clone, Deserialize)]
pub struct AccessToken {
    pub access_token: String,
    pub expires_in: u64,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

/// Server-to-Server OAuth: trades account credentials for a bearer token.
pub struct ZoomOAuth {
    client: Client,
    token_url: String,
    credentials: ZoomCredentials,
}

impl ZoomOAuth {
    pub fn new(client: Client, token_url: String, credentials: ZoomCredentials) -> Self {
        Self {
            client,
            token_url,
            credentials,
        }
    }

    /// Fetches a fresh token. Nothing is cached between calls.
    pub async fn acquire_access_token(&self) -> Result<AccessToken, AppError> {
        let missing = self.credentials.missing();
        if !missing.is_empty() {
            return Err(AppError::NotConfigured(missing));
        }

        let resp = self
            .client
            .post(&self.token_url)
            .basic_auth(&self.credentials.client_id, Some(&self.credentials.client_secret))
            .form(&[
                ("grant_type", "account_credentials"),
                ("account_id", self.credentials.account_id.as_str()),
            ])
            .send()
            .await
            .map_err(|e| AppError::from_transport("token request failed", e))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AppError::from_transport("failed to read token response", e))?;

        if matches!(
            status,
            StatusCode::BAD_REQUEST | StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN
        ) {
            let message = provider_message(&body);
            tracing::warn!(status = status.as_u16(), %message, "Zoom rejected OAuth credentials");
            return Err(AppError::Auth {
                status: status.as_u16(),
                message,
            });
        }
        if !status.is_success() {
            return Err(AppError::Upstream {
                status: Some(status.as_u16()),
                message: format!("token endpoint returned {status}: {}", provider_message(&body)),
            });
        }

        let token: AccessToken = serde_json::from_str(&body).map_err(|e| AppError::Upstream {
            status: Some(status.as_u16()),
            message: format!("unexpected token response: {e}"),
        })?;

        tracing::debug!(expires_in = token.expires_in, "acquired Zoom access token");
        Ok(token)
    }
}
