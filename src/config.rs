use std::env;
use std::fmt;

pub const DEFAULT_OAUTH_URL: &str = "https://zoom.us/oauth/token";
pub const DEFAULT_API_BASE_URL: &str = "https://api.zoom.us/v2";

#[derive(Clone, Default)]
pub struct ZoomCredentials {
    pub client_id: String,
    pub client_secret: String,
    pub account_id: String,
}

impl ZoomCredentials {
    /// Names of the credential variables that are unset or blank.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            ("ZOOM_CLIENT_ID", &self.client_id),
            ("ZOOM_CLIENT_SECRET", &self.client_secret),
            ("ZOOM_ACCOUNT_ID", &self.account_id),
        ]
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(name, _)| name)
        .collect()
    }

    pub fn is_configured(&self) -> bool {
        self.missing().is_empty()
    }
}

// Keep the secret out of logs and panic messages.
impl fmt::Debug for ZoomCredentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ZoomCredentials")
            .field("client_id", &self.client_id)
            .field(
                "client_secret",
                &if self.client_secret.is_empty() { "" } else { "<redacted>" },
            )
            .field("account_id", &self.account_id)
            .finish()
    }
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub port: u16,
    pub debug: bool,
    pub frontend_url: String,
    pub zoom: ZoomCredentials,
    pub zoom_oauth_url: String,
    pub zoom_api_base_url: String,
    pub zoom_user_id: String,
    pub http_timeout_secs: u64,
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        Self {
            port: var("PORT").and_then(|v| v.parse().ok()).unwrap_or(8000),
            debug: var("DEBUG").map(|v| parse_flag(&v)).unwrap_or(false),
            frontend_url: var("FRONTEND_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| "http://localhost:3000".to_string()),
            zoom: ZoomCredentials {
                client_id: var("ZOOM_CLIENT_ID").unwrap_or_default(),
                client_secret: var("ZOOM_CLIENT_SECRET").unwrap_or_default(),
                account_id: var("ZOOM_ACCOUNT_ID").unwrap_or_default(),
            },
            zoom_oauth_url: var("ZOOM_OAUTH_URL").unwrap_or_else(|| DEFAULT_OAUTH_URL.to_string()),
            zoom_api_base_url: var("ZOOM_API_BASE_URL")
                .map(|v| v.trim_end_matches('/').to_string())
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string()),
            zoom_user_id: var("ZOOM_USER_ID").unwrap_or_else(|| "me".to_string()),
            http_timeout_secs: var("HTTP_TIMEOUT_SECS")
                .and_then(|v| v.parse().ok())
                .filter(|secs| *secs > 0)
                .unwrap_or(10),
        }
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(
        value.to_ascii_lowercase().as_str(),
        "true" | "1" | "yes" | "on"
    )
}
