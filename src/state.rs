use crate::config::AppConfig;
use crate::services::meetings::MeetingProvider;

pub struct AppState {
    pub config: AppConfig,
    pub meetings: Box<dyn MeetingProvider>,
}
