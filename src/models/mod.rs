pub mod meeting;
pub mod status;

pub use meeting::{MeetingRequest, MeetingResult, ScheduledMeeting};
pub use status::ZoomStatus;
