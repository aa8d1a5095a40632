pub mod interview;
pub mod meetings;
