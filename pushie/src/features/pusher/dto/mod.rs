// pushie/src/features/pusher/dto/mod.rs

pub mod requests;
pub mod responses;

pub use requests::{PasswordPayload, PushPayload, SubmissionRequest};
pub use responses::{rejection_message, PushedResource};
