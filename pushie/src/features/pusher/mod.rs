pub mod api;
pub mod dto;
pub mod history;
pub mod repository;
pub mod service;
pub mod view_state;

pub use api::{PusherApi, PwPushApi};
pub use dto::{PushedResource, SubmissionRequest};
pub use history::{NoopHistory, PushHistory};
pub use repository::PwPushRepository;
pub use service::PusherService;
pub use view_state::{PushOutcome, PusherEvent, ViewState};
