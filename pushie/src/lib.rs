// src/lib.rs
pub mod config;
pub mod db;
pub mod error;
pub mod features;
pub mod logging;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use error::{ApiError, AppError, AppResult, StorageError};
pub use features::preferences::PrefsStorage;
pub use features::pusher::{PushedResource, PwPushApi, PwPushRepository};
