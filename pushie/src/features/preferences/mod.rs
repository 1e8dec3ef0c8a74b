pub mod models;
pub mod repository;
pub mod store;

pub use repository::PreferenceRepository;
pub use store::{PrefsStorage, DEFAULT_MAX_VIEWS, MAX_VIEWS_KEY};
