pub mod preference;

pub use preference::Model as PreferenceRecord;
