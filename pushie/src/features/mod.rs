// pushie/src/features/mod.rs

pub mod preferences;
pub mod pusher;
