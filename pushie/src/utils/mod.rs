// pushie/src/utils/mod.rs

pub mod validation;
