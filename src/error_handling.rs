//! Error types shared across the configuration, storage and web layers.
pub mod types;
