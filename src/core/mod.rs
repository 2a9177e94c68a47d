// Core modules: error model, field coercion, raw-json retention, and settings.
pub mod config;
pub mod error;
pub mod fields;
pub mod store;
