//! Purpose: Materialization settings consumed once per call.
//! Exports: `Config`, `JSON_STORE_ENV`.
//! Role: Carries the raw-retention flag; loading beyond the environment is left to callers.
//! Invariants: Raw retention is disabled unless explicitly enabled.

use crate::core::error::{Error, ErrorKind};

/// Environment variable read by `Config::from_env`.
pub const JSON_STORE_ENV: &str = "GRAPHKIT_JSON_STORE_ENABLED";

#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Config {
    json_store_enabled: bool,
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_json_store(mut self, enabled: bool) -> Self {
        self.json_store_enabled = enabled;
        self
    }

    pub fn is_json_store_enabled(&self) -> bool {
        self.json_store_enabled
    }

    /// Defaults overridden by `GRAPHKIT_JSON_STORE_ENABLED` when set.
    pub fn from_env() -> Result<Self, Error> {
        let mut config = Self::new();
        if let Ok(value) = std::env::var(JSON_STORE_ENV) {
            config.json_store_enabled = parse_flag(&value)?;
        }
        Ok(config)
    }
}

fn parse_flag(value: &str) -> Result<bool, Error> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        other => Err(Error::new(ErrorKind::Usage)
            .with_message(format!("invalid boolean flag {other:?}"))
            .with_field(JSON_STORE_ENV)),
    }
}
