//! Runner configuration read from the process environment.

use std::env;

pub const DEBUG_VAR: &str = "DEBUG";
pub const ORGANIZATION_VAR: &str = "OPENAI_ORGANIZATION";
pub const PROJECT_VAR: &str = "OPENAI_PROJECT_ID";
pub const MODEL_VAR: &str = "OPENAI_MODEL";

pub const DEFAULT_DEBUG: &str = "false";
pub const DEFAULT_MODEL: &str = "gpt-3.5-turbo-1106";

/// Settings for one run. Loaded once, never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// True only when `DEBUG` is exactly `"true"`.
    pub debug: bool,
    pub organization: Option<String>,
    pub project: Option<String>,
    pub model: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            debug: false,
            organization: None,
            project: None,
            model: DEFAULT_MODEL.to_string(),
        }
    }
}

impl Config {
    /// Create configuration from environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any variable source.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        // Case-sensitive: "TRUE", "1" and "yes" leave debug off.
        let debug = lookup(DEBUG_VAR).unwrap_or_else(|| DEFAULT_DEBUG.to_string()) == "true";

        Self {
            debug,
            organization: lookup(ORGANIZATION_VAR),
            project: lookup(PROJECT_VAR),
            model: lookup(MODEL_VAR).unwrap_or_else(|| DEFAULT_MODEL.to_string()),
        }
    }
}
