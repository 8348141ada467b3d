#![forbid(unsafe_code)]

//! Tooltip configuration.
//!
//! Both knobs are absolute limits on the popup's left offset, applied after
//! container clamping:
//!
//! - `min_left`: the left offset never ends below this value, even if that
//!   pushes the popup outside its container.
//! - `enforce_max_left`: the popup never extends past the right edge of the
//!   host's editor container.
//!
//! # Environment
//!
//! | Variable | Meaning |
//! |----------|---------|
//! | `FLIPTIP_MIN_LEFT` | float, sets `min_left` |
//! | `FLIPTIP_MAX_LEFT_CHECK` | bool (`1/0/true/false/yes/no/on/off`) |
//!
//! Invalid values leave the default in place and are reported through
//! [`ConfigParse::errors`].

use std::env;
use std::fmt;

const ENV_MIN_LEFT: &str = "FLIPTIP_MIN_LEFT";
const ENV_MAX_LEFT_CHECK: &str = "FLIPTIP_MAX_LEFT_CHECK";

/// Absolute left-offset limits.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct TooltipConfig {
    /// Lowest allowed left offset.
    pub min_left: Option<f64>,
    /// Clamp so the popup cannot extend past the editor container's width.
    pub enforce_max_left: bool,
}

impl TooltipConfig {
    /// Set the minimum left offset.
    #[must_use]
    pub fn min_left(mut self, min_left: f64) -> Self {
        self.min_left = Some(min_left);
        self
    }

    /// Enable or disable the maximum-left bound.
    #[must_use]
    pub fn enforce_max_left(mut self, enforce: bool) -> Self {
        self.enforce_max_left = enforce;
        self
    }

    /// Parse config from environment variables.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_env_with_diagnostics().config
    }

    /// Parse config from environment variables and return diagnostics.
    #[must_use]
    pub fn from_env_with_diagnostics() -> ConfigParse {
        Self::from_env_with(|key| env::var(key).ok())
    }

    /// Parse config using a custom lookup (for tests).
    pub fn from_env_with<F>(mut get: F) -> ConfigParse
    where
        F: FnMut(&str) -> Option<String>,
    {
        let mut config = Self::default();
        let mut errors = Vec::new();

        if let Some(value) = get(ENV_MIN_LEFT) {
            match value.trim().parse::<f64>() {
                Ok(parsed) if parsed.is_finite() => config.min_left = Some(parsed),
                _ => errors.push(ConfigError::new(
                    "min_left",
                    value,
                    "expected finite number",
                )),
            }
        }

        if let Some(value) = get(ENV_MAX_LEFT_CHECK) {
            match parse_bool(&value) {
                Some(parsed) => config.enforce_max_left = parsed,
                None => errors.push(ConfigError::new(
                    "enforce_max_left",
                    value,
                    "expected bool (1/0/true/false)",
                )),
            }
        }

        ConfigParse { config, errors }
    }

    /// Validate config constraints and return all violations.
    pub fn validate(&self) -> Result<(), Vec<ConfigError>> {
        let mut errors = Vec::new();
        if let Some(min_left) = self.min_left
            && !min_left.is_finite()
        {
            errors.push(ConfigError::new(
                "min_left",
                min_left.to_string(),
                "must be finite",
            ));
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(errors)
        }
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Result of parsing configuration, with any rejected values.
#[derive(Debug, Clone)]
pub struct ConfigParse {
    pub config: TooltipConfig,
    pub errors: Vec<ConfigError>,
}

/// Configuration error with field context.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    pub field: &'static str,
    pub value: String,
    pub message: String,
}

impl ConfigError {
    fn new(field: &'static str, value: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field,
            value: value.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={} ({})", self.field, self.value, self.message)
    }
}

impl std::error::Error for ConfigError {}
