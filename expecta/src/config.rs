//! The [`config`](self) module holds process wide defaults of the engine.
//!
//! The configuration is read once from the environment:
//!
//! - `EXPECTA_DEFAULT_LENIENCY`: `strict`, `naggy` or `nice`. Policy of mocks
//!   created without an explicit [`Leniency`]. Defaults to `naggy`.
//! - `EXPECTA_VERBOSE`: `1`/`true` to include the tried expectations in the
//!   warnings of naggy mocks.

use std::env::var;

use once_cell::sync::Lazy;

use crate::Leniency;

/// Name of the environment variable for the default leniency.
pub const ENV_DEFAULT_LENIENCY: &str = "EXPECTA_DEFAULT_LENIENCY";

/// Name of the environment variable for verbose warnings.
pub const ENV_VERBOSE: &str = "EXPECTA_VERBOSE";

/// Process wide defaults.
#[derive(Default, Debug, Clone, Copy, Eq, PartialEq)]
pub struct Config {
    /// Policy of mocks created without an explicit [`Leniency`].
    pub default_leniency: Leniency,

    /// Include the tried expectations in warnings about unexpected calls.
    pub verbose: bool,
}

impl Config {
    /// Get the configuration of the current process.
    #[must_use]
    pub fn current() -> &'static Config {
        &CONFIG
    }

    /// Read the configuration from the environment of the process.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| var(key).ok())
    }

    /// Read the configuration from any key/value source. Invalid values are
    /// logged and replaced by their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_DEFAULT_LENIENCY) {
            match value.parse() {
                Ok(leniency) => config.default_leniency = leniency,
                Err(err) => tracing::warn!(variable = ENV_DEFAULT_LENIENCY, "{err}"),
            }
        }

        if let Some(value) = lookup(ENV_VERBOSE) {
            match value.trim().to_ascii_lowercase().as_str() {
                "1" | "true" | "yes" | "on" => config.verbose = true,
                "" | "0" | "false" | "no" | "off" => config.verbose = false,
                other => tracing::warn!(
                    variable = ENV_VERBOSE,
                    "invalid boolean `{other}`, using `false`"
                ),
            }
        }

        config
    }
}

static CONFIG: Lazy<Config> = Lazy::new(Config::from_env);
