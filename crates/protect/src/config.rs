//! Configuration loading and validation for the protection service.
//!
//! All values are read from environment variables at startup. The process
//! will exit with a clear error message if any value is invalid.

use anyhow::{Context, Result};
use serde::Deserialize;

/// Signing secret used when `SIGNING_SECRET` is not set.
///
/// A fixed shared secret is an acknowledged simplification of this
/// service's design; deployments that care should inject their own.
pub const DEFAULT_SIGNING_SECRET: &str = "confidential_string";

/// Validated service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// TCP port the HTTP server listens on.
    #[serde(default = "default_listen_port")]
    pub listen_port: u16,

    /// Shared secret for signature generation and verification.
    #[serde(default = "default_signing_secret")]
    pub signing_secret: String,

    /// Tracing log level (e.g. `"info"`, `"debug"`).
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_listen_port() -> u16 {
    8080
}
fn default_signing_secret() -> String {
    DEFAULT_SIGNING_SECRET.into()
}
fn default_log_level() -> String {
    "info".into()
}

impl Config {
    /// Load and validate configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if any variable cannot be parsed or fails
    /// validation.
    pub fn from_env() -> Result<Self> {
        let cfg = config::Config::builder()
            .add_source(config::Environment::default())
            .build()
            .context("failed to build configuration from environment")?;

        let c: Config = cfg
            .try_deserialize()
            .context("failed to deserialise configuration")?;

        c.validate()?;
        Ok(c)
    }

    /// Validate all fields, returning a descriptive error on the first failure.
    fn validate(&self) -> Result<()> {
        if self.signing_secret.trim().is_empty() {
            anyhow::bail!("SIGNING_SECRET must not be empty");
        }
        if self.listen_port == 0 {
            anyhow::bail!("LISTEN_PORT must be a non-zero port");
        }
        Ok(())
    }
}
