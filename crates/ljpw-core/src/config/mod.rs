//! LJPW configuration types.
//!
//! Every section deserializes with defaults, so a partial TOML file (or no
//! file at all) yields a complete configuration:
//!
//! ```toml
//! [integrator]
//! method = "euler"
//! step_size = 0.005
//!
//! [phase]
//! autopoietic_love = 0.75
//! ```
//!
//! [`LjpwConfig::load`] layers an optional file under environment variables
//! with the `LJPW` prefix and `__` separator, e.g.
//! `LJPW_INTEGRATOR__DURATION=120`.

mod dynamics;
mod integrator;
mod oscillator;
mod phase;


pub use self::dynamics::DynamicsConfig;
pub use self::integrator::{IntegrationMethod, IntegratorConfig};
pub use self::oscillator::OscillatorConfig;
pub use self::phase::PhaseConfig;

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{LjpwError, LjpwResult};

/// Environment variable prefix read by [`LjpwConfig::load`].
pub const ENV_PREFIX: &str = "LJPW";

/// Top-level configuration aggregating every subsystem.
///
/// # Example
///
/// ```
/// use ljpw_core::config::{IntegrationMethod, LjpwConfig};
///
/// let config = LjpwConfig::default();
/// assert_eq!(config.integrator.method, IntegrationMethod::Rk4);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LjpwConfig {
    /// Enable debug logging of per-sample values.
    pub debug: bool,

    /// Coefficients of the coupled first-order model.
    pub dynamics: DynamicsConfig,

    /// Fixed-step integrator settings.
    pub integrator: IntegratorConfig,

    /// Phase label thresholds.
    pub phase: PhaseConfig,

    /// Second-order oscillator parameters.
    pub oscillator: OscillatorConfig,
}

impl LjpwConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration whose first-order dynamics hold every state constant.
    pub fn frozen_preset() -> Self {
        Self {
            dynamics: DynamicsConfig::frozen(),
            ..Default::default()
        }
    }

    /// Configuration using forward Euler with a finer step.
    pub fn euler_preset() -> Self {
        Self {
            integrator: IntegratorConfig {
                method: IntegrationMethod::Euler,
                step_size: 0.001,
                record_every: 100,
                ..Default::default()
            },
            ..Default::default()
        }
    }

    /// Load configuration from a TOML file.
    pub fn from_file(path: &Path) -> LjpwResult<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            LjpwError::ConfigError(format!(
                "Failed to read config file {}: {}",
                path.display(),
                e
            ))
        })?;

        let config: LjpwConfig = toml::from_str(&content)
            .map_err(|e| LjpwError::ConfigError(format!("Failed to parse config file: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Load configuration from an optional file and the environment.
    ///
    /// Sources are applied in order:
    /// 1. built-in defaults
    /// 2. `path`, if given (format inferred from the extension)
    /// 3. environment variables with the `LJPW_` prefix
    pub fn load(path: Option<&Path>) -> LjpwResult<Self> {
        let mut builder = config::Config::builder();
        if let Some(path) = path {
            if !path.exists() {
                return Err(LjpwError::ConfigError(format!(
                    "Config file not found: {}",
                    path.display()
                )));
            }
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder = builder.add_source(
            config::Environment::with_prefix(ENV_PREFIX)
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: LjpwConfig = builder.build()?.try_deserialize()?;
        config.validate()?;
        debug!(
            path = ?path.map(|p| p.display().to_string()),
            method = %config.integrator.method,
            step_size = config.integrator.step_size,
            "configuration loaded"
        );
        Ok(config)
    }

    /// Serialize the configuration as pretty TOML.
    pub fn to_toml(&self) -> LjpwResult<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns `LjpwError::ConfigError` naming the failing section.
    pub fn validate(&self) -> LjpwResult<()> {
        self.dynamics
            .validate()
            .map_err(|e| LjpwError::ConfigError(format!("dynamics: {}", e)))?;
        self.integrator
            .validate()
            .map_err(|e| LjpwError::ConfigError(format!("integrator: {}", e)))?;
        self.phase
            .validate()
            .map_err(|e| LjpwError::ConfigError(format!("phase: {}", e)))?;
        self.oscillator
            .validate()
            .map_err(|e| LjpwError::ConfigError(format!("oscillator: {}", e)))?;
        Ok(())
    }
}
