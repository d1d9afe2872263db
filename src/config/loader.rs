//! Configuration loading functionality.
//!
//! This module provides the [`ConfigLoader`] type for loading the salary
//! component configuration from a YAML file.

use std::fs;
use std::path::Path;

use crate::error::{SalaryError, SalaryResult};
use crate::models::PeriodDivisors;

use super::types::{CalculatorConfig, FormDefaults};

/// Name of the configuration file inside the configuration directory.
pub const CONFIG_FILE_NAME: &str = "calculator.yaml";

/// Loads and provides access to the salary component configuration.
///
/// # Directory Structure
///
/// ```text
/// config/default/
/// └── calculator.yaml   # channel, form defaults, tax years, divisors
/// ```
///
/// # Example
///
/// ```no_run
/// use salary_breakdown::config::ConfigLoader;
///
/// let loader = ConfigLoader::load("./config/default")?;
/// println!("Publishing on: {}", loader.channel());
/// # Ok::<(), salary_breakdown::error::SalaryError>(())
/// ```
#[derive(Debug, Clone)]
pub struct ConfigLoader {
    config: CalculatorConfig,
    divisors: PeriodDivisors,
}

impl ConfigLoader {
    /// Loads configuration from the specified directory.
    ///
    /// # Returns
    ///
    /// Returns a `ConfigLoader` on success, or an error if:
    /// - `calculator.yaml` is missing
    /// - the file contains invalid YAML
    /// - any divisor is zero or negative
    pub fn load<P: AsRef<Path>>(path: P) -> SalaryResult<Self> {
        let file_path = path.as_ref().join(CONFIG_FILE_NAME);
        let path_str = file_path.display().to_string();

        let content = fs::read_to_string(&file_path).map_err(|_| SalaryError::ConfigNotFound {
            path: path_str.clone(),
        })?;

        Self::from_yaml_str(&content).map_err(|err| match err {
            SalaryError::ConfigParseError { message, .. } => SalaryError::ConfigParseError {
                path: path_str,
                message,
            },
            other => other,
        })
    }

    /// Parses configuration from YAML text.
    pub fn from_yaml_str(content: &str) -> SalaryResult<Self> {
        let config: CalculatorConfig =
            serde_yaml::from_str(content).map_err(|e| SalaryError::ConfigParseError {
                path: "<inline>".to_string(),
                message: e.to_string(),
            })?;

        Self::from_config(config)
    }

    /// Wraps an already-built configuration, validating its divisors.
    pub fn from_config(config: CalculatorConfig) -> SalaryResult<Self> {
        let divisors = PeriodDivisors::new(
            config.divisors.weeks_per_year,
            config.divisors.fortnights_per_year,
            config.divisors.months_per_year,
        )
        .map_err(|e| SalaryError::ConfigParseError {
            path: "<inline>".to_string(),
            message: e.to_string(),
        })?;

        Ok(Self { config, divisors })
    }

    /// Returns the built-in configuration used when no file is supplied.
    pub fn builtin() -> Self {
        let config = CalculatorConfig::default();
        let divisors = PeriodDivisors {
            weeks_per_year: config.divisors.weeks_per_year,
            fortnights_per_year: config.divisors.fortnights_per_year,
            months_per_year: config.divisors.months_per_year,
        };
        Self { config, divisors }
    }

    /// Returns the underlying configuration.
    pub fn config(&self) -> &CalculatorConfig {
        &self.config
    }

    /// Returns the message channel id.
    pub fn channel(&self) -> &str {
        &self.config.channel
    }

    /// Returns the initial form values.
    pub fn defaults(&self) -> &FormDefaults {
        &self.config.defaults
    }

    /// Returns the tax years offered to the user.
    pub fn tax_years(&self) -> &[String] {
        &self.config.tax_years
    }

    /// Returns the validated period divisors.
    pub fn divisors(&self) -> PeriodDivisors {
        self.divisors
    }
}
