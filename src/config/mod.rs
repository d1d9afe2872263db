//! Configuration loading for the salary components.
//!
//! This module loads `calculator.yaml`: the message channel id, the initial
//! form values, the tax years on offer and the period divisors.
//!
//! # Example
//!
//! ```no_run
//! use salary_breakdown::config::ConfigLoader;
//!
//! let config = ConfigLoader::load("./config/default").unwrap();
//! println!("Weeks per year: {}", config.divisors().weeks_per_year);
//! ```

mod loader;
mod types;

pub use loader::{CONFIG_FILE_NAME, ConfigLoader};
pub use types::{CalculatorConfig, DivisorConfig, FormDefaults};
