//! Nutrilens Core - Foundation crate for the Nutrilens barcode grading service.
//!
//! This crate provides the canonical data model, error handling, and
//! configuration management that the other Nutrilens crates depend on.
//!
//! # Modules
//!
//! - [`error`] - Central error types using thiserror
//! - [`config`] - TOML-based configuration with XDG paths
//! - [`types`] - Canonical product shapes (`NutrientProfile`, `ProductRecord`)
//!
//! # Example
//!
//! ```rust
//! use nutrilens_core::{AppConfig, NutrientProfile};
//!
//! let config = AppConfig::default();
//! assert_eq!(config.lookup.timeout_secs, 10);
//!
//! let profile = NutrientProfile {
//!     sodium_mg: 400.0,
//!     ..NutrientProfile::default()
//! };
//! assert!((profile.salt_equivalent_g() - 1.0).abs() < 1e-9);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod config;
pub mod error;
pub mod types;

// Re-export commonly used types
pub use config::{AppConfig, LookupConfig, SearchConfig};
pub use error::{ConfigError, ConfigResult, NutrilensError, Result};
pub use types::{NutrientProfile, ProductRecord};
