//! Nutrilens Score - Nutri-Score 2023 grading engine.
//!
//! A pure, total function from a nutrient profile (or raw provider
//! payload) to a [`ScoreResult`]: no I/O, no hidden state, no failures.
//! Missing nutrients default to zero, so any input grades.
//!
//! # Modules
//!
//! - [`fields`] - Layered field resolution over raw payloads
//! - [`points`] - The fixed breakpoint tables for the eight sub-scores
//! - [`nutriscore`] - Score assembly and grade thresholds
//! - [`legacy`] - The lossy 0-100 health score and display helpers
//!
//! # Example
//!
//! ```rust
//! use nutrilens_core::NutrientProfile;
//! use nutrilens_score::{grade_profile, health_score, Grade};
//!
//! let profile = NutrientProfile {
//!     energy_kj: 1850.0,
//!     sugars_g: 34.0,
//!     saturated_fat_g: 4.0,
//!     protein_g: 6.0,
//!     ..NutrientProfile::default()
//! };
//!
//! let result = grade_profile(&profile);
//! assert_eq!(result.score, result.negative_points as i32 - result.positive_points as i32);
//! assert_eq!(health_score(result.grade), 40);
//! assert_eq!(result.grade, Grade::D);
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

pub mod fields;
pub mod legacy;
pub mod nutriscore;
pub mod points;

// Re-export commonly used types
pub use fields::{FieldRule, ScoreInputs};
pub use legacy::{health_score, rating_color, rating_text};
pub use nutriscore::{
    grade_payload, grade_profile, grade_record, score, Grade, ScoreBreakdown, ScoreResult,
};
