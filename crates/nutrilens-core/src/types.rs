//! Shared types used across the Nutrilens crates.
//!
//! This module defines the canonical product shapes that every provider
//! response is normalized into before grading.

use serde::{Deserialize, Serialize};

/// Grams of salt equivalent to one milligram of sodium.
///
/// Salt is 2.5x sodium by mass; provider data reports sodium in mg.
const SALT_G_PER_SODIUM_MG: f64 = 2.5 / 1000.0;

/// Nutrient values per 100 g (solid food) or 100 ml (beverage).
///
/// Every numeric field defaults to zero; absence of a nutrient in provider
/// data is not an error. Providers without nutrition data produce an
/// all-zero profile so that name/brand lookups still succeed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NutrientProfile {
    /// Energy in kilojoules
    pub energy_kj: f64,
    /// Total fat in grams
    pub fat_g: f64,
    /// Saturated fat in grams
    pub saturated_fat_g: f64,
    /// Carbohydrates in grams
    pub carbohydrates_g: f64,
    /// Sugars in grams
    pub sugars_g: f64,
    /// Protein in grams
    pub protein_g: f64,
    /// Dietary fiber in grams
    pub fiber_g: f64,
    /// Salt in grams
    pub salt_g: f64,
    /// Sodium in milligrams
    pub sodium_mg: f64,
    /// Estimated fruit/vegetable/legume content in percent
    pub fruits_veg_percent: f64,
    /// Free-text category labels (comma-separated provider categories)
    pub categories: String,
    /// Free-text ingredient list
    pub ingredients_text: String,
    /// Additive tags (e.g. `en:e950`)
    pub additive_tags: Vec<String>,
}

impl NutrientProfile {
    /// Salt content in grams, derived from sodium when salt is unreported.
    #[must_use]
    pub fn salt_equivalent_g(&self) -> f64 {
        if self.salt_g == 0.0 && self.sodium_mg > 0.0 {
            self.sodium_mg * SALT_G_PER_SODIUM_MG
        } else {
            self.salt_g
        }
    }
}

/// Canonical product record produced by a provider parser.
///
/// Records are immutable after construction and are only ever built from a
/// successful provider response; the resolution chain never fabricates one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductRecord {
    /// The candidate barcode that was queried (kept for UI continuity,
    /// not necessarily the code the provider stored)
    pub barcode: String,
    /// Display name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Normalized nutrient values
    pub profile: NutrientProfile,
    /// Uppercase keys of vitamins reported with a non-zero per-100g value
    pub vitamins: Vec<String>,
    /// Score reported by the provider itself, if any
    pub provider_score: Option<i32>,
    /// Name of the provider that supplied the record
    pub source: String,
    /// Full raw provider payload, kept only for the primary provider so
    /// that grading can re-derive fields the canonical mapping dropped
    pub raw: Option<serde_json::Value>,
}

impl ProductRecord {
    /// Create a record with the given identity fields and an empty profile.
    ///
    /// Used by providers that supply name/brand but no nutrition data.
    #[must_use]
    pub fn without_nutrition(
        barcode: impl Into<String>,
        name: impl Into<String>,
        brand: impl Into<String>,
        source: impl Into<String>,
    ) -> Self {
        Self {
            barcode: barcode.into(),
            name: name.into(),
            brand: brand.into(),
            profile: NutrientProfile::default(),
            vitamins: Vec::new(),
            provider_score: None,
            source: source.into(),
            raw: None,
        }
    }
}
