//! Nutrilens Service - barcode-to-grade assembly.
//!
//! Glues the resolution chain and the grading engine together and shapes
//! the result into the record a presentation layer consumes: identity
//! fields, the nutrient triple, the legacy health score, and the full
//! Nutri-Score result.
//!
//! # Example
//!
//! ```rust,no_run
//! use nutrilens_core::AppConfig;
//! use nutrilens_service::Nutrilens;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let lens = Nutrilens::new(&AppConfig::load_with_env()?)?;
//!
//! if let Some(response) = lens.scan("8901030372165").await {
//!     println!("{} scores {}", response.name, response.nutriscore.grade);
//! }
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]

use nutrilens_core::{AppConfig, ProductRecord};
use nutrilens_lookup::{ProductSearch, ResolutionChain, Result as LookupResult};
use nutrilens_score::{grade_record, health_score, ScoreResult};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The fat/sugar/protein triple shown next to every product.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NutrientSummary {
    /// Total fat per 100 g, in grams
    pub fat: f64,
    /// Sugars per 100 g, in grams
    pub sugar: f64,
    /// Protein per 100 g, in grams
    pub protein: f64,
}

/// Fully graded lookup result, ready for a presentation layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProductResponse {
    /// The barcode candidate that matched
    pub barcode: String,
    /// Display name
    pub name: String,
    /// Brand name
    pub brand: String,
    /// Headline nutrient triple
    pub nutrients: NutrientSummary,
    /// Legacy 0-100 score derived from the letter grade (lossy,
    /// display-oriented; carries no information beyond the grade)
    pub health_score: u8,
    /// Full Nutri-Score result with the point breakdown
    pub nutriscore: ScoreResult,
    /// Raw provider payload for downstream re-derivation, when available
    #[serde(skip_serializing_if = "Option::is_none")]
    pub raw_product_data: Option<Value>,
}

impl ProductResponse {
    /// Grade a resolved record and assemble the response.
    ///
    /// Grading prefers the raw provider payload when the record carries
    /// one, since it may hold fields the canonical mapping dropped.
    #[must_use]
    pub fn from_record(record: ProductRecord) -> Self {
        let nutriscore = grade_record(&record);

        Self {
            barcode: record.barcode,
            name: record.name,
            brand: record.brand,
            nutrients: NutrientSummary {
                fat: record.profile.fat_g,
                sugar: record.profile.sugars_g,
                protein: record.profile.protein_g,
            },
            health_score: health_score(nutriscore.grade),
            nutriscore,
            raw_product_data: record.raw,
        }
    }
}

/// Barcode scanning facade: resolution chain plus grading.
pub struct Nutrilens {
    chain: ResolutionChain,
    search: ProductSearch,
}

impl Nutrilens {
    /// Create a facade with the standard provider chain.
    ///
    /// # Errors
    /// Returns error if the HTTP clients cannot be created.
    pub fn new(config: &AppConfig) -> LookupResult<Self> {
        Ok(Self {
            chain: ResolutionChain::new(&config.lookup)?,
            search: ProductSearch::new(&config.lookup, config.search.clone())?,
        })
    }

    /// Create a facade from pre-built parts (custom providers, tests).
    #[must_use]
    pub fn with_parts(chain: ResolutionChain, search: ProductSearch) -> Self {
        Self { chain, search }
    }

    /// Resolve a barcode and grade the result.
    ///
    /// Returns `None` when no provider matched any candidate.
    pub async fn scan(&self, barcode: &str) -> Option<ProductResponse> {
        let record = self.chain.resolve(barcode).await?;
        tracing::debug!(barcode = %record.barcode, source = %record.source, "grading product");
        Some(ProductResponse::from_record(record))
    }

    /// Search products by name and grade every hit.
    ///
    /// # Errors
    /// Returns error on transport failure or a malformed response body.
    pub async fn search(&self, query: &str) -> LookupResult<Vec<ProductResponse>> {
        let records = self.search.search(query).await?;
        Ok(records.into_iter().map(ProductResponse::from_record).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrilens_core::{LookupConfig, NutrientProfile, SearchConfig};
    use serde_json::json;

    fn chocolate_record() -> ProductRecord {
        ProductRecord {
            barcode: "3017620422003".to_string(),
            name: "Dark Chocolate".to_string(),
            brand: "Choco Co".to_string(),
            profile: NutrientProfile {
                energy_kj: 2250.0,
                fat_g: 31.0,
                saturated_fat_g: 19.2,
                sugars_g: 43.5,
                protein_g: 5.1,
                fiber_g: 7.0,
                ..NutrientProfile::default()
            },
            vitamins: Vec::new(),
            provider_score: Some(18),
            source: "OpenFoodFacts".to_string(),
            raw: None,
        }
    }

    #[test]
    fn test_response_carries_the_contract_fields() {
        let response = ProductResponse::from_record(chocolate_record());

        assert_eq!(response.barcode, "3017620422003");
        assert_eq!(response.nutrients.fat, 31.0);
        assert_eq!(response.nutrients.sugar, 43.5);
        assert_eq!(response.nutrients.protein, 5.1);
        // Grade D maps to 40 on the legacy scale
        assert_eq!(response.nutriscore.grade.letter(), 'D');
        assert_eq!(response.health_score, 40);
        assert!(response.raw_product_data.is_none());
    }

    #[test]
    fn test_raw_payload_passes_through_and_drives_grading() {
        let mut record = chocolate_record();
        record.raw = Some(json!({
            "categories": "Beverages",
            "nutriments": {"sugars_100g": 1.0}
        }));

        let response = ProductResponse::from_record(record);
        // The raw payload wins over the canonical profile
        assert!(response.nutriscore.is_beverage);
        assert!(response.raw_product_data.is_some());
    }

    #[test]
    fn test_response_serialization_shape() {
        let response = ProductResponse::from_record(chocolate_record());
        let value = serde_json::to_value(&response).expect("serialize response");

        assert!(value.get("barcode").is_some());
        assert!(value.get("nutrients").is_some());
        assert!(value.get("health_score").is_some());
        assert!(value["nutriscore"].get("breakdown").is_some());
        // Absent raw payload is omitted entirely
        assert!(value.get("raw_product_data").is_none());
    }

    #[tokio::test]
    async fn test_scan_not_found_is_none() {
        let config = LookupConfig::default();
        let chain =
            ResolutionChain::with_providers(&config, Vec::new()).expect("create empty chain");
        let search =
            ProductSearch::new(&config, SearchConfig::default()).expect("create search client");

        let lens = Nutrilens::with_parts(chain, search);
        assert!(lens.scan("123456789012").await.is_none());
    }
}
