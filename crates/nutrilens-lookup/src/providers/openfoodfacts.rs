//! `OpenFoodFacts` provider implementation.
//!
//! The primary provider: the only one that supplies nutrition data. Its
//! raw payload is kept on the record so that grading can re-derive fields
//! the canonical mapping dropped.

use super::common::{field_f64, field_str_or, json_f64};
use crate::provider::ProductProvider;
use nutrilens_core::{NutrientProfile, ProductRecord};
use serde_json::Value;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://world.openfoodfacts.org";

/// Nutriment keys checked for vitamin presence.
const VITAMIN_KEYS: [&str; 10] = [
    "vitamin-a",
    "vitamin-c",
    "vitamin-d",
    "vitamin-e",
    "vitamin-k",
    "vitamin-b1",
    "vitamin-b2",
    "vitamin-b6",
    "vitamin-b9",
    "vitamin-b12",
];

/// `OpenFoodFacts` product database.
///
/// Responses look like `{"status": 1, "product": {..., "nutriments": {...}}}`
/// with per-100g values keyed as `<nutrient>_100g`.
pub struct OpenFoodFactsProvider {
    base_url: String,
}

impl OpenFoodFactsProvider {
    /// Create a provider pointing at the public API.
    #[must_use]
    pub fn new() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }

    /// Create a provider with a custom base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
        }
    }

    /// URL of the free-text search endpoint.
    #[must_use]
    pub fn search_url(&self) -> String {
        format!("{}/cgi/search.pl", self.base_url)
    }
}

impl Default for OpenFoodFactsProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductProvider for OpenFoodFactsProvider {
    fn name(&self) -> &str {
        "OpenFoodFacts"
    }

    fn request_url(&self, candidate: &str) -> String {
        format!("{}/api/v0/product/{candidate}.json", self.base_url)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn parse(&self, body: &Value, candidate: &str) -> Option<ProductRecord> {
        if body.get("status").and_then(Value::as_i64) != Some(1) {
            return None;
        }
        let product = body.get("product")?;
        let nutriments = product.get("nutriments").unwrap_or(&Value::Null);

        // The dedicated kJ key is preferred; plain "energy" is kJ on this API
        let mut energy_kj = field_f64(nutriments, "energy-kj_100g");
        if energy_kj == 0.0 {
            energy_kj = field_f64(nutriments, "energy_100g");
        }

        let profile = NutrientProfile {
            energy_kj,
            fat_g: field_f64(nutriments, "fat_100g"),
            saturated_fat_g: field_f64(nutriments, "saturated-fat_100g"),
            carbohydrates_g: field_f64(nutriments, "carbohydrates_100g"),
            sugars_g: field_f64(nutriments, "sugars_100g"),
            protein_g: field_f64(nutriments, "proteins_100g"),
            fiber_g: field_f64(nutriments, "fiber_100g"),
            salt_g: field_f64(nutriments, "salt_100g"),
            sodium_mg: field_f64(nutriments, "sodium_100g") * 1000.0,
            fruits_veg_percent: field_f64(
                nutriments,
                "fruits-vegetables-nuts-estimate-from-ingredients_100g",
            ),
            categories: field_str_or(product, "categories", ""),
            ingredients_text: field_str_or(product, "ingredients_text", ""),
            additive_tags: product
                .get("additives_tags")
                .and_then(Value::as_array)
                .map(|tags| {
                    tags.iter()
                        .filter_map(Value::as_str)
                        .map(str::to_string)
                        .collect()
                })
                .unwrap_or_default(),
        };

        Some(ProductRecord {
            barcode: candidate.to_string(),
            name: field_str_or(product, "product_name", "Unknown"),
            brand: field_str_or(product, "brands", "Unknown"),
            profile,
            vitamins: extract_vitamins(nutriments),
            provider_score: product
                .get("nutriscore_score")
                .and_then(json_f64)
                .map(|score| score as i32),
            source: self.name().to_string(),
            raw: Some(product.clone()),
        })
    }
}

/// Collect the uppercase keys of vitamins with a non-zero per-100g value.
fn extract_vitamins(nutriments: &Value) -> Vec<String> {
    VITAMIN_KEYS
        .iter()
        .filter(|key| field_f64(nutriments, &format!("{key}_100g")) != 0.0)
        .map(|key| key.to_uppercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_body() -> Value {
        json!({
            "status": 1,
            "product": {
                "product_name": "Dark Chocolate",
                "brands": "Choco Co",
                "categories": "Snacks, Chocolates",
                "ingredients_text": "Cocoa mass, sugar",
                "additives_tags": ["en:e322"],
                "nutriscore_score": 18,
                "nutriments": {
                    "energy-kj_100g": 2250,
                    "fat_100g": 31.0,
                    "saturated-fat_100g": "19.2",
                    "carbohydrates_100g": 46.0,
                    "sugars_100g": 43.5,
                    "proteins_100g": 5.1,
                    "fiber_100g": 7.0,
                    "salt_100g": 0.02,
                    "sodium_100g": 0.008,
                    "vitamin-b2_100g": 0.1
                }
            }
        })
    }

    #[test]
    fn test_parse_hit() {
        let provider = OpenFoodFactsProvider::new();
        let record = provider
            .parse(&sample_body(), "3017620422003")
            .expect("parse product");

        assert_eq!(record.barcode, "3017620422003");
        assert_eq!(record.name, "Dark Chocolate");
        assert_eq!(record.brand, "Choco Co");
        assert_eq!(record.source, "OpenFoodFacts");
        assert_eq!(record.profile.energy_kj, 2250.0);
        // String-encoded numbers are accepted
        assert_eq!(record.profile.saturated_fat_g, 19.2);
        // Sodium is converted from grams to milligrams
        assert!((record.profile.sodium_mg - 8.0).abs() < 1e-9);
        assert_eq!(record.profile.additive_tags, vec!["en:e322"]);
        assert_eq!(record.vitamins, vec!["VITAMIN-B2"]);
        assert_eq!(record.provider_score, Some(18));
        assert!(record.raw.is_some());
    }

    #[test]
    fn test_parse_status_zero_is_miss() {
        let provider = OpenFoodFactsProvider::new();
        let body = json!({"status": 0, "status_verbose": "product not found"});
        assert!(provider.parse(&body, "123").is_none());
    }

    #[test]
    fn test_parse_missing_product_is_miss() {
        let provider = OpenFoodFactsProvider::new();
        assert!(provider.parse(&json!({"status": 1}), "123").is_none());
        assert!(provider.parse(&json!("garbage"), "123").is_none());
    }

    #[test]
    fn test_parse_without_nutriments_zero_fills() {
        let provider = OpenFoodFactsProvider::new();
        let body = json!({
            "status": 1,
            "product": {"product_name": "Mystery", "brands": "Acme"}
        });
        let record = provider.parse(&body, "123").expect("parse product");
        assert_eq!(record.profile, NutrientProfile::default());
        assert!(record.vitamins.is_empty());
    }

    #[test]
    fn test_energy_falls_back_to_plain_key() {
        let provider = OpenFoodFactsProvider::new();
        let body = json!({
            "status": 1,
            "product": {"nutriments": {"energy_100g": 840}}
        });
        let record = provider.parse(&body, "123").expect("parse product");
        assert_eq!(record.profile.energy_kj, 840.0);
        assert_eq!(record.name, "Unknown");
    }

    #[test]
    fn test_request_url() {
        let provider = OpenFoodFactsProvider::with_base_url("http://localhost:9000");
        assert_eq!(
            provider.request_url("123"),
            "http://localhost:9000/api/v0/product/123.json"
        );
    }
}
