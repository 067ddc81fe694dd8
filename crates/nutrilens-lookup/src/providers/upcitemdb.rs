//! UPCItemDB provider implementation.
//!
//! Supplies name/brand/category only; the nutrient profile is zero-filled
//! so the grading engine treats matches as nutritionally empty.

use super::common::field_str_or;
use crate::provider::ProductProvider;
use nutrilens_core::ProductRecord;
use serde_json::Value;

/// Default API host (trial tier).
pub const DEFAULT_BASE_URL: &str = "https://api.upcitemdb.com/prod/trial";

/// UPCItemDB product database.
///
/// Responses look like `{"code": "OK", "items": [{...}]}`.
pub struct UpcItemDbProvider {
    base_url: String,
}

impl UpcItemDbProvider {
    /// Create a provider pointing at the public trial API.
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
}

impl Default for UpcItemDbProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl ProductProvider for UpcItemDbProvider {
    fn name(&self) -> &str {
        "UPCItemDB"
    }

    fn request_url(&self, candidate: &str) -> String {
        format!("{}/lookup?upc={candidate}", self.base_url)
    }

    fn parse(&self, body: &Value, candidate: &str) -> Option<ProductRecord> {
        if body.get("code").and_then(Value::as_str) != Some("OK") {
            return None;
        }
        let item = body.get("items")?.as_array()?.first()?;

        let mut record = ProductRecord::without_nutrition(
            candidate,
            field_str_or(item, "title", "Unknown"),
            field_str_or(item, "brand", "Unknown"),
            self.name(),
        );
        record.profile.categories = field_str_or(item, "category", "");
        Some(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use nutrilens_core::NutrientProfile;
    use serde_json::json;

    #[test]
    fn test_parse_hit_zero_fills_nutrition() {
        let provider = UpcItemDbProvider::new();
        let body = json!({
            "code": "OK",
            "items": [{
                "title": "Sparkling Water 12pk",
                "brand": "Bubbly",
                "category": "Food, Beverages & Tobacco > Beverages"
            }]
        });

        let record = provider.parse(&body, "012345678905").expect("parse item");
        assert_eq!(record.barcode, "012345678905");
        assert_eq!(record.name, "Sparkling Water 12pk");
        assert_eq!(record.brand, "Bubbly");
        assert_eq!(record.source, "UPCItemDB");
        assert_eq!(
            record.profile.categories,
            "Food, Beverages & Tobacco > Beverages"
        );
        // No nutrition data on this API
        let expected = NutrientProfile {
            categories: record.profile.categories.clone(),
            ..NutrientProfile::default()
        };
        assert_eq!(record.profile, expected);
        assert!(record.raw.is_none());
    }

    #[test]
    fn test_parse_error_code_is_miss() {
        let provider = UpcItemDbProvider::new();
        let body = json!({"code": "INVALID_UPC", "items": []});
        assert!(provider.parse(&body, "123").is_none());
    }

    #[test]
    fn test_parse_empty_items_is_miss() {
        let provider = UpcItemDbProvider::new();
        let body = json!({"code": "OK", "items": []});
        assert!(provider.parse(&body, "123").is_none());
    }

    #[test]
    fn test_request_url() {
        let provider = UpcItemDbProvider::new();
        assert_eq!(
            provider.request_url("012345678905"),
            "https://api.upcitemdb.com/prod/trial/lookup?upc=012345678905"
        );
    }
}
