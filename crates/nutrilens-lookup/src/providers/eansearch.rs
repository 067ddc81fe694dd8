//! EAN-Search provider implementation.
//!
//! Requires an API token; without one the provider is permanently skipped
//! by the chain. Like UPCItemDB it carries no nutrition data.

use super::common::field_str_or;
use crate::provider::ProductProvider;
use nutrilens_core::ProductRecord;
use serde_json::Value;

/// Default API host.
pub const DEFAULT_BASE_URL: &str = "https://api.ean-search.org";

/// EAN-Search product database.
///
/// Responses look like `{"products": [{...}]}`.
pub struct EanSearchProvider {
    base_url: String,
    token: Option<String>,
}

impl EanSearchProvider {
    /// Create a provider with the given API token (`None` disables it).
    #[must_use]
    pub fn new(token: Option<String>) -> Self {
        Self::with_base_url(DEFAULT_BASE_URL, token)
    }

    /// Create a provider with a custom base URL.
    #[must_use]
    pub fn with_base_url(base_url: impl Into<String>, token: Option<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token,
        }
    }
}

impl ProductProvider for EanSearchProvider {
    fn name(&self) -> &str {
        "EAN-Search"
    }

    fn is_configured(&self) -> bool {
        self.token.is_some()
    }

    fn request_url(&self, candidate: &str) -> String {
        let token = self.token.as_deref().unwrap_or_default();
        format!(
            "{}/api?token={token}&op=barcode-lookup&ean={candidate}&format=json",
            self.base_url
        )
    }

    fn parse(&self, body: &Value, candidate: &str) -> Option<ProductRecord> {
        let product = body.get("products")?.as_array()?.first()?;

        let mut record = ProductRecord::without_nutrition(
            candidate,
            field_str_or(product, "name", "Unknown"),
            field_str_or(product, "vendor", "Unknown"),
            self.name(),
        );
        record.profile.categories = field_str_or(product, "category", "");
        Some(record)
    }
}
