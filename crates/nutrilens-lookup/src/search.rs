//! Free-text product search.
//!
//! Name search goes through `OpenFoodFacts` only (the most comprehensive
//! source for it); each coded hit is re-run through the standard barcode
//! parser so search results and barcode lookups share one canonical shape.

use crate::chain::build_http_client;
use crate::error::Result;
use crate::provider::ProductProvider;
use crate::providers::OpenFoodFactsProvider;
use nutrilens_core::{LookupConfig, ProductRecord, SearchConfig};
use reqwest::Client;
use serde_json::{json, Value};

/// Searches products by name via the `OpenFoodFacts` search endpoint.
pub struct ProductSearch {
    provider: OpenFoodFactsProvider,
    client: Client,
    config: SearchConfig,
}

impl ProductSearch {
    /// Create a search client against the public API.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(lookup: &LookupConfig, config: SearchConfig) -> Result<Self> {
        Self::with_provider(lookup, config, OpenFoodFactsProvider::new())
    }

    /// Create a search client against a custom provider instance.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_provider(
        lookup: &LookupConfig,
        config: SearchConfig,
        provider: OpenFoodFactsProvider,
    ) -> Result<Self> {
        Ok(Self {
            provider,
            client: build_http_client(lookup)?,
            config,
        })
    }

    /// Search products by name, returning at most the configured number of
    /// coded results.
    ///
    /// # Errors
    /// Returns error on transport failure or a malformed response body.
    pub async fn search(&self, query: &str) -> Result<Vec<ProductRecord>> {
        let page_size = self.config.page_size.to_string();
        let response = self
            .client
            .get(self.provider.search_url())
            .query(&[
                ("search_terms", query),
                ("search_simple", "1"),
                ("action", "process"),
                ("json", "1"),
                ("page_size", page_size.as_str()),
            ])
            .send()
            .await?
            .error_for_status()?;

        let body: Value = response.json().await?;
        Ok(self.parse_results(&body))
    }

    /// Pull coded products out of a search response body.
    fn parse_results(&self, body: &Value) -> Vec<ProductRecord> {
        let Some(products) = body.get("products").and_then(Value::as_array) else {
            return Vec::new();
        };

        products
            .iter()
            .take(self.config.max_results)
            .filter_map(|product| {
                let code = product.get("code").and_then(Value::as_str)?;
                // Re-wrap in the lookup response shape so one parser rules both paths
                self.provider
                    .parse(&json!({"status": 1, "product": product}), code)
            })
            .collect()
    }
}
