//! Ordered multi-provider resolution.
//!
//! The chain tries every provider for a candidate before advancing to the
//! next candidate (candidate-major, provider-minor), returns the first
//! record any parser produces, and treats every per-call failure as "try
//! the next provider". There is no retry-with-backoff.

use crate::candidates::generate_candidates;
use crate::error::{LookupError, Result};
use crate::provider::{LookupOutcome, ProductProvider};
use crate::providers::{EanSearchProvider, OpenFoodFactsProvider, UpcItemDbProvider};
use nutrilens_core::{LookupConfig, ProductRecord};
use reqwest::Client;
use std::sync::Arc;
use std::time::Duration;

/// Build the shared HTTP client with the configured timeout and user agent.
///
/// The timeout bounds every provider call so one unresponsive provider
/// cannot stall a resolution indefinitely.
pub(crate) fn build_http_client(config: &LookupConfig) -> Result<Client> {
    Client::builder()
        .timeout(Duration::from_secs(config.timeout_secs))
        .user_agent(config.user_agent.clone())
        .build()
        .map_err(|e| LookupError::Internal(format!("failed to create HTTP client: {e}")))
}

/// Resolves a barcode against an ordered list of product providers.
///
/// Provider configuration is an explicit value owned by the chain, so test
/// doubles and alternative registries can coexist; there is no ambient
/// global state.
pub struct ResolutionChain {
    providers: Vec<Arc<dyn ProductProvider>>,
    client: Client,
}

impl ResolutionChain {
    /// Create a chain with the standard provider order:
    /// `OpenFoodFacts`, UPCItemDB, EAN-Search.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn new(config: &LookupConfig) -> Result<Self> {
        let providers: Vec<Arc<dyn ProductProvider>> = vec![
            Arc::new(OpenFoodFactsProvider::new()),
            Arc::new(UpcItemDbProvider::new()),
            Arc::new(EanSearchProvider::new(config.ean_search_token.clone())),
        ];
        Self::with_providers(config, providers)
    }

    /// Create a chain with a custom provider list.
    ///
    /// # Errors
    /// Returns error if the HTTP client cannot be created.
    pub fn with_providers(
        config: &LookupConfig,
        providers: Vec<Arc<dyn ProductProvider>>,
    ) -> Result<Self> {
        Ok(Self {
            providers,
            client: build_http_client(config)?,
        })
    }

    /// Get the configured provider list, in query order.
    #[must_use]
    pub fn providers(&self) -> &[Arc<dyn ProductProvider>] {
        &self.providers
    }

    /// Resolve a barcode to a canonical product record.
    ///
    /// Returns `None` when every (candidate, provider) pair is exhausted
    /// without a match; exhaustion is a normal outcome, not an error.
    pub async fn resolve(&self, barcode: &str) -> Option<ProductRecord> {
        let candidates = generate_candidates(barcode);
        tracing::info!(barcode = %barcode, ?candidates, "trying barcode candidates");

        for candidate in &candidates {
            for provider in &self.providers {
                match provider.lookup(&self.client, candidate).await {
                    LookupOutcome::Found(mut record) => {
                        tracing::info!(
                            provider = provider.name(),
                            candidate = %candidate,
                            "product found"
                        );
                        // Keep the originally requested candidate for UI
                        // continuity, whatever code the provider stored
                        record.barcode = candidate.clone();
                        return Some(record);
                    }
                    LookupOutcome::NoMatch => {
                        tracing::debug!(
                            provider = provider.name(),
                            candidate = %candidate,
                            "no match"
                        );
                    }
                    LookupOutcome::Skipped => {
                        tracing::debug!(
                            provider = provider.name(),
                            "provider not configured, skipping"
                        );
                    }
                    LookupOutcome::Failed(error) => {
                        tracing::warn!(
                            provider = provider.name(),
                            candidate = %candidate,
                            error = %error,
                            "provider request failed"
                        );
                    }
                }
            }
        }

        tracing::warn!(barcode = %barcode, "product not found in any provider");
        None
    }
}
