//! Core product provider trait and per-call outcome type.

use crate::error::LookupError;
use async_trait::async_trait;
use nutrilens_core::ProductRecord;
use reqwest::Client;
use serde_json::Value;

/// Outcome of querying a single provider for a single candidate.
///
/// The resolution chain operates on these typed outcomes instead of
/// catching arbitrary failures: a transport error and a schema miss are
/// both non-fatal, but they are logged differently.
#[derive(Debug)]
pub enum LookupOutcome {
    /// The provider returned a parseable product
    Found(ProductRecord),
    /// The provider answered but reported no matching product
    NoMatch,
    /// The provider is missing a credential; no request was issued
    Skipped,
    /// The request or response handling failed
    Failed(LookupError),
}

/// Trait for external product databases.
///
/// A provider knows how to build a lookup URL for a candidate barcode and
/// how to map its own response schema into the canonical [`ProductRecord`].
/// Implementations must be thread-safe (`Send + Sync`) for use across
/// concurrent lookups.
#[async_trait]
pub trait ProductProvider: Send + Sync {
    /// Human-readable provider name used in logs and source tags.
    fn name(&self) -> &str;

    /// Whether the provider has everything it needs to issue requests.
    ///
    /// Providers missing a credential return `false` and are permanently
    /// skipped by the chain without counting as a failure.
    fn is_configured(&self) -> bool {
        true
    }

    /// Build the lookup URL for a candidate barcode.
    fn request_url(&self, candidate: &str) -> String;

    /// Map a provider response body into a canonical record.
    ///
    /// Returns `None` when the body is well-formed but reports no match,
    /// or when expected keys are absent (schema mismatch is a miss, not an
    /// error).
    fn parse(&self, body: &Value, candidate: &str) -> Option<ProductRecord>;

    /// Query this provider for a candidate barcode.
    ///
    /// The default implementation issues a bounded GET (the timeout lives
    /// on the shared client), folds transport and status failures into
    /// [`LookupOutcome::Failed`], and runs the response through
    /// [`ProductProvider::parse`].
    async fn lookup(&self, client: &Client, candidate: &str) -> LookupOutcome {
        if !self.is_configured() {
            return LookupOutcome::Skipped;
        }

        let url = self.request_url(candidate);

        let response = match client.get(&url).send().await {
            Ok(response) => response,
            Err(e) => return LookupOutcome::Failed(LookupError::Network(e)),
        };

        let status = response.status();
        if !status.is_success() {
            return LookupOutcome::Failed(LookupError::ApiStatus {
                provider: self.name().to_string(),
                status: status.as_u16(),
            });
        }

        let body: Value = match response.json().await {
            Ok(body) => body,
            Err(e) => {
                return LookupOutcome::Failed(LookupError::Parse {
                    provider: self.name().to_string(),
                    message: e.to_string(),
                })
            }
        };

        match self.parse(&body, candidate) {
            Some(record) => LookupOutcome::Found(record),
            None => LookupOutcome::NoMatch,
        }
    }
}
