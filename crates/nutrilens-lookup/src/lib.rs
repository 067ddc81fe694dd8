//! Nutrilens Lookup - Barcode resolution against external product databases.
//!
//! This crate turns a raw barcode string into a canonical [`ProductRecord`]
//! by generating the EAN/UPC variants worth querying and walking them
//! through an ordered provider chain with per-call timeouts and typed
//! failure handling.
//!
//! # Features
//!
//! - **Candidate generation**: leading-zero/UPC-vs-EAN variants, original first
//! - **Provider abstraction**: one capability trait per external database
//! - **Ordered fallback**: all providers for a candidate before the next candidate
//! - **Typed outcomes**: transport failures and schema misses are data, not panics
//!
//! # Example
//!
//! ```rust,no_run
//! use nutrilens_core::LookupConfig;
//! use nutrilens_lookup::ResolutionChain;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let chain = ResolutionChain::new(&LookupConfig::default())?;
//!
//! match chain.resolve("8901030372165").await {
//!     Some(record) => println!("{} by {}", record.name, record.brand),
//!     None => println!("product not found"),
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

pub mod candidates;
pub mod chain;
pub mod error;
pub mod provider;
pub mod providers;
pub mod search;

// Re-export commonly used types
pub use candidates::generate_candidates;
pub use chain::ResolutionChain;
pub use error::{LookupError, Result};
pub use provider::{LookupOutcome, ProductProvider};
pub use providers::{EanSearchProvider, OpenFoodFactsProvider, UpcItemDbProvider};
pub use search::ProductSearch;

// ProductRecord comes from nutrilens-core; re-exported here because every
// chain consumer needs it.
pub use nutrilens_core::ProductRecord;
