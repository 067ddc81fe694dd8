//! Product provider implementations.

mod common;
pub mod eansearch;
pub mod openfoodfacts;
pub mod upcitemdb;

pub use eansearch::EanSearchProvider;
pub use openfoodfacts::OpenFoodFactsProvider;
pub use upcitemdb::UpcItemDbProvider;
