//! Example: resolve a barcode from the command line and print its grade.
//!
//! ```text
//! cargo run --example lookup -- 8901030372165
//! ```

use nutrilens_core::AppConfig;
use nutrilens_service::Nutrilens;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let barcode = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "8901030372165".to_string());

    let config = AppConfig::load_with_env()?;
    let lens = Nutrilens::new(&config)?;

    match lens.scan(&barcode).await {
        Some(response) => {
            println!(
                "{} by {} — Nutri-Score {} (score {}, health {})",
                response.name,
                response.brand,
                response.nutriscore.grade,
                response.nutriscore.score,
                response.health_score
            );
            println!("{}", serde_json::to_string_pretty(&response.nutriscore)?);
        }
        None => println!("Product not found for barcode {barcode}"),
    }

    Ok(())
}
