//! Demo 1: Balance and Ticker
//!
//! The smallest useful program: one private call, one public call.
//!
//! Run: KRAKEN_API_KEY=... KRAKEN_API_SECRET=... cargo run --bin basic

use kraken_rest::{KrakenClient, Method, Params};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let client = KrakenClient::from_env()?;

    // Display user's balance
    println!("{}", client.api(Method::Balance, Params::new()).await?);

    // Get Ticker Info
    let ticker = client
        .api(Method::Ticker, Params::new().with("pair", "XXBTZUSD"))
        .await?;
    println!("{}", ticker);

    Ok(())
}
