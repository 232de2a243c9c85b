//! Demo 3: Call any method by name
//!
//! Usage: cargo run --bin raw_call -- <Method> [name=value ...]
//!
//! Example: cargo run --bin raw_call -- Depth pair=XBTUSD count=5

use colored::*;
use kraken_rest::{KrakenClient, Params, RestError};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().with_env_filter("warn").init();

    let mut args = std::env::args().skip(1);
    let Some(name) = args.next() else {
        eprintln!("usage: raw_call <Method> [name=value ...]");
        std::process::exit(2);
    };

    let params: Params = args
        .filter_map(|arg| arg.split_once('=').map(|(k, v)| (k.to_string(), v.to_string())))
        .collect();

    let client = KrakenClient::from_env()?;

    match client.api_by_name(&name, params).await {
        Ok(result) => println!("{:#}", result),
        Err(RestError::UnknownMethod(e)) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(2);
        }
        Err(e) if e.is_auth_rejected() => {
            eprintln!("{} Kraken rejected the credentials: {}", "✗".red(), e);
            std::process::exit(1);
        }
        Err(e) => {
            eprintln!("{} {}", "✗".red(), e);
            std::process::exit(1);
        }
    }

    Ok(())
}
