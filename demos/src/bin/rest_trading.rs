//! Demo 2: Market Data and Order Validation
//!
//! Showcases: typed endpoint groups, balance filtering, validate-only orders
//!
//! Run: cargo run --bin rest_trading
//!
//! NOTE: Requires KRAKEN_API_KEY and KRAKEN_API_SECRET (a `.env` file works too).
//! The order is sent with `validate=true` and never executes.

use colored::*;
use kraken_rest::{KrakenClient, OrderRequest, OrderSide};
use rust_decimal::Decimal;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter("warn")
        .init();

    println!("{}", "═".repeat(60).cyan());
    println!("{}", "  KRAKEN REST CLIENT DEMO".cyan().bold());
    println!("{}", "═".repeat(60).cyan());
    println!();

    let client = match KrakenClient::from_env() {
        Ok(client) => client,
        Err(e) => {
            println!("{} {}", "✗".red(), e);
            println!();
            println!("Example:");
            println!("  export KRAKEN_API_KEY='your-api-key'");
            println!("  export KRAKEN_API_SECRET='your-api-secret'");
            return Ok(());
        }
    };

    // ========================================================================
    // PUBLIC ENDPOINTS
    // ========================================================================

    println!("{}", "--- Public Market Data ---".yellow());

    let time = client.server_time().await?;
    println!("  Server time: {}", time.rfc1123);

    match client.get_ticker("XBTUSD").await {
        Ok(tickers) => {
            for (symbol, ticker) in &tickers {
                println!("  {}:", symbol);
                if let Some(last) = ticker.last_price() {
                    println!("    Last Price: ${}", last);
                }
                if let (Some(bid), Some(ask)) = (ticker.bid_price(), ticker.ask_price()) {
                    println!("    Bid/Ask:    ${} / ${}", bid, ask);
                }
                if let Some(spread_bps) = ticker.spread_bps() {
                    println!("    Spread:     {:.1} bps", spread_bps);
                }
            }
        }
        Err(e) => println!("  {} {}", "✗".red(), e),
    }

    match client.market().get_orderbook("XBTUSD", Some(3)).await {
        Ok(books) => {
            if let Some(book) = books.values().next() {
                println!("  Top Bids:");
                for (i, level) in book.bids.iter().enumerate() {
                    if level.len() >= 2 {
                        println!("    {}. {} x {}", i + 1, level[0], level[1]);
                    }
                }
                if let Some(spread) = book.spread() {
                    println!("  Book spread: ${}", spread);
                }
            }
        }
        Err(e) => println!("  {} {}", "✗".red(), e),
    }
    println!();

    // ========================================================================
    // PRIVATE ENDPOINTS
    // ========================================================================

    println!("{}", "--- Private Account Data ---".yellow());

    match client.get_balance().await {
        Ok(balances) => {
            for (asset, balance) in balances.non_zero().iter().take(10) {
                println!("    {}: {}", asset, balance);
            }
        }
        Err(e) => println!("  {} {}", "✗".red(), e),
    }

    match client.account().get_open_orders(None, None).await {
        Ok(result) if result.open.is_empty() => println!("  No open orders"),
        Ok(result) => {
            for (txid, order) in result.open.iter().take(5) {
                println!("  {} - {}", txid, order.descr.order);
            }
        }
        Err(e) => println!("  {} {}", "✗".red(), e),
    }
    println!();

    println!("{}", "--- Order Example (validate only) ---".yellow());

    let order = OrderRequest::limit("XBTUSD", OrderSide::Buy, Decimal::new(1, 3), Decimal::new(30000, 0))
        .post_only()
        .validate_only();

    match client.add_order(&order).await {
        Ok(response) => println!("  {} {}", "✓".green(), response.descr.order),
        Err(e) => println!("  {} Validation error: {}", "✗".red(), e),
    }

    println!("\nDone!");
    Ok(())
}
