use futures::future::try_join_all;
use sourcearena_rs::{AdjustType, SaClient, SaError, SymbolsMarket};
use std::time::Duration;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let token = std::env::args()
        .nth(1)
        .ok_or("usage: basic_usage <token>")?;

    let client = SaClient::builder()
        .token(token)
        .timeout(Duration::from_secs(15))
        .build()?;

    // 1. One symbol, live.
    let snapshot = client.get_single_symbol_information("شپنا", None).await?;
    println!("--- Live snapshot ---\n{snapshot:#}\n");

    // 2. The whole market on a given day; holidays come back as OffDay.
    match client
        .get_all_symbols_information(Some(SymbolsMarket::BourseAndFarabourse), Some("1402/01/01"))
        .await
    {
        Ok(all) => println!(
            "--- {} symbols traded ---\n",
            all.as_array().map_or(0, Vec::len)
        ),
        Err(SaError::OffDay { date }) => println!("--- No session on {date:?} ---\n"),
        Err(e) => return Err(e.into()),
    }

    // 3. Several symbols concurrently over the same client.
    let symbols = ["شپنا", "فولاد", "خودرو"];
    let histories = try_join_all(symbols.iter().map(|s| client.get_price_history(s, 7))).await?;
    for (s, h) in symbols.iter().zip(histories) {
        println!("{s}: {} rows", h.as_array().map_or(0, Vec::len));
    }
    println!();

    // 4. Adjusted daily candles (endpoint must be enabled for the token).
    let candles = client
        .get_adjusted_daily_candles("شپنا", "14020101", "14020201", Some(AdjustType::Dividends))
        .await?;
    println!("--- Adjusted candles ---\n{candles:#}");

    Ok(())
}
