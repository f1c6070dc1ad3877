//! sourcearena-rs: async client for the SourceArena market-data API.
//!
//! All five endpoints share one URL and differ only in their query
//! parameters. Every call goes through [`SaClient`], which appends the API
//! token, checks the HTTP status and decodes the JSON body into a
//! [`Payload`] that is passed back untouched.
//!
//! ```no_run
//! # use sourcearena_rs::SaClient;
//! # #[tokio::main]
//! # async fn main() -> Result<(), sourcearena_rs::SaError> {
//! let client = SaClient::new("your-token")?;
//! let snapshot = client.get_single_symbol_information("شپنا", None).await?;
//! println!("{snapshot}");
//! # Ok(())
//! # }
//! ```

pub mod core;
mod history;
mod symbols;

pub use crate::core::{
    AdjustType, Payload, SaClient, SaClientBuilder, SaError, SymbolsMarket, is_off_day_payload,
};
