//! Symbol snapshot endpoints.
//!
//! Both endpoints here answer a date without a trading session with HTTP 200
//! and an `{"Error": ...}` object, which is mapped to [`SaError::OffDay`].

use crate::core::models::SymbolsMarket;
use crate::core::{Payload, SaClient, SaError, is_off_day_payload, params};

fn reject_off_day(payload: Payload, date: Option<&str>) -> Result<Payload, SaError> {
    if is_off_day_payload(&payload) {
        #[cfg(feature = "tracing")]
        tracing::debug!(date = ?date, "off-day payload");

        return Err(SaError::OffDay {
            date: date.map(str::to_owned),
        });
    }
    Ok(payload)
}

impl SaClient {
    /// Fetches a snapshot of every symbol traded on the last session, or on
    /// `date` (`yyyy/mm/dd`) if given.
    ///
    /// `market` defaults to [`SymbolsMarket::All`], which covers shares on
    /// Bourse and Farabourse, funds, rights, block trades and options.
    ///
    /// # Errors
    ///
    /// Returns `SaError::OffDay` if there was no trading on the requested
    /// date, `SaError::Api` for a non-2xx status, `SaError::Request` if the body
    /// is not JSON, or `SaError::Http` if the request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_all_symbols_information(
        &self,
        market: Option<SymbolsMarket>,
        date: Option<&str>,
    ) -> Result<Payload, SaError> {
        let payload = self
            .get(params::all_symbols(market.unwrap_or_default(), date))
            .await?;
        reject_off_day(payload, date)
    }

    /// Fetches a snapshot of one symbol, live or on `date` (`yyyy/mm/dd`,
    /// Khordad 1399 onwards).
    ///
    /// # Errors
    ///
    /// Same as [`SaClient::get_all_symbols_information`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_single_symbol_information(
        &self,
        symbol: &str,
        date: Option<&str>,
    ) -> Result<Payload, SaError> {
        let payload = self.get(params::single_symbol(symbol, date)).await?;
        reject_off_day(payload, date)
    }
}
