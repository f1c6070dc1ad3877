//! Price history endpoints: candles, daily price history and adjusted candles.

use crate::core::models::AdjustType;
use crate::core::{Payload, SaClient, SaError, params};

impl SaClient {
    /// Fetches candlestick prices (first, last, low and high) for `symbol`
    /// over `period`.
    ///
    /// Data is available from Farvardin 1398 onwards. `period` is a Solar
    /// Hijri month such as `1394/04`.
    ///
    /// # Errors
    ///
    /// Returns `SaError::Api` for a non-2xx status, `SaError::Request` if the
    /// body is not JSON, or `SaError::Http` if the request fails.
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_candle(&self, symbol: &str, period: &str) -> Result<Payload, SaError> {
        self.get(params::candle(symbol, period)).await
    }

    /// Fetches the price history of `symbol` for the last `days` days.
    ///
    /// Handy for weekly and monthly averages.
    ///
    /// # Errors
    ///
    /// Same as [`SaClient::get_candle`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_price_history(&self, symbol: &str, days: u32) -> Result<Payload, SaError> {
        self.get(params::price_history(symbol, days)).await
    }

    /// Fetches adjusted daily candles for `symbol` between `from_date` and
    /// `to_date` (both `yyyymmdd`), including volume and value traded.
    ///
    /// `adjust_type` defaults to [`AdjustType::CapitalIncreaseAndDividends`].
    /// The service only enables this endpoint on request.
    ///
    /// # Errors
    ///
    /// Same as [`SaClient::get_candle`].
    #[cfg_attr(feature = "tracing", tracing::instrument(skip(self), err))]
    pub async fn get_adjusted_daily_candles(
        &self,
        symbol: &str,
        from_date: &str,
        to_date: &str,
        adjust_type: Option<AdjustType>,
    ) -> Result<Payload, SaError> {
        let query = params::adjusted_daily_candles(
            symbol,
            from_date,
            to_date,
            adjust_type.unwrap_or_default(),
        );
        self.get(query).await
    }
}
