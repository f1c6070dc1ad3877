//! Query-string assembly for each endpoint.
//!
//! Every endpoint shares the same URL and is selected purely by which
//! parameters are present, so the order and spelling here is the wire
//! contract.

use url::Url;

use crate::core::client::constants::TOKEN_PARAM;
use crate::core::models::{AdjustType, SymbolsMarket};

/// An ordered list of query parameters for one request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub(crate) struct Query {
    pairs: Vec<(&'static str, String)>,
}

impl Query {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn push(mut self, key: &'static str, value: impl ToString) -> Self {
        self.pairs.push((key, value.to_string()));
        self
    }

    pub(crate) fn push_opt(self, key: &'static str, value: Option<&str>) -> Self {
        match value {
            Some(v) => self.push(key, v),
            None => self,
        }
    }

    #[cfg(test)]
    pub(crate) fn pairs(&self) -> Vec<(&str, &str)> {
        self.pairs.iter().map(|(k, v)| (*k, v.as_str())).collect()
    }

    /// The full request URL: `base` with these pairs and the token appended.
    pub(crate) fn to_url(&self, base: &Url, token: &str) -> Url {
        let mut url = base.clone();
        {
            let mut qp = url.query_pairs_mut();
            for (k, v) in &self.pairs {
                qp.append_pair(k, v);
            }
            qp.append_pair(TOKEN_PARAM, token);
        }
        url
    }
}

pub(crate) fn candle(symbol: &str, period: &str) -> Query {
    Query::new().push("history", symbol).push("period", period)
}

pub(crate) fn price_history(symbol: &str, days: u32) -> Query {
    Query::new().push("name", symbol).push("days", days)
}

pub(crate) fn all_symbols(market: SymbolsMarket, date: Option<&str>) -> Query {
    Query::new()
        .push("type", market.code())
        .push_opt("time", date)
        .push("all", "-")
}

pub(crate) fn single_symbol(symbol: &str, date: Option<&str>) -> Query {
    Query::new().push("name", symbol).push_opt("time", date)
}

pub(crate) fn adjusted_daily_candles(
    symbol: &str,
    from_date: &str,
    to_date: &str,
    adjust: AdjustType,
) -> Query {
    Query::new()
        .push("name", symbol)
        .push("from", from_date)
        .push("to", to_date)
        .push("type", adjust.code())
        .push("adjusted", "-")
}
