use serde::{Deserialize, Serialize};

/// Which instruments the all-symbols endpoint should list (`type` parameter).
///
/// Serializes as its numeric wire code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", from = "u8")]
pub enum SymbolsMarket {
    /// Every traded instrument: shares, funds, rights, block trades and options.
    #[default]
    All,
    /// Only Bourse and Farabourse listed shares.
    BourseAndFarabourse,
    /// Any other code the service accepts.
    Other(u8),
}

impl SymbolsMarket {
    pub(crate) fn code(self) -> u8 {
        match self {
            SymbolsMarket::All => 2,
            SymbolsMarket::BourseAndFarabourse => 0,
            SymbolsMarket::Other(c) => c,
        }
    }
}

impl From<SymbolsMarket> for u8 {
    fn from(market: SymbolsMarket) -> Self {
        market.code()
    }
}

impl From<u8> for SymbolsMarket {
    fn from(code: u8) -> Self {
        match code {
            2 => SymbolsMarket::All,
            0 => SymbolsMarket::BourseAndFarabourse,
            c => SymbolsMarket::Other(c),
        }
    }
}

/// Corporate actions to adjust daily candles for (`type` parameter).
///
/// Serializes as its numeric wire code; only `1`, `2` and `3` deserialize.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum AdjustType {
    /// Capital increases and dividends.
    #[default]
    CapitalIncreaseAndDividends,
    /// Capital increases only.
    CapitalIncrease,
    /// Dividends only.
    Dividends,
}

impl AdjustType {
    pub(crate) fn code(self) -> u8 {
        match self {
            AdjustType::CapitalIncreaseAndDividends => 1,
            AdjustType::CapitalIncrease => 2,
            AdjustType::Dividends => 3,
        }
    }
}

impl From<AdjustType> for u8 {
    fn from(adjust: AdjustType) -> Self {
        adjust.code()
    }
}

impl TryFrom<u8> for AdjustType {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(AdjustType::CapitalIncreaseAndDividends),
            2 => Ok(AdjustType::CapitalIncrease),
            3 => Ok(AdjustType::Dividends),
            c => Err(format!("unknown adjust type {c}")),
        }
    }
}
