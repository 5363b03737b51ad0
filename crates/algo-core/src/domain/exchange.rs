//! 거래소 및 거래 환경 정의.
//!
//! 이 모듈은 지원되는 거래소와 거래 환경(샌드박스/실거래) 타입을 정의합니다.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 지원되는 암호화폐 거래소.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Exchange {
    /// Bitstamp
    Bitstamp,
    /// Bitfinex
    Bitfinex,
    /// BTCC
    Btcc,
    /// CEX.IO
    Cex,
    /// GDAX (Coinbase)
    Gdax,
    /// Gemini
    Gemini,
    /// HitBTC
    Hitbtc,
    /// itBit
    Itbit,
    /// Kraken
    Kraken,
    /// Lake
    Lake,
    /// Poloniex
    Poloniex,
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Exchange::Bitstamp => write!(f, "bitstamp"),
            Exchange::Bitfinex => write!(f, "bitfinex"),
            Exchange::Btcc => write!(f, "btcc"),
            Exchange::Cex => write!(f, "cex"),
            Exchange::Gdax => write!(f, "gdax"),
            Exchange::Gemini => write!(f, "gemini"),
            Exchange::Hitbtc => write!(f, "hitbtc"),
            Exchange::Itbit => write!(f, "itbit"),
            Exchange::Kraken => write!(f, "kraken"),
            Exchange::Lake => write!(f, "lake"),
            Exchange::Poloniex => write!(f, "poloniex"),
        }
    }
}

/// 거래 환경 (샌드박스 또는 실거래).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TradingVenue {
    /// 샌드박스 (모의투자)
    Sandbox,
    /// 실거래
    Live,
}

impl TradingVenue {
    /// 실거래 환경인지 확인합니다.
    pub fn is_live(&self) -> bool {
        matches!(self, TradingVenue::Live)
    }
}

impl fmt::Display for TradingVenue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TradingVenue::Sandbox => write!(f, "sandbox"),
            TradingVenue::Live => write!(f, "live"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exchange_display() {
        assert_eq!(Exchange::Gdax.to_string(), "gdax");
        assert_eq!(Exchange::Kraken.to_string(), "kraken");
    }

    #[test]
    fn test_venue_is_live() {
        assert!(TradingVenue::Live.is_live());
        assert!(!TradingVenue::Sandbox.is_live());
    }
}
