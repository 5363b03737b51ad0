//! 거래소 문자열/열거형 변환 헬퍼.
//!
//! 거래소 메시지는 형식이 느슨하므로 부분 문자열 매칭으로 파싱하고,
//! 매칭 실패 시 각 타입의 폴백 값을 반환합니다.

use crate::error::ExchangeError;
use algo_core::{Currency, Exchange, OrderType, Side};

/// 문자열에서 거래소를 파싱합니다. 알 수 없는 입력은 GDAX로 간주합니다.
pub fn exchange_from_str(s: &str) -> Exchange {
    let s = s.to_lowercase();
    if s.contains("bitfinex") {
        Exchange::Bitfinex
    } else if s.contains("bitstamp") {
        Exchange::Bitstamp
    } else if s.contains("gemini") {
        Exchange::Gemini
    } else if s.contains("hitbtc") {
        Exchange::Hitbtc
    } else if s.contains("itbit") {
        Exchange::Itbit
    } else if s.contains("kraken") {
        Exchange::Kraken
    } else if s.contains("lake") {
        Exchange::Lake
    } else {
        Exchange::Gdax
    }
}

/// 문자열에서 통화를 파싱합니다. 알 수 없는 입력은 USD입니다.
pub fn currency_from_str(s: &str) -> Currency {
    let s = s.to_uppercase();
    if s.contains("BTC") {
        Currency::Btc
    } else if s.contains("ETH") {
        Currency::Eth
    } else if s.contains("LTC") {
        Currency::Ltc
    } else {
        Currency::Usd
    }
}

/// 문자열에서 주문 방향을 파싱합니다.
pub fn side_from_str(s: &str) -> Side {
    let s = s.to_uppercase();
    if s.contains("BUY") || s.contains("BID") {
        Side::Buy
    } else if s.contains("SELL") || s.contains("ASK") {
        Side::Sell
    } else {
        Side::None
    }
}

/// 문자열에서 주문 유형을 파싱합니다.
pub fn order_type_from_str(s: &str) -> OrderType {
    let s = s.to_uppercase();
    if s.contains("MARKET") {
        OrderType::Market
    } else if s.contains("LIMIT") {
        OrderType::Limit
    } else {
        OrderType::None
    }
}

/// 통화를 GDAX 상품 ID 문자열로 변환합니다.
pub fn currency_to_gdax(currency: Currency) -> Result<&'static str, ExchangeError> {
    match currency {
        Currency::Btc => Ok("BTC-USD"),
        other => Err(ExchangeError::NotSupported(format!(
            "GDAX product for {}",
            other
        ))),
    }
}

/// 주문 유형을 GDAX 주문 유형 문자열로 변환합니다.
pub fn order_type_to_gdax(order_type: OrderType) -> Result<&'static str, ExchangeError> {
    match order_type {
        OrderType::Market => Ok("market"),
        OrderType::Limit => Ok("limit"),
        OrderType::None => Err(ExchangeError::NotSupported(
            "GDAX order type NONE".to_string(),
        )),
    }
}

/// 거래소의 백테스트 데이터 파일 경로를 반환합니다.
pub fn backtest_data_file(exchange: Exchange) -> &'static str {
    let path = match exchange {
        Exchange::Bitstamp => "./data/exchange/bitstampUSD.csv",
        Exchange::Bitfinex => "./data/exchange/bitfinexUSD.csv",
        Exchange::Itbit => "./data/exchange/itbitUSD.csv",
        Exchange::Kraken => "./data/exchange/krakenUSD.csv",
        Exchange::Hitbtc => "./data/exchange/hitbtcUSD.csv",
        Exchange::Lake => "./data/exchange/lakeUSD.csv",
        _ => "./data/exchange/coinbaseUSD.csv",
    };
    tracing::warn!(exchange = %exchange, path, "Backtesting against historical data file");
    path
}
