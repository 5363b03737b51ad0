//! 거래소 WebSocket 엔드포인트 조회 테이블.

use algo_core::{Exchange, TradingVenue};

/// 거래소와 거래 환경에 대한 WebSocket 엔드포인트를 반환합니다.
///
/// 해당 조합에 공개 엔드포인트가 없으면 `None`을 반환합니다.
pub fn websocket_endpoint(exchange: Exchange, venue: TradingVenue) -> Option<&'static str> {
    match (exchange, venue) {
        (Exchange::Bitfinex, TradingVenue::Live) => Some("wss://api2.bitfinex.com:3000/ws"),
        (Exchange::Cex, TradingVenue::Live) => Some("wss://ws.cex.io/ws/"),
        (Exchange::Gdax, TradingVenue::Sandbox) => Some("wss://ws-feed-public.sandbox.gdax.com"),
        (Exchange::Gdax, TradingVenue::Live) => Some("wss://ws-feed.exchange.coinbase.com"),
        (Exchange::Gemini, TradingVenue::Live) => {
            Some("wss://api.gemini.com/v1/marketdata/:symbol")
        }
        (Exchange::Hitbtc, TradingVenue::Sandbox) => Some("wss://demo-api.hitbtc.com:8080"),
        (Exchange::Hitbtc, TradingVenue::Live) => Some("wss://api.hitbtc.com:8080"),
        (Exchange::Poloniex, TradingVenue::Live) => Some("wss://api.poloniex.com"),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gdax_endpoints() {
        assert_eq!(
            websocket_endpoint(Exchange::Gdax, TradingVenue::Live),
            Some("wss://ws-feed.exchange.coinbase.com")
        );
        assert_eq!(
            websocket_endpoint(Exchange::Gdax, TradingVenue::Sandbox),
            Some("wss://ws-feed-public.sandbox.gdax.com")
        );
    }

    #[test]
    fn test_missing_endpoint_is_none() {
        assert_eq!(
            websocket_endpoint(Exchange::Bitstamp, TradingVenue::Live),
            None
        );
        assert_eq!(
            websocket_endpoint(Exchange::Gemini, TradingVenue::Sandbox),
            None
        );
    }
}
