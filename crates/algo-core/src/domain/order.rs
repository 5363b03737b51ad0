//! 주문 관련 타입.
//!
//! 이 모듈은 주문 방향, 주문 유형, 주문 세부 유형을 정의합니다:
//! - `Side` - 주문 방향 (매수/매도)
//! - `OrderType` - 주문 유형 (시장가/지정가)
//! - `OrderSubType` - 주문 세부 유형 (FOK, post-only 등)

use serde::{Deserialize, Serialize};
use std::fmt;

/// 주문 방향.
///
/// `Side::None`은 파싱 불가능한 입력에 대한 폴백 값입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// 매수
    Buy,
    /// 매도
    Sell,
    /// 방향 없음 (알 수 없는 입력)
    None,
}

impl Side {
    /// 반대 방향을 반환합니다.
    pub fn opposite(&self) -> Self {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
            Side::None => Side::None,
        }
    }
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Buy => write!(f, "BUY"),
            Side::Sell => write!(f, "SELL"),
            Side::None => write!(f, "NONE"),
        }
    }
}

/// 주문 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderType {
    /// 시장가 주문 - 현재 시장 가격으로 즉시 체결
    Market,
    /// 지정가 주문 - 지정 가격 이상/이하에서 체결
    Limit,
    /// 유형 없음 (알 수 없는 입력)
    None,
}

impl fmt::Display for OrderType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderType::Market => write!(f, "MARKET"),
            OrderType::Limit => write!(f, "LIMIT"),
            OrderType::None => write!(f, "NONE"),
        }
    }
}

/// 주문 세부 유형.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OrderSubType {
    /// 세부 유형 없음
    None,
    /// 전량 체결 또는 취소 (Fill Or Kill)
    FillOrKill,
    /// 전량 체결 보장 (All Or Nothing)
    AllOrNothing,
    /// 메이커 전용 (Post Only)
    PostOnly,
}

impl fmt::Display for OrderSubType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderSubType::None => write!(f, "NONE"),
            OrderSubType::FillOrKill => write!(f, "FILL_OR_KILL"),
            OrderSubType::AllOrNothing => write!(f, "ALL_OR_NOTHING"),
            OrderSubType::PostOnly => write!(f, "POST_ONLY"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_side_opposite() {
        assert_eq!(Side::Buy.opposite(), Side::Sell);
        assert_eq!(Side::Sell.opposite(), Side::Buy);
        assert_eq!(Side::None.opposite(), Side::None);
    }

    #[test]
    fn test_order_type_display() {
        assert_eq!(OrderType::Market.to_string(), "MARKET");
        assert_eq!(OrderSubType::FillOrKill.to_string(), "FILL_OR_KILL");
    }
}
