//! 통화 정의.

use serde::{Deserialize, Serialize};
use std::fmt;

/// 지원되는 통화.
///
/// `Currency::Usd`는 파싱 불가능한 입력에 대한 폴백 값입니다.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Currency {
    /// 미국 달러
    Usd,
    /// 비트코인
    Btc,
    /// 이더리움
    Eth,
    /// 라이트코인
    Ltc,
}

impl Currency {
    /// 법정 통화인지 확인합니다.
    pub fn is_fiat(&self) -> bool {
        matches!(self, Currency::Usd)
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Currency::Usd => write!(f, "USD"),
            Currency::Btc => write!(f, "BTC"),
            Currency::Eth => write!(f, "ETH"),
            Currency::Ltc => write!(f, "LTC"),
        }
    }
}
