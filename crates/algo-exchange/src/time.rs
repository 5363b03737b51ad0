//! 거래소 타임스탬프 파싱.

use crate::error::ExchangeError;
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::EST;

/// 거래소 타임스탬프 문자열을 파싱합니다.
///
/// 두 형식을 받습니다:
/// - 유닉스 epoch 실수 (예: `"1500000000.123"`) - 미국 동부(EST) 현지
///   시각의 naive datetime으로 변환됩니다.
/// - ISO-8601 Z 형식 (예: `"2017-07-14T02:40:00.123456Z"`) - 그대로
///   naive datetime으로 파싱됩니다.
pub fn parse_timestamp(raw: &str) -> Result<NaiveDateTime, ExchangeError> {
    if let Ok(epoch) = raw.parse::<f64>() {
        let secs = epoch.trunc() as i64;
        let nanos = (epoch.fract() * 1e9).round() as u32;
        let utc = DateTime::<Utc>::from_timestamp(secs, nanos)
            .ok_or_else(|| ExchangeError::ParseError(format!("epoch out of range: {}", raw)))?;
        return Ok(utc.with_timezone(&EST).naive_local());
    }

    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.fZ")
        .map_err(|e| ExchangeError::ParseError(format!("{}: {}", raw, e)))
}
