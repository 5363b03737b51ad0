//! 거래소 에러 타입.

use algo_core::FieldError;
use thiserror::Error;

/// 거래소 관련 에러.
#[derive(Debug, Error)]
pub enum ExchangeError {
    /// 파싱/변환 에러
    #[error("Parse error: {0}")]
    ParseError(String),

    /// 지원되지 않는 작업
    #[error("Not supported: {0}")]
    NotSupported(String),

    /// 환경 변수 자격증명 누락
    #[error("Missing credential: {0}")]
    MissingCredential(String),

    /// 값 객체 필드 접근 에러
    #[error(transparent)]
    Field(#[from] FieldError),
}

impl ExchangeError {
    /// 설정/환경 문제로 인한 에러인지 확인합니다.
    pub fn is_configuration_error(&self) -> bool {
        matches!(self, ExchangeError::MissingCredential(_))
    }
}
