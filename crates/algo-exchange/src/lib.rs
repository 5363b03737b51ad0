//! # Algo Exchange
//!
//! 거래소 경계의 일회성 헬퍼를 제공합니다:
//! - WebSocket 엔드포인트 조회 테이블
//! - 문자열/열거형 변환 (거래소, 통화, 주문 방향/유형)
//! - 거래 요청 값 객체를 GDAX 주문 파라미터로 변환
//! - 환경 변수 기반 API 자격증명 로딩
//! - 거래소 타임스탬프 파싱
//!
//! 값 객체에는 get 접근자와 표현 문자열로만 접근합니다.

pub mod convert;
pub mod credentials;
pub mod endpoints;
pub mod error;
pub mod params;
pub mod time;

pub use convert::*;
pub use credentials::ApiCredentials;
pub use endpoints::websocket_endpoint;
pub use error::*;
pub use params::trade_req_to_params_gdax;
pub use time::parse_timestamp;
