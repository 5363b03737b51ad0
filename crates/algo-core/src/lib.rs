//! # Algo Core
//!
//! 트레이딩 시스템의 스키마 컴파일러와 핵심 도메인 모델을 제공합니다.
//!
//! 중심은 런타임 **스키마 컴파일러**입니다: 선언적 필드 목록을 받아
//! 필수 필드 강제, 타입 있는 기본값, 리스트 필드, 디버그 표현 선택적
//! 제외를 갖춘 값 객체를 만들어 냅니다. 주문, 거래 요청, 거래소 설정
//! 같은 도메인 값 객체가 검증 로직을 직접 작성하지 않고 이 컴파일러
//! 위에 세워집니다.
//!
//! 이 크레이트가 제공하는 것:
//! - 필드 선언 문법과 스키마 컴파일러 (`schema`)
//! - 거래소/통화/주문 도메인 열거형 (`domain`)
//! - 스키마로 정의된 거래 요청/응답/설정 값 객체
//! - 에러 타입 및 로깅 인프라

pub mod domain;
pub mod error;
pub mod logging;
pub mod schema;

pub use domain::*;
pub use error::*;
pub use logging::*;
pub use schema::*;
