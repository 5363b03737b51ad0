//! 런타임 스키마 컴파일러.
//!
//! 선언적 필드 목록을 검증되고 타입이 지정된 속성을 가진 값 객체로
//! 바꾸는 메커니즘입니다. 시스템의 모든 도메인 값 객체(주문, 거래 요청,
//! 거래소 파라미터)가 검증 로직을 직접 작성하는 대신 이 컴파일러를
//! 사용합니다.
//!
//! 흐름: 선언은 타입 정의 시점에 한 번 작성되고, 빌더가 로드 시점에 한 번
//! 컴파일하여 불변 스키마를 만들며, 이후 모든 객체 생성과 필드 접근은
//! 컴파일러가 아닌 접근자를 통합니다.

mod builder;
mod decl;
mod instance;
mod value;

pub use builder::{ConfigBuilder, Schema, StructBuilder};
pub use decl::{AttrValue, FieldDecl, FieldDescriptor};
pub use instance::Instance;
pub use value::{FieldType, Value};
