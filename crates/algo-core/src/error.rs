//! 스키마 컴파일 및 필드 접근 에러 타입.
//!
//! 에러는 두 단계로 나뉩니다:
//! - `SchemaError` - 컴파일 타임 에러. 스키마 생성을 완전히 중단하며
//!   부분적으로 컴파일된 스키마는 반환되지 않습니다.
//! - `FieldError` - 런타임 에러. 필드 단위로 국소적이며 해당 작업만
//!   실패시키고 다른 필드의 저장소는 손대지 않습니다.

use crate::schema::FieldType;
use thiserror::Error;

/// 스키마 컴파일 에러.
#[derive(Debug, Error)]
pub enum SchemaError {
    /// 다중 상속 위반 - 레코드 스키마는 단일 베이스만 허용
    #[error("{schema} 스키마는 단일 상속만 지원합니다 (베이스 {count}개 선언됨)")]
    MultipleInheritance { schema: String, count: usize },

    /// 선언된 기본값이 선언된 타입의 인스턴스가 아님
    #[error("{field} 필드의 기본값은 {expected} 타입이어야 합니다 (실제: {found})")]
    DefaultTypeMismatch {
        field: String,
        expected: FieldType,
        found: String,
    },

    /// 같은 이름의 필드가 두 번 선언됨
    #[error("{field} 필드가 중복 선언되었습니다")]
    DuplicateField { field: String },
}

/// 스키마 컴파일 작업을 위한 Result 타입.
pub type SchemaResult<T> = Result<T, SchemaError>;

/// 필드 접근(읽기/쓰기) 에러.
#[derive(Debug, Error, PartialEq)]
pub enum FieldError {
    /// 값도 기본값도 없는 필드 읽기
    #[error("{field} 필드가 설정되지 않았습니다")]
    Unset { field: String },

    /// 쓰기 값이 선언된 타입의 인스턴스가 아님
    #[error("{field} 필드는 {expected} 타입의 인스턴스여야 합니다 (실제: {found})")]
    TypeMismatch {
        field: String,
        expected: FieldType,
        found: String,
    },

    /// 컨테이너 필드에 리스트가 아닌 값 쓰기
    #[error("{field} 필드는 {expected} 원소의 리스트여야 합니다")]
    NotAList { field: String, expected: FieldType },

    /// 스키마에 선언되지 않은 필드 접근
    #[error("{field} 필드는 스키마에 선언되지 않았습니다")]
    UnknownField { field: String },
}

/// 필드 접근 작업을 위한 Result 타입.
pub type FieldResult<T> = Result<T, FieldError>;

impl FieldError {
    /// 읽기 시점이 아니라 쓰기 시점의 에러인지 확인합니다.
    pub fn is_write_error(&self) -> bool {
        matches!(
            self,
            FieldError::TypeMismatch { .. } | FieldError::NotAList { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_error_is_write_error() {
        let unset = FieldError::Unset {
            field: "price".to_string(),
        };
        assert!(!unset.is_write_error());

        let mismatch = FieldError::TypeMismatch {
            field: "price".to_string(),
            expected: FieldType::Decimal,
            found: "str".to_string(),
        };
        assert!(mismatch.is_write_error());
    }

    #[test]
    fn test_schema_error_message() {
        let err = SchemaError::MultipleInheritance {
            schema: "TradeResponse".to_string(),
            count: 2,
        };
        assert!(err.to_string().contains("TradeResponse"));
    }
}
