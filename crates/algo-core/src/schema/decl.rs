//! 필드 선언 문법과 디스크립터 해석.
//!
//! 필드 선언은 닫힌 태그 변형 집합으로 표현되며, `resolve`가 원시 선언을
//! 검사하는 유일한 장소입니다. 선언 블록에는 필드가 아닌 보조 속성
//! (`FieldDecl::Attr`)이 공존할 수 있으며, 이는 중첩 스키마나 상수 값으로
//! 제한됩니다.

use crate::error::{SchemaError, SchemaResult};
use crate::schema::{FieldType, Schema, Value};
use serde::Serialize;

/// 필드가 아닌 보조 속성 값.
///
/// 허용 범위는 의도적으로 제한됩니다: 이미 컴파일된 중첩 스키마 또는
/// 평범한 상수 값만 선언 블록에 공존할 수 있습니다.
#[derive(Debug, Clone, Serialize)]
pub enum AttrValue {
    /// 이미 컴파일된 중첩 스키마
    Schema(Schema),
    /// 상수 값
    Const(Value),
}

/// 원시 필드 선언.
///
/// 여섯 가지 필드 형태와 보조 속성 형태를 닫힌 변형 집합으로 표현합니다:
///
/// | 변형 | 의미 |
/// |---|---|
/// | `Scalar(T)` | 필수 스칼라, 기본값 없음 |
/// | `WithDefault(T, v)` | 선택 스칼라, 기본값 `v` |
/// | `WithDefaultHidden(T, v)` | 선택 스칼라, 기본값 `v`, 표현 문자열에서 제외 |
/// | `Hidden(T)` | 필수 스칼라, 표현 문자열에서 제외 |
/// | `List(T)` | 필수 컨테이너 |
/// | `ListWithDefault(T, v)` | 선택 컨테이너, 미설정 읽기 시 `[v]` 반환 |
/// | `Attr(a)` | 필드가 아닌 보조 속성 |
#[derive(Debug, Clone)]
pub enum FieldDecl {
    /// 필수 스칼라 필드
    Scalar(FieldType),
    /// 기본값이 있는 선택 스칼라 필드
    WithDefault(FieldType, Value),
    /// 기본값이 있고 표현에서 제외되는 선택 스칼라 필드
    WithDefaultHidden(FieldType, Value),
    /// 표현에서 제외되는 필수 스칼라 필드
    Hidden(FieldType),
    /// 필수 컨테이너 필드
    List(FieldType),
    /// 기본값이 있는 선택 컨테이너 필드
    ListWithDefault(FieldType, Value),
    /// 필드가 아닌 보조 속성
    Attr(AttrValue),
}

/// 해석된 필드 규칙 레코드.
///
/// 불변 조건: `default`가 존재하면 이미 타입/컨테이너 규칙을 만족합니다.
/// 이는 컴파일 시점에 한 번만 검사되며 접근마다 재검사되지 않습니다.
#[derive(Debug, Clone, Serialize)]
pub struct FieldDescriptor {
    /// 필드 이름
    pub name: String,
    /// 원소 타입
    pub element_type: FieldType,
    /// 컨테이너 필드 여부
    pub is_container: bool,
    /// 기본값 (컨테이너 필드의 경우 원소 기본값)
    pub default: Option<Value>,
    /// 표현 문자열 제외 여부
    pub excluded: bool,
}

/// 선언 하나를 해석한 결과.
#[derive(Debug, Clone)]
pub(crate) enum Resolved {
    /// 필드 선언
    Field(FieldDescriptor),
    /// 필드가 아닌 보조 속성 (그대로 통과)
    Attr(AttrValue),
}

impl FieldDecl {
    /// 선언을 정확히 하나의 디스크립터(또는 보조 속성)로 해석합니다.
    ///
    /// 기본값이 선언된 타입의 인스턴스가 아니면 컴파일이 즉시 실패합니다.
    pub(crate) fn resolve(self, name: &str) -> SchemaResult<Resolved> {
        let descriptor = match self {
            FieldDecl::Scalar(ty) => FieldDescriptor {
                name: name.to_string(),
                element_type: ty,
                is_container: false,
                default: None,
                excluded: false,
            },
            FieldDecl::WithDefault(ty, default) => FieldDescriptor {
                name: name.to_string(),
                element_type: ty,
                is_container: false,
                default: Some(check_default(name, ty, default)?),
                excluded: false,
            },
            FieldDecl::WithDefaultHidden(ty, default) => FieldDescriptor {
                name: name.to_string(),
                element_type: ty,
                is_container: false,
                default: Some(check_default(name, ty, default)?),
                excluded: true,
            },
            FieldDecl::Hidden(ty) => {
                if ty == FieldType::Bool {
                    // 역사적으로 (bool, EXCLUDE) 형태는 "기본값 true"와
                    // 구분되지 않음. 항상 제외 전용으로 해석한다.
                    tracing::warn!(
                        field = name,
                        "bool 필드의 숨김 선언은 기본값 true로 재해석되지 않습니다. \
                         기본값을 의도했다면 명시적으로 선언하세요"
                    );
                }
                FieldDescriptor {
                    name: name.to_string(),
                    element_type: ty,
                    is_container: false,
                    default: None,
                    excluded: true,
                }
            }
            FieldDecl::List(ty) => FieldDescriptor {
                name: name.to_string(),
                element_type: ty,
                is_container: true,
                default: None,
                excluded: false,
            },
            FieldDecl::ListWithDefault(ty, default) => FieldDescriptor {
                name: name.to_string(),
                element_type: ty,
                is_container: true,
                default: Some(check_default(name, ty, default)?),
                excluded: false,
            },
            FieldDecl::Attr(attr) => return Ok(Resolved::Attr(attr)),
        };

        Ok(Resolved::Field(descriptor))
    }
}

fn check_default(name: &str, ty: FieldType, default: Value) -> SchemaResult<Value> {
    if default.is_instance_of(ty) {
        Ok(default)
    } else {
        Err(SchemaError::DefaultTypeMismatch {
            field: name.to_string(),
            expected: ty,
            found: default.type_name(),
        })
    }
}
