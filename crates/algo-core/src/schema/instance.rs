//! 스키마 기반 값 객체.
//!
//! `Instance`는 컴파일된 스키마 하나를 공유 참조하고, 필드 이름으로 키가
//! 매겨진 사적 저장소를 갖는 값 객체입니다. 접근자는 필드별 클로저가 아닌
//! 디스크립터로 매개화된 제네릭 get/set 한 쌍이며, 모든 읽기/쓰기에서
//! 타입/컨테이너 규칙을 강제합니다.
//!
//! 동시성: 인스턴스 저장소는 인스턴스 사적이며 잠금을 제공하지 않습니다.
//! 변경은 배타적 소유자 접근을 전제로 합니다.

use crate::error::{FieldError, FieldResult};
use crate::schema::{Schema, Value};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

/// 컴파일된 스키마의 값 객체.
#[derive(Debug, Clone)]
pub struct Instance {
    schema: Arc<Schema>,
    storage: HashMap<String, Value>,
}

impl Instance {
    /// config 수명 주기로 값 객체를 생성합니다.
    ///
    /// 저장소는 비어 있으며 생성 시점 검증이 없습니다. 호출자는 첫 읽기
    /// 전에 필수 필드를 모두 할당해야 합니다.
    pub fn config(schema: Arc<Schema>) -> Self {
        Self {
            schema,
            storage: HashMap::new(),
        }
    }

    /// record 수명 주기로 값 객체를 생성합니다 (키워드 생성자).
    ///
    /// 선언된 필드를 선언 순서대로 처리합니다: 입력에 없는 필드는 경고를
    /// 남기고 계속 진행하며, 입력 유무와 무관하게 해당 필드를 즉시 다시
    /// 읽어 검증을 강제합니다. 따라서 기본값 없는 필수 필드 누락은 생성
    /// 실패가 되고, 기본값 있는 선택 필드 누락은 무해합니다.
    pub fn with_fields(
        schema: Arc<Schema>,
        fields: Vec<(&str, Value)>,
    ) -> FieldResult<Self> {
        let mut inputs: HashMap<&str, Value> = HashMap::with_capacity(fields.len());
        for (name, value) in fields {
            if schema.field(name).is_none() {
                return Err(FieldError::UnknownField {
                    field: name.to_string(),
                });
            }
            inputs.insert(name, value);
        }

        let mut instance = Self {
            schema: Arc::clone(&schema),
            storage: HashMap::new(),
        };

        for name in schema.field_names() {
            match inputs.remove(name) {
                Some(value) => instance.set(name, value)?,
                None => {
                    tracing::warn!(
                        schema = schema.name(),
                        field = name,
                        "생성 시점에 필드가 설정되지 않았습니다"
                    );
                }
            }
            instance.get(name)?;
        }

        Ok(instance)
    }

    /// 값 객체가 따르는 스키마를 반환합니다.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }

    /// 필드 값을 읽습니다.
    ///
    /// 저장된 값이 있으면 그 값을, 없지만 기본값이 있으면 기본값을
    /// 반환합니다 (컨테이너 필드는 기본값을 단일 원소 리스트로 감싸서).
    /// 기본값 반환은 저장소를 변경하지 않으므로 이후 읽기도 값이 같은
    /// 기본값을 다시 돌려줍니다. 둘 다 없으면 실패합니다.
    pub fn get(&self, name: &str) -> FieldResult<Value> {
        let descriptor = self
            .schema
            .field(name)
            .ok_or_else(|| FieldError::UnknownField {
                field: name.to_string(),
            })?;

        if let Some(value) = self.storage.get(name) {
            return Ok(value.clone());
        }

        match &descriptor.default {
            Some(default) if descriptor.is_container => {
                Ok(Value::List(vec![default.clone()]))
            }
            Some(default) => Ok(default.clone()),
            None => Err(FieldError::Unset {
                field: name.to_string(),
            }),
        }
    }

    /// 필드 값을 씁니다.
    ///
    /// 스칼라 필드는 선언된 원소 타입의 인스턴스여야 하고, 컨테이너
    /// 필드는 모든 원소가 인스턴스인 리스트여야 합니다. 실패한 쓰기는
    /// 저장소를 변경하지 않으며 (이전 값 보존, 부분 변경 없음) 다른
    /// 필드는 절대 손대지 않습니다.
    pub fn set(&mut self, name: &str, value: Value) -> FieldResult<()> {
        let descriptor = self
            .schema
            .field(name)
            .ok_or_else(|| FieldError::UnknownField {
                field: name.to_string(),
            })?;

        if descriptor.is_container {
            let Value::List(items) = &value else {
                return Err(FieldError::NotAList {
                    field: name.to_string(),
                    expected: descriptor.element_type,
                });
            };
            for item in items {
                if !item.is_instance_of(descriptor.element_type) {
                    return Err(FieldError::TypeMismatch {
                        field: name.to_string(),
                        expected: descriptor.element_type,
                        found: item.type_name(),
                    });
                }
            }
        } else if !value.is_instance_of(descriptor.element_type) {
            return Err(FieldError::TypeMismatch {
                field: name.to_string(),
                expected: descriptor.element_type,
                found: value.type_name(),
            });
        }

        self.storage.insert(name.to_string(), value);
        Ok(())
    }

    /// 필드에 읽을 수 있는 값이 있는지 확인합니다 (저장된 값 또는 기본값).
    pub fn is_readable(&self, name: &str) -> bool {
        self.get(name).is_ok()
    }
}

/// 디버그 표현 문자열: `<name1-value1, name2-value2>`.
///
/// 선언 순서대로, 읽을 수 있는 값이 있고 제외 표시가 없는 필드만
/// 나열합니다. 기본값 없는 미설정 필드는 에러를 전파하지 않고 단순히
/// 생략됩니다.
impl fmt::Display for Instance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        write!(f, "<")?;
        for descriptor in self.schema.fields() {
            if descriptor.excluded {
                continue;
            }
            let Ok(value) = self.get(&descriptor.name) else {
                continue;
            };
            if !first {
                write!(f, ", ")?;
            }
            write!(f, "{}-{}", descriptor.name, value)?;
            first = false;
        }
        write!(f, ">")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{FieldDecl, FieldType};
    use rust_decimal_macros::dec;

    fn order_schema() -> Arc<Schema> {
        Arc::new(
            Schema::record("Order")
                .field("price", FieldDecl::Scalar(FieldType::Decimal))
                .field(
                    "size",
                    FieldDecl::WithDefault(FieldType::Decimal, Value::Decimal(dec!(1.0))),
                )
                .field("tags", FieldDecl::List(FieldType::Str))
                .compile()
                .unwrap(),
        )
    }

    #[test]
    fn test_get_unset_required_field_fails() {
        let instance = Instance::config(order_schema());
        let err = instance.get("price").unwrap_err();
        assert_eq!(
            err,
            FieldError::Unset {
                field: "price".to_string()
            }
        );
    }

    #[test]
    fn test_get_default_does_not_mutate_storage() {
        let instance = Instance::config(order_schema());
        assert_eq!(instance.get("size").unwrap(), Value::Decimal(dec!(1.0)));
        // 기본값 반환 후에도 저장소는 비어 있고, 재읽기 값도 같다.
        assert_eq!(instance.get("size").unwrap(), Value::Decimal(dec!(1.0)));
    }

    #[test]
    fn test_set_type_mismatch_preserves_previous_value() {
        let mut instance = Instance::config(order_schema());
        instance.set("price", Value::Decimal(dec!(10.5))).unwrap();

        let err = instance
            .set("price", Value::Str("10.5".to_string()))
            .unwrap_err();
        assert!(err.is_write_error());
        assert_eq!(instance.get("price").unwrap(), Value::Decimal(dec!(10.5)));
    }

    #[test]
    fn test_set_list_rejects_wrong_element() {
        let mut instance = Instance::config(order_schema());
        let err = instance
            .set(
                "tags",
                Value::List(vec![Value::Str("a".to_string()), Value::Int(3)]),
            )
            .unwrap_err();
        assert!(matches!(err, FieldError::TypeMismatch { .. }));
        // 실패한 쓰기 후에도 필드는 미설정 상태로 남는다.
        assert!(!instance.is_readable("tags"));

        instance
            .set(
                "tags",
                Value::List(vec![
                    Value::Str("a".to_string()),
                    Value::Str("b".to_string()),
                ]),
            )
            .unwrap();
        assert_eq!(
            instance.get("tags").unwrap(),
            Value::List(vec![
                Value::Str("a".to_string()),
                Value::Str("b".to_string())
            ])
        );
    }

    #[test]
    fn test_set_list_rejects_scalar_value() {
        let mut instance = Instance::config(order_schema());
        let err = instance.set("tags", Value::Str("a".to_string())).unwrap_err();
        assert!(matches!(err, FieldError::NotAList { .. }));
    }

    #[test]
    fn test_unknown_field_access() {
        let mut instance = Instance::config(order_schema());
        assert!(matches!(
            instance.get("volume"),
            Err(FieldError::UnknownField { .. })
        ));
        assert!(matches!(
            instance.set("volume", Value::Int(1)),
            Err(FieldError::UnknownField { .. })
        ));
    }

    #[test]
    fn test_with_fields_round_trip() {
        let schema = order_schema();
        let instance = Instance::with_fields(
            Arc::clone(&schema),
            vec![
                ("price", Value::Decimal(dec!(10.5))),
                ("tags", Value::List(vec![Value::Str("grid".to_string())])),
            ],
        )
        .unwrap();

        assert_eq!(instance.get("price").unwrap(), Value::Decimal(dec!(10.5)));
        assert_eq!(instance.get("size").unwrap(), Value::Decimal(dec!(1.0)));
        assert_eq!(
            instance.get("tags").unwrap(),
            Value::List(vec![Value::Str("grid".to_string())])
        );
    }

    #[test]
    fn test_with_fields_missing_required_fails() {
        let err = Instance::with_fields(order_schema(), vec![]).unwrap_err();
        assert_eq!(
            err,
            FieldError::Unset {
                field: "price".to_string()
            }
        );
    }

    #[test]
    fn test_with_fields_rejects_unknown_keyword() {
        let err = Instance::with_fields(
            order_schema(),
            vec![("volume", Value::Decimal(dec!(1)))],
        )
        .unwrap_err();
        assert!(matches!(err, FieldError::UnknownField { .. }));
    }

    #[test]
    fn test_display_lists_readable_fields_in_order() {
        let schema = Arc::new(
            Schema::record("Order")
                .field("price", FieldDecl::Scalar(FieldType::Decimal))
                .field(
                    "size",
                    FieldDecl::WithDefault(FieldType::Decimal, Value::Decimal(dec!(1.0))),
                )
                .compile()
                .unwrap(),
        );
        let instance = Instance::with_fields(
            schema,
            vec![("price", Value::Decimal(dec!(10.5)))],
        )
        .unwrap();

        assert_eq!(instance.to_string(), "<price-10.5, size-1.0>");
    }

    #[test]
    fn test_display_skips_excluded_and_unset_fields() {
        let schema = Arc::new(
            Schema::record("Order")
                .field("price", FieldDecl::Scalar(FieldType::Decimal))
                .field(
                    "strategy",
                    FieldDecl::WithDefaultHidden(
                        FieldType::Str,
                        Value::Str("grid".to_string()),
                    ),
                )
                .field("note", FieldDecl::Scalar(FieldType::Str))
                .compile()
                .unwrap(),
        );

        let mut instance = Instance::config(schema);
        instance.set("price", Value::Decimal(dec!(10.5))).unwrap();
        // strategy는 값이 있어도 제외, note는 미설정이므로 생략 (에러 없음).
        assert_eq!(instance.to_string(), "<price-10.5>");
    }

    #[test]
    fn test_display_container_default_wraps_single_element() {
        let schema = Arc::new(
            Schema::record("Feed")
                .field(
                    "symbols",
                    FieldDecl::ListWithDefault(
                        FieldType::Str,
                        Value::Str("BTC/USD".to_string()),
                    ),
                )
                .compile()
                .unwrap(),
        );
        let instance = Instance::config(schema);
        assert_eq!(
            instance.get("symbols").unwrap(),
            Value::List(vec![Value::Str("BTC/USD".to_string())])
        );
        assert_eq!(instance.to_string(), "<symbols-[BTC/USD]>");
    }
}
