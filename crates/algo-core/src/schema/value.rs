//! 런타임 필드 타입 및 값.
//!
//! 스키마의 필드 타입은 스키마 정의 시점에 선택되므로, 값은 컴파일 타임
//! 타입이 아닌 런타임 태그(`FieldType`)로 구분됩니다. `Value`는 선언 가능한
//! 모든 타입의 인스턴스를 담는 닫힌 유니버스입니다.

use crate::domain::{Currency, Exchange, OrderSubType, OrderType, Side, TradingVenue};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// 선언 가능한 필드 원소 타입.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldType {
    /// 불리언
    Bool,
    /// 정수형
    Int,
    /// 실수형
    Float,
    /// 고정 소수점 (가격, 수량)
    Decimal,
    /// 문자열
    Str,
    /// UTC 타임스탬프
    DateTime,
    /// 거래소
    Exchange,
    /// 거래 환경
    TradingVenue,
    /// 통화
    Currency,
    /// 주문 방향
    Side,
    /// 주문 유형
    OrderType,
    /// 주문 세부 유형
    OrderSubType,
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Bool => write!(f, "bool"),
            FieldType::Int => write!(f, "int"),
            FieldType::Float => write!(f, "float"),
            FieldType::Decimal => write!(f, "decimal"),
            FieldType::Str => write!(f, "str"),
            FieldType::DateTime => write!(f, "datetime"),
            FieldType::Exchange => write!(f, "exchange"),
            FieldType::TradingVenue => write!(f, "trading_venue"),
            FieldType::Currency => write!(f, "currency"),
            FieldType::Side => write!(f, "side"),
            FieldType::OrderType => write!(f, "order_type"),
            FieldType::OrderSubType => write!(f, "order_sub_type"),
        }
    }
}

/// 런타임 필드 값.
///
/// 스칼라 변형은 `FieldType`의 변형과 일대일로 대응하며,
/// `Value::List`는 컨테이너 필드의 저장 형식입니다.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Value {
    /// 불리언 값
    Bool(bool),
    /// 정수 값
    Int(i64),
    /// 실수 값
    Float(f64),
    /// 고정 소수점 값
    Decimal(Decimal),
    /// 문자열 값
    Str(String),
    /// 타임스탬프 값
    DateTime(DateTime<Utc>),
    /// 거래소 값
    Exchange(Exchange),
    /// 거래 환경 값
    TradingVenue(TradingVenue),
    /// 통화 값
    Currency(Currency),
    /// 주문 방향 값
    Side(Side),
    /// 주문 유형 값
    OrderType(OrderType),
    /// 주문 세부 유형 값
    OrderSubType(OrderSubType),
    /// 컨테이너 값 (순서 있는 원소 목록)
    List(Vec<Value>),
}

impl Value {
    /// 값의 런타임 타입 태그를 반환합니다. 리스트는 원소 타입이 없으므로 `None`입니다.
    pub fn field_type(&self) -> Option<FieldType> {
        match self {
            Value::Bool(_) => Some(FieldType::Bool),
            Value::Int(_) => Some(FieldType::Int),
            Value::Float(_) => Some(FieldType::Float),
            Value::Decimal(_) => Some(FieldType::Decimal),
            Value::Str(_) => Some(FieldType::Str),
            Value::DateTime(_) => Some(FieldType::DateTime),
            Value::Exchange(_) => Some(FieldType::Exchange),
            Value::TradingVenue(_) => Some(FieldType::TradingVenue),
            Value::Currency(_) => Some(FieldType::Currency),
            Value::Side(_) => Some(FieldType::Side),
            Value::OrderType(_) => Some(FieldType::OrderType),
            Value::OrderSubType(_) => Some(FieldType::OrderSubType),
            Value::List(_) => None,
        }
    }

    /// 에러 메시지용 타입 이름을 반환합니다.
    pub fn type_name(&self) -> String {
        match self.field_type() {
            Some(ty) => ty.to_string(),
            None => "list".to_string(),
        }
    }

    /// 값이 선언된 원소 타입의 인스턴스인지 확인합니다.
    ///
    /// 태그가 정확히 일치하면 인스턴스이며, 추가로 정수는 `Float`/`Decimal`
    /// 선언을 만족합니다 (수치 확장). 리스트는 어떤 스칼라 타입의
    /// 인스턴스도 아닙니다.
    pub fn is_instance_of(&self, ty: FieldType) -> bool {
        match self.field_type() {
            Some(actual) if actual == ty => true,
            Some(FieldType::Int) => matches!(ty, FieldType::Float | FieldType::Decimal),
            _ => false,
        }
    }

    /// 고정 소수점 값을 추출합니다. 정수 값은 확장됩니다.
    pub fn as_decimal(&self) -> Option<Decimal> {
        match self {
            Value::Decimal(d) => Some(*d),
            Value::Int(i) => Some(Decimal::from(*i)),
            _ => None,
        }
    }

    /// 문자열 값을 추출합니다.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// 통화 값을 추출합니다.
    pub fn as_currency(&self) -> Option<Currency> {
        match self {
            Value::Currency(c) => Some(*c),
            _ => None,
        }
    }

    /// 주문 유형 값을 추출합니다.
    pub fn as_order_type(&self) -> Option<OrderType> {
        match self {
            Value::OrderType(t) => Some(*t),
            _ => None,
        }
    }

    /// 주문 세부 유형 값을 추출합니다.
    pub fn as_order_sub_type(&self) -> Option<OrderSubType> {
        match self {
            Value::OrderSubType(t) => Some(*t),
            _ => None,
        }
    }

    /// 거래 환경 값을 추출합니다.
    pub fn as_trading_venue(&self) -> Option<TradingVenue> {
        match self {
            Value::TradingVenue(v) => Some(*v),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(v) => write!(f, "{}", v),
            Value::Int(v) => write!(f, "{}", v),
            Value::Float(v) => write!(f, "{}", v),
            Value::Decimal(v) => write!(f, "{}", v),
            Value::Str(v) => write!(f, "{}", v),
            Value::DateTime(v) => write!(f, "{}", v.to_rfc3339()),
            Value::Exchange(v) => write!(f, "{}", v),
            Value::TradingVenue(v) => write!(f, "{}", v),
            Value::Currency(v) => write!(f, "{}", v),
            Value::Side(v) => write!(f, "{}", v),
            Value::OrderType(v) => write!(f, "{}", v),
            Value::OrderSubType(v) => write!(f, "{}", v),
            Value::List(items) => {
                write!(f, "[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{}", item)?;
                }
                write!(f, "]")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_instance_check_exact() {
        assert!(Value::Str("BTC".to_string()).is_instance_of(FieldType::Str));
        assert!(Value::Side(Side::Buy).is_instance_of(FieldType::Side));
        assert!(!Value::Str("BTC".to_string()).is_instance_of(FieldType::Int));
    }

    #[test]
    fn test_instance_check_numeric_widening() {
        assert!(Value::Int(3).is_instance_of(FieldType::Float));
        assert!(Value::Int(3).is_instance_of(FieldType::Decimal));
        assert!(!Value::Float(3.0).is_instance_of(FieldType::Int));
    }

    #[test]
    fn test_list_is_not_scalar_instance() {
        let list = Value::List(vec![Value::Int(1)]);
        assert!(!list.is_instance_of(FieldType::Int));
        assert_eq!(list.field_type(), None);
        assert_eq!(list.type_name(), "list");
    }

    #[test]
    fn test_value_extractors() {
        assert_eq!(Value::Decimal(dec!(10.5)).as_decimal(), Some(dec!(10.5)));
        assert_eq!(Value::Int(3).as_decimal(), Some(dec!(3)));
        assert_eq!(Value::Str("BTC".to_string()).as_str(), Some("BTC"));
        assert_eq!(Value::Bool(true).as_decimal(), None);
    }

    #[test]
    fn test_value_display() {
        assert_eq!(Value::Decimal(dec!(10.5)).to_string(), "10.5");
        assert_eq!(Value::Side(Side::Buy).to_string(), "BUY");
        let list = Value::List(vec![
            Value::Str("a".to_string()),
            Value::Str("b".to_string()),
        ]);
        assert_eq!(list.to_string(), "[a, b]");
    }

    #[test]
    fn test_value_serialization() {
        let value = Value::Currency(Currency::Btc);
        let json = serde_json::to_string(&value).unwrap();
        let back: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value, back);
    }
}
