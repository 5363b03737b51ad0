//! 스키마로 정의된 도메인 값 객체.
//!
//! 거래 요청/응답과 거래소 설정의 스키마 정의입니다. 응답 스키마는
//! 요청 스키마를 합성으로 확장하며, 거래소 설정은 생성자 없는 config
//! 수명 주기를 사용합니다.

use crate::domain::{Currency, OrderSubType, TradingVenue};
use crate::error::SchemaResult;
use crate::schema::{FieldDecl, FieldType, Schema, Value};
use rust_decimal_macros::dec;

/// 거래 요청 스키마.
///
/// 필수 필드: side, volume, price, exchange, currency, order_type.
/// order_sub_type은 기본값 `NONE`을 갖는 선택 필드입니다.
pub fn trade_request_schema() -> SchemaResult<Schema> {
    Schema::record("TradeRequest")
        .field("side", FieldDecl::Scalar(FieldType::Side))
        .field("volume", FieldDecl::Scalar(FieldType::Decimal))
        .field("price", FieldDecl::Scalar(FieldType::Decimal))
        .field("exchange", FieldDecl::Scalar(FieldType::Exchange))
        .field("currency", FieldDecl::Scalar(FieldType::Currency))
        .field("order_type", FieldDecl::Scalar(FieldType::OrderType))
        .field(
            "order_sub_type",
            FieldDecl::WithDefault(
                FieldType::OrderSubType,
                Value::OrderSubType(OrderSubType::None),
            ),
        )
        .compile()
}

/// 거래 응답 스키마.
///
/// 요청 스키마를 확장하여 체결 결과 필드를 추가합니다. `strategy`는
/// 로그 노이즈를 줄이기 위해 표현 문자열에서 제외됩니다.
pub fn trade_response_schema() -> SchemaResult<Schema> {
    Schema::record("TradeResponse")
        .extends(&trade_request_schema()?)
        .field("success", FieldDecl::Scalar(FieldType::Bool))
        .field(
            "slippage",
            FieldDecl::WithDefault(FieldType::Decimal, Value::Decimal(dec!(0.0))),
        )
        .field(
            "transaction_cost",
            FieldDecl::WithDefault(FieldType::Decimal, Value::Decimal(dec!(0.0))),
        )
        .field(
            "strategy",
            FieldDecl::WithDefaultHidden(FieldType::Str, Value::Str(String::new())),
        )
        .compile()
}

/// 거래소 설정 스키마 (config 수명 주기).
///
/// 필드는 생성 후 외부에서 할당됩니다. `venue` 기본값은 샌드박스이며,
/// `currencies`는 미설정 시 `[BTC]`를 반환하는 선택 컨테이너입니다.
pub fn exchange_config_schema() -> SchemaResult<Schema> {
    Schema::config("ExchangeConfig")
        .field("exchange", FieldDecl::Scalar(FieldType::Exchange))
        .field(
            "venue",
            FieldDecl::WithDefault(
                FieldType::TradingVenue,
                Value::TradingVenue(TradingVenue::Sandbox),
            ),
        )
        .field(
            "currencies",
            FieldDecl::ListWithDefault(FieldType::Currency, Value::Currency(Currency::Btc)),
        )
        .compile()
}
