//! 거래 요청을 거래소 요청 파라미터로 변환.
//!
//! 값 객체의 get 접근자와 표현 문자열만 사용합니다. 스키마 내부나
//! 저장소에는 접근하지 않습니다.

use crate::convert::{currency_to_gdax, order_type_to_gdax};
use crate::error::ExchangeError;
use algo_core::{Instance, OrderSubType};
use std::collections::HashMap;

/// 거래 요청 값 객체를 GDAX 주문 파라미터 맵으로 변환합니다.
///
/// 요청은 `trade_request_schema()`(또는 그것을 확장한 스키마)로 생성된
/// 값 객체여야 합니다. 세부 유형이 FOK이면 `time_in_force`를, post-only면
/// `post_only`를 추가합니다.
pub fn trade_req_to_params_gdax(
    request: &Instance,
) -> Result<HashMap<String, String>, ExchangeError> {
    let mut params = HashMap::new();

    params.insert("price".to_string(), request.get("price")?.to_string());
    params.insert("size".to_string(), request.get("volume")?.to_string());

    let currency = request
        .get("currency")?
        .as_currency()
        .ok_or_else(|| ExchangeError::ParseError("currency field is not a currency".into()))?;
    params.insert(
        "product_id".to_string(),
        currency_to_gdax(currency)?.to_string(),
    );

    let order_type = request
        .get("order_type")?
        .as_order_type()
        .ok_or_else(|| ExchangeError::ParseError("order_type field is not an order type".into()))?;
    params.insert("type".to_string(), order_type_to_gdax(order_type)?.to_string());

    match request.get("order_sub_type")?.as_order_sub_type() {
        Some(OrderSubType::FillOrKill) => {
            params.insert("time_in_force".to_string(), "FOK".to_string());
        }
        Some(OrderSubType::PostOnly) => {
            params.insert("post_only".to_string(), "1".to_string());
        }
        _ => {}
    }

    Ok(params)
}
