//! 트레이딩 운영을 위한 도메인 모델.

mod currency;
mod exchange;
mod order;
mod request;

pub use currency::*;
pub use exchange::*;
pub use order::*;
pub use request::*;
