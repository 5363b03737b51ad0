//! 환경 변수 기반 API 자격증명 로딩.
//!
//! 자격증명은 `<PREFIX>_API_KEY`, `<PREFIX>_API_SECRET`, `<PREFIX>_API_PASS`
//! 환경 변수에서 읽습니다. `.env` 파일이 있으면 함께 반영됩니다.

use crate::error::ExchangeError;
use secrecy::SecretString;

/// 거래소 API 자격증명.
///
/// 시크릿과 패스프레이즈는 로그에 노출되지 않도록 `SecretString`으로
/// 감쌉니다.
#[derive(Debug, Clone)]
pub struct ApiCredentials {
    /// API 키
    pub key: String,
    /// API 시크릿
    pub secret: SecretString,
    /// API 패스프레이즈
    pub passphrase: SecretString,
}

impl ApiCredentials {
    /// 접두사가 붙은 환경 변수에서 자격증명을 로드합니다.
    ///
    /// # 예제
    ///
    /// ```no_run
    /// use algo_exchange::ApiCredentials;
    ///
    /// // GDAX_API_KEY / GDAX_API_SECRET / GDAX_API_PASS를 읽는다.
    /// let creds = ApiCredentials::from_env("GDAX").unwrap();
    /// ```
    pub fn from_env(prefix: &str) -> Result<Self, ExchangeError> {
        dotenvy::dotenv().ok();

        Ok(Self {
            key: read_var(prefix, "API_KEY")?,
            secret: SecretString::from(read_var(prefix, "API_SECRET")?),
            passphrase: SecretString::from(read_var(prefix, "API_PASS")?),
        })
    }
}

fn read_var(prefix: &str, suffix: &str) -> Result<String, ExchangeError> {
    let name = format!("{}_{}", prefix, suffix);
    std::env::var(&name).map_err(|_| ExchangeError::MissingCredential(name))
}
