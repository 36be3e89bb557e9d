//! API キーの解決（起動時に 1 回）
//!
//! 取得元を順に問い合わせ、最初に見つかった値を使う。どこにも無ければ起動を中止する。

use crate::ports::outbound::CredentialSource;
use common::domain::ApiKey;
use common::error::Error;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;

/// API キーを探す変数名（環境変数・.env・secrets.json 共通）
pub const API_KEY_VAR: &str = "GEMINI_API_KEY";

pub fn resolve_credential(
    sources: &[Arc<dyn CredentialSource>],
    log: &dyn Log,
) -> Result<ApiKey, Error> {
    for source in sources {
        if let Some(key) = source.lookup(API_KEY_VAR)? {
            let _ = log.log(
                &LogRecord::new(LogLevel::Info, "credential resolved")
                    .layer("usecase")
                    .kind("credential")
                    .field("source", source.name()),
            );
            return Ok(key);
        }
    }
    let tried: Vec<&str> = sources.iter().map(|s| s.name()).collect();
    let _ = log.log(
        &LogRecord::new(LogLevel::Error, "credential not found")
            .layer("usecase")
            .kind("credential")
            .field("tried", serde_json::json!(tried)),
    );
    Err(Error::MissingCredential)
}
