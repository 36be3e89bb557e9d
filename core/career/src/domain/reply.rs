//! サービス呼び出し結果を表示用テキストに変換する
//!
//! 失敗の分類は common::llm::ServiceError、表示文言はここで決める。

use common::llm::ServiceError;

/// 200 だが本文から回答を取り出せなかったときの固定文言
pub const PARSE_FALLBACK: &str = "✅ Got response but couldn't parse it properly.";

/// 結果をトランスクリプトに載せる assistant テキストにする
pub fn render_reply(outcome: Result<String, ServiceError>) -> String {
    match outcome {
        Ok(text) => text,
        Err(ServiceError::Unparseable { .. }) => PARSE_FALLBACK.to_string(),
        Err(ServiceError::Status { status, body }) => format!("❌ Error {}: {}", status, body),
        Err(ServiceError::Transport(message)) => format!("❌ Error: {}", message),
    }
}
