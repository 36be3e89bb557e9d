//! HTTP 送信 Outbound ポート
//!
//! LLM クライアントはこの trait 経由でのみネットワークに触れる。

use crate::error::Error;

/// HTTP レスポンス（ステータスと本文のみ）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }
}

/// JSON を POST してレスポンスを受け取る（ブロッキング）
///
/// 接続失敗・タイムアウトは `Err(Error::Http)`。非 2xx は `Ok` でステータスをそのまま返す。
/// エラーメッセージに URL（クエリのキーを含む）を載せてはならない。
pub trait HttpPost: Send + Sync {
    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, Error>;
}
