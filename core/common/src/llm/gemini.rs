//! Gemini generateContent クライアント
//!
//! 1 リクエスト = 1 回のブロッキング POST。リトライはしない。
//! 失敗はすべて [`ServiceError`] に分類して返し、表示方法は呼び出し側が決める。

use crate::domain::{ApiKey, ModelName};
use crate::llm::config::ClientConfig;
use crate::llm::wire::{extract_candidate_text, GenerateContentRequest};
use crate::ports::outbound::HttpPost;
use std::sync::Arc;
use thiserror::Error as ThisError;

/// サービス呼び出しの失敗分類
#[derive(Debug, Clone, PartialEq, Eq, ThisError)]
pub enum ServiceError {
    /// 200 以外のステータス
    #[error("HTTP {status}: {body}")]
    Status { status: u16, body: String },
    /// 接続失敗・タイムアウト等（応答なし）
    #[error("{0}")]
    Transport(String),
    /// 200 だが candidates[0].content.parts[0].text が取れない
    #[error("unexpected response shape")]
    Unparseable { body: String },
}

impl ServiceError {
    /// ログ用の短い分類名
    pub fn kind(&self) -> &'static str {
        match self {
            ServiceError::Status { .. } => "status",
            ServiceError::Transport(_) => "transport",
            ServiceError::Unparseable { .. } => "unparseable",
        }
    }
}

/// Gemini クライアント
pub struct GeminiClient {
    http: Arc<dyn HttpPost>,
    base_url: String,
    model: ModelName,
    api_key: ApiKey,
}

impl GeminiClient {
    pub fn new(http: Arc<dyn HttpPost>, config: &ClientConfig, api_key: ApiKey) -> Self {
        Self {
            http,
            base_url: config.base_url.clone(),
            model: config.model.clone(),
            api_key,
        }
    }

    pub fn model(&self) -> &ModelName {
        &self.model
    }

    fn endpoint(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.base_url,
            self.model,
            self.api_key.expose()
        )
    }

    /// リクエストを送り、最初の候補のテキストを返す
    pub fn generate(&self, payload: &GenerateContentRequest) -> Result<String, ServiceError> {
        let body = serde_json::to_string(payload)
            .map_err(|e| ServiceError::Transport(format!("Failed to serialize request: {}", e)))?;

        let response = self
            .http
            .post_json(&self.endpoint(), &body)
            .map_err(|e| ServiceError::Transport(e.to_string()))?;

        if response.status != 200 {
            return Err(ServiceError::Status {
                status: response.status,
                body: response.body,
            });
        }

        extract_candidate_text(&response.body)
            .ok_or(ServiceError::Unparseable { body: response.body })
    }
}
