//! リモート生成サービス呼び出しの Outbound ポート

use common::domain::ApiKey;
use common::error::Error;
use common::llm::{ClientConfig, GenerateContentRequest, ServiceError};
use std::sync::Arc;

/// 1 リクエストを送り回答テキストを得る（ブロッキング・リトライなし）
pub trait CareerAdvisor: Send + Sync {
    fn advise(&self, payload: &GenerateContentRequest) -> Result<String, ServiceError>;
}

/// 解決済みの設定と API キーから CareerAdvisor を作る
pub trait AdvisorFactory: Send + Sync {
    fn create(
        &self,
        config: &ClientConfig,
        api_key: ApiKey,
    ) -> Result<Arc<dyn CareerAdvisor>, Error>;
}
