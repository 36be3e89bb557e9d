//! Gemini を使う CareerAdvisor（reqwest blocking + タイムアウト）

use crate::ports::outbound::{AdvisorFactory, CareerAdvisor};
use common::adapter::ReqwestHttp;
use common::domain::ApiKey;
use common::error::Error;
use common::llm::{ClientConfig, GeminiClient, GenerateContentRequest, ServiceError};
use std::sync::Arc;

pub struct GeminiAdvisor {
    client: GeminiClient,
}

impl GeminiAdvisor {
    pub fn new(client: GeminiClient) -> Self {
        Self { client }
    }
}

impl CareerAdvisor for GeminiAdvisor {
    fn advise(&self, payload: &GenerateContentRequest) -> Result<String, ServiceError> {
        self.client.generate(payload)
    }
}

/// 設定のタイムアウトで HTTP クライアントを作り GeminiAdvisor を返す
#[derive(Debug, Clone, Default)]
pub struct GeminiAdvisorFactory;

impl AdvisorFactory for GeminiAdvisorFactory {
    fn create(
        &self,
        config: &ClientConfig,
        api_key: ApiKey,
    ) -> Result<Arc<dyn CareerAdvisor>, Error> {
        let http = Arc::new(ReqwestHttp::new(config.timeout)?);
        let client = GeminiClient::new(http, config, api_key);
        Ok(Arc::new(GeminiAdvisor::new(client)))
    }
}
