//! シナリオテスト（ポートをスタブに差し替えて usecase を通す）


use crate::adapter::gemini_advisor::GeminiAdvisor;
use crate::domain::Transcript;
use crate::ports::outbound::{AdvisorFactory, CareerAdvisor, ChatView, CredentialSource};
use common::domain::ApiKey;
use common::error::Error;
use common::llm::{ClientConfig, GeminiClient, GenerateContentRequest, ServiceError};
use common::ports::outbound::{HttpPost, HttpResponse};
use std::collections::VecDeque;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

/// 決まった応答を順に返し、受け取ったペイロードを記録する Advisor
pub struct StubAdvisor {
    replies: Mutex<VecDeque<Result<String, ServiceError>>>,
    pub payloads: Mutex<Vec<GenerateContentRequest>>,
}

impl StubAdvisor {
    pub fn new(replies: Vec<Result<String, ServiceError>>) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.into()),
            payloads: Mutex::new(Vec::new()),
        })
    }

    pub fn call_count(&self) -> usize {
        self.payloads.lock().unwrap().len()
    }
}

impl CareerAdvisor for StubAdvisor {
    fn advise(&self, payload: &GenerateContentRequest) -> Result<String, ServiceError> {
        self.payloads.lock().unwrap().push(payload.clone());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok("default answer".to_string()))
    }
}

/// 固定の HTTP 応答を返す（GeminiClient を本物のまま通すため）
pub struct StubHttp {
    response: HttpResponse,
    pub calls: AtomicUsize,
}

impl StubHttp {
    pub fn new(status: u16, body: &str) -> Arc<Self> {
        Arc::new(Self {
            response: HttpResponse::new(status, body),
            calls: AtomicUsize::new(0),
        })
    }
}

impl HttpPost for StubHttp {
    fn post_json(&self, _url: &str, _body: &str) -> Result<HttpResponse, Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(self.response.clone())
    }
}

/// StubHttp の上に本物の GeminiAdvisor を載せる
pub fn gemini_advisor_over(http: Arc<StubHttp>) -> Arc<dyn CareerAdvisor> {
    let client = GeminiClient::new(
        http,
        &ClientConfig::default(),
        ApiKey::new("test-key").unwrap(),
    );
    Arc::new(GeminiAdvisor::new(client))
}

/// 入力を台本どおりに返し、描画内容を記録する View
#[derive(Default)]
pub struct ScriptedView {
    inputs: VecDeque<String>,
    pub banners: usize,
    /// render ごとのトランスクリプトの (role, content) 列
    pub renders: Vec<Vec<(String, String)>>,
    /// busy(true) の時点で表示済みだったターン数
    pub busy_on_at: Vec<usize>,
    pub busy: bool,
    pub reads: usize,
    pub finishes: usize,
    /// true なら busy(false) を失敗させる
    pub fail_busy_off: bool,
}

impl ScriptedView {
    pub fn new(inputs: &[&str]) -> Self {
        Self {
            inputs: inputs.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    pub fn last_render(&self) -> &[(String, String)] {
        self.renders.last().map(Vec::as_slice).unwrap_or(&[])
    }
}

impl ChatView for ScriptedView {
    fn show_banner(&mut self) -> Result<(), Error> {
        self.banners += 1;
        Ok(())
    }

    fn render(&mut self, transcript: &Transcript) -> Result<(), Error> {
        self.renders.push(
            transcript
                .turns()
                .iter()
                .map(|t| (t.role().to_string(), t.content().to_string()))
                .collect(),
        );
        Ok(())
    }

    fn set_busy(&mut self, busy: bool) -> Result<(), Error> {
        if !busy && self.fail_busy_off {
            return Err(Error::io_msg("Failed to write to terminal: broken pipe"));
        }
        if busy {
            self.busy_on_at
                .push(self.renders.last().map(Vec::len).unwrap_or(0));
        }
        self.busy = busy;
        Ok(())
    }

    fn read_input(&mut self) -> Result<Option<String>, Error> {
        self.reads += 1;
        Ok(self.inputs.pop_front())
    }

    fn finish(&mut self) -> Result<(), Error> {
        self.finishes += 1;
        Ok(())
    }
}

/// 固定値を返す取得元
pub struct StaticCredential {
    pub name: &'static str,
    pub value: Option<&'static str>,
    pub lookups: AtomicUsize,
}

impl StaticCredential {
    pub fn new(name: &'static str, value: Option<&'static str>) -> Arc<Self> {
        Arc::new(Self {
            name,
            value,
            lookups: AtomicUsize::new(0),
        })
    }
}

impl CredentialSource for StaticCredential {
    fn name(&self) -> &str {
        self.name
    }

    fn lookup(&self, _key_name: &str) -> Result<Option<ApiKey>, Error> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.value.and_then(ApiKey::new))
    }
}

/// 取得元の列を trait オブジェクトの列にする
pub fn sources(list: Vec<Arc<StaticCredential>>) -> Vec<Arc<dyn CredentialSource>> {
    list.into_iter()
        .map(|s| s as Arc<dyn CredentialSource>)
        .collect()
}

/// 作成回数を数え、渡された設定とキーを記録する Factory
pub struct RecordingFactory {
    pub advisor: Arc<StubAdvisor>,
    pub created: Mutex<Vec<(ClientConfig, String)>>,
}

impl RecordingFactory {
    pub fn new(advisor: Arc<StubAdvisor>) -> Arc<Self> {
        Arc::new(Self {
            advisor,
            created: Mutex::new(Vec::new()),
        })
    }
}

impl AdvisorFactory for RecordingFactory {
    fn create(
        &self,
        config: &ClientConfig,
        api_key: ApiKey,
    ) -> Result<Arc<dyn CareerAdvisor>, Error> {
        self.created
            .lock()
            .unwrap()
            .push((config.clone(), api_key.expose().to_string()));
        let advisor: Arc<dyn CareerAdvisor> = self.advisor.clone();
        Ok(advisor)
    }
}
