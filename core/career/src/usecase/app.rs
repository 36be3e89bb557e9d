//! career のユースケース（アダプター経由で I/O を行う）

use crate::ports::outbound::{AdvisorFactory, ChatView, CredentialSource};
use crate::usecase::credential::resolve_credential;
use crate::usecase::session_loop::SessionLoop;
use common::domain::{HomeDir, ModelName};
use common::error::Error;
use common::llm::ClientConfig;
use common::ports::outbound::{FileSystem, Log, LogLevel, LogRecord};
use std::sync::Arc;

pub struct CareerDeps {
    pub fs: Arc<dyn FileSystem>,
    pub home: HomeDir,
    pub log: Arc<dyn Log>,
    /// 問い合わせ順に並べる
    pub credential_sources: Vec<Arc<dyn CredentialSource>>,
    pub advisor_factory: Arc<dyn AdvisorFactory>,
}

pub struct CareerUseCase {
    deps: CareerDeps,
}

impl CareerUseCase {
    pub fn new(deps: CareerDeps) -> Self {
        Self { deps }
    }

    /// config.json と CLI 指定からクライアント設定を決める
    pub fn client_config(
        &self,
        model: Option<ModelName>,
        timeout_secs: Option<u64>,
    ) -> Result<ClientConfig, Error> {
        ClientConfig::load(&*self.deps.fs, &self.deps.home.config_file())?
            .with_overrides(model, timeout_secs)
    }

    /// 対話セッションを実行する。
    /// API キーが解決できなければ表示面にもサービスにも触れずに Err を返す。
    pub fn run_chat<V: ChatView>(
        &self,
        view: V,
        model: Option<ModelName>,
        timeout_secs: Option<u64>,
    ) -> Result<i32, Error> {
        let config = self.client_config(model, timeout_secs)?;
        let api_key = resolve_credential(&self.deps.credential_sources, &*self.deps.log)?;
        let advisor = self.deps.advisor_factory.create(&config, api_key)?;
        let _ = self.deps.log.log(
            &LogRecord::new(LogLevel::Info, "advisor ready")
                .layer("usecase")
                .kind("config")
                .field("model", config.model.to_string())
                .field("timeout_secs", config.timeout.as_secs()),
        );
        let mut session_loop = SessionLoop::new(advisor, view, Arc::clone(&self.deps.log));
        session_loop.run()
    }
}
