//! 配線: 標準アダプタで UseCase を組み立てる

use std::sync::Arc;

use common::adapter::{CompositeLog, FileJsonLog, StdEnvResolver, StdFileSystem, StderrLog};
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem, Log};

use crate::adapter::{DotenvCredential, EnvCredential, GeminiAdvisorFactory, SecretsFileCredential};
use crate::ports::outbound::CredentialSource;
use crate::usecase::app::{CareerDeps, CareerUseCase};

/// main から使う組み立て済みアプリ
pub struct App {
    pub logger: Arc<dyn Log>,
    pub career_use_case: CareerUseCase,
}

/// 配線: 標準アダプタで CareerUseCase を組み立てる
///
/// verbose のときはファイルログに加えて stderr にも出す。
pub fn wire_career(verbose: bool) -> Result<App, Error> {
    let fs: Arc<dyn FileSystem> = Arc::new(StdFileSystem);
    let env_resolver: Arc<dyn EnvResolver> = Arc::new(StdEnvResolver);
    let home = env_resolver.resolve_home_dir()?;

    let file_log: Arc<dyn Log> = Arc::new(FileJsonLog::new(Arc::clone(&fs), home.log_file()));
    let logger: Arc<dyn Log> = if verbose {
        Arc::new(CompositeLog::new(vec![file_log, Arc::new(StderrLog)]))
    } else {
        file_log
    };

    // 環境変数 → カレントディレクトリの .env → secrets.json の順
    let mut credential_sources: Vec<Arc<dyn CredentialSource>> =
        vec![Arc::new(EnvCredential::new(Arc::clone(&env_resolver)))];
    if let Ok(cwd) = env_resolver.current_dir() {
        credential_sources.push(Arc::new(DotenvCredential::new(
            Arc::clone(&fs),
            cwd.join(".env"),
        )));
    }
    credential_sources.push(Arc::new(SecretsFileCredential::new(
        Arc::clone(&fs),
        home.secrets_file(),
    )));

    let career_use_case = CareerUseCase::new(CareerDeps {
        fs,
        home,
        log: Arc::clone(&logger),
        credential_sources,
        advisor_factory: Arc::new(GeminiAdvisorFactory),
    });

    Ok(App {
        logger,
        career_use_case,
    })
}
