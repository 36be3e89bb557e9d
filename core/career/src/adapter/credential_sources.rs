//! API キー取得元の実装: 環境変数 / .env / secrets.json

use crate::adapter::dotenv::parse_dotenv;
use crate::ports::outbound::CredentialSource;
use common::domain::ApiKey;
use common::error::Error;
use common::ports::outbound::{EnvResolver, FileSystem};
use serde_json::Value;
use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

/// プロセス環境変数
pub struct EnvCredential {
    env: Arc<dyn EnvResolver>,
}

impl EnvCredential {
    pub fn new(env: Arc<dyn EnvResolver>) -> Self {
        Self { env }
    }
}

impl CredentialSource for EnvCredential {
    fn name(&self) -> &str {
        "env"
    }

    fn lookup(&self, key_name: &str) -> Result<Option<ApiKey>, Error> {
        Ok(self.env.var(key_name).and_then(ApiKey::new))
    }
}

/// カレントディレクトリの .env（環境変数より後に見る）
pub struct DotenvCredential {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl DotenvCredential {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl CredentialSource for DotenvCredential {
    fn name(&self) -> &str {
        "dotenv"
    }

    fn lookup(&self, key_name: &str) -> Result<Option<ApiKey>, Error> {
        let Some(contents) = self.fs.read_optional(&self.path)? else {
            return Ok(None);
        };
        Ok(parse_dotenv(&contents)
            .remove(key_name)
            .and_then(ApiKey::new))
    }
}

/// 秘密情報ストア（フラットな JSON オブジェクト）
pub struct SecretsFileCredential {
    fs: Arc<dyn FileSystem>,
    path: PathBuf,
}

impl SecretsFileCredential {
    pub fn new(fs: Arc<dyn FileSystem>, path: impl Into<PathBuf>) -> Self {
        Self {
            fs,
            path: path.into(),
        }
    }
}

impl CredentialSource for SecretsFileCredential {
    fn name(&self) -> &str {
        "secrets"
    }

    fn lookup(&self, key_name: &str) -> Result<Option<ApiKey>, Error> {
        let Some(contents) = self.fs.read_optional(&self.path)? else {
            return Ok(None);
        };
        let secrets: HashMap<String, Value> = serde_json::from_str(&contents)
            .map_err(|e| Error::env(format!("{}: {}", self.path.display(), e)))?;
        Ok(secrets
            .get(key_name)
            .and_then(Value::as_str)
            .and_then(ApiKey::new))
    }
}
