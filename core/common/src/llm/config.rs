//! config.json 用の設定型と読み込み
//!
//! Gemini クライアントのモデル名・ベース URL・タイムアウトを解決する。
//! 優先順位は CLI 指定 > config.json > 組み込みデフォルト。

use crate::domain::ModelName;
use crate::error::Error;
use crate::ports::outbound::FileSystem;
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_MODEL: &str = "gemini-2.0-flash";
pub const DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";
pub const DEFAULT_TIMEOUT_SECS: u64 = 60;
/// これを超えるタイムアウトは受け付けない（1 時間）
pub const MAX_TIMEOUT_SECS: u64 = 3600;

/// 解決済みのクライアント設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    pub model: ModelName,
    /// 末尾の `/` は含まない
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            model: ModelName::new(DEFAULT_MODEL),
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }
}

/// serde 用の内部構造（全キー省略可）
#[derive(Debug, Default, Deserialize)]
struct ClientConfigRaw {
    #[serde(alias = "default_model")]
    model: Option<String>,
    base_url: Option<String>,
    timeout_secs: Option<u64>,
}

impl ClientConfig {
    /// JSON 文字列からパース（ファイル読みは load で行う）
    pub fn parse(json: &str) -> Result<Self, Error> {
        let raw: ClientConfigRaw = serde_json::from_str(json)?;
        let mut cfg = ClientConfig::default();
        if let Some(model) = raw.model.filter(|m| !m.trim().is_empty()) {
            cfg.model = ModelName::new(model.trim());
        }
        if let Some(url) = raw.base_url.filter(|u| !u.trim().is_empty()) {
            cfg.base_url = url.trim().trim_end_matches('/').to_string();
        }
        if let Some(secs) = raw.timeout_secs {
            cfg.timeout = timeout_from_secs(secs)?;
        }
        Ok(cfg)
    }

    /// config.json を読み込む。ファイルが無ければデフォルト、壊れていれば Err（メッセージにパス含める）
    pub fn load(fs: &dyn FileSystem, path: &Path) -> Result<Self, Error> {
        match fs.read_optional(path)? {
            None => Ok(ClientConfig::default()),
            Some(contents) => ClientConfig::parse(&contents)
                .map_err(|e| Error::env(format!("{}: {}", path.display(), e))),
        }
    }

    /// CLI 指定で上書きする
    pub fn with_overrides(
        mut self,
        model: Option<ModelName>,
        timeout_secs: Option<u64>,
    ) -> Result<Self, Error> {
        if let Some(model) = model {
            self.model = model;
        }
        if let Some(secs) = timeout_secs {
            self.timeout = timeout_from_secs(secs)?;
        }
        Ok(self)
    }
}

fn timeout_from_secs(secs: u64) -> Result<Duration, Error> {
    if secs == 0 {
        return Err(Error::invalid_argument("timeout must be at least 1 second"));
    }
    if secs > MAX_TIMEOUT_SECS {
        return Err(Error::invalid_argument(format!(
            "timeout must be at most {} seconds",
            MAX_TIMEOUT_SECS
        )));
    }
    Ok(Duration::from_secs(secs))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapter::StdFileSystem;

    #[test]
    fn test_parse_empty_object() {
        let cfg = ClientConfig::parse("{}").unwrap();
        assert_eq!(cfg, ClientConfig::default());
        assert_eq!(&*cfg.model, "gemini-2.0-flash");
        assert_eq!(cfg.timeout, Duration::from_secs(60));
    }

    #[test]
    fn test_parse_all_keys() {
        let json = r#"
        {
            "model": "gemini-2.5-pro",
            "base_url": "http://localhost:8080/v1beta/",
            "timeout_secs": 5
        }
        "#;
        let cfg = ClientConfig::parse(json).unwrap();
        assert_eq!(&*cfg.model, "gemini-2.5-pro");
        assert_eq!(cfg.base_url, "http://localhost:8080/v1beta");
        assert_eq!(cfg.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_parse_alias_default_model() {
        let cfg = ClientConfig::parse(r#"{ "default_model": "gemini-1.5-flash" }"#).unwrap();
        assert_eq!(&*cfg.model, "gemini-1.5-flash");
    }

    #[test]
    fn test_parse_zero_timeout_is_rejected() {
        assert!(ClientConfig::parse(r#"{ "timeout_secs": 0 }"#).is_err());
    }

    #[test]
    fn test_cli_timeout_upper_bound() {
        let base = ClientConfig::default();
        let cfg = base.clone().with_overrides(None, Some(MAX_TIMEOUT_SECS)).unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(3600));

        let err = base.clone().with_overrides(None, Some(3601)).unwrap_err();
        assert!(err.is_usage());
        let err = base.with_overrides(None, Some(u64::MAX)).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
    }

    #[test]
    fn test_file_timeout_upper_bound() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "timeout_secs": 18446744073709551615 }"#).unwrap();
        let err = ClientConfig::load(&StdFileSystem, &path).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
        assert!(err.to_string().contains("at most 3600"));

        std::fs::write(&path, r#"{ "timeout_secs": 3600 }"#).unwrap();
        let cfg = ClientConfig::load(&StdFileSystem, &path).unwrap();
        assert_eq!(cfg.timeout, Duration::from_secs(3600));
    }

    #[test]
    fn test_overrides_take_precedence() {
        let cfg = ClientConfig::parse(r#"{ "model": "from-file", "timeout_secs": 9 }"#)
            .unwrap()
            .with_overrides(Some(ModelName::new("from-cli")), Some(3))
            .unwrap();
        assert_eq!(&*cfg.model, "from-cli");
        assert_eq!(cfg.timeout, Duration::from_secs(3));
    }

    #[test]
    fn test_load_missing_file_is_default() {
        let dir = tempfile::tempdir().unwrap();
        let cfg = ClientConfig::load(&StdFileSystem, &dir.path().join("config.json")).unwrap();
        assert_eq!(cfg, ClientConfig::default());
    }

    #[test]
    fn test_load_broken_file_names_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, "{ not json").unwrap();
        let err = ClientConfig::load(&StdFileSystem, &path).unwrap_err();
        assert!(matches!(err, Error::Env(_)));
        assert!(err.to_string().contains("config.json"));
    }
}
