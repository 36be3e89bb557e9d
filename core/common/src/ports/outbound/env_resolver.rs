//! 環境変数解決 Outbound ポート
//!
//! ホームディレクトリ・カレントディレクトリ・任意の環境変数を解決する。
//! usecase はこの trait 経由でのみ環境変数にアクセスする。

use crate::domain::HomeDir;
use crate::error::Error;
use std::path::PathBuf;

/// 環境変数解決抽象（Outbound ポート）
///
/// 実装は `common::adapter::StdEnvResolver` やテスト用のモックなど。
pub trait EnvResolver: Send + Sync {
    /// 環境変数を読む（未設定・空は None）
    fn var(&self, name: &str) -> Option<String>;

    /// ホームディレクトリを環境変数から解決する
    ///
    /// 優先順位:
    /// 1. CAREER_HOME（設定されていれば）
    /// 2. $XDG_CONFIG_HOME/career-guide（XDG_CONFIG_HOME が設定されていれば）
    /// 3. $HOME/.config/career-guide
    fn resolve_home_dir(&self) -> Result<HomeDir, Error> {
        if let Some(home) = self.var("CAREER_HOME") {
            return Ok(HomeDir::new(PathBuf::from(home)));
        }
        let config_base = self
            .var("XDG_CONFIG_HOME")
            .map(PathBuf::from)
            .or_else(|| self.var("HOME").map(|h| PathBuf::from(h).join(".config")))
            .ok_or_else(|| Error::env("HOME is not set"))?;
        Ok(HomeDir::new(config_base.join("career-guide")))
    }

    /// カレントディレクトリ（.env 探索用）
    fn current_dir(&self) -> Result<PathBuf, Error>;
}
