//! API キー取得元の Outbound ポート

use common::domain::ApiKey;
use common::error::Error;

/// キー名で API キーを引く取得元（環境変数・.env・secrets.json）
pub trait CredentialSource: Send + Sync {
    /// ログ用の取得元名
    fn name(&self) -> &str;

    /// 見つからなければ Ok(None)。取得元自体が壊れていれば Err
    fn lookup(&self, key_name: &str) -> Result<Option<ApiKey>, Error>;
}
