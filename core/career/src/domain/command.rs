//! career コマンドの enum（Command Pattern）

use common::domain::ModelName;

/// career の実行モード
#[derive(Debug, Clone, PartialEq)]
pub enum CareerCommand {
    /// ヘルプ表示
    Help,
    /// 対話セッション
    Chat {
        model: Option<ModelName>,
        timeout_secs: Option<u64>,
    },
}
