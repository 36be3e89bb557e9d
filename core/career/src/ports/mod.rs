//! Ports & Adapters のポート定義
//!
//! - inbound: ドライバ（main / CLI）がアプリを呼び出すインターフェース
//! - outbound: アプリが外界（表示・リモートサービス・秘密情報）に依頼するための trait

pub mod inbound;
pub mod outbound;
