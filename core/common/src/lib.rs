//! career-guide 共通ライブラリ
//!
//! `career` コマンドが使うエラー型・ドメイン型・Gemini クライアント・
//! 外界 I/O のポートと標準アダプタを提供します。

/// エラーハンドリング
pub mod error;

/// ドメイン型（Newtype）
pub mod domain;

/// Gemini クライアントとワイヤ形式
pub mod llm;

/// Outbound ポート
pub mod ports;

/// ポートの標準実装
pub mod adapter;
