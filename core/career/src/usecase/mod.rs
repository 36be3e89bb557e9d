//! ユースケース層（ポート経由でのみ外界に触れる）

pub mod app;
pub mod credential;
pub mod session_loop;
