//! チャットセッション（トランスクリプト + 状態）
//!
//! Idle → (ユーザー入力) → AwaitingResponse → (応答テキスト) → Idle。
//! 応答待ちの間に次の入力は受け付けない。

use crate::domain::transcript::Transcript;
use common::error::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    AwaitingResponse,
}

#[derive(Debug, Clone)]
pub struct ChatSession {
    transcript: Transcript,
    state: SessionState,
}

impl ChatSession {
    pub fn new() -> Self {
        Self {
            transcript: Transcript::new(),
            state: SessionState::Idle,
        }
    }

    pub fn transcript(&self) -> &Transcript {
        &self.transcript
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    /// ユーザー発言を追加して応答待ちに入る
    pub fn begin_turn(&mut self, user_text: &str) -> Result<(), Error> {
        if self.state != SessionState::Idle {
            return Err(Error::system("a reply is still pending"));
        }
        self.transcript.push_user(user_text)?;
        self.state = SessionState::AwaitingResponse;
        Ok(())
    }

    /// 応答テキストを追加して待機に戻る
    pub fn finish_turn(&mut self, reply: impl Into<String>) -> Result<(), Error> {
        if self.state != SessionState::AwaitingResponse {
            return Err(Error::system("no pending user turn to answer"));
        }
        self.transcript.push_assistant(reply)?;
        self.state = SessionState::Idle;
        Ok(())
    }
}

impl Default for ChatSession {
    fn default() -> Self {
        Self::new()
    }
}
