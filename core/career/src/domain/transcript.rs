//! トランスクリプト（1 セッション分の会話履歴）のドメイン型
//!
//! 不変条件: user から始まり user / assistant が厳密に交互に並ぶ。
//! 追加のみで、並べ替え・重複排除・削除はしない。

use crate::domain::turn::{Role, Turn};
use common::error::Error;

#[derive(Debug, Clone, Default)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self { turns: Vec::new() }
    }

    /// 次に追加できる発言者
    pub fn next_role(&self) -> Role {
        match self.turns.last().map(Turn::role) {
            Some(Role::User) => Role::Assistant,
            Some(Role::Assistant) | None => Role::User,
        }
    }

    pub fn push_user(&mut self, content: impl Into<String>) -> Result<(), Error> {
        self.push(Turn::user(content))
    }

    pub fn push_assistant(&mut self, content: impl Into<String>) -> Result<(), Error> {
        self.push(Turn::assistant(content))
    }

    fn push(&mut self, turn: Turn) -> Result<(), Error> {
        let expected = self.next_role();
        if turn.role() != expected {
            return Err(Error::system(format!(
                "transcript expects a {} turn, got {}",
                expected,
                turn.role()
            )));
        }
        self.turns.push(turn);
        Ok(())
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    #[allow(dead_code)] // テストで使用。公開APIとして保持
    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// 完了した user / assistant の組の数
    pub fn exchanges(&self) -> usize {
        self.turns.len() / 2
    }
}
