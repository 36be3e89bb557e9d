//! 対話ループ
//!
//! 1 入力につき 1 回だけブロッキングでサービスを呼ぶ。応答（成功・失敗とも）を
//! assistant ターンとして追加し、トランスクリプト全体を再表示してから次の入力を待つ。

use crate::domain::{build_request, render_reply, ChatSession};
use crate::ports::outbound::{CareerAdvisor, ChatView};
use common::error::Error;
use common::llm::ServiceError;
use common::ports::outbound::{Log, LogLevel, LogRecord};
use std::sync::Arc;
use std::time::Instant;

const BODY_SUMMARY_MAX: usize = 400;

pub struct SessionLoop<V: ChatView> {
    advisor: Arc<dyn CareerAdvisor>,
    view: V,
    log: Arc<dyn Log>,
    session: ChatSession,
}

impl<V: ChatView> SessionLoop<V> {
    pub fn new(advisor: Arc<dyn CareerAdvisor>, view: V, log: Arc<dyn Log>) -> Self {
        Self {
            advisor,
            view,
            log,
            session: ChatSession::new(),
        }
    }

    #[allow(dead_code)] // テストで使用
    pub fn session(&self) -> &ChatSession {
        &self.session
    }

    #[allow(dead_code)] // テストで使用
    pub fn view(&self) -> &V {
        &self.view
    }

    /// 入力終端まで対話を続ける。空行は送信しない。
    pub fn run(&mut self) -> Result<i32, Error> {
        self.emit(
            LogRecord::new(LogLevel::Info, "session started")
                .layer("usecase")
                .kind("lifecycle"),
        );
        self.view.show_banner()?;
        while let Some(line) = self.view.read_input()? {
            if line.trim().is_empty() {
                continue;
            }
            self.submit(&line)?;
        }
        self.view.finish()?;
        self.emit(
            LogRecord::new(LogLevel::Info, "session finished")
                .layer("usecase")
                .kind("lifecycle")
                .field("exchanges", self.session.transcript().exchanges()),
        );
        Ok(0)
    }

    /// 1 ターン: user 追加 → 表示 → 呼び出し → assistant 追加 → busy 解除・再表示
    pub fn submit(&mut self, user_text: &str) -> Result<(), Error> {
        self.session.begin_turn(user_text)?;
        self.emit(
            LogRecord::new(LogLevel::Info, "turn submitted")
                .layer("usecase")
                .kind("turn")
                .field("chars", user_text.chars().count()),
        );
        self.view.render(self.session.transcript())?;

        self.view.set_busy(true)?;
        let payload = build_request(user_text);
        let started = Instant::now();
        let outcome = self.advisor.advise(&payload);
        let elapsed_ms = started.elapsed().as_millis() as u64;

        // 表示に失敗しても受け取った応答はトランスクリプトに残す
        self.log_outcome(&outcome, elapsed_ms);
        self.session.finish_turn(render_reply(outcome))?;

        self.view.set_busy(false)?;
        self.view.render(self.session.transcript())
    }

    fn log_outcome(&self, outcome: &Result<String, ServiceError>, elapsed_ms: u64) {
        let rec = LogRecord::new(LogLevel::Info, "service call finished")
            .layer("usecase")
            .kind("service")
            .field("elapsed_ms", elapsed_ms);
        let rec = match outcome {
            Ok(text) => rec.field("outcome", "ok").field("chars", text.chars().count()),
            Err(e) => {
                let rec = LogRecord {
                    level: LogLevel::Warn,
                    ..rec
                }
                .field("outcome", e.kind());
                match e {
                    ServiceError::Status { status, .. } => rec.field("status", *status),
                    ServiceError::Transport(message) => rec.field("error", message.as_str()),
                    ServiceError::Unparseable { body } => {
                        rec.field("body", summarize(body)).field("body_len", body.len())
                    }
                }
            }
        };
        self.emit(rec);
    }

    fn emit(&self, record: LogRecord) {
        let _ = self.log.log(&record);
    }
}

/// 巨大な本文をログに載せないよう先頭だけにする
fn summarize(body: &str) -> String {
    if body.chars().count() <= BODY_SUMMARY_MAX {
        return body.to_string();
    }
    let truncated: String = body.chars().take(BODY_SUMMARY_MAX).collect();
    format!("{}...", truncated)
}
