//! Gemini クライアントとワイヤ形式・設定

pub mod config;
pub mod gemini;
pub mod wire;

pub use config::ClientConfig;
pub use gemini::{GeminiClient, ServiceError};
pub use wire::{extract_candidate_text, GenerateContentRequest};
