//! Gemini generateContent のリクエスト／レスポンス形式

use serde::Serialize;
use serde_json::Value;

/// リクエストボディ: `{"contents":[{"parts":[{"text": ...}]}]}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateContentRequest {
    pub contents: Vec<Content>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Content {
    pub parts: Vec<Part>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Part {
    pub text: String,
}

impl GenerateContentRequest {
    /// テキスト 1 パートだけを持つ単発リクエスト
    pub fn single_text(text: impl Into<String>) -> Self {
        Self {
            contents: vec![Content {
                parts: vec![Part { text: text.into() }],
            }],
        }
    }

    /// 全パートの総数
    pub fn part_count(&self) -> usize {
        self.contents.iter().map(|c| c.parts.len()).sum()
    }
}

/// `candidates[0].content.parts[0].text` を取り出す。形が合わなければ None。
pub fn extract_candidate_text(response_json: &str) -> Option<String> {
    let v: Value = serde_json::from_str(response_json).ok()?;
    v["candidates"][0]["content"]["parts"][0]["text"]
        .as_str()
        .map(|s| s.to_string())
}
