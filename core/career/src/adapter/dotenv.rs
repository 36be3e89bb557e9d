//! .env ファイルの読み取り（KEY=VALUE 形式）
//!
//! 対応: 空行・`#` コメント・`export ` 接頭辞・シングル／ダブルクォート・
//! クォート無し値の行末コメント（` #` 以降）。変数展開はしない。

use std::collections::HashMap;

pub fn parse_dotenv(contents: &str) -> HashMap<String, String> {
    let mut vars = HashMap::new();
    for raw in contents.lines() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        let line = line.strip_prefix("export ").unwrap_or(line);
        let Some((key, value)) = line.split_once('=') else {
            continue;
        };
        let key = key.trim();
        if key.is_empty() {
            continue;
        }
        vars.insert(key.to_string(), parse_value(value.trim()));
    }
    vars
}

fn parse_value(value: &str) -> String {
    for quote in ['"', '\''] {
        if value.len() >= 2 && value.starts_with(quote) && value.ends_with(quote) {
            let inner = &value[1..value.len() - 1];
            return if quote == '"' {
                inner.replace("\\n", "\n").replace("\\\"", "\"")
            } else {
                inner.to_string()
            };
        }
    }
    match value.find(" #") {
        Some(pos) => value[..pos].trim_end().to_string(),
        None => value.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_basic_pairs() {
        let vars = parse_dotenv("GEMINI_API_KEY=abc123\nOTHER = x \n");
        assert_eq!(vars.get("GEMINI_API_KEY").map(String::as_str), Some("abc123"));
        assert_eq!(vars.get("OTHER").map(String::as_str), Some("x"));
    }

    #[test]
    fn test_parse_skips_comments_and_garbage() {
        let vars = parse_dotenv("# comment\n\nnot a pair\n=novalue\nA=1\n");
        assert_eq!(vars.len(), 1);
        assert_eq!(vars.get("A").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_parse_quotes_export_and_inline_comment() {
        let vars = parse_dotenv(
            "export A=\"quoted # not comment\"\nB='single'\nC=plain # trailing\nD=\"a\\nb\"\n",
        );
        assert_eq!(vars.get("A").map(String::as_str), Some("quoted # not comment"));
        assert_eq!(vars.get("B").map(String::as_str), Some("single"));
        assert_eq!(vars.get("C").map(String::as_str), Some("plain"));
        assert_eq!(vars.get("D").map(String::as_str), Some("a\nb"));
    }

    #[test]
    fn test_later_definition_wins() {
        let vars = parse_dotenv("A=1\nA=2\n");
        assert_eq!(vars.get("A").map(String::as_str), Some("2"));
    }
}
