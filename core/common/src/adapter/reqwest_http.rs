//! reqwest（blocking）による HttpPost 実装

use crate::error::Error;
use crate::ports::outbound::{HttpPost, HttpResponse};
use std::time::Duration;

/// タイムアウト付きの blocking クライアント
pub struct ReqwestHttp {
    client: reqwest::blocking::Client,
}

impl ReqwestHttp {
    pub fn new(timeout: Duration) -> Result<Self, Error> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| Error::http(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { client })
    }
}

impl HttpPost for ReqwestHttp {
    fn post_json(&self, url: &str, body: &str) -> Result<HttpResponse, Error> {
        // URL にはクエリでキーが載るため、エラー文からは外す
        let response = self
            .client
            .post(url)
            .header("Content-Type", "application/json")
            .body(body.to_string())
            .send()
            .map_err(|e| {
                if e.is_timeout() {
                    Error::http(format!("HTTP request timed out: {}", e.without_url()))
                } else {
                    Error::http(format!("HTTP request failed: {}", e.without_url()))
                }
            })?;

        let status = response.status().as_u16();
        let text = response
            .text()
            .map_err(|e| Error::http(format!("Failed to read response: {}", e.without_url())))?;
        Ok(HttpResponse::new(status, text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::TcpListener;

    #[test]
    fn test_connection_refused_hides_key() {
        let http = ReqwestHttp::new(Duration::from_secs(5)).unwrap();
        let err = http
            .post_json(
                "http://127.0.0.1:1/v1beta/models/m:generateContent?key=SECRET-KEY-123",
                "{}",
            )
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        let text = err.to_string();
        assert!(text.starts_with("HTTP request failed"));
        assert!(!text.contains("SECRET-KEY-123"));
        assert!(!text.contains("key="));
    }

    #[test]
    fn test_timeout_is_reported_without_url() {
        // 接続は受けるが応答しないサーバ
        let listener = TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();

        let http = ReqwestHttp::new(Duration::from_secs(1)).unwrap();
        let url = format!("http://{}/models/m:generateContent?key=SECRET-KEY-456", addr);
        let err = http.post_json(&url, "{}").unwrap_err();
        drop(listener);

        assert!(matches!(err, Error::Http(_)));
        let text = err.to_string();
        assert!(text.starts_with("HTTP request timed out"));
        assert!(!text.contains("SECRET-KEY-456"));
    }
}
