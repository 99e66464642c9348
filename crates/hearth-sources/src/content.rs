//! Static content host: event descriptions fetched by file name.

use hearth_core::error::HearthError;
use std::time::Duration;
use tracing::info;

/// Fetches opaque text files from `{base_url}/{name}`.
pub struct ContentClient {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl ContentClient {
    pub fn new(base_url: &str, timeout: Duration) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout,
        }
    }

    /// Fetch a file's body verbatim. Anything but HTTP 200 is an error.
    pub async fn fetch(&self, name: &str) -> Result<String, HearthError> {
        let url = format!("{}/{}", self.base_url, name.trim_start_matches('/'));
        let resp = self
            .client
            .get(&url)
            .timeout(self.timeout)
            .send()
            .await
            .map_err(|e| HearthError::Source(format!("content {name} request failed: {e}")))?;

        let status = resp.status();
        if status != reqwest::StatusCode::OK {
            return Err(HearthError::Source(format!(
                "content {name} returned {status}"
            )));
        }

        let text = resp
            .text()
            .await
            .map_err(|e| HearthError::Source(format!("content {name} read failed: {e}")))?;
        info!("content file {name} loaded ({} bytes)", text.len());
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    #[tokio::test]
    async fn test_fetch_returns_body_verbatim() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/tarelka.txt"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<i>Готовим блюдо</i>\n"))
            .mount(&server)
            .await;

        let client = ContentClient::new(&format!("{}/", server.uri()), Duration::from_secs(2));
        let body = client.fetch("tarelka.txt").await.unwrap();
        assert_eq!(body, "<i>Готовим блюдо</i>\n");
    }

    #[tokio::test]
    async fn test_fetch_missing_file_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(404))
            .mount(&server)
            .await;

        let client = ContentClient::new(&server.uri(), Duration::from_secs(2));
        let err = client.fetch("missing.txt").await.unwrap_err();
        assert!(matches!(err, HearthError::Source(_)));
    }
}
