use gloo_net::http::Request;

use crate::config::ReplayConfig;
use crate::domain::{
    errors::ReplayResult,
    logging::{LogComponent, LogLevel, get_logger},
    replay::{ReplayRepository, ReplayRequest, ReplayResponse},
};
use crate::log_debug;

const COMPONENT: LogComponent = LogComponent::Infrastructure("HTTP");

/// gloo-net client for the replay endpoint
#[derive(Clone, Debug)]
pub struct HttpReplayRepository {
    url: String,
    default_headers: Vec<(String, String)>,
}

impl HttpReplayRepository {
    pub fn new(config: &ReplayConfig) -> Self {
        Self {
            url: config.endpoint_url(),
            default_headers: vec![("Accept".to_string(), "application/json".to_string())],
        }
    }
}

impl ReplayRepository for HttpReplayRepository {
    async fn replay(&self, request: &ReplayRequest) -> ReplayResult<ReplayResponse> {
        log_debug!(COMPONENT, "🌐 POST: {}", self.url);

        let mut builder = Request::post(&self.url);
        for (key, value) in &self.default_headers {
            builder = builder.header(key, value);
        }

        // `json` also sets `Content-Type: application/json`
        let response = builder.json(request)?.send().await?;

        log_debug!(COMPONENT, "📥 Response status: {}", response.status());
        if !response.ok() {
            // The service puts its failure report in the body, keep going.
            get_logger().log_with_metadata(
                LogLevel::Warn,
                COMPONENT,
                &format!(
                    "HTTP {} - {}, decoding body anyway",
                    response.status(),
                    response.status_text()
                ),
                &format!("url={}", self.url),
            );
        }

        let text = response.text().await?;
        log_debug!(COMPONENT, "✅ POST response: {} bytes", text.len());

        Ok(serde_json::from_str::<ReplayResponse>(&text)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn url_comes_from_config() {
        let repo = HttpReplayRepository::new(&ReplayConfig::default());
        assert_eq!(repo.url, "/api/replay");

        let repo = HttpReplayRepository::new(
            &ReplayConfig::default().with_base_url("http://127.0.0.1:5000"),
        );
        assert_eq!(repo.url, "http://127.0.0.1:5000/api/replay");
    }

    #[test]
    fn asks_for_json() {
        let repo = HttpReplayRepository::new(&ReplayConfig::default());
        assert_eq!(
            repo.default_headers,
            vec![("Accept".to_string(), "application/json".to_string())]
        );
    }
}
