use std::time::Duration;

use reqwest::Client;

use crate::error::FetchError;

/// Fetches raw upstream documents. One GET per call, no retries and no
/// caching: each tool invocation sees live bureau data.
#[derive(Debug, Clone)]
pub struct Fetcher {
    http: Client,
}

impl Fetcher {
    /// The timeout bounds the whole request, so a slow or unreachable
    /// upstream cannot stall the hosting framework.
    pub fn new(timeout: Duration) -> Self {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .expect("Failed to create HTTP client");

        Self { http }
    }

    pub async fn fetch(&self, url: &str) -> Result<String, FetchError> {
        let res = self
            .http
            .get(url)
            .send()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })?;

        let status = res.status();
        if !status.is_success() {
            return Err(FetchError::Status { url: url.to_string(), status });
        }

        res.text()
            .await
            .map_err(|source| FetchError::Transport { url: url.to_string(), source })
    }
}
