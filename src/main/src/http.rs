use std::time::Duration;

use anyhow::Result;

use crate::monitor::ApiClient;

/// Blocking HTTP price source. Retry and backoff live with the caller's
/// schedule, not here.
pub struct HttpClient {
    client: reqwest::blocking::Client,
}

impl HttpClient {
    pub fn new(timeout: Duration) -> Result<Self> {
        let client = reqwest::blocking::Client::builder()
            .timeout(timeout)
            .build()?;
        Ok(HttpClient { client })
    }
}

impl ApiClient for HttpClient {
    fn fetch_json(&self, url: &str) -> Result<String> {
        let response = self.client.get(url).send()?.error_for_status()?;
        Ok(response.text()?)
    }
}
