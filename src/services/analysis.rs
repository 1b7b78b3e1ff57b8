// HTTP client for the analysis backend

use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;

use super::{AnalysisError, AnalysisResult, AnalysisService};

pub struct HttpAnalysisService {
    client: Client,
    base_url: String,
}

impl HttpAnalysisService {
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl AnalysisService for HttpAnalysisService {
    /// The backend reports unknown tickers in-band as `{"error": ...}`, often
    /// with a non-2xx status, so the body is parsed regardless of status.
    async fn analyze(&self, ticker: &str) -> Result<AnalysisResult, AnalysisError> {
        tracing::debug!(ticker, "Requesting analysis");

        let response = self
            .client
            .get(format!("{}/analyze", self.base_url))
            .query(&[("ticker", ticker)])
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        let result: AnalysisResult = serde_json::from_str(&body)?;

        if !status.is_success() {
            tracing::warn!(ticker, %status, "Analysis backend returned non-success status");
        }
        Ok(result)
    }
}
