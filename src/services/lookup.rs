// HTTP client for the symbol search endpoint (Finnhub-compatible)

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use std::time::Duration;

use super::{LookupError, SymbolLookup, SymbolRecord};

#[derive(Debug, Deserialize)]
struct SearchResponse {
    #[serde(default)]
    result: Vec<SymbolRecord>,
}

pub struct FinnhubLookup {
    client: Client,
    base_url: String,
    token: Option<String>,
}

impl FinnhubLookup {
    pub fn new(base_url: impl Into<String>, token: Option<String>, timeout: Duration) -> anyhow::Result<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| anyhow::anyhow!("Failed to create HTTP client: {}", e))?;

        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            token,
        })
    }

    fn search_url(&self) -> String {
        format!("{}/search", self.base_url)
    }
}

#[async_trait]
impl SymbolLookup for FinnhubLookup {
    async fn search(&self, query: &str) -> Result<Vec<SymbolRecord>, LookupError> {
        tracing::debug!(query, "Sending symbol lookup");

        let mut request = self.client.get(self.search_url()).query(&[("q", query)]);
        if let Some(token) = &self.token {
            request = request.query(&[("token", token.as_str())]);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LookupError::Status(status.as_u16()));
        }

        let body = response.text().await?;
        let parsed: SearchResponse = serde_json::from_str(&body)?;

        tracing::debug!(query, count = parsed.result.len(), "Symbol lookup returned");
        Ok(parsed.result)
    }
}
