use async_trait::async_trait;
use blockscope_application::ports::BlocklistSource;
use blockscope_domain::config::BlocklistConfig;
use blockscope_domain::DomainError;
use std::collections::HashSet;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Split a newline-delimited body into trimmed, non-blank entries.
///
/// Entries are not validated here; that happens once per cycle when the
/// snapshot is built.
pub fn parse_blocklist_body(body: &str) -> HashSet<String> {
    body.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Fetches the blocklist with a single GET per call.
pub struct HttpBlocklistSource {
    client: reqwest::Client,
    url: String,
}

impl HttpBlocklistSource {
    pub fn new(cfg: &BlocklistConfig) -> Result<Self, DomainError> {
        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(cfg.timeout_secs))
            .user_agent(cfg.user_agent.clone())
            .build()
            .map_err(|e| DomainError::InvalidConfig(format!("HTTP client: {}", e)))?;

        Ok(Self {
            client,
            url: cfg.url.clone(),
        })
    }

    pub fn with_client(client: reqwest::Client, url: impl Into<String>) -> Self {
        Self {
            client,
            url: url.into(),
        }
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    async fn fetch_body(&self) -> Result<String, DomainError> {
        let response = self
            .client
            .get(&self.url)
            .send()
            .await
            .map_err(|e| {
                DomainError::SourceUnavailable(format!("fetch error for {}: {}", self.url, e))
            })?;

        if !response.status().is_success() {
            return Err(DomainError::SourceUnavailable(format!(
                "HTTP {} for {}",
                response.status().as_u16(),
                self.url
            )));
        }

        response.text().await.map_err(|e| {
            DomainError::SourceUnavailable(format!("read error for {}: {}", self.url, e))
        })
    }
}

#[async_trait]
impl BlocklistSource for HttpBlocklistSource {
    #[instrument(skip(self), fields(url = %self.url))]
    async fn fetch(&self) -> Result<HashSet<String>, DomainError> {
        debug!("Fetching blocklist");
        let body = self.fetch_body().await?;
        let entries = parse_blocklist_body(&body);
        info!(entries = entries.len(), "Blocklist fetched");
        Ok(entries)
    }
}
