use crate::domain::model::{AdvocateRow, AdvocatesResponse};
use crate::domain::ports::AdvocateSource;
use crate::utils::error::LoadError;
use async_trait::async_trait;
use reqwest::header::{CACHE_CONTROL, PRAGMA};
use reqwest::Client;

/// 從 `GET /api/advocates` 取回整份清單，不帶參數、不走快取
#[derive(Debug, Clone)]
pub struct HttpAdvocateSource {
    endpoint: String,
    client: Client,
}

impl HttpAdvocateSource {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            client: Client::new(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

#[async_trait]
impl AdvocateSource for HttpAdvocateSource {
    async fn fetch_advocates(&self) -> std::result::Result<Vec<AdvocateRow>, LoadError> {
        tracing::debug!("Making API request to: {}", self.endpoint);
        let response = self
            .client
            .get(&self.endpoint)
            .header(CACHE_CONTROL, "no-store")
            .header(PRAGMA, "no-cache")
            .send()
            .await?;

        let status = response.status();
        tracing::debug!("API response status: {}", status);
        if !status.is_success() {
            return Err(LoadError::HttpStatus(status.as_u16()));
        }

        // 先讀成文字再解析，讓格式錯誤歸類為 Parse 而不是 Network
        let body = response.text().await?;
        let parsed: AdvocatesResponse = serde_json::from_str(&body)?;
        tracing::debug!("Parsed {} advocate rows", parsed.data.len());
        Ok(parsed.data)
    }
}
