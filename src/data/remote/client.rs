use async_trait::async_trait;
use reqwest::Client;

use super::api::QuoteApi;
use super::dto::QuoteDto;
use super::error::FetchError;
use crate::config::ApiConfig;
use crate::domain::QuoteId;

/// HTTP implementation of [`QuoteApi`]: `GET {base_url}/quotes/{id}`.
pub struct HttpQuoteClient {
    client: Client,
    base_url: String,
}

impl HttpQuoteClient {
    /// Build a client with the timeouts from `config`.
    pub fn new(config: &ApiConfig) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .connect_timeout(config.connect_timeout())
            .timeout(config.request_timeout())
            .build()?;

        Ok(Self::with_client(client, &config.base_url))
    }

    /// Wrap an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: &str) -> Self {
        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn quote_url(&self, id: QuoteId) -> String {
        format!("{}/quotes/{}", self.base_url, id)
    }
}

#[async_trait]
impl QuoteApi for HttpQuoteClient {
    async fn fetch_quote(&self, id: QuoteId) -> Result<QuoteDto, FetchError> {
        let url = self.quote_url(id);
        tracing::debug!(quote_id = id, url = %url, "Fetching quote");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.clone(),
                source: e,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                url,
            });
        }

        let body = response.bytes().await.map_err(|e| FetchError::Decode {
            url: url.clone(),
            message: format!("failed to read body: {}", e),
        })?;

        let dto: QuoteDto = serde_json::from_slice(&body).map_err(|e| FetchError::Decode {
            url: url.clone(),
            message: e.to_string(),
        })?;

        tracing::debug!(quote_id = dto.id, "Quote received");
        Ok(dto)
    }
}
