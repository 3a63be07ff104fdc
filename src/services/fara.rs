// src/services/fara.rs

//! FARA eFile API client.
//!
//! Endpoint reference: https://efile.fara.gov/ords/f?p=107:ENDPOINTS_REGDOCS

use std::time::Duration;

use async_trait::async_trait;
use tracing::info;

use crate::config::WatchConfig;
use crate::error::{AppError, Result};
use crate::models::{Filing, RegDocsResponse};
use crate::services::FilingSource;

/// HTTP client for the FARA documents endpoint.
pub struct FaraClient {
    client: reqwest::Client,
    api_base: String,
    document_type: String,
}

impl FaraClient {
    /// Create a client from watch configuration.
    pub fn new(config: &WatchConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent(&config.user_agent)
            .timeout(Duration::from_secs(config.timeout_secs))
            .build()?;

        Ok(Self {
            client,
            api_base: config.api_base.trim_end_matches('/').to_string(),
            document_type: config.document_type.clone(),
        })
    }
}

#[async_trait]
impl FilingSource for FaraClient {
    /// Issue a single request for the registrant's document list.
    ///
    /// Any non-success status or unexpected response shape is an upstream
    /// error; the run cannot compute a trustworthy delta without the full
    /// list, so there is no partial result.
    async fn list_filings(&self, registrant_id: u64) -> Result<Vec<Filing>> {
        let endpoint = format!("{}/RegDocs/json/{}", self.api_base, registrant_id);
        info!("Fetching filings from {}", endpoint);

        let response = self
            .client
            .get(&endpoint)
            .query(&[("docType", self.document_type.as_str())])
            .send()
            .await
            .map_err(|e| AppError::upstream(format!("request to {endpoint} failed: {e}")))?
            .error_for_status()
            .map_err(|e| AppError::upstream(format!("filing API rejected request: {e}")))?;

        let envelope: RegDocsResponse = response
            .json()
            .await
            .map_err(|e| AppError::upstream(format!("malformed filing response: {e}")))?;

        let filings = envelope.registrant_docs.rows;
        info!(
            "Filing API returned {} documents for registrant {}",
            filings.len(),
            registrant_id
        );
        Ok(filings)
    }

    async fn fetch_document(&self, url: &str) -> Result<Vec<u8>> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| AppError::fetch(url, e))?
            .error_for_status()
            .map_err(|e| AppError::fetch(url, e))?;

        let bytes = response.bytes().await.map_err(|e| AppError::fetch(url, e))?;
        Ok(bytes.to_vec())
    }
}
