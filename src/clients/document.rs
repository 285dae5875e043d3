use crate::domain::ports::DocumentVerifier;
use crate::utils::error::Result;
use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine};
use reqwest::Client;
use serde_json::json;
use std::path::Path;

/// Document scan verification client. Reads the document from its scratch
/// path, base64-encodes it, and POSTs it with header-based key auth.
pub struct ScanClient {
    client: Client,
    endpoint: String,
    api_key: String,
    profile_id: String,
}

impl ScanClient {
    pub fn new(
        client: Client,
        endpoint: impl Into<String>,
        api_key: impl Into<String>,
        profile_id: impl Into<String>,
    ) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
            api_key: api_key.into(),
            profile_id: profile_id.into(),
        }
    }
}

#[async_trait]
impl DocumentVerifier for ScanClient {
    async fn verify(&self, document: &Path) -> Result<serde_json::Value> {
        let bytes = tokio::fs::read(document).await?;
        let document_base64 = STANDARD.encode(&bytes);

        tracing::debug!("POST {} ({} bytes encoded)", self.endpoint, bytes.len());

        let response = self
            .client
            .post(&self.endpoint)
            .header("X-API-KEY", &self.api_key)
            .header("Accept", "application/json")
            .json(&json!({
                "profile": self.profile_id,
                "document": document_base64,
            }))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            // Kept in-band so the normalizer short-circuits on it; the
            // batch must keep running after a per-document API failure.
            let body = response.text().await.unwrap_or_default();
            return Ok(json!({
                "error": format!("API Error: {} - {}", status.as_u16(), body)
            }));
        }

        let body = response.json().await?;
        Ok(body)
    }
}
