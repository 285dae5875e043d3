use crate::domain::ports::VehicleRegistry;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// NHTSA vPIC decode client. One GET per VIN; the caller treats any
/// failure here as "invalid VIN or no data".
pub struct NhtsaClient {
    client: Client,
    endpoint: String,
}

impl NhtsaClient {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl VehicleRegistry for NhtsaClient {
    async fn decode(&self, vin: &str) -> Result<serde_json::Value> {
        let url = format!("{}/{}", self.endpoint.trim_end_matches('/'), vin);
        tracing::debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[("format", "json")])
            .send()
            .await?
            .error_for_status()?;

        let body = response.json().await?;
        Ok(body)
    }
}
