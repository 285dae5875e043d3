use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::Path;

/// Vehicle registry decode service. Returns the raw decoded JSON body;
/// callers normalize it themselves.
#[async_trait]
pub trait VehicleRegistry: Send + Sync {
    async fn decode(&self, vin: &str) -> Result<serde_json::Value>;
}

/// Document scan verification service. Takes a path because the upstream
/// API consumes the document as a file handed off by the batch driver.
#[async_trait]
pub trait DocumentVerifier: Send + Sync {
    async fn verify(&self, document: &Path) -> Result<serde_json::Value>;
}

pub trait ConfigProvider: Send + Sync {
    fn registry_endpoint(&self) -> &str;
    fn scan_endpoint(&self) -> &str;
    fn api_key(&self) -> &str;
    fn profile_id(&self) -> &str;
}
