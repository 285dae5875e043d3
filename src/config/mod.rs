use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use crate::utils::validation::{validate_non_empty_string, validate_url, Validate};
use clap::Parser;
use std::path::PathBuf;

pub const DEFAULT_REGISTRY_ENDPOINT: &str = "https://vpic.nhtsa.dot.gov/api/vehicles/decodevin";
pub const DEFAULT_SCAN_ENDPOINT: &str = "https://api2.idanalyzer.com/scan";

const API_KEY_ENV: &str = "IDSCAN_API_KEY";
const PROFILE_ID_ENV: &str = "IDSCAN_PROFILE_ID";

#[derive(Debug, Clone, Parser)]
#[command(name = "autoverify")]
#[command(about = "Batch VIN decoding and driver's license verification")]
pub struct CliConfig {
    /// VIN to decode; repeat for a batch
    #[arg(long = "vin")]
    pub vins: Vec<String>,

    /// Path to a driver's license image; repeat for a batch
    #[arg(long = "document")]
    pub documents: Vec<PathBuf>,

    #[arg(long, default_value = DEFAULT_REGISTRY_ENDPOINT)]
    pub registry_endpoint: String,

    #[arg(long, default_value = DEFAULT_SCAN_ENDPOINT)]
    pub scan_endpoint: String,

    /// Scan API key; falls back to IDSCAN_API_KEY
    #[arg(long)]
    pub api_key: Option<String>,

    /// Scan profile id; falls back to IDSCAN_PROFILE_ID
    #[arg(long)]
    pub profile_id: Option<String>,

    /// Emit the full report as pretty-printed JSON
    #[arg(long)]
    pub json: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Resolves the secrets against the environment. Flags win over env
    /// vars; both are opaque to the rest of the crate and never logged.
    pub fn resolve_secrets(&mut self) {
        if self.api_key.is_none() {
            self.api_key = std::env::var(API_KEY_ENV).ok();
        }
        if self.profile_id.is_none() {
            self.profile_id = std::env::var(PROFILE_ID_ENV).ok();
        }
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_url("registry_endpoint", &self.registry_endpoint)?;
        validate_url("scan_endpoint", &self.scan_endpoint)?;

        // Secrets are only required when documents are actually submitted.
        if !self.documents.is_empty() {
            validate_non_empty_string("api_key", self.api_key.as_deref().unwrap_or(""))?;
            validate_non_empty_string("profile_id", self.profile_id.as_deref().unwrap_or(""))?;
        }

        Ok(())
    }
}

impl ConfigProvider for CliConfig {
    fn registry_endpoint(&self) -> &str {
        &self.registry_endpoint
    }

    fn scan_endpoint(&self) -> &str {
        &self.scan_endpoint
    }

    fn api_key(&self) -> &str {
        self.api_key.as_deref().unwrap_or("")
    }

    fn profile_id(&self) -> &str {
        self.profile_id.as_deref().unwrap_or("")
    }
}
