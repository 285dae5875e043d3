use serde::{Deserialize, Serialize};

/// Sentinel used for every registry/scan field the service did not return.
pub const NOT_AVAILABLE: &str = "N/A";

/// The fixed attribute set extracted from a registry decode response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleAttributes {
    #[serde(rename = "Make")]
    pub make: String,
    #[serde(rename = "Model")]
    pub model: String,
    #[serde(rename = "Model Year")]
    pub model_year: String,
    #[serde(rename = "Trim")]
    pub trim: String,
    #[serde(rename = "Body Class")]
    pub body_class: String,
    #[serde(rename = "Fuel Type")]
    pub fuel_type: String,
    #[serde(rename = "Vehicle Type")]
    pub vehicle_type: String,
}

impl Default for VehicleAttributes {
    fn default() -> Self {
        Self {
            make: NOT_AVAILABLE.to_string(),
            model: NOT_AVAILABLE.to_string(),
            model_year: NOT_AVAILABLE.to_string(),
            trim: NOT_AVAILABLE.to_string(),
            body_class: NOT_AVAILABLE.to_string(),
            fuel_type: NOT_AVAILABLE.to_string(),
            vehicle_type: NOT_AVAILABLE.to_string(),
        }
    }
}

/// One normalized VIN decode row. `found: false` means the registry call
/// failed or returned no data; the attributes are empty in that case.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VinLookupResult {
    pub vin: String,
    pub attributes: VehicleAttributes,
    pub found: bool,
}

impl VinLookupResult {
    pub fn not_found(vin: impl Into<String>) -> Self {
        Self {
            vin: vin.into(),
            attributes: VehicleAttributes::default(),
            found: false,
        }
    }
}

/// Categorical outcome the scan service attaches to a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Decision {
    Approved,
    Review,
    Reject,
    Unknown,
}

impl Decision {
    /// Case-insensitive parse of the service's decision string. Anything
    /// outside the known vocabulary maps to `Unknown`.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "approve" | "approved" | "accept" => Decision::Approved,
            "review" => Decision::Review,
            "reject" | "rejected" => Decision::Reject,
            _ => Decision::Unknown,
        }
    }
}

impl std::fmt::Display for Decision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Decision::Approved => "approved",
            Decision::Review => "review",
            Decision::Reject => "reject",
            Decision::Unknown => "unknown",
        };
        f.write_str(s)
    }
}

/// A service-supplied anomaly flag on one document.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Warning {
    pub description: String,
    pub confidence: f64,
    pub decision: String,
}

/// One normalized license verification row. `raw` keeps the untouched
/// service response for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LicenseVerificationResult {
    pub full_name: String,
    pub document_number: String,
    pub date_of_birth: String,
    pub expiry: String,
    pub address: String,
    pub decision: Decision,
    pub warnings: Vec<Warning>,
    pub raw: serde_json::Value,
}

/// Batch-level summary derived by priority-reducing per-document decisions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregateVerdict {
    AllPassed,
    SomeNeedReview,
    SomeRejected,
}

/// A per-item failure (transport or extraction). Failed items are reported
/// alongside the results but never feed the verdict reduction.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemFailure {
    pub item: String,
    pub kind: FailureKind,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    Transport,
    Extraction,
}

/// Everything one batch run produced. The verdict is `None` when no
/// license result was normalized (nothing to aggregate).
#[derive(Debug, Clone, Serialize)]
pub struct VerificationReport {
    pub vin_results: Vec<VinLookupResult>,
    pub license_results: Vec<LicenseVerificationResult>,
    pub failures: Vec<ItemFailure>,
    pub verdict: Option<AggregateVerdict>,
}

impl VerificationReport {
    /// Flattens every document's warnings into one row list for rendering.
    pub fn warning_rows(&self) -> Vec<(String, &Warning)> {
        let mut rows = Vec::new();
        for result in &self.license_results {
            for warning in &result.warnings {
                rows.push((result.document_number.clone(), warning));
            }
        }
        rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decision_parse_is_case_insensitive() {
        assert_eq!(Decision::parse("Approve"), Decision::Approved);
        assert_eq!(Decision::parse("REJECT"), Decision::Reject);
        assert_eq!(Decision::parse("review"), Decision::Review);
    }

    #[test]
    fn decision_parse_defaults_to_unknown() {
        assert_eq!(Decision::parse(""), Decision::Unknown);
        assert_eq!(Decision::parse("maybe"), Decision::Unknown);
    }

    #[test]
    fn not_found_result_has_empty_attributes() {
        let result = VinLookupResult::not_found("WAUZZZ8V5KA000001");
        assert!(!result.found);
        assert_eq!(result.attributes.make, NOT_AVAILABLE);
        assert_eq!(result.attributes.vehicle_type, NOT_AVAILABLE);
    }
}
