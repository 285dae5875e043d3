use crate::domain::model::{
    Decision, LicenseVerificationResult, VehicleAttributes, VinLookupResult, Warning, NOT_AVAILABLE,
};
use crate::utils::error::{Result, VerifyError};
use serde_json::Value;

/// Pulls the first non-null `Value` tagged with `variable` out of the
/// registry's `Results` list. The list is externally dictated: tags may be
/// missing, duplicated, or carry null values, and order is not guaranteed
/// beyond first-match-wins.
fn first_tagged_value(results: &[Value], variable: &str) -> String {
    results
        .iter()
        .find(|item| item.get("Variable").and_then(Value::as_str) == Some(variable))
        .and_then(|item| item.get("Value").and_then(Value::as_str))
        .filter(|v| !v.is_empty())
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

/// Normalizes a registry decode response into a `VinLookupResult`.
///
/// A response without a usable `Results` array counts as not found. A
/// response with `Results` always yields `found: true`, with `"N/A"`
/// substituted for every attribute the registry did not report.
pub fn normalize_vin(raw: &Value, vin: &str) -> VinLookupResult {
    let results = match raw.get("Results").and_then(Value::as_array) {
        Some(results) => results,
        None => {
            tracing::debug!("registry response for {} has no Results array", vin);
            return VinLookupResult::not_found(vin);
        }
    };

    let attributes = VehicleAttributes {
        make: first_tagged_value(results, "Make"),
        model: first_tagged_value(results, "Model"),
        model_year: first_tagged_value(results, "Model Year"),
        trim: first_tagged_value(results, "Trim"),
        body_class: first_tagged_value(results, "Body Class"),
        fuel_type: first_tagged_value(results, "Fuel Type - Primary"),
        vehicle_type: first_tagged_value(results, "Vehicle Type"),
    };

    VinLookupResult {
        vin: vin.to_string(),
        attributes,
        found: true,
    }
}

/// First candidate's `value` for one extraction field under `data`.
/// Candidate lists are ordered; the first entry is authoritative.
fn first_candidate_value(data: &Value, field: &str) -> String {
    data.get(field)
        .and_then(Value::as_array)
        .and_then(|candidates| candidates.first())
        .and_then(|candidate| candidate.get("value"))
        .and_then(Value::as_str)
        .unwrap_or(NOT_AVAILABLE)
        .to_string()
}

fn normalize_warning(raw: &Value) -> Warning {
    Warning {
        description: raw
            .get("description")
            .and_then(Value::as_str)
            .unwrap_or(NOT_AVAILABLE)
            .to_string(),
        confidence: raw.get("confidence").and_then(Value::as_f64).unwrap_or(0.0),
        decision: raw
            .get("decision")
            .and_then(Value::as_str)
            .unwrap_or("unknown")
            .to_string(),
    }
}

/// Normalizes a scan-service response into a `LicenseVerificationResult`.
///
/// A top-level `error` key short-circuits to an extraction error carrying
/// the service's message; so does a response with no `data` object at all.
/// Everything else tolerates missing fields, substituting `"N/A"`. Pure
/// transform: the same input always yields the same output.
pub fn normalize_license(raw: &Value) -> Result<LicenseVerificationResult> {
    if let Some(message) = raw.get("error").and_then(Value::as_str) {
        return Err(VerifyError::extraction(message));
    }

    let data = raw
        .get("data")
        .ok_or_else(|| VerifyError::extraction("verification response has no data object"))?;

    let decision = raw
        .get("decision")
        .and_then(Value::as_str)
        .map(Decision::parse)
        .unwrap_or(Decision::Unknown);

    let warnings = raw
        .get("warning")
        .and_then(Value::as_array)
        .map(|entries| entries.iter().map(normalize_warning).collect())
        .unwrap_or_default();

    Ok(LicenseVerificationResult {
        full_name: first_candidate_value(data, "fullName"),
        document_number: first_candidate_value(data, "documentNumber"),
        date_of_birth: first_candidate_value(data, "dob"),
        expiry: first_candidate_value(data, "expiry"),
        address: first_candidate_value(data, "address1"),
        decision,
        warnings,
        raw: raw.clone(),
    })
}
