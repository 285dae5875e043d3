use crate::core::aggregate::aggregate;
use crate::core::batch::CollectedBatch;
use crate::core::normalize::{normalize_license, normalize_vin};
use crate::domain::model::{FailureKind, ItemFailure, VerificationReport, VinLookupResult};
use crate::domain::ports::{DocumentVerifier, VehicleRegistry};
use crate::utils::scratch::ScratchFile;

/// Drives one verification batch against the two external services.
///
/// Items are processed sequentially, one external call at a time. No
/// failure crosses an item boundary: a VIN that errors out becomes a
/// `found: false` row, a document that errors out becomes a failure row,
/// and the rest of the batch always runs.
pub struct VerificationEngine<R: VehicleRegistry, D: DocumentVerifier> {
    registry: R,
    verifier: D,
}

impl<R: VehicleRegistry, D: DocumentVerifier> VerificationEngine<R, D> {
    pub fn new(registry: R, verifier: D) -> Self {
        Self { registry, verifier }
    }

    pub async fn run(&self, batch: CollectedBatch) -> VerificationReport {
        let mut vin_results = Vec::with_capacity(batch.vins.len());
        let mut license_results = Vec::with_capacity(batch.documents.len());
        let mut failures = Vec::new();

        for vin in &batch.vins {
            tracing::info!("decoding VIN {}", vin);
            let result = match self.registry.decode(vin).await {
                Ok(raw) => normalize_vin(&raw, vin),
                Err(e) => {
                    tracing::warn!("VIN lookup failed for {}: {}", vin, e);
                    VinLookupResult::not_found(vin)
                }
            };
            vin_results.push(result);
        }

        for document in &batch.documents {
            tracing::info!("verifying document {}", document.name);
            match self.verify_document(&document.bytes).await {
                Ok(result) => license_results.push(result),
                Err(e) => {
                    tracing::warn!("verification failed for {}: {}", document.name, e);
                    let kind = if e.is_extraction() {
                        FailureKind::Extraction
                    } else {
                        FailureKind::Transport
                    };
                    failures.push(ItemFailure {
                        item: document.name.clone(),
                        kind,
                        message: e.to_string(),
                    });
                }
            }
        }

        let verdict = aggregate(&license_results);

        VerificationReport {
            vin_results,
            license_results,
            failures,
            verdict,
        }
    }

    /// Spools the upload to a scratch file for the path-based verifier
    /// handoff. The scratch guard removes the file whichever way this
    /// returns.
    async fn verify_document(
        &self,
        bytes: &[u8],
    ) -> crate::utils::error::Result<crate::domain::model::LicenseVerificationResult> {
        let scratch = ScratchFile::spool(bytes)?;
        let raw = self.verifier.verify(scratch.path()).await?;
        normalize_license(&raw)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::batch::{BatchInput, DocumentUpload};
    use crate::domain::model::{AggregateVerdict, Decision};
    use crate::utils::error::{Result, VerifyError};
    use async_trait::async_trait;
    use serde_json::{json, Value};
    use std::path::Path;
    use std::sync::atomic::{AtomicUsize, Ordering};

    struct MockRegistry {
        responses: Vec<Result<Value>>,
        calls: AtomicUsize,
    }

    impl MockRegistry {
        fn new(responses: Vec<Result<Value>>) -> Self {
            Self {
                responses,
                calls: AtomicUsize::new(0),
            }
        }

        fn none() -> Self {
            Self::new(vec![])
        }
    }

    #[async_trait]
    impl VehicleRegistry for MockRegistry {
        async fn decode(&self, _vin: &str) -> Result<Value> {
            let index = self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.responses[index] {
                Ok(v) => Ok(v.clone()),
                Err(e) => Err(VerifyError::extraction(e.to_string())),
            }
        }
    }

    struct MockVerifier {
        responses: Vec<Value>,
        calls: AtomicUsize,
    }

    impl MockVerifier {
        fn new(responses: Vec<Value>) -> Self {
            Self {
                responses,
                calls: AtomicUsize::new(0),
            }
        }

        fn none() -> Self {
            Self::new(vec![])
        }
    }

    #[async_trait]
    impl DocumentVerifier for MockVerifier {
        async fn verify(&self, document: &Path) -> Result<Value> {
            assert!(document.exists(), "scratch file must exist during the call");
            let index = self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(self.responses[index].clone())
        }
    }

    fn upload(name: &str) -> DocumentUpload {
        DocumentUpload::new(name, vec![0xFF, 0xD8, 0xFF])
    }

    #[tokio::test]
    async fn vin_failure_becomes_not_found_row_and_batch_continues() {
        let registry = MockRegistry::new(vec![
            Err(VerifyError::extraction("boom")),
            Ok(json!({"Results": [{"Variable": "Make", "Value": "Honda"}]})),
        ]);
        let engine = VerificationEngine::new(registry, MockVerifier::none());

        let mut input = BatchInput::new();
        input.push_vin("BADVIN00000000000");
        input.push_vin("1HGCM82633A004352");

        let report = engine.run(input.collect()).await;

        assert_eq!(report.vin_results.len(), 2);
        assert!(!report.vin_results[0].found);
        assert!(report.vin_results[1].found);
        assert_eq!(report.vin_results[1].attributes.make, "Honda");
        assert!(report.failures.is_empty());
    }

    #[tokio::test]
    async fn document_error_is_reported_and_excluded_from_verdict() {
        let verifier = MockVerifier::new(vec![
            json!({"error": "API Error: 500 - internal failure"}),
            json!({"data": {"fullName": [{"value": "JANE DOE"}]}, "decision": "approve"}),
        ]);
        let engine = VerificationEngine::new(MockRegistry::none(), verifier);

        let mut input = BatchInput::new();
        input.push_document(upload("broken.jpg"));
        input.push_document(upload("ok.jpg"));

        let report = engine.run(input.collect()).await;

        assert_eq!(report.license_results.len(), 1);
        assert_eq!(report.license_results[0].full_name, "JANE DOE");
        assert_eq!(report.failures.len(), 1);
        assert_eq!(report.failures[0].item, "broken.jpg");
        assert_eq!(report.failures[0].kind, FailureKind::Extraction);
        assert!(report.failures[0].message.contains("API Error: 500"));
        // the errored document does not drag the verdict down
        assert_eq!(report.verdict, Some(AggregateVerdict::AllPassed));
    }

    #[tokio::test]
    async fn approve_then_reject_aggregates_to_rejected() {
        let verifier = MockVerifier::new(vec![
            json!({"data": {}, "decision": "approve"}),
            json!({"data": {}, "decision": "reject"}),
        ]);
        let engine = VerificationEngine::new(MockRegistry::none(), verifier);

        let mut input = BatchInput::new();
        input.push_document(upload("one.jpg"));
        input.push_document(upload("two.jpg"));

        let report = engine.run(input.collect()).await;

        assert_eq!(report.license_results[1].decision, Decision::Reject);
        assert_eq!(report.verdict, Some(AggregateVerdict::SomeRejected));
    }

    #[tokio::test]
    async fn empty_batch_issues_no_calls_and_has_no_verdict() {
        let registry = MockRegistry::none();
        let verifier = MockVerifier::none();
        let engine = VerificationEngine::new(registry, verifier);

        let report = engine.run(BatchInput::new().collect()).await;

        assert!(report.vin_results.is_empty());
        assert!(report.license_results.is_empty());
        assert!(report.failures.is_empty());
        assert_eq!(report.verdict, None);
        assert_eq!(engine.registry.calls.load(Ordering::SeqCst), 0);
        assert_eq!(engine.verifier.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn warnings_flatten_across_documents() {
        let verifier = MockVerifier::new(vec![json!({
            "data": {"documentNumber": [{"value": "D1"}]},
            "decision": "review",
            "warning": [
                {"description": "Document expired", "confidence": 0.98, "decision": "reject"},
                {"description": "Low image quality", "confidence": 0.41, "decision": "review"}
            ]
        })]);
        let engine = VerificationEngine::new(MockRegistry::none(), verifier);

        let mut input = BatchInput::new();
        input.push_document(upload("doc.jpg"));

        let report = engine.run(input.collect()).await;
        let rows = report.warning_rows();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].0, "D1");
        assert_eq!(rows[0].1.description, "Document expired");
        assert_eq!(rows[1].1.description, "Low image quality");
        assert_eq!(report.verdict, Some(AggregateVerdict::SomeNeedReview));
    }
}
