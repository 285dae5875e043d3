use crate::domain::model::{AggregateVerdict, Decision, LicenseVerificationResult};

/// Priority reduction over every normalized license decision in the batch.
///
/// A single reject dominates regardless of how many other documents
/// passed; review outranks approve; unknown counts as passed. Evaluation
/// is order-independent. An empty slice has nothing to aggregate and
/// yields `None`.
pub fn aggregate(results: &[LicenseVerificationResult]) -> Option<AggregateVerdict> {
    if results.is_empty() {
        return None;
    }

    let verdict = if results.iter().any(|r| r.decision == Decision::Reject) {
        AggregateVerdict::SomeRejected
    } else if results.iter().any(|r| r.decision == Decision::Review) {
        AggregateVerdict::SomeNeedReview
    } else {
        AggregateVerdict::AllPassed
    };

    Some(verdict)
}
