pub mod aggregate;
pub mod batch;
pub mod engine;
pub mod normalize;

pub use crate::domain::model::{
    AggregateVerdict, Decision, ItemFailure, LicenseVerificationResult, VerificationReport,
    VinLookupResult, Warning,
};
pub use crate::domain::ports::{ConfigProvider, DocumentVerifier, VehicleRegistry};
pub use crate::utils::error::Result;
