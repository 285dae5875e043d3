// Adapters for the two external services: the public NHTSA VIN decoder
// and the document scan verification API.

pub mod document;
pub mod registry;

pub use document::ScanClient;
pub use registry::NhtsaClient;
