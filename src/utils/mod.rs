pub mod error;
pub mod logger;
pub mod scratch;
pub mod validation;
