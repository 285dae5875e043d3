pub mod clients;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

pub use clients::{NhtsaClient, ScanClient};
pub use config::CliConfig;
pub use core::batch::BatchInput;
pub use core::engine::VerificationEngine;
pub use utils::error::{Result, VerifyError};
