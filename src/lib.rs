// Public API for the vaani-tts library

pub mod app;
pub mod config;
pub mod demo;
pub mod errors;
pub mod trace;
pub mod tts;
pub mod utils;

// Re-export commonly used types
pub use config::Config;
pub use demo::generator::{DemoGenerator, RecordFailure, RunSummary};
pub use demo::request::{DemoRequest, DEMO_REQUESTS};
pub use errors::{ErrorKind, Result, VaaniError};
pub use tts::sarvam::sarvam::SarvamClient;
