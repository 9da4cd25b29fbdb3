pub mod sarvam;
pub mod synthesizer;
