pub mod sarvam;
pub mod structs;
