use serde::{Deserialize, Serialize};

/// Example:
/// ```rust
/// use vaani_tts::tts::sarvam::structs::translate_request::TranslateRequest;
///
/// TranslateRequest {
///     input: String::from("पाइप लीक हो रहा है"),
///     source_language_code: String::from("hi-IN"),
///     target_language_code: String::from("kn-IN"),
///     model: String::from("mayura:v1"),
///     enable_preprocessing: true,
/// };
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TranslateRequest {
    pub input: String,
    pub source_language_code: String,
    pub target_language_code: String,
    pub model: String,
    pub enable_preprocessing: bool,
}
