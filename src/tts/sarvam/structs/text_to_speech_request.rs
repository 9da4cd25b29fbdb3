use serde::{Deserialize, Serialize};

/// Example:
/// ```rust
/// use vaani_tts::tts::sarvam::structs::text_to_speech_request::TextToSpeechRequest;
///
/// TextToSpeechRequest {
///     text: String::from("ಸಾರ್, ಬಾತ್ರೂಮ್ ಪೈಪ್ ಲೀಕ್ ಆಗ್ತಿದೆ."),
///     model: String::from("bulbul:v3"),
///     target_language_code: String::from("kn-IN"),
/// };
/// ```
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct TextToSpeechRequest {
    pub text: String,
    pub model: String,
    pub target_language_code: String,
}
