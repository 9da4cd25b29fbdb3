use serde_json::Value;

use crate::errors::{Result, VaaniError};

/// Audio-carrying fields of a text-to-speech response.
///
/// Depending on the API version the audio arrives either as a single base64
/// string under `audio` or as a list under `audios`. Every other key is
/// ignored, whatever its type.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TextToSpeechResponse {
    pub audio: Option<String>,
    pub audios: Option<Vec<Option<String>>>,
}

/// The response shape that actually carried audio.
#[derive(Debug, Clone, PartialEq)]
pub enum AudioPayload {
    Single(String),
    Sequence(Vec<String>),
}

impl AudioPayload {
    /// Base64 text to decode: the single value, or the first element of the sequence.
    pub fn base64_audio(&self) -> &str {
        match self {
            AudioPayload::Single(audio) => audio,
            AudioPayload::Sequence(audios) => audios.first().map(String::as_str).unwrap_or(""),
        }
    }
}

fn non_blank(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

impl TextToSpeechResponse {
    /// Read the audio fields out of a parsed body. Values of an unexpected
    /// type count as absent.
    pub fn from_value(value: &Value) -> Self {
        let audio = value.get("audio").and_then(Value::as_str).map(str::to_string);
        let audios = value.get("audios").and_then(Value::as_array).map(|audios| {
            audios
                .iter()
                .map(|audio| audio.as_str().map(str::to_string))
                .collect()
        });

        Self { audio, audios }
    }

    /// Pick the audio payload out of the response.
    ///
    /// `raw_body` is only used for the diagnostic carried by the error.
    pub fn audio_payload(&self, raw_body: &str) -> Result<AudioPayload> {
        if let Some(audio) = non_blank(&self.audio) {
            return Ok(AudioPayload::Single(audio.to_string()));
        }

        match &self.audios {
            Some(audios) if audios.is_empty() => Err(VaaniError::empty_audio_sequence(raw_body)),
            Some(audios) => match audios.first().and_then(non_blank) {
                Some(_) => Ok(AudioPayload::Sequence(
                    audios.iter().flatten().cloned().collect(),
                )),
                None => Err(VaaniError::missing_audio(raw_body)),
            },
            None => Err(VaaniError::missing_audio(raw_body)),
        }
    }
}
