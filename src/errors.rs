/// Custom error types for vaani-tts
#[derive(Debug, thiserror::Error)]
pub enum VaaniError {
    #[error("SARVAM_API_KEY is not set")]
    MissingCredential,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Sarvam API returned {status}: {body}")]
    Api { status: u16, body: String },

    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("No audio in response: {body}")]
    MissingAudio { body: String },

    #[error("Response contains an empty audio sequence: {body}")]
    EmptyAudioSequence { body: String },

    #[error("Translation response has no translated text")]
    EmptyTranslation,

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Base64 decoding error: {0}")]
    Base64(#[from] base64::DecodeError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Broad failure classes used when reporting per-record outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Aborts the process before any request is issued.
    FatalPrecondition,
    /// The server could not be reached or answered with a non-200 status.
    Transport,
    /// The server answered 200 but the body did not carry usable data.
    Schema,
    /// The record was rejected before a request was made.
    Input,
    Io,
}

impl VaaniError {
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn api(status: u16, body: impl Into<String>) -> Self {
        Self::Api {
            status,
            body: body.into(),
        }
    }

    pub fn missing_audio(body: &str) -> Self {
        Self::MissingAudio {
            body: crate::utils::truncate_for_log(body, constants::MAX_LOGGED_BODY_CHARS),
        }
    }

    pub fn empty_audio_sequence(body: &str) -> Self {
        Self::EmptyAudioSequence {
            body: crate::utils::truncate_for_log(body, constants::MAX_LOGGED_BODY_CHARS),
        }
    }

    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::MissingCredential | Self::Config(_) => ErrorKind::FatalPrecondition,
            Self::Api { .. } | Self::Http(_) => ErrorKind::Transport,
            Self::MissingAudio { .. }
            | Self::EmptyAudioSequence { .. }
            | Self::EmptyTranslation
            | Self::Json(_)
            | Self::Base64(_) => ErrorKind::Schema,
            Self::InvalidInput(_) => ErrorKind::Input,
            Self::Io(_) => ErrorKind::Io,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, VaaniError>;

/// Input validation functions
pub mod validation {
    use super::*;

    /// Validate text before sending it to the synthesis endpoint
    pub fn validate_tts_text(text: &str) -> Result<()> {
        if text.trim().is_empty() {
            return Err(VaaniError::invalid_input("Text cannot be empty"));
        }

        let length = text.chars().count();
        if length > constants::MAX_TTS_TEXT_LENGTH {
            return Err(VaaniError::invalid_input(format!(
                "Text too long ({} characters, max {})",
                length,
                constants::MAX_TTS_TEXT_LENGTH
            )));
        }

        Ok(())
    }

    /// Validate a target or source language tag such as `kn-IN`
    pub fn validate_language_code(code: &str) -> Result<()> {
        if constants::SUPPORTED_LANGUAGE_CODES.contains(&code) {
            Ok(())
        } else {
            Err(VaaniError::invalid_input(format!(
                "Unsupported language code: {} (expected one of {})",
                code,
                constants::SUPPORTED_LANGUAGE_CODES.join(", ")
            )))
        }
    }

    /// Validate an output file stem: no path separators or parent references
    pub fn validate_file_stem(stem: &str) -> Result<()> {
        if stem.trim().is_empty() {
            return Err(VaaniError::invalid_input("File name cannot be empty"));
        }

        if stem.contains(['/', '\\']) || stem == "." || stem == ".." {
            return Err(VaaniError::invalid_input(format!(
                "File name must not contain a path: {}",
                stem
            )));
        }

        Ok(())
    }
}

/// Constants used throughout the application
pub mod constants {
    // Environment variables
    pub const API_KEY_ENV: &str = "SARVAM_API_KEY";
    pub const API_URL_ENV: &str = "VAANI_API_URL";
    pub const TTS_MODEL_ENV: &str = "VAANI_TTS_MODEL";
    pub const TRANSLATE_MODEL_ENV: &str = "VAANI_TRANSLATE_MODEL";
    pub const OUTPUT_DIR_ENV: &str = "VAANI_OUTPUT_DIR";
    pub const REQUEST_TIMEOUT_ENV: &str = "VAANI_REQUEST_TIMEOUT_SECS";
    pub const LOG_LEVEL_ENV: &str = "VAANI_LOG_LEVEL";
    pub const OTEL_HTTP_URL_ENV: &str = "VAANI_OTEL_HTTP_URL";

    // Sarvam API
    pub const DEFAULT_API_URL: &str = "https://api.sarvam.ai";
    pub const TEXT_TO_SPEECH_PATH: &str = "/text-to-speech";
    pub const TRANSLATE_PATH: &str = "/translate";
    pub const API_KEY_HEADER: &str = "api-subscription-key";
    pub const DEFAULT_TTS_MODEL: &str = "bulbul:v3";
    pub const DEFAULT_TRANSLATE_MODEL: &str = "mayura:v1";

    // Output
    pub const DEFAULT_OUTPUT_DIR: &str = "audio";
    pub const AUDIO_EXTENSION: &str = "wav";

    // TTS constants
    pub const MAX_TTS_TEXT_LENGTH: usize = 900;
    pub const MAX_LOGGED_BODY_CHARS: usize = 300;

    pub const SUPPORTED_LANGUAGE_CODES: &[&str] = &[
        "bn-IN", "en-IN", "gu-IN", "hi-IN", "kn-IN", "ml-IN", "mr-IN", "od-IN", "pa-IN",
        "ta-IN", "te-IN",
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vaani_error_creation() {
        let config_error = VaaniError::config("Test config error");
        assert!(matches!(config_error, VaaniError::Config(_)));
        assert_eq!(
            config_error.to_string(),
            "Configuration error: Test config error"
        );

        let api_error = VaaniError::api(429, "{\"error\":\"rate limited\"}");
        assert!(matches!(api_error, VaaniError::Api { status: 429, .. }));
        assert_eq!(
            api_error.to_string(),
            "Sarvam API returned 429: {\"error\":\"rate limited\"}"
        );
    }

    #[test]
    fn test_missing_audio_truncates_body() {
        let body = "x".repeat(constants::MAX_LOGGED_BODY_CHARS + 50);
        match VaaniError::missing_audio(&body) {
            VaaniError::MissingAudio { body } => {
                assert_eq!(body.chars().count(), constants::MAX_LOGGED_BODY_CHARS + 3);
                assert!(body.ends_with("..."));
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_error_kinds() {
        assert_eq!(
            VaaniError::MissingCredential.kind(),
            ErrorKind::FatalPrecondition
        );
        assert_eq!(VaaniError::api(500, "").kind(), ErrorKind::Transport);
        assert_eq!(VaaniError::missing_audio("{}").kind(), ErrorKind::Schema);
        assert_eq!(
            VaaniError::empty_audio_sequence("{\"audios\":[]}").kind(),
            ErrorKind::Schema
        );
        assert_eq!(VaaniError::invalid_input("bad").kind(), ErrorKind::Input);
        assert_eq!(
            VaaniError::from(std::io::Error::other("disk full")).kind(),
            ErrorKind::Io
        );
    }

    mod validation_tests {
        use super::super::constants;
        use super::super::validation::*;

        #[test]
        fn test_validate_tts_text_valid() {
            assert!(validate_tts_text("Hello world").is_ok());
            assert!(validate_tts_text("ಸಾರ್, ಬಾತ್ರೂಮ್ ಪೈಪ್ ಲೀಕ್ ಆಗ್ತಿದೆ.").is_ok());
        }

        #[test]
        fn test_validate_tts_text_empty() {
            assert!(validate_tts_text("").is_err());
            assert!(validate_tts_text("   ").is_err());
        }

        #[test]
        fn test_validate_tts_text_counts_characters() {
            // Each Devanagari letter is three bytes in UTF-8.
            let at_limit = "क".repeat(constants::MAX_TTS_TEXT_LENGTH);
            assert!(validate_tts_text(&at_limit).is_ok());

            let too_long = "a".repeat(constants::MAX_TTS_TEXT_LENGTH + 1);
            assert!(validate_tts_text(&too_long).is_err());
        }

        #[test]
        fn test_validate_file_stem() {
            assert!(validate_file_stem("demo1_turn1").is_ok());
            assert!(validate_file_stem("speech.v2").is_ok());
            assert!(validate_file_stem("").is_err());
            assert!(validate_file_stem("../escape").is_err());
            assert!(validate_file_stem("a\\b").is_err());
            assert!(validate_file_stem("..").is_err());
        }

        #[test]
        fn test_validate_language_code() {
            assert!(validate_language_code("kn-IN").is_ok());
            assert!(validate_language_code("od-IN").is_ok());
            assert!(validate_language_code("kn").is_err());
            assert!(validate_language_code("fr-FR").is_err());
            assert!(validate_language_code("").is_err());
        }
    }
}
