use std::fmt;

use async_trait::async_trait;
use base64::{engine::general_purpose::STANDARD, Engine as _};
use reqwest::StatusCode;
use serde::Serialize;
use tracing::{debug, info};

use crate::{
    config::Config,
    errors::{constants::*, Result, VaaniError},
    tts::{
        sarvam::structs::{
            text_to_speech_request::TextToSpeechRequest,
            text_to_speech_response::TextToSpeechResponse, translate_request::TranslateRequest,
            translate_response::TranslateResponse,
        },
        synthesizer::{Synthesizer, Translator},
    },
};

/// Client for the Sarvam speech and translation API.
#[derive(Clone)]
pub struct SarvamClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    tts_model: String,
    translate_model: String,
}

impl fmt::Debug for SarvamClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SarvamClient")
            .field("api_url", &self.api_url)
            .field("tts_model", &self.tts_model)
            .field("translate_model", &self.translate_model)
            .finish_non_exhaustive()
    }
}

impl SarvamClient {
    /// Build a client from configuration.
    ///
    /// Fails with `MissingCredential` when no API key is configured, so no
    /// request can ever be issued without one.
    pub fn new(config: &Config) -> Result<Self> {
        let api_key = config.credential()?.to_string();

        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = config.request_timeout {
            builder = builder.timeout(timeout);
        }

        Ok(Self {
            http: builder.build()?,
            api_url: config.api_url.trim_end_matches('/').to_string(),
            api_key,
            tts_model: config.tts_model.clone(),
            translate_model: config.translate_model.clone(),
        })
    }

    /// POST a JSON body and return the raw response text of a 200 answer.
    async fn post_json<T: Serialize>(&self, path: &str, body: &T) -> Result<String> {
        let response = self
            .http
            .post(format!("{}{}", self.api_url, path))
            .header(reqwest::header::CONTENT_TYPE, "application/json")
            .header(API_KEY_HEADER, &self.api_key)
            .body(serde_json::to_string(body)?)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if status != StatusCode::OK {
            return Err(VaaniError::api(status.as_u16(), text));
        }

        Ok(text)
    }

    /// Synthesize text and return the decoded audio bytes.
    ///
    /// Example:
    /// ```rust,no_run
    /// # async fn run() -> vaani_tts::Result<()> {
    /// use vaani_tts::{config::Config, tts::sarvam::sarvam::SarvamClient};
    ///
    /// let client = SarvamClient::new(&Config::from_env()?)?;
    /// let wav = client.text_to_speech("ನಮಸ್ಕಾರ", "kn-IN").await?;
    /// # Ok(())
    /// # }
    /// ```
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn text_to_speech(&self, text: &str, language_code: &str) -> Result<Vec<u8>> {
        let request = TextToSpeechRequest {
            text: text.to_string(),
            model: self.tts_model.clone(),
            target_language_code: language_code.to_string(),
        };

        let body = self.post_json(TEXT_TO_SPEECH_PATH, &request).await?;
        let value: serde_json::Value = serde_json::from_str(&body)?;

        if let Some(object) = value.as_object() {
            let keys: Vec<&String> = object.keys().collect();
            info!(?keys, "Response keys");
        }

        let payload = TextToSpeechResponse::from_value(&value).audio_payload(&body)?;

        let encoded: String = payload
            .base64_audio()
            .chars()
            .filter(|c| !c.is_whitespace())
            .collect();
        let audio = STANDARD.decode(encoded)?;

        debug!(
            request_id = %value.get("request_id").unwrap_or(&serde_json::Value::Null),
            bytes = audio.len(),
            "Decoded audio"
        );

        Ok(audio)
    }

    /// Translate text from one language tag to another.
    #[tracing::instrument(skip(self, input), fields(chars = input.chars().count()))]
    pub async fn translate(
        &self,
        input: &str,
        source_language_code: &str,
        target_language_code: &str,
    ) -> Result<String> {
        let request = TranslateRequest {
            input: input.to_string(),
            source_language_code: source_language_code.to_string(),
            target_language_code: target_language_code.to_string(),
            model: self.translate_model.clone(),
            enable_preprocessing: true,
        };

        let body = self.post_json(TRANSLATE_PATH, &request).await?;
        let response: TranslateResponse = serde_json::from_str(&body)?;

        response
            .translated_text
            .map(|text| text.trim().to_string())
            .filter(|text| !text.is_empty())
            .ok_or(VaaniError::EmptyTranslation)
    }
}

#[async_trait]
impl Synthesizer for SarvamClient {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>> {
        self.text_to_speech(text, language_code).await
    }
}

#[async_trait]
impl Translator for SarvamClient {
    async fn translate(
        &self,
        input: &str,
        source_language_code: &str,
        target_language_code: &str,
    ) -> Result<String> {
        SarvamClient::translate(self, input, source_language_code, target_language_code).await
    }
}
