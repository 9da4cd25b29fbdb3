use std::path::PathBuf;

use tracing::info;

use crate::{
    demo::generator::DemoGenerator,
    errors::{validation::validate_language_code, Result},
    tts::synthesizer::{Synthesizer, Translator},
};

/// Ad-hoc text to render, optionally translated first.
#[derive(Clone, Debug, PartialEq)]
pub struct SpeakRequest {
    /// Output file stem.
    pub name: String,
    pub text: String,
    /// Language the audio is spoken in.
    pub language_code: String,
    /// Language `text` is written in, when it differs from `language_code`.
    pub source_language_code: Option<String>,
}

/// Translate (when needed) and synthesize a [`SpeakRequest`].
#[tracing::instrument(skip(generator, translator))]
pub async fn speak<S, T>(
    generator: &DemoGenerator<S>,
    translator: &T,
    request: &SpeakRequest,
) -> Result<Vec<PathBuf>>
where
    S: Synthesizer,
    T: Translator + ?Sized,
{
    validate_language_code(&request.language_code)?;

    let text = match request.source_language_code.as_deref() {
        Some(source) if source != request.language_code => {
            validate_language_code(source)?;
            let translated = translator
                .translate(&request.text, source, &request.language_code)
                .await?;
            info!(translated = %translated, "Translated text");
            translated
        }
        _ => request.text.clone(),
    };

    generator
        .generate_chunked(&request.name, &text, &request.language_code)
        .await
}
