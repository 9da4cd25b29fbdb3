use std::path::{Path, PathBuf};

use tracing::{debug, error, info};

use crate::{
    demo::request::DemoRequest,
    errors::{
        constants::{AUDIO_EXTENSION, MAX_TTS_TEXT_LENGTH},
        validation::{validate_file_stem, validate_language_code, validate_tts_text},
        Result, VaaniError,
    },
    tts::synthesizer::Synthesizer,
    utils::split_text,
};

/// A record that could not be turned into an audio file.
#[derive(Debug)]
pub struct RecordFailure {
    pub id: String,
    pub error: VaaniError,
}

/// Outcome of a full pass over the demo list.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub generated: Vec<PathBuf>,
    pub failures: Vec<RecordFailure>,
}

impl RunSummary {
    pub fn total(&self) -> usize {
        self.generated.len() + self.failures.len()
    }

    pub fn all_succeeded(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Writes one WAV file per demo record into an output directory.
#[derive(Debug)]
pub struct DemoGenerator<S> {
    synthesizer: S,
    output_dir: PathBuf,
}

impl<S: Synthesizer> DemoGenerator<S> {
    pub fn new(synthesizer: S, output_dir: impl Into<PathBuf>) -> Self {
        Self {
            synthesizer,
            output_dir: output_dir.into(),
        }
    }

    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// `<output-dir>/<stem>.wav`
    pub fn output_path(&self, stem: &str) -> PathBuf {
        self.output_dir.join(format!("{}.{}", stem, AUDIO_EXTENSION))
    }

    async fn write_audio(&self, stem: &str, audio: &[u8]) -> Result<PathBuf> {
        tokio::fs::create_dir_all(&self.output_dir).await?;

        let path = self.output_path(stem);
        tokio::fs::write(&path, audio).await?;

        Ok(path)
    }

    /// Whether `file_name` is an output of `stem`: `<stem>.wav` or `<stem>_partNN.wav`.
    fn is_output_of(file_name: &str, stem: &str) -> bool {
        let Some(name) = file_name
            .strip_suffix(AUDIO_EXTENSION)
            .and_then(|name| name.strip_suffix('.'))
        else {
            return false;
        };

        if name == stem {
            return true;
        }

        name.strip_prefix(stem)
            .and_then(|rest| rest.strip_prefix("_part"))
            .is_some_and(|digits| {
                !digits.is_empty() && digits.chars().all(|c| c.is_ascii_digit())
            })
    }

    /// Delete outputs of `stem` left over from an earlier run that are not in `keep`.
    async fn remove_stale_outputs(&self, stem: &str, keep: &[PathBuf]) -> Result<()> {
        let mut entries = tokio::fs::read_dir(&self.output_dir).await?;

        while let Some(entry) = entries.next_entry().await? {
            let path = entry.path();
            let is_stale = entry
                .file_name()
                .to_str()
                .is_some_and(|name| Self::is_output_of(name, stem))
                && !keep.contains(&path);

            if is_stale {
                debug!("Removing stale {}", path.display());
                tokio::fs::remove_file(&path).await?;
            }
        }

        Ok(())
    }

    /// Synthesize one record and write it to `<output-dir>/<id>.wav`.
    ///
    /// An existing file of the same name is overwritten. Nothing is written
    /// when synthesis fails.
    #[tracing::instrument(skip(self, request), fields(id = %request.id, language = %request.language_code))]
    pub async fn generate(&self, request: &DemoRequest) -> Result<PathBuf> {
        validate_file_stem(&request.id)?;
        validate_tts_text(&request.text)?;
        validate_language_code(&request.language_code)?;

        let audio = self
            .synthesizer
            .synthesize(&request.text, &request.language_code)
            .await?;

        self.write_audio(&request.id, &audio).await
    }

    /// Synthesize text of any length, one request per chunk.
    ///
    /// A single chunk is written as `<stem>.wav`, several as `<stem>_part01.wav`,
    /// `<stem>_part02.wav` and so on. The first failing chunk aborts the call and
    /// leaves earlier files alone; after a complete run, other `<stem>` outputs
    /// from previous runs are deleted.
    #[tracing::instrument(skip(self, text), fields(chars = text.chars().count()))]
    pub async fn generate_chunked(
        &self,
        stem: &str,
        text: &str,
        language_code: &str,
    ) -> Result<Vec<PathBuf>> {
        validate_file_stem(stem)?;
        validate_language_code(language_code)?;

        let chunks = split_text(text, MAX_TTS_TEXT_LENGTH);
        if chunks.is_empty() {
            return Err(VaaniError::invalid_input("Text cannot be empty"));
        }

        let total = chunks.len();
        let mut paths = Vec::with_capacity(total);

        for (index, chunk) in chunks.iter().enumerate() {
            let audio = self.synthesizer.synthesize(chunk, language_code).await?;

            let part_stem = if total == 1 {
                stem.to_string()
            } else {
                format!("{}_part{:02}", stem, index + 1)
            };

            let path = self.write_audio(&part_stem, &audio).await?;
            info!(part = index + 1, total, "Saved {}", path.display());
            paths.push(path);
        }

        self.remove_stale_outputs(stem, &paths).await?;

        Ok(paths)
    }

    /// Generate every record in order. A failing record is logged and skipped.
    pub async fn run(&self, requests: &[DemoRequest]) -> RunSummary {
        let mut summary = RunSummary::default();

        for request in requests {
            info!("Generating: {} ({})...", request.id, request.description);

            match self.generate(request).await {
                Ok(path) => {
                    info!(
                        monotonic_counter.demo_audio_generated = 1_u64,
                        "Saved {}",
                        path.display()
                    );
                    summary.generated.push(path);
                }
                Err(err) => {
                    log_failure(&request.id, &err);
                    summary.failures.push(RecordFailure {
                        id: request.id.clone(),
                        error: err,
                    });
                }
            }
        }

        info!(
            generated = summary.generated.len(),
            failed = summary.failures.len(),
            "Demo audio generation finished"
        );

        summary
    }
}

fn log_failure(id: &str, err: &VaaniError) {
    match err {
        VaaniError::Api { status, body } => {
            error!(
                id,
                status,
                monotonic_counter.demo_audio_failed = 1_u64,
                "{} - {}",
                status,
                body
            );
        }
        VaaniError::MissingAudio { body } | VaaniError::EmptyAudioSequence { body } => {
            error!(
                id,
                monotonic_counter.demo_audio_failed = 1_u64,
                "{}. Full response: {}",
                err,
                body
            );
        }
        _ => {
            error!(
                id,
                kind = ?err.kind(),
                monotonic_counter.demo_audio_failed = 1_u64,
                "{}",
                err
            );
        }
    }
}
