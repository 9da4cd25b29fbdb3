use std::{path::PathBuf, process::ExitCode};

use tracing::{error, info, warn};

use crate::{
    config::Config,
    demo::{
        generator::DemoGenerator,
        request::{select_demos, DEMO_REQUESTS},
        speak::{speak, SpeakRequest},
    },
    errors::{constants::API_KEY_ENV, VaaniError},
    tts::sarvam::sarvam::SarvamClient,
};

/// How a command ended, mapped onto the process exit code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    Success,
    Failure,
}

impl From<RunStatus> for ExitCode {
    fn from(status: RunStatus) -> Self {
        match status {
            RunStatus::Success => ExitCode::SUCCESS,
            RunStatus::Failure => ExitCode::FAILURE,
        }
    }
}

/// Load configuration through `lookup`, reporting problems on stderr.
///
/// Runs before the tracing subscriber exists, hence no `tracing` macros.
pub fn load_config<F>(lookup: F) -> std::result::Result<Config, RunStatus>
where
    F: Fn(&str) -> Option<String>,
{
    Config::from_lookup(lookup).map_err(|err| {
        eprintln!("ERROR: {}", err);
        RunStatus::Failure
    })
}

/// Create the API client, reporting a missing credential the way users need to fix it.
pub fn create_client(config: &Config) -> Option<SarvamClient> {
    match SarvamClient::new(config) {
        Ok(client) => Some(client),
        Err(VaaniError::MissingCredential) => {
            error!("Set {} environment variable first.", API_KEY_ENV);
            error!("  export {}=your_key_here", API_KEY_ENV);
            None
        }
        Err(err) => {
            error!("{}", err);
            None
        }
    }
}

/// Run the demo list, or the `only` subset of it.
///
/// Succeeds once the list has been walked, whatever happened to individual
/// records. Fails only when no client can be created.
pub async fn generate_demos(config: &Config, output_dir: PathBuf, only: &[String]) -> RunStatus {
    let Some(client) = create_client(config) else {
        return RunStatus::Failure;
    };

    let requests = if only.is_empty() {
        DEMO_REQUESTS.clone()
    } else {
        let (selected, unknown) = select_demos(only);
        for id in unknown {
            warn!("Unknown demo id: {}", id);
        }
        selected
    };

    let generator = DemoGenerator::new(client, output_dir);
    let summary = generator.run(&requests).await;

    if summary.all_succeeded() {
        info!("All demo audio generated!");
    } else {
        info!(
            "Generated {} of {} demo audio files",
            summary.generated.len(),
            summary.total()
        );
    }

    RunStatus::Success
}

/// Translate (when asked) and synthesize ad-hoc text.
pub async fn speak_text(config: &Config, output_dir: PathBuf, request: &SpeakRequest) -> RunStatus {
    let Some(client) = create_client(config) else {
        return RunStatus::Failure;
    };

    let generator = DemoGenerator::new(client.clone(), output_dir);
    match speak(&generator, &client, request).await {
        Ok(paths) => {
            for path in paths {
                info!("Saved {}", path.display());
            }
            RunStatus::Success
        }
        Err(err) => {
            error!(kind = ?err.kind(), "{}", err);
            RunStatus::Failure
        }
    }
}

/// Print the built-in demo phrases.
pub fn list_demos() -> RunStatus {
    for demo in DEMO_REQUESTS.iter() {
        println!("{:<12} {:<6} {}", demo.id, demo.language_code, demo.description);
    }
    RunStatus::Success
}
