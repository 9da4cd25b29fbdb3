use std::{path::PathBuf, process::ExitCode};

use clap::{Parser, Subcommand};

use vaani_tts::{
    app::{generate_demos, list_demos, load_config, speak_text, RunStatus},
    demo::speak::SpeakRequest,
    trace::init_tracing_subscriber,
};

/// Generate demo audio with the Sarvam text-to-speech API
#[derive(Parser, Debug)]
#[command(name = "vaani-tts", version)]
struct Cli {
    /// Directory the WAV files are written to (overrides VAANI_OUTPUT_DIR)
    #[arg(long, global = true)]
    output_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Synthesize the built-in demo phrases (default)
    Generate {
        /// Only generate these demo ids
        #[arg(long, num_args = 1..)]
        only: Vec<String>,
    },
    /// Print the built-in demo phrases
    List,
    /// Synthesize arbitrary text, optionally translating it first
    Speak {
        /// Text to speak
        #[arg(long)]
        text: String,
        /// Language the audio is spoken in, e.g. kn-IN
        #[arg(long)]
        lang: String,
        /// Language the text is written in, when it needs translating
        #[arg(long)]
        from: Option<String>,
        /// Output file stem
        #[arg(long, default_value = "speech")]
        name: String,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config(|name| std::env::var(name).ok()) {
        Ok(config) => config,
        Err(status) => return status.into(),
    };

    let _otel_guard = match init_tracing_subscriber(config.log_level, &config.otel_http_url) {
        Ok(guard) => guard,
        Err(err) => {
            eprintln!("ERROR: {}", err);
            return RunStatus::Failure.into();
        }
    };

    let output_dir = cli
        .output_dir
        .clone()
        .unwrap_or_else(|| config.output_dir.clone());

    let status = match cli.command.unwrap_or(Command::Generate { only: Vec::new() }) {
        Command::Generate { only } => generate_demos(&config, output_dir, &only).await,
        Command::List => list_demos(),
        Command::Speak {
            text,
            lang,
            from,
            name,
        } => {
            let request = SpeakRequest {
                name,
                text,
                language_code: lang,
                source_language_code: from,
            };
            speak_text(&config, output_dir, &request).await
        }
    };

    status.into()
}
