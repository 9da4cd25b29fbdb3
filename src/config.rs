use std::{fmt, path::PathBuf, str::FromStr, time::Duration};

use tracing::Level;

use crate::errors::{constants::*, Result, VaaniError};

/// Runtime configuration, read from the process environment.
#[derive(Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_url: String,
    pub tts_model: String,
    pub translate_model: String,
    pub output_dir: PathBuf,
    pub request_timeout: Option<Duration>,
    pub log_level: Level,
    pub otel_http_url: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: None,
            api_url: DEFAULT_API_URL.to_string(),
            tts_model: DEFAULT_TTS_MODEL.to_string(),
            translate_model: DEFAULT_TRANSLATE_MODEL.to_string(),
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            request_timeout: None,
            log_level: Level::INFO,
            otel_http_url: None,
        }
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("api_url", &self.api_url)
            .field("tts_model", &self.tts_model)
            .field("translate_model", &self.translate_model)
            .field("output_dir", &self.output_dir)
            .field("request_timeout", &self.request_timeout)
            .field("log_level", &self.log_level)
            .field("otel_http_url", &self.otel_http_url)
            .finish()
    }
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// A missing `SARVAM_API_KEY` is not an error here; see [`Config::credential`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let value = |name: &str| {
            lookup(name)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };

        let defaults = Self::default();

        let request_timeout = match value(REQUEST_TIMEOUT_ENV) {
            Some(raw) => {
                let secs = u64::from_str(&raw).map_err(|e| {
                    VaaniError::config(format!("{}={}: {}", REQUEST_TIMEOUT_ENV, raw, e))
                })?;
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        let log_level = match value(LOG_LEVEL_ENV) {
            Some(raw) => Level::from_str(&raw).map_err(|e| {
                VaaniError::config(format!("{}={}: {}", LOG_LEVEL_ENV, raw, e))
            })?,
            None => defaults.log_level,
        };

        Ok(Self {
            api_key: value(API_KEY_ENV),
            api_url: value(API_URL_ENV)
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            tts_model: value(TTS_MODEL_ENV).unwrap_or(defaults.tts_model),
            translate_model: value(TRANSLATE_MODEL_ENV).unwrap_or(defaults.translate_model),
            output_dir: value(OUTPUT_DIR_ENV)
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
            request_timeout,
            log_level,
            otel_http_url: value(OTEL_HTTP_URL_ENV),
        })
    }

    /// The API credential, or `MissingCredential` when it is absent or blank.
    pub fn credential(&self) -> Result<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.trim().is_empty())
            .ok_or(VaaniError::MissingCredential)
    }
}
