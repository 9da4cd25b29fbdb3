use async_trait::async_trait;

use crate::errors::Result;

/// Turns text into decoded audio bytes.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Synthesizer: Send + Sync {
    async fn synthesize(&self, text: &str, language_code: &str) -> Result<Vec<u8>>;
}

/// Translates text between two language tags.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait Translator: Send + Sync {
    async fn translate(
        &self,
        input: &str,
        source_language_code: &str,
        target_language_code: &str,
    ) -> Result<String>;
}
