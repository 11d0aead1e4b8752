//! Generation adapter
//!
//! A thin call-through to an external text-generation inference server.
//! The adapter owns no algorithmic logic: it forwards the assembled prompt
//! and the fixed sampling parameters, and hands back the raw generated text.

mod sampling;
mod tgi;

pub use sampling::SamplingConfig;
pub use tgi::TgiClient;

use async_trait::async_trait;
use thiserror::Error;

/// Errors from the inference boundary. Propagated unhandled to the HTTP
/// layer; there is no retry policy and no fallback reply.
#[derive(Debug, Error)]
pub enum GenerationError {
    #[error("inference request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("inference server returned {status}: {body}")]
    Api { status: u16, body: String },
}

/// Seam for the generation backend. The production implementation speaks to
/// an inference server over HTTP; tests script it.
#[async_trait]
pub trait Generator: Send + Sync {
    /// Generate a continuation of `prompt` under the given sampling settings.
    async fn generate(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, GenerationError>;

    /// Backend name for logging
    fn name(&self) -> &'static str;
}
