//! Text-generation-inference client
//!
//! Speaks the HF text-generation-inference wire shape:
//! `POST {base}/generate` with `{inputs, parameters}`, returning
//! `{generated_text}`. Servers ignore parameter fields they don't implement.

use anyhow::Result;
use async_trait::async_trait;
use reqwest::Client as HttpClient;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use super::{GenerationError, Generator, SamplingConfig};

#[derive(Serialize)]
struct GenerateRequest<'a> {
    inputs: &'a str,
    parameters: &'a SamplingConfig,
}

#[derive(Deserialize)]
struct GenerateResponse {
    generated_text: String,
}

/// Client for a text-generation inference server
pub struct TgiClient {
    client: HttpClient,
    base_url: String,
}

impl TgiClient {
    pub fn new(base_url: String, timeout: Duration) -> Result<Self> {
        let client = HttpClient::builder().timeout(timeout).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl Generator for TgiClient {
    async fn generate(
        &self,
        prompt: &str,
        sampling: &SamplingConfig,
    ) -> Result<String, GenerationError> {
        let url = format!("{}/generate", self.base_url);

        let response = self
            .client
            .post(&url)
            .json(&GenerateRequest {
                inputs: prompt,
                parameters: sampling,
            })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(GenerationError::Api {
                status: status.as_u16(),
                body,
            });
        }

        let body: GenerateResponse = response.json().await?;
        Ok(body.generated_text)
    }

    fn name(&self) -> &'static str {
        "text-generation-inference"
    }
}
