//! Fixed sampling parameters for the generation call.

use serde::Serialize;

use crate::config::SelahConfig;

/// Sampling settings sent with every generation request. Fixed per
/// deployment via config; never user-configurable.
#[derive(Debug, Clone, Serialize)]
pub struct SamplingConfig {
    pub max_new_tokens: u32,
    pub temperature: f32,
    pub top_k: u32,
    pub repetition_penalty: f32,
    pub no_repeat_ngram_size: u32,
    pub min_length: u32,
    /// Sampling (rather than greedy decoding) is always on
    pub do_sample: bool,
}

impl SamplingConfig {
    pub fn from_config(config: &SelahConfig) -> Self {
        Self {
            max_new_tokens: config.max_new_tokens,
            temperature: config.temperature,
            top_k: config.top_k,
            repetition_penalty: config.repetition_penalty,
            no_repeat_ngram_size: config.no_repeat_ngram_size,
            min_length: config.min_length,
            do_sample: true,
        }
    }
}

impl Default for SamplingConfig {
    fn default() -> Self {
        Self {
            max_new_tokens: 70,
            temperature: 0.3,
            top_k: 20,
            repetition_penalty: 2.0,
            no_repeat_ngram_size: 3,
            min_length: 10,
            do_sample: true,
        }
    }
}
