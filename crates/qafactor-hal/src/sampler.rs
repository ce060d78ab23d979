//! Sampler trait and configuration.
//!
//! A [`Sampler`] answers one question: given an Ising model over physical
//! qubits and one anneal offset per qubit, what spin configurations come
//! out of `num_reads` anneals?
//!
//! ## Contract
//!
//! - `properties()` is synchronous and infallible. Properties are cached
//!   at construction time.
//! - `sample()` validates the request against the cached properties
//!   before doing any work, and blocks until the whole batch is back.
//! - The returned [`SampleSet`] has one column per model variable.
//! - An empty `anneal_offsets` slice means "no offsets".

use std::fmt;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use qafactor_ir::{QuadraticModel, SampleSet};

use crate::error::HalResult;
use crate::properties::SamplerProperties;

/// Configuration for a sampler instance.
#[derive(Clone, Serialize, Deserialize)]
pub struct SamplerConfig {
    /// Name of the sampler.
    pub name: String,
    /// API endpoint URL.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub endpoint: Option<String>,
    /// Authentication token.
    #[serde(default, skip_serializing)]
    pub token: Option<String>,
    /// Sampler-specific settings.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl SamplerConfig {
    /// Create a new sampler configuration.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            endpoint: None,
            token: None,
            extra: serde_json::Map::new(),
        }
    }

    /// Set the endpoint URL.
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = Some(endpoint.into());
        self
    }

    /// Set the authentication token.
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Add extra configuration.
    pub fn with_extra(mut self, key: impl Into<String>, value: serde_json::Value) -> Self {
        self.extra.insert(key.into(), value);
        self
    }

    /// Read an extra setting as an unsigned integer.
    pub fn extra_u64(&self, key: &str) -> Option<u64> {
        self.extra.get(key).and_then(serde_json::Value::as_u64)
    }

    /// Read an extra setting as a float.
    pub fn extra_f64(&self, key: &str) -> Option<f64> {
        self.extra.get(key).and_then(serde_json::Value::as_f64)
    }
}

impl fmt::Debug for SamplerConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SamplerConfig")
            .field("name", &self.name)
            .field("endpoint", &self.endpoint)
            .field("token", &"[REDACTED]")
            .field("extra", &self.extra)
            .finish()
    }
}

/// Trait for annealing samplers.
#[async_trait]
pub trait Sampler: Send + Sync {
    /// Get the name of this sampler.
    fn name(&self) -> &str;

    /// Get the properties of this sampler.
    fn properties(&self) -> &SamplerProperties;

    /// Sample `num_reads` anneals of `model` with the given per-qubit
    /// anneal offsets.
    async fn sample(
        &self,
        model: &QuadraticModel,
        anneal_offsets: &[f64],
        num_reads: u32,
    ) -> HalResult<SampleSet>;
}

/// Trait for creating samplers from configuration.
pub trait SamplerFactory: Sampler + Sized {
    /// Create a sampler from configuration.
    fn from_config(config: SamplerConfig) -> HalResult<Self>;
}
