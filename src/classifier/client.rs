//! Classification Service Client
//!
//! HTTP client for the external fabric classification service.
//! One attempt per call: no retry, no backoff.

use std::time::Duration;

use crate::config::Config;
use crate::models::{ModelInfo, PredictRequest, PredictionResult};

/// Message used when `/info` fails without an error text of its own
pub const INFO_FAILURE_MESSAGE: &str = "Gagal memuat informasi dari server backend.";

/// Classification service client
#[derive(Debug, Clone)]
pub struct ClassifierClient {
    base_url: String,
    http_client: reqwest::Client,
}

impl ClassifierClient {
    /// Create new client for the service at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> Result<Self, ClassifierError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http_client = builder
            .build()
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        Ok(Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http_client,
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, ClassifierError> {
        Self::new(
            config.classifier_url.clone(),
            config.classifier_timeout_secs.map(Duration::from_secs),
        )
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch model metadata (`GET /info`)
    ///
    /// A non-2xx status or `success: false` is reported as
    /// [`ClassifierError::Rejected`] with the service's error text.
    pub async fn fetch_info(&self) -> Result<ModelInfo, ClassifierError> {
        let url = format!("{}/info", self.base_url);

        let response = self.http_client
            .get(&url)
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        let status = response.status();
        let info: ModelInfo = response.json().await
            .map_err(|e| ClassifierError::Parse(e.to_string()))?;

        if !status.is_success() || !info.success {
            let message = info.error
                .filter(|e| !e.is_empty())
                .unwrap_or_else(|| INFO_FAILURE_MESSAGE.to_string());
            return Err(ClassifierError::Rejected {
                status: status.as_u16(),
                message,
            });
        }

        tracing::debug!(
            "Model info loaded: {} records",
            info.dataset_info.as_ref().map(|d| d.total_records).unwrap_or(0)
        );
        Ok(info)
    }

    /// Request a classification (`POST /predict`)
    ///
    /// The service answers invalid input with a 4xx and a `success: false`
    /// body, so the body is returned whatever the status.
    pub async fn predict(&self, request: &PredictRequest) -> Result<PredictionResult, ClassifierError> {
        let url = format!("{}/predict", self.base_url);

        let response = self.http_client
            .post(&url)
            .json(request)
            .send()
            .await
            .map_err(|e| ClassifierError::Network(e.to_string()))?;

        let status = response.status();
        let result: PredictionResult = response.json().await
            .map_err(|e| ClassifierError::Parse(e.to_string()))?;

        if !status.is_success() {
            tracing::warn!("Prediction rejected ({}): {}", status.as_u16(), result.failure_message());
        }

        Ok(result)
    }
}

/// Classification client errors
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ClassifierError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("{message}")]
    Rejected { status: u16, message: String },
}
