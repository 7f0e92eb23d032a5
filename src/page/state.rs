//! Classifier page state
//!
//! ```text
//! Loading ──▶ Ready(info) ──▶ Idle ──▶ Submitting ──▶ ResultShown
//!    │                         ▲                 └──▶ ResultFailed
//!    └──▶ Failed (terminal)    └──────── reset / new submission
//! ```

use serde::Serialize;

use crate::classifier::ClassifierError;
use crate::models::{ClassificationForm, FormError, ModelInfo, PredictRequest, PredictionResult};
use crate::{AppError, AppResult};

#[derive(Debug, Clone, PartialEq)]
pub enum ModelState {
    Loading,
    Ready(ModelInfo),
    /// Carries the error message shown on the error screen
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FormPhase {
    Idle,
    Submitting,
    ResultShown,
    ResultFailed,
}

/// State of one load of the interactive page
#[derive(Debug, Clone)]
pub struct ClassifierPage {
    model: ModelState,
    form: ClassificationForm,
    form_error: Option<FormError>,
    phase: FormPhase,
    result: Option<PredictionResult>,
}

impl Default for ClassifierPage {
    fn default() -> Self {
        Self::new()
    }
}

impl ClassifierPage {
    pub fn new() -> Self {
        Self {
            model: ModelState::Loading,
            form: ClassificationForm::default(),
            form_error: None,
            phase: FormPhase::Idle,
            result: None,
        }
    }

    /// Record the outcome of the model-info fetch
    pub fn model_loaded(&mut self, outcome: Result<ModelInfo, ClassifierError>) -> AppResult<()> {
        if self.model != ModelState::Loading {
            return Err(AppError::InvalidState("model info already loaded".to_string()));
        }

        self.model = match outcome {
            Ok(info) if info.success => ModelState::Ready(info),
            Ok(info) => ModelState::Failed(
                info.error.unwrap_or_else(|| crate::classifier::INFO_FAILURE_MESSAGE.to_string()),
            ),
            Err(e) => {
                tracing::error!("Error loading model info: {}", e);
                ModelState::Failed(e.to_string())
            }
        };
        Ok(())
    }

    /// Take the submitted fields and validate them.
    ///
    /// Returns the request to send, or `None` when validation failed and the
    /// form error is set. A validation failure leaves the phase and any
    /// previous result untouched.
    pub fn submit(&mut self, form: ClassificationForm) -> AppResult<Option<PredictRequest>> {
        self.require_ready()?;
        if self.phase == FormPhase::Submitting {
            return Err(AppError::InvalidState("submission already in flight".to_string()));
        }

        self.form = form;
        self.form_error = None;

        match self.form.to_request() {
            Ok(request) => {
                self.result = None;
                self.phase = FormPhase::Submitting;
                Ok(Some(request))
            }
            Err(e) => {
                tracing::debug!("Form rejected: {}", e);
                self.form_error = Some(e);
                Ok(None)
            }
        }
    }

    /// Store the outcome of the in-flight submission as the new result
    pub fn finish_submit(&mut self, outcome: Result<PredictionResult, ClassifierError>) -> AppResult<()> {
        if self.phase != FormPhase::Submitting {
            return Err(AppError::InvalidState("no submission in flight".to_string()));
        }

        let result = outcome.unwrap_or_else(|e| {
            tracing::error!("Error submitting prediction: {}", e);
            PredictionResult::transport_failure(e)
        });

        self.phase = if result.success {
            FormPhase::ResultShown
        } else {
            FormPhase::ResultFailed
        };
        self.result = Some(result);
        Ok(())
    }

    /// Clear fields, result and form error
    pub fn reset(&mut self) -> AppResult<()> {
        self.require_ready()?;
        self.form = ClassificationForm::default();
        self.form_error = None;
        self.result = None;
        self.phase = FormPhase::Idle;
        Ok(())
    }

    fn require_ready(&self) -> AppResult<()> {
        match self.model {
            ModelState::Ready(_) => Ok(()),
            ModelState::Loading => Err(AppError::InvalidState("model info not loaded".to_string())),
            ModelState::Failed(_) => Err(AppError::InvalidState("model info failed to load".to_string())),
        }
    }

    pub fn model(&self) -> &ModelState {
        &self.model
    }

    pub fn form(&self) -> &ClassificationForm {
        &self.form
    }

    pub fn form_error(&self) -> Option<FormError> {
        self.form_error
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    pub fn result(&self) -> Option<&PredictionResult> {
        self.result.as_ref()
    }
}
