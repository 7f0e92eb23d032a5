//! Classification form input and validation

use serde::{Deserialize, Serialize};
use validator::Validate;

use super::prediction::PredictRequest;

/// Raw form fields, as typed or selected by the user
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize, Validate)]
pub struct ClassificationForm {
    #[serde(default)]
    #[validate(length(min = 1))]
    pub elastisitas: String,

    #[serde(default)]
    #[validate(length(min = 1))]
    pub tekstur: String,

    /// Thickness in millimeters, still unparsed
    #[serde(default)]
    #[validate(length(min = 1))]
    pub ketebalan: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FormError {
    #[error("Semua field harus diisi!")]
    MissingFields,

    #[error("Ketebalan harus dalam rentang 0.2 - 2.0 mm")]
    ThicknessOutOfRange,
}

impl ClassificationForm {
    pub fn new(
        elastisitas: impl Into<String>,
        tekstur: impl Into<String>,
        ketebalan: impl Into<String>,
    ) -> Self {
        Self {
            elastisitas: elastisitas.into(),
            tekstur: tekstur.into(),
            ketebalan: ketebalan.into(),
        }
    }

    /// Copy with surrounding whitespace removed from every field
    pub fn normalized(&self) -> Self {
        Self::new(self.elastisitas.trim(), self.tekstur.trim(), self.ketebalan.trim())
    }

    /// Validate the fields and build the request sent to the service
    pub fn to_request(&self) -> Result<PredictRequest, FormError> {
        let form = self.normalized();
        form.validate().map_err(|_| FormError::MissingFields)?;

        let thickness: f64 = form
            .ketebalan
            .parse()
            .map_err(|_| FormError::ThicknessOutOfRange)?;

        // The range rule lets NaN through
        if !thickness.is_finite() {
            return Err(FormError::ThicknessOutOfRange);
        }

        let request = PredictRequest {
            elasticity: form.elastisitas,
            texture: form.tekstur,
            thickness,
        };
        request
            .validate()
            .map_err(|_| FormError::ThicknessOutOfRange)?;

        Ok(request)
    }
}
