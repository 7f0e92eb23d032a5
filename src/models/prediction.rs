//! Prediction request and result exchanged with the `/predict` endpoint

use serde::{Deserialize, Serialize};
use validator::Validate;

/// Message of the failure result synthesized when a submission cannot complete
pub const SUBMIT_FAILURE_MESSAGE: &str = "Terjadi kesalahan saat mengirim request.";

/// Body of `POST /predict`. Field names follow the service's dataset columns.
#[derive(Debug, Clone, PartialEq, Serialize, Validate)]
pub struct PredictRequest {
    #[serde(rename = "Elastisitas")]
    pub elasticity: String,

    #[serde(rename = "Tekstur")]
    pub texture: String,

    /// Millimeters
    #[serde(rename = "Ketebalan")]
    #[validate(range(min = 0.2, max = 2.0))]
    pub thickness: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PredictionResult {
    #[serde(default)]
    pub success: bool,
    pub input: Option<EchoedInput>,
    pub prediction: Option<Prediction>,
    pub message: Option<String>,
    pub error: Option<String>,
    /// Sent back on invalid input so the user can correct the form
    pub available_options: Option<CorrectiveOptions>,
}

/// Normalized input as the service understood it
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct EchoedInput {
    #[serde(default)]
    pub elastisitas: String,
    #[serde(default)]
    pub tekstur: String,
    #[serde(default)]
    pub ketebalan: f64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Prediction {
    #[serde(default)]
    pub bahan_kain: String,
    #[serde(default)]
    pub jenis_pakaian: String,
    pub confidence: Option<Confidence>,
}

/// Per-label scores in [0, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confidence {
    pub bahan_kain: Option<f64>,
    pub jenis_pakaian: Option<f64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CorrectiveOptions {
    #[serde(default)]
    pub elastisitas: Vec<String>,
    #[serde(default)]
    pub tekstur: Vec<String>,
}

impl PredictionResult {
    /// Failure result for a submission that never produced a service response
    pub fn transport_failure(error: impl std::fmt::Display) -> Self {
        Self {
            success: false,
            message: Some(SUBMIT_FAILURE_MESSAGE.to_string()),
            error: Some(error.to_string()),
            ..Default::default()
        }
    }

    /// Message to show for a failed result
    pub fn failure_message(&self) -> &str {
        self.message
            .as_deref()
            .or(self.error.as_deref())
            .unwrap_or("Prediksi gagal tanpa pesan dari server.")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_wire_names() {
        let request = PredictRequest {
            elasticity: "Tinggi".to_string(),
            texture: "Halus".to_string(),
            thickness: 1.2,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "Elastisitas": "Tinggi", "Tekstur": "Halus", "Ketebalan": 1.2 })
        );
    }

    #[test]
    fn test_request_thickness_range() {
        let mut request = PredictRequest {
            elasticity: "Sedang".to_string(),
            texture: "Kasar".to_string(),
            thickness: 0.2,
        };
        assert!(request.validate().is_ok());
        request.thickness = 2.0;
        assert!(request.validate().is_ok());
        request.thickness = 2.01;
        assert!(request.validate().is_err());
        request.thickness = 0.19;
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_parse_success_result() {
        let result: PredictionResult = serde_json::from_value(json!({
            "success": true,
            "input": { "elastisitas": "Tinggi", "tekstur": "Halus", "ketebalan": 1 },
            "prediction": {
                "bahanKain": "Spandex",
                "jenisPakaian": "Baju Olahraga",
                "confidence": { "bahanKain": 0.85, "jenisPakaian": 0.65 }
            }
        }))
        .unwrap();

        assert!(result.success);
        assert_eq!(result.input.unwrap().ketebalan, 1.0);
        let prediction = result.prediction.unwrap();
        assert_eq!(prediction.bahan_kain, "Spandex");
        assert_eq!(prediction.confidence.unwrap().jenis_pakaian, Some(0.65));
    }

    #[test]
    fn test_parse_failure_with_options() {
        let result: PredictionResult = serde_json::from_value(json!({
            "success": false,
            "message": "Nilai input tidak valid.",
            "availableOptions": { "elastisitas": ["Rendah", "Tinggi"], "tekstur": ["Halus"] }
        }))
        .unwrap();

        assert!(!result.success);
        assert_eq!(result.available_options.as_ref().unwrap().elastisitas.len(), 2);
        assert_eq!(result.failure_message(), "Nilai input tidak valid.");
    }

    #[test]
    fn test_transport_failure() {
        let result = PredictionResult::transport_failure("connection refused");
        assert!(!result.success);
        assert_eq!(result.failure_message(), SUBMIT_FAILURE_MESSAGE);
        assert_eq!(result.error.as_deref(), Some("connection refused"));
        assert!(result.available_options.is_none());
    }

    #[test]
    fn test_failure_message_falls_back_to_error() {
        let result = PredictionResult {
            error: Some("SERVER_NOT_READY".to_string()),
            ..Default::default()
        };
        assert_eq!(result.failure_message(), "SERVER_NOT_READY");
    }
}
