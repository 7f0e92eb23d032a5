//! Model info returned by the classification service's `/info` endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelInfo {
    #[serde(default)]
    pub success: bool,
    pub available_options: Option<AvailableOptions>,
    pub dataset_info: Option<DatasetInfo>,
    pub model_info: Option<ModelDescriptor>,
    pub error: Option<String>,
}

/// Option sets the service accepts (inputs) and can predict (outputs)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailableOptions {
    #[serde(default)]
    pub elastisitas: Vec<String>,
    #[serde(default)]
    pub tekstur: Vec<String>,
    #[serde(default)]
    pub bahan_kain: Vec<String>,
    #[serde(default)]
    pub jenis_pakaian: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetInfo {
    #[serde(default)]
    pub total_records: u64,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ModelDescriptor {
    #[serde(default)]
    pub algorithm: String,
    #[serde(default)]
    pub kernel_type: String,
    #[serde(default)]
    pub features: Vec<String>,
    /// Fraction in [0, 1]
    pub accuracy: Option<f64>,
}

#[cfg(test)]
impl ModelInfo {
    /// Failure state carrying the error message
    pub fn failed(error: impl Into<String>) -> Self {
        Self {
            success: false,
            error: Some(error.into()),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_full_info() {
        let info: ModelInfo = serde_json::from_value(json!({
            "success": true,
            "availableOptions": {
                "elastisitas": ["Rendah", "Sedang", "Tinggi"],
                "tekstur": ["Halus", "Kasar"],
                "bahanKain": ["Katun", "Denim"],
                "jenisPakaian": ["Kemeja", "Celana"]
            },
            "datasetInfo": { "totalRecords": 100 },
            "modelInfo": {
                "algorithm": "SVM (Support Vector Machine)",
                "kernelType": "RBF (Radial Basis Function)",
                "features": ["Ketebalan", "Tekstur", "Elastisitas"]
            }
        }))
        .unwrap();

        assert!(info.success);
        let options = info.available_options.unwrap();
        assert_eq!(options.elastisitas, ["Rendah", "Sedang", "Tinggi"]);
        assert_eq!(options.jenis_pakaian, ["Kemeja", "Celana"]);
        assert_eq!(info.dataset_info.unwrap().total_records, 100);
        let model = info.model_info.unwrap();
        assert_eq!(model.features.len(), 3);
        assert_eq!(model.accuracy, None);
    }

    #[test]
    fn test_parse_failure_info() {
        let info: ModelInfo = serde_json::from_value(json!({
            "success": false,
            "error": "Server belum siap atau gagal memuat data model."
        }))
        .unwrap();

        assert!(!info.success);
        assert!(info.available_options.is_none());
        assert_eq!(info.error.as_deref(), Some("Server belum siap atau gagal memuat data model."));
    }

    #[test]
    fn test_failed_constructor() {
        let info = ModelInfo::failed("connection refused");
        assert!(!info.success);
        assert_eq!(info.error.as_deref(), Some("connection refused"));
    }
}
