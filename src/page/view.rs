//! Template view models
//!
//! Everything the templates show is derived here from page state, so the
//! templates only loop and print.

use serde::Serialize;

use super::content::{self, FabricCategory};
use super::state::{ClassifierPage, FormPhase, ModelState};
use crate::models::{
    format_percent, AvailableOptions, ClassificationForm, ConfidenceTier, ModelInfo, PredictionResult,
};

// ============================================================================
// RESULT PRESENTATION
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ResultView {
    /// Nothing submitted yet
    Empty,
    Success {
        input: Option<InputView>,
        material: LabelView,
        garment: LabelView,
    },
    Failure {
        message: String,
        detail: Option<String>,
        elasticity_options: Vec<String>,
        texture_options: Vec<String>,
    },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InputView {
    pub elastisitas: String,
    pub tekstur: String,
    pub ketebalan: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LabelView {
    pub value: String,
    pub confidence: Option<ConfidenceView>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ConfidenceView {
    pub tier: ConfidenceTier,
    pub label: &'static str,
    pub percent: String,
}

impl ConfidenceView {
    pub fn from_score(score: f64) -> Self {
        let tier = ConfidenceTier::from_score(score);
        Self {
            tier,
            label: tier.label(),
            percent: format_percent(score),
        }
    }
}

impl ResultView {
    pub fn from_result(result: Option<&PredictionResult>) -> Self {
        let Some(result) = result else {
            return ResultView::Empty;
        };

        if result.success {
            let prediction = result.prediction.clone().unwrap_or_default();
            let confidence = prediction.confidence.unwrap_or_default();

            ResultView::Success {
                input: result.input.as_ref().map(|input| InputView {
                    elastisitas: input.elastisitas.clone(),
                    tekstur: input.tekstur.clone(),
                    ketebalan: input.ketebalan.to_string(),
                }),
                material: LabelView {
                    value: prediction.bahan_kain,
                    confidence: confidence.bahan_kain.map(ConfidenceView::from_score),
                },
                garment: LabelView {
                    value: prediction.jenis_pakaian,
                    confidence: confidence.jenis_pakaian.map(ConfidenceView::from_score),
                },
            }
        } else {
            let options = result.available_options.clone().unwrap_or_default();
            let message = result.failure_message().to_string();
            let detail = result.error.clone().filter(|e| *e != message);

            ResultView::Failure {
                message,
                detail,
                elasticity_options: options.elastisitas,
                texture_options: options.tekstur,
            }
        }
    }
}

// ============================================================================
// MODEL SUMMARY
// ============================================================================

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ModelSummaryView {
    pub total_records: u64,
    pub algorithm: String,
    pub kernel_type: String,
    pub features: Vec<String>,
    pub accuracy: Option<String>,
}

impl ModelSummaryView {
    pub fn from_info(info: &ModelInfo) -> Self {
        let model = info.model_info.clone().unwrap_or_default();
        let or_default = |value: String, fallback: &str| {
            if value.is_empty() { fallback.to_string() } else { value }
        };

        Self {
            total_records: info.dataset_info.as_ref().map(|d| d.total_records).unwrap_or(0),
            algorithm: or_default(model.algorithm, "SVM"),
            kernel_type: or_default(model.kernel_type, "RBF"),
            features: model.features,
            accuracy: model.accuracy.map(format_percent),
        }
    }
}

// ============================================================================
// PAGES
// ============================================================================

/// Context of `klasifikasi.html`
#[derive(Debug, Clone, Serialize)]
pub struct ClassifierView {
    pub model: ModelSummaryView,
    pub options: AvailableOptions,
    pub form: ClassificationForm,
    pub form_error: Option<String>,
    pub phase: FormPhase,
    pub result: ResultView,
    pub svm_advantages: &'static [&'static str],
    pub svm_applications: &'static [&'static str],
}

/// Context of `model_error.html`
#[derive(Debug, Clone, Serialize)]
pub struct ModelErrorView {
    pub error: String,
}

/// What a classifier page renders as
#[derive(Debug, Clone)]
pub enum ClassifierScreen {
    Ready(Box<ClassifierView>),
    ModelError(ModelErrorView),
}

impl ClassifierScreen {
    pub fn from_page(page: &ClassifierPage) -> Self {
        match page.model() {
            ModelState::Ready(info) => ClassifierScreen::Ready(Box::new(ClassifierView {
                model: ModelSummaryView::from_info(info),
                options: info.available_options.clone().unwrap_or_default(),
                form: page.form().clone(),
                form_error: page.form_error().map(|e| e.to_string()),
                phase: page.phase(),
                result: ResultView::from_result(page.result()),
                svm_advantages: content::SVM_ADVANTAGES,
                svm_applications: content::SVM_APPLICATIONS,
            })),
            ModelState::Failed(error) => ClassifierScreen::ModelError(ModelErrorView {
                error: if error.is_empty() {
                    "Tidak ada pesan error.".to_string()
                } else {
                    error.clone()
                },
            }),
            ModelState::Loading => ClassifierScreen::ModelError(ModelErrorView {
                error: "Informasi model belum dimuat.".to_string(),
            }),
        }
    }
}

/// Context of `home.html`
#[derive(Debug, Clone, Serialize)]
pub struct HomeView {
    pub elasticity: &'static [FabricCategory],
    pub texture: &'static [FabricCategory],
}

impl Default for HomeView {
    fn default() -> Self {
        Self {
            elasticity: content::ELASTICITY_CATEGORIES,
            texture: content::TEXTURE_CATEGORIES,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Confidence, CorrectiveOptions, EchoedInput, ModelDescriptor, Prediction};

    fn success(material: f64, garment: f64) -> PredictionResult {
        PredictionResult {
            success: true,
            input: Some(EchoedInput {
                elastisitas: "Tinggi".to_string(),
                tekstur: "Halus".to_string(),
                ketebalan: 1.2,
            }),
            prediction: Some(Prediction {
                bahan_kain: "Spandex".to_string(),
                jenis_pakaian: "Legging".to_string(),
                confidence: Some(Confidence {
                    bahan_kain: Some(material),
                    jenis_pakaian: Some(garment),
                }),
            }),
            ..Default::default()
        }
    }

    #[test]
    fn test_no_result_renders_empty() {
        assert_eq!(ResultView::from_result(None), ResultView::Empty);
    }

    #[test]
    fn test_success_view_tiers() {
        let result = success(0.85, 0.65);
        let ResultView::Success { input, material, garment } = ResultView::from_result(Some(&result)) else {
            panic!("expected success view");
        };

        assert_eq!(input.unwrap().ketebalan, "1.2");
        assert_eq!(material.value, "Spandex");
        let material_confidence = material.confidence.unwrap();
        assert_eq!(material_confidence.tier, ConfidenceTier::High);
        assert_eq!(material_confidence.label, "Tinggi");
        assert_eq!(material_confidence.percent, "85.0%");
        let garment_confidence = garment.confidence.unwrap();
        assert_eq!(garment_confidence.tier, ConfidenceTier::Medium);
        assert_eq!(garment_confidence.label, "Sedang");
    }

    #[test]
    fn test_low_confidence() {
        let view = ConfidenceView::from_score(0.3);
        assert_eq!(view.tier, ConfidenceTier::Low);
        assert_eq!(view.label, "Rendah");
        assert_eq!(view.percent, "30.0%");
    }

    #[test]
    fn test_success_without_confidence() {
        let mut result = success(0.9, 0.9);
        result.prediction.as_mut().unwrap().confidence = None;
        let ResultView::Success { material, garment, .. } = ResultView::from_result(Some(&result)) else {
            panic!("expected success view");
        };
        assert!(material.confidence.is_none());
        assert!(garment.confidence.is_none());
    }

    #[test]
    fn test_failure_with_corrective_options() {
        let result = PredictionResult {
            success: false,
            message: Some("Nilai input tidak dikenali.".to_string()),
            available_options: Some(CorrectiveOptions {
                elastisitas: vec!["Rendah".to_string(), "Tinggi".to_string()],
                tekstur: vec!["Halus".to_string()],
            }),
            ..Default::default()
        };

        match ResultView::from_result(Some(&result)) {
            ResultView::Failure { message, elasticity_options, texture_options, .. } => {
                assert_eq!(message, "Nilai input tidak dikenali.");
                assert_eq!(elasticity_options, ["Rendah", "Tinggi"]);
                assert_eq!(texture_options, ["Halus"]);
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_transport_failure_detail() {
        let result = PredictionResult::transport_failure("Network error: refused");
        match ResultView::from_result(Some(&result)) {
            ResultView::Failure { message, detail, elasticity_options, .. } => {
                assert_eq!(message, crate::models::SUBMIT_FAILURE_MESSAGE);
                assert_eq!(detail.as_deref(), Some("Network error: refused"));
                assert!(elasticity_options.is_empty());
            }
            other => panic!("unexpected view: {:?}", other),
        }
    }

    #[test]
    fn test_model_summary_defaults() {
        let summary = ModelSummaryView::from_info(&ModelInfo {
            success: true,
            ..Default::default()
        });
        assert_eq!(summary.total_records, 0);
        assert_eq!(summary.algorithm, "SVM");
        assert_eq!(summary.kernel_type, "RBF");
        assert!(summary.accuracy.is_none());
    }

    #[test]
    fn test_model_summary_accuracy() {
        let summary = ModelSummaryView::from_info(&ModelInfo {
            success: true,
            model_info: Some(ModelDescriptor {
                algorithm: "SVM (Support Vector Machine)".to_string(),
                accuracy: Some(0.934),
                ..Default::default()
            }),
            ..Default::default()
        });
        assert_eq!(summary.algorithm, "SVM (Support Vector Machine)");
        assert_eq!(summary.kernel_type, "RBF");
        assert_eq!(summary.accuracy.as_deref(), Some("93.4%"));
    }

    #[test]
    fn test_screen_for_failed_model() {
        let mut page = ClassifierPage::new();
        page.model_loaded(Ok(ModelInfo::failed("Server belum siap"))).unwrap();
        match ClassifierScreen::from_page(&page) {
            ClassifierScreen::ModelError(view) => assert_eq!(view.error, "Server belum siap"),
            ClassifierScreen::Ready(_) => panic!("form must not render"),
        }
    }
}
