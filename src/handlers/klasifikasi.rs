//! Classifier page handlers
//!
//! Every request is one page load: model info is fetched once, then the
//! submitted form (if any) is validated and sent for prediction.

use axum::{extract::State, response::Html, Form};
use serde::Deserialize;

use crate::models::ClassificationForm;
use crate::page::{ClassifierPage, ClassifierScreen, ModelState};
use crate::{AppResult, AppState};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FormAction {
    Reset,
    #[default]
    #[serde(other)]
    Predict,
}

/// Urlencoded body of the classification form
#[derive(Debug, Deserialize)]
pub struct SubmitRequest {
    #[serde(default)]
    pub elastisitas: String,
    #[serde(default)]
    pub tekstur: String,
    #[serde(default)]
    pub ketebalan: String,
    #[serde(default)]
    pub action: FormAction,
}

impl SubmitRequest {
    fn into_form(self) -> ClassificationForm {
        ClassificationForm::new(self.elastisitas, self.tekstur, self.ketebalan)
    }
}

/// Render the classifier page with an empty form
pub async fn show(State(state): State<AppState>) -> AppResult<Html<String>> {
    let page = load_page(&state).await?;
    render(&state, &page)
}

/// Handle a form submission or reset
pub async fn submit(
    State(state): State<AppState>,
    Form(req): Form<SubmitRequest>,
) -> AppResult<Html<String>> {
    let mut page = load_page(&state).await?;

    // A failed model load shows the error screen whatever was posted
    if matches!(page.model(), ModelState::Ready(_)) {
        match req.action {
            FormAction::Reset => page.reset()?,
            FormAction::Predict => {
                if let Some(request) = page.submit(req.into_form())? {
                    let outcome = state.classifier.predict(&request).await;
                    if let Ok(result) = &outcome {
                        if let Some(prediction) = result.prediction.as_ref().filter(|_| result.success) {
                            tracing::info!(
                                "Predicted {} / {} for {} {} {}mm",
                                prediction.bahan_kain,
                                prediction.jenis_pakaian,
                                request.elasticity,
                                request.texture,
                                request.thickness
                            );
                        }
                    }
                    page.finish_submit(outcome)?;
                }
            }
        }
    }

    render(&state, &page)
}

async fn load_page(state: &AppState) -> AppResult<ClassifierPage> {
    let mut page = ClassifierPage::new();
    page.model_loaded(state.classifier.fetch_info().await)?;
    Ok(page)
}

fn render(state: &AppState, page: &ClassifierPage) -> AppResult<Html<String>> {
    match ClassifierScreen::from_page(page) {
        ClassifierScreen::Ready(view) => state.renderer.render("klasifikasi.html", view),
        ClassifierScreen::ModelError(view) => state.renderer.render("model_error.html", view),
    }
}
