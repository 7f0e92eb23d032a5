//! HTTP handlers

pub mod health;
pub mod home;
pub mod klasifikasi;

use axum::{extract::State, http::{StatusCode, Uri}, response::IntoResponse};
use serde::Serialize;

use crate::{AppState, AppResult};

#[derive(Serialize)]
struct NotFoundView {
    path: String,
}

/// Fallback for unknown paths
pub async fn not_found(State(state): State<AppState>, uri: Uri) -> AppResult<impl IntoResponse> {
    tracing::debug!("No route for {}", uri.path());
    let page = state.renderer.render("not_found.html", NotFoundView {
        path: uri.path().to_string(),
    })?;
    Ok((StatusCode::NOT_FOUND, page))
}
