//! Error handling

use axum::{
    http::StatusCode,
    response::{Html, IntoResponse, Response},
};

pub type AppResult<T> = Result<T, AppError>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    // Page state errors
    #[error("invalid page state: {0}")]
    InvalidState(String),

    // Rendering errors
    #[error("template error: {0}")]
    TemplateError(#[from] minijinja::Error),
}

impl AppError {
    fn status(&self) -> StatusCode {
        match self {
            AppError::InvalidState(_) => StatusCode::CONFLICT,
            AppError::TemplateError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            AppError::InvalidState(msg) => {
                tracing::warn!("Invalid page state: {}", msg);
                "Permintaan tidak dapat diproses pada kondisi halaman saat ini."
            }
            AppError::TemplateError(err) => {
                tracing::error!("Template error: {:#}", err);
                "Terjadi kesalahan internal."
            }
        };

        // Plain markup only: this page must render without the template environment.
        let body = Html(format!(
            "<!DOCTYPE html><html lang=\"id\"><head><meta charset=\"utf-8\">\
             <title>{code} - FabricAI</title></head><body>\
             <h1>{code}</h1><p>{message}</p><p><a href=\"/\">Kembali ke beranda</a></p>\
             </body></html>",
            code = status.as_u16(),
        ));

        (status, body).into_response()
    }
}
