//! Landing page handler

use axum::{extract::State, response::Html};

use crate::page::HomeView;
use crate::{AppState, AppResult};

pub async fn index(State(state): State<AppState>) -> AppResult<Html<String>> {
    state.renderer.render("home.html", HomeView::default())
}
