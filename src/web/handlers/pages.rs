use super::render_page;
use crate::web::{AppError, AppState};
use axum::extract::State;
use axum::response::Html;
use serde_json::json;

pub async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, "home", &json!({}))
}

pub async fn about(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, "about", &json!({}))
}

pub async fn contact(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    render_page(&state, "contact", &json!({}))
}
