mod identity;
mod pages;
mod predict;

pub use identity::{login_form, login_submit, logout, register_form, register_submit};
pub use pages::{about, contact, home};
pub use predict::{dashboard, predict};

use super::error::AppError;
use super::state::AppState;
use axum::response::Html;
use serde::Serialize;

fn render_page<T: Serialize>(
    state: &AppState,
    page: &str,
    context: &T,
) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render(page, context)?))
}
