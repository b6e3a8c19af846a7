use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Failures a handler cannot translate into a page message: template
/// defects and identity-backend outages. Everything else (bad input, bad
/// credentials, duplicate email, chart failures) is handled at the route
/// and rendered into the page instead.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("template rendering failed: {0}")]
    Template(#[from] handlebars::RenderError),

    #[error(transparent)]
    Identity(#[from] crate::auth::IdentityError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "request failed");
        (StatusCode::INTERNAL_SERVER_ERROR, "internal error").into_response()
    }
}
