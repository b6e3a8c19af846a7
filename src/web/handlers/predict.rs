use super::render_page;
use crate::viz::ChartSet;
use crate::web::{AppError, AppState, CurrentUser};
use axum::Form;
use axum::extract::State;
use axum::response::Html;
use serde::Deserialize;
use serde_json::json;

/// Form fields arrive as raw strings; non-numeric input must reach the
/// pipeline's own validation rather than the deserializer's 422.
#[derive(Debug, Deserialize)]
pub struct PredictForm {
    pub age: String,
    pub income: String,
    pub score: String,
}

pub async fn dashboard(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
) -> Result<Html<String>, AppError> {
    render_page(
        &state,
        "dashboard",
        &json!({
            "user_email": user.email,
            "prediction": null,
            "images": null,
            "message": null,
        }),
    )
}

pub async fn predict(
    State(state): State<AppState>,
    CurrentUser(user): CurrentUser,
    Form(form): Form<PredictForm>,
) -> Result<Html<String>, AppError> {
    match state
        .segmenter
        .predict_raw(&form.age, &form.income, &form.score)
    {
        Err(error) => render_page(
            &state,
            "dashboard",
            &json!({
                "user_email": user.email,
                "prediction": null,
                "images": null,
                "message": error.to_string(),
            }),
        ),
        Ok(prediction) => {
            let images = regenerate_charts(&state);
            render_page(
                &state,
                "dashboard",
                &json!({
                    "user_email": user.email,
                    "prediction": prediction.summary,
                    "images": images,
                    "message": null,
                }),
            )
        }
    }
}

/// Chart regeneration is synchronous: the identifiers in the response are
/// valid by the time the page is sent. A rendering failure degrades to a
/// page without charts; the prediction itself stands.
fn regenerate_charts(state: &AppState) -> Option<ChartSet> {
    match state.renderer.render_all(&state.store.snapshot()) {
        Ok(set) => set,
        Err(error) => {
            tracing::error!(%error, "chart generation failed");
            None
        }
    }
}
