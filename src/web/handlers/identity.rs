use super::render_page;
use crate::auth::{IdentityError, SESSION_COOKIE, hash_password, verify_password};
use crate::web::cookies;
use crate::web::{AppError, AppState, CurrentUser};
use axum::extract::{Query, State};
use axum::http::header::SET_COOKIE;
use axum::response::{AppendHeaders, IntoResponse, Redirect, Response};
use axum::Form;
use serde::Deserialize;
use serde_json::json;

#[derive(Debug, Deserialize)]
pub struct CredentialsForm {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Deserialize, Default)]
pub struct LoginQuery {
    pub registered: Option<u8>,
}

pub async fn login_form(
    State(state): State<AppState>,
    Query(query): Query<LoginQuery>,
) -> Result<Response, AppError> {
    let message = query
        .registered
        .map(|_| "Registration successful! Please login.");
    Ok(render_page(&state, "login", &json!({ "message": message }))?.into_response())
}

pub async fn login_submit(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    let email = form.email.trim();
    let user = match state.users.find_by_email(email).await {
        Ok(user) => user,
        Err(error) => {
            tracing::error!(%error, "login lookup failed");
            return Ok(render_page(
                &state,
                "login",
                &json!({ "message": "Error during login" }),
            )?
            .into_response());
        }
    };

    let verified = match &user {
        Some(user) => {
            verify_password(&form.password, &user.password_hash).unwrap_or_else(|error| {
                tracing::warn!(%error, "stored password hash rejected");
                false
            })
        }
        None => false,
    };

    match user.filter(|_| verified) {
        Some(user) => {
            tracing::info!(user = %user.email, "login");
            let token = state.sessions.issue(&user)?;
            let cookie =
                cookies::set_session_cookie(SESSION_COOKIE, &token, state.sessions.ttl_seconds());
            Ok((
                AppendHeaders([(SET_COOKIE, cookie)]),
                Redirect::to("/dashboard"),
            )
                .into_response())
        }
        None => Ok(render_page(
            &state,
            "login",
            &json!({ "message": "Invalid email or password" }),
        )?
        .into_response()),
    }
}

pub async fn register_form(State(state): State<AppState>) -> Result<Response, AppError> {
    Ok(render_page(&state, "register", &json!({}))?.into_response())
}

pub async fn register_submit(
    State(state): State<AppState>,
    Form(form): Form<CredentialsForm>,
) -> Result<Response, AppError> {
    let email = form.email.trim();
    if email.is_empty() || form.password.is_empty() {
        return Ok(render_page(
            &state,
            "register",
            &json!({ "message": "Email and password are required" }),
        )?
        .into_response());
    }

    match state.users.find_by_email(email).await {
        Ok(Some(_)) => {
            return Ok(render_page(
                &state,
                "register",
                &json!({ "message": "Email already registered" }),
            )?
            .into_response());
        }
        Ok(None) => {}
        Err(error) => {
            tracing::error!(%error, "registration lookup failed");
            return Ok(render_page(
                &state,
                "register",
                &json!({ "message": "Error during registration" }),
            )?
            .into_response());
        }
    }

    let password_hash = hash_password(&form.password)?;
    match state.users.insert(email, &password_hash).await {
        Ok(user) => {
            tracing::info!(user = %user.email, "registered");
            Ok(Redirect::to("/login?registered=1").into_response())
        }
        // The datastore re-checks uniqueness; a concurrent registration
        // can still lose the race after our lookup.
        Err(IdentityError::EmailTaken) => Ok(render_page(
            &state,
            "register",
            &json!({ "message": "Email already registered" }),
        )?
        .into_response()),
        Err(error) => {
            tracing::error!(%error, "registration insert failed");
            Ok(render_page(
                &state,
                "register",
                &json!({ "message": "Error during registration" }),
            )?
            .into_response())
        }
    }
}

pub async fn logout(_user: CurrentUser) -> Response {
    (
        AppendHeaders([(SET_COOKIE, cookies::clear_session_cookie(SESSION_COOKIE))]),
        Redirect::to("/"),
    )
        .into_response()
}
