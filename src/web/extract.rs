use super::cookies;
use super::state::AppState;
use crate::auth::{SESSION_COOKIE, UserRecord};
use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::response::Redirect;

/// The authenticated user for this request, restored from the session
/// cookie. Extraction fails with a redirect to the login page when the
/// cookie is absent, invalid, expired, or names a user that no longer
/// exists.
#[derive(Debug, Clone)]
pub struct CurrentUser(pub UserRecord);

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Redirect;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        fn login() -> Redirect {
            Redirect::to("/login")
        }

        let token =
            cookies::session_cookie(&parts.headers, SESSION_COOKIE).ok_or_else(login)?;
        let claims = state.sessions.verify(&token).map_err(|_| login())?;
        let user = state
            .users
            .find_by_id(claims.sub)
            .await
            .map_err(|_| login())?;
        user.map(CurrentUser).ok_or_else(login)
    }
}
