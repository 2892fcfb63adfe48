// handlers/auth/login.rs - POST /api/auth/login handler
use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ApiError;
use crate::handlers::AppState;
use crate::session::{self, CookieOptions, Role, SessionJar};

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// POST /api/auth/login - verify credentials against the hosted backend and
/// establish the session cookies for the account's role.
///
/// The response carries the role and the home path the client should load
/// next; the cookies on the response are what actually sign the caller in.
pub async fn login_post(
    State(state): State<AppState>,
    jar: CookieJar,
    Json(payload): Json<LoginRequest>,
) -> Result<(CookieJar, Json<Value>), ApiError> {
    let email = payload.email.trim();
    if email.is_empty() || payload.password.is_empty() {
        return Err(ApiError::bad_request("Email and password are required"));
    }

    let account = state.backend.verify_credentials(email, &payload.password).await?;

    let role = Role::from_cookie_value(&account.role).ok_or_else(|| {
        tracing::warn!(email = %account.email, role = %account.role, "account has no dashboard role");
        ApiError::forbidden("This account has no dashboard access")
    })?;

    let mut cookies = SessionJar::new(jar);
    session::establish(&mut cookies, role, &CookieOptions::session());

    tracing::debug!(email = %account.email, role = %role, "session established");

    Ok((
        cookies.into_jar(),
        Json(json!({
            "success": true,
            "data": {
                "role": role,
                "name": account.name,
                "redirect_to": state.guard.policy().home_for(role)
            }
        })),
    ))
}
