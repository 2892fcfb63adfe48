// handlers/auth/logout.rs - POST /api/auth/logout handler
use axum::{extract::State, response::Json};
use axum_extra::extract::cookie::CookieJar;
use serde_json::{json, Value};

use crate::handlers::AppState;
use crate::session::{self, CookieOptions, SessionJar};

/// POST /api/auth/logout - expire both session cookies.
///
/// Always succeeds, even for callers who were never signed in; the response
/// names the login page so clients know where to land.
pub async fn logout_post(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<Value>) {
    let mut cookies = SessionJar::new(jar);
    session::clear(&mut cookies, &CookieOptions::session());

    (
        cookies.into_jar(),
        Json(json!({
            "success": true,
            "data": {
                "redirect_to": state.guard.policy().login_path()
            }
        })),
    )
}
