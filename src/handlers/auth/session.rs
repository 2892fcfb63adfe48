// handlers/auth/session.rs - GET /api/auth/session handler
use axum::response::Json;
use axum_extra::extract::cookie::CookieJar;
use serde_json::{json, Value};

use crate::session::{SessionClaim, SessionJar};

/// GET /api/auth/session - report what the request cookies say about the
/// caller. Never touches the backend, so it stays cheap enough for clients
/// to poll on navigation.
pub async fn session_get(jar: CookieJar) -> Json<Value> {
    let claim = SessionClaim::read(&SessionJar::new(jar));

    Json(json!({
        "success": true,
        "data": {
            "authenticated": claim.is_authenticated(),
            "role": claim.role
        }
    }))
}
