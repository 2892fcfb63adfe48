// handlers/pages/shared.rs - Pages every signed-in role may load, plus login
use axum::Extension;

use crate::middleware::ApiResponse;
use crate::session::SessionClaim;

use super::PageView;

/// GET /my-profile - profile page, shared by both roles
pub async fn my_profile_get(Extension(claim): Extension<SessionClaim>) -> ApiResponse<PageView> {
    ApiResponse::success(PageView::new("my-profile", "My profile", &claim))
}

/// GET /login - sign-in page; the guard only lets anonymous callers this far
pub async fn login_get(Extension(claim): Extension<SessionClaim>) -> ApiResponse<PageView> {
    ApiResponse::success(PageView::new("login", "Sign in", &claim))
}
