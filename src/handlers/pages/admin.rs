// handlers/pages/admin.rs - Pages the guard reserves for admins
use axum::Extension;

use crate::middleware::ApiResponse;
use crate::session::SessionClaim;

use super::PageView;

/// GET / - admin dashboard landing
pub async fn dashboard_get(Extension(claim): Extension<SessionClaim>) -> ApiResponse<PageView> {
    ApiResponse::success(PageView::new("admin-dashboard", "Store overview", &claim))
}

/// GET /products - product catalog management
pub async fn products_get(Extension(claim): Extension<SessionClaim>) -> ApiResponse<PageView> {
    ApiResponse::success(PageView::new("products", "Products", &claim))
}

/// GET /billing - billing overview across the store
pub async fn billing_get(Extension(claim): Extension<SessionClaim>) -> ApiResponse<PageView> {
    ApiResponse::success(PageView::new("billing", "Billing", &claim))
}

/// GET /managers - store manager administration
pub async fn managers_get(Extension(claim): Extension<SessionClaim>) -> ApiResponse<PageView> {
    ApiResponse::success(PageView::new("managers", "Store managers", &claim))
}
