// handlers/pages/manager.rs - Pages the guard reserves for store managers
use axum::Extension;

use crate::middleware::ApiResponse;
use crate::session::SessionClaim;

use super::PageView;

/// GET /store-dashboard - store manager landing
pub async fn store_dashboard_get(Extension(claim): Extension<SessionClaim>) -> ApiResponse<PageView> {
    ApiResponse::success(PageView::new("store-dashboard", "My store", &claim))
}

/// GET /create-bill - bill entry form data
pub async fn create_bill_get(Extension(claim): Extension<SessionClaim>) -> ApiResponse<PageView> {
    ApiResponse::success(PageView::new("create-bill", "Create bill", &claim))
}

/// GET /my-bills - bills recorded by this manager
pub async fn my_bills_get(Extension(claim): Extension<SessionClaim>) -> ApiResponse<PageView> {
    ApiResponse::success(PageView::new("my-bills", "My bills", &claim))
}
