// handlers/mod.rs - Handler surface, split by audience
//
// auth/  - session endpoints under /api/auth/* (public, cookie-writing)
// pages/ - dashboard page data, only reachable through the route guard
pub mod auth;
pub mod pages;

use std::sync::Arc;

use crate::backend::AuthBackend;
use crate::guard::RouteGuard;

/// Shared state handed to handlers and the guard middleware
#[derive(Clone)]
pub struct AppState {
    pub backend: Arc<dyn AuthBackend>,
    pub guard: Arc<RouteGuard>,
}
