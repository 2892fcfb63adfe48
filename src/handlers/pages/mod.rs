// handlers/pages/mod.rs - Dashboard page data, reachable only through the guard
//
// The dashboard client renders these; the server's job ends at deciding who
// may load which page and handing over the page's view model.
pub mod admin;
pub mod manager;
pub mod shared;

use serde::Serialize;

use crate::session::{Role, SessionClaim};

/// View model every page handler returns
#[derive(Debug, Serialize)]
pub struct PageView {
    pub page: &'static str,
    pub title: &'static str,
    pub role: Option<Role>,
}

impl PageView {
    pub fn new(page: &'static str, title: &'static str, claim: &SessionClaim) -> Self {
        Self {
            page,
            title,
            role: claim.role,
        }
    }
}
