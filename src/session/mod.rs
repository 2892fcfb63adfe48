// Session model - roles, claims and the cookie contract shared with the dashboard client
pub mod cookies;

pub use cookies::{CookieAccess, CookieOptions, SessionJar};

use serde::{Deserialize, Serialize};

/// Cookie carrying the signed-in role
pub const ROLE_COOKIE: &str = "userRole";

/// Companion flag cookie kept for dashboard clients; never read on this side
pub const AUTH_FLAG_COOKIE: &str = "authStatus";

/// Value written to the auth flag cookie on login
pub const AUTH_FLAG_LOGGED_IN: &str = "loggedIn";

/// Dashboard audience a session belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    StoreManager,
}

impl Role {
    /// Wire value stored in the role cookie
    pub fn cookie_value(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::StoreManager => "store_manager",
        }
    }

    /// Parse a cookie value; anything unrecognized is treated as no role
    pub fn from_cookie_value(value: &str) -> Option<Role> {
        match value {
            "admin" => Some(Role::Admin),
            "store_manager" => Some(Role::StoreManager),
            _ => None,
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.cookie_value())
    }
}

/// What the request cookies say about the caller.
///
/// The role cookie is the sole authentication signal: a parseable role means
/// authenticated, anything else means anonymous. A tampered or stale cookie
/// therefore degrades to the signed-out path instead of failing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionClaim {
    pub role: Option<Role>,
}

impl SessionClaim {
    pub fn anonymous() -> Self {
        Self { role: None }
    }

    pub fn for_role(role: Role) -> Self {
        Self { role: Some(role) }
    }

    /// Derive the claim from request cookies
    pub fn read(cookies: &impl CookieAccess) -> Self {
        let role = cookies
            .get(ROLE_COOKIE)
            .as_deref()
            .and_then(Role::from_cookie_value);
        Self { role }
    }

    pub fn is_authenticated(&self) -> bool {
        self.role.is_some()
    }
}

/// Write the session cookies for a fresh login
pub fn establish(cookies: &mut impl CookieAccess, role: Role, options: &CookieOptions) {
    cookies.set(ROLE_COOKIE, role.cookie_value(), options);
    cookies.set(AUTH_FLAG_COOKIE, AUTH_FLAG_LOGGED_IN, options);
}

/// Expire both session cookies
pub fn clear(cookies: &mut impl CookieAccess, options: &CookieOptions) {
    cookies.remove(ROLE_COOKIE, options);
    cookies.remove(AUTH_FLAG_COOKIE, options);
}
