// Cookie access seam - session logic never touches framework request types directly
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config;

/// Attribute set applied when writing or clearing session cookies
#[derive(Debug, Clone)]
pub struct CookieOptions {
    pub path: String,
    pub http_only: bool,
    pub secure: bool,
    pub same_site_lax: bool,
}

impl CookieOptions {
    /// Options for the session cookies, with secure/path taken from config
    pub fn session() -> Self {
        let config = config::config();
        Self {
            path: config.session.cookie_path.clone(),
            http_only: true,
            secure: config.session.cookie_secure,
            same_site_lax: true,
        }
    }
}

/// Minimal cookie read/write surface the session layer depends on.
///
/// Production code goes through [`SessionJar`]; tests can substitute an
/// in-memory implementation.
pub trait CookieAccess {
    fn get(&self, name: &str) -> Option<String>;
    fn set(&mut self, name: &str, value: &str, options: &CookieOptions);
    fn remove(&mut self, name: &str, options: &CookieOptions);
}

/// Adapter over the extracted request jar
#[derive(Debug, Clone)]
pub struct SessionJar {
    jar: CookieJar,
}

impl SessionJar {
    pub fn new(jar: CookieJar) -> Self {
        Self { jar }
    }

    /// Hand the jar back so the handler can return it with the response
    pub fn into_jar(self) -> CookieJar {
        self.jar
    }
}

impl CookieAccess for SessionJar {
    fn get(&self, name: &str) -> Option<String> {
        self.jar.get(name).map(|cookie| cookie.value().to_string())
    }

    fn set(&mut self, name: &str, value: &str, options: &CookieOptions) {
        let same_site = if options.same_site_lax {
            SameSite::Lax
        } else {
            SameSite::Strict
        };
        let cookie = Cookie::build((name.to_string(), value.to_string()))
            .path(options.path.clone())
            .http_only(options.http_only)
            .secure(options.secure)
            .same_site(same_site)
            .build();
        self.jar = self.jar.clone().add(cookie);
    }

    fn remove(&mut self, name: &str, options: &CookieOptions) {
        // Removal cookies must carry the same path or browsers keep the original
        let mut removal = Cookie::new(name.to_string(), "");
        removal.set_path(options.path.clone());
        self.jar = self.jar.clone().remove(removal);
    }
}
