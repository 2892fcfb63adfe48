use std::collections::HashMap;

use crate::backend::{AuthBackend, BackendAccount, BackendError};
use crate::session::cookies::{CookieAccess, CookieOptions};

/// In-memory cookie store for exercising session logic without HTTP
#[derive(Debug, Default)]
pub struct MemoryCookies {
    values: HashMap<String, String>,
}

impl MemoryCookies {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(name: &str, value: &str) -> Self {
        let mut cookies = Self::new();
        cookies.values.insert(name.to_string(), value.to_string());
        cookies
    }
}

impl CookieAccess for MemoryCookies {
    fn get(&self, name: &str) -> Option<String> {
        self.values.get(name).cloned()
    }

    fn set(&mut self, name: &str, value: &str, _options: &CookieOptions) {
        self.values.insert(name.to_string(), value.to_string());
    }

    fn remove(&mut self, name: &str, _options: &CookieOptions) {
        self.values.remove(name);
    }
}

/// Canned backend that answers every credential check the same way
pub struct StaticBackend {
    result: Result<BackendAccount, u16>,
}

impl StaticBackend {
    pub fn accepting(role: &str) -> Self {
        Self {
            result: Ok(BackendAccount {
                id: uuid::Uuid::new_v4(),
                email: "tester@store.example".to_string(),
                name: "Tester".to_string(),
                role: role.to_string(),
            }),
        }
    }

    pub fn rejecting(status: u16) -> Self {
        Self { result: Err(status) }
    }
}

#[async_trait::async_trait]
impl AuthBackend for StaticBackend {
    async fn verify_credentials(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<BackendAccount, BackendError> {
        match &self.result {
            Ok(account) => Ok(account.clone()),
            Err(status) => Err(BackendError::Rejected(*status)),
        }
    }

    async fn health(&self) -> Result<(), BackendError> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn options() -> CookieOptions {
        CookieOptions {
            path: "/".to_string(),
            http_only: true,
            secure: false,
            same_site_lax: true,
        }
    }

    #[test]
    fn test_memory_cookies_set_get_remove() {
        let mut cookies = MemoryCookies::new();
        cookies.set("userRole", "admin", &options());
        assert_eq!(cookies.get("userRole").as_deref(), Some("admin"));

        cookies.remove("userRole", &options());
        assert_eq!(cookies.get("userRole"), None);
    }

    #[tokio::test]
    async fn test_static_backend_answers() {
        let accepting = StaticBackend::accepting("admin");
        let account = accepting.verify_credentials("a@b.c", "pw").await.unwrap();
        assert_eq!(account.role, "admin");

        let rejecting = StaticBackend::rejecting(401);
        let err = rejecting.verify_credentials("a@b.c", "pw").await.unwrap_err();
        assert!(matches!(err, BackendError::Rejected(401)));
    }
}
