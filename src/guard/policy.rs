use thiserror::Error;

use crate::guard::exclusion::ExclusionMatcher;
use crate::session::Role;

/// Policy construction failures.
///
/// Every variant is a configuration that could strand a user in a redirect
/// loop or silently unreachable page, so construction refuses them outright.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("Path must start with '/': {0}")]
    RelativePath(String),

    #[error("Restriction prefix may not be the bare root '/'")]
    RootRestriction,

    #[error("Admin and store manager homes must differ: {0}")]
    HomeOverlap(String),

    #[error("Login path may not be a dashboard home: {0}")]
    LoginIsHome(String),

    #[error("Dashboard home {0} is restricted away from its own audience")]
    HomeRestricted(String),
}

/// Immutable route-access policy.
///
/// Holds the login page, the two dashboard homes, the role-restricted path
/// prefixes and the public exclusion set. Restricted prefixes match by
/// `starts_with`; login and homes match by full-path equality.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuardPolicy {
    login_path: String,
    admin_home: String,
    manager_home: String,
    admin_only: Vec<String>,
    manager_only: Vec<String>,
    exclusions: ExclusionMatcher,
}

impl GuardPolicy {
    pub fn builder() -> GuardPolicyBuilder {
        GuardPolicyBuilder::new()
    }

    pub fn login_path(&self) -> &str {
        &self.login_path
    }

    pub fn admin_home(&self) -> &str {
        &self.admin_home
    }

    pub fn manager_home(&self) -> &str {
        &self.manager_home
    }

    /// Landing page for a role
    pub fn home_for(&self, role: Role) -> &str {
        match role {
            Role::Admin => &self.admin_home,
            Role::StoreManager => &self.manager_home,
        }
    }

    pub fn admin_only(&self) -> &[String] {
        &self.admin_only
    }

    pub fn manager_only(&self) -> &[String] {
        &self.manager_only
    }

    pub fn exclusions(&self) -> &ExclusionMatcher {
        &self.exclusions
    }

    pub fn is_admin_only(&self, path: &str) -> bool {
        self.admin_only.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }

    pub fn is_manager_only(&self, path: &str) -> bool {
        self.manager_only.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}

/// Compiled-in deployment policy; values are fixed and known valid
impl Default for GuardPolicy {
    fn default() -> Self {
        Self {
            login_path: "/login".to_string(),
            admin_home: "/".to_string(),
            manager_home: "/store-dashboard".to_string(),
            admin_only: vec![
                "/products".to_string(),
                "/billing".to_string(),
                "/managers".to_string(),
            ],
            manager_only: vec![
                "/create-bill".to_string(),
                "/my-bills".to_string(),
            ],
            exclusions: ExclusionMatcher::default(),
        }
    }
}

/// Builder with loop-safety validation at `build`
#[derive(Debug, Default)]
pub struct GuardPolicyBuilder {
    login_path: Option<String>,
    admin_home: Option<String>,
    manager_home: Option<String>,
    admin_only: Vec<String>,
    manager_only: Vec<String>,
    exclusions: Option<ExclusionMatcher>,
}

impl GuardPolicyBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login_path(mut self, path: impl Into<String>) -> Self {
        self.login_path = Some(path.into());
        self
    }

    pub fn admin_home(mut self, path: impl Into<String>) -> Self {
        self.admin_home = Some(path.into());
        self
    }

    pub fn manager_home(mut self, path: impl Into<String>) -> Self {
        self.manager_home = Some(path.into());
        self
    }

    pub fn admin_only<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.admin_only = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn manager_only<I, S>(mut self, prefixes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.manager_only = prefixes.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclusions(mut self, matcher: ExclusionMatcher) -> Self {
        self.exclusions = Some(matcher);
        self
    }

    /// Validate and produce the policy. Unset path fields fall back to the
    /// defaults; restriction lists stay as given (empty means unrestricted).
    pub fn build(self) -> Result<GuardPolicy, PolicyError> {
        let defaults = GuardPolicy::default();
        let policy = GuardPolicy {
            login_path: self.login_path.unwrap_or(defaults.login_path),
            admin_home: self.admin_home.unwrap_or(defaults.admin_home),
            manager_home: self.manager_home.unwrap_or(defaults.manager_home),
            admin_only: self.admin_only,
            manager_only: self.manager_only,
            exclusions: self.exclusions.unwrap_or(defaults.exclusions),
        };
        Self::validate(&policy)?;
        Ok(policy)
    }

    fn validate(policy: &GuardPolicy) -> Result<(), PolicyError> {
        let all_paths = [&policy.login_path, &policy.admin_home, &policy.manager_home]
            .into_iter()
            .chain(policy.admin_only.iter())
            .chain(policy.manager_only.iter());
        for path in all_paths {
            if !path.starts_with('/') {
                return Err(PolicyError::RelativePath(path.clone()));
            }
        }

        // A "/" prefix would restrict every path, including the redirect targets
        if policy.admin_only.iter().chain(policy.manager_only.iter()).any(|p| p == "/") {
            return Err(PolicyError::RootRestriction);
        }

        if policy.admin_home == policy.manager_home {
            return Err(PolicyError::HomeOverlap(policy.admin_home.clone()));
        }

        if policy.login_path == policy.admin_home || policy.login_path == policy.manager_home {
            return Err(PolicyError::LoginIsHome(policy.login_path.clone()));
        }

        // Each home must stay reachable by its own audience or redirects cycle
        if policy.is_manager_only(&policy.admin_home) {
            return Err(PolicyError::HomeRestricted(policy.admin_home.clone()));
        }
        if policy.is_admin_only(&policy.manager_home) {
            return Err(PolicyError::HomeRestricted(policy.manager_home.clone()));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_policy_passes_validation() {
        let defaults = GuardPolicy::default();
        let built = GuardPolicy::builder()
            .login_path(defaults.login_path())
            .admin_home(defaults.admin_home())
            .manager_home(defaults.manager_home())
            .admin_only(defaults.admin_only().to_vec())
            .manager_only(defaults.manager_only().to_vec())
            .build()
            .unwrap();
        assert_eq!(built, defaults);
    }

    #[test]
    fn test_builder_fills_unset_fields_from_defaults() {
        let policy = GuardPolicy::builder()
            .admin_only(["/inventory"])
            .build()
            .unwrap();
        assert_eq!(policy.login_path(), "/login");
        assert_eq!(policy.manager_home(), "/store-dashboard");
        assert!(policy.is_admin_only("/inventory/low-stock"));
    }

    #[test]
    fn test_relative_path_is_rejected() {
        let err = GuardPolicy::builder().login_path("login").build().unwrap_err();
        assert_eq!(err, PolicyError::RelativePath("login".to_string()));
    }

    #[test]
    fn test_root_restriction_is_rejected() {
        let err = GuardPolicy::builder()
            .manager_only(["/"])
            .build()
            .unwrap_err();
        assert_eq!(err, PolicyError::RootRestriction);
    }

    #[test]
    fn test_colliding_homes_are_rejected() {
        let err = GuardPolicy::builder()
            .admin_home("/home")
            .manager_home("/home")
            .build()
            .unwrap_err();
        assert_eq!(err, PolicyError::HomeOverlap("/home".to_string()));
    }

    #[test]
    fn test_login_path_equal_to_home_is_rejected() {
        let err = GuardPolicy::builder()
            .login_path("/store-dashboard")
            .build()
            .unwrap_err();
        assert_eq!(err, PolicyError::LoginIsHome("/store-dashboard".to_string()));
    }

    #[test]
    fn test_home_inside_opposite_restriction_is_rejected() {
        // Admin home under a manager-only prefix would bounce admins forever
        let err = GuardPolicy::builder()
            .admin_home("/manage/overview")
            .manager_only(["/manage"])
            .build()
            .unwrap_err();
        assert_eq!(err, PolicyError::HomeRestricted("/manage/overview".to_string()));
    }

    #[test]
    fn test_prefix_matching_covers_subpaths() {
        let policy = GuardPolicy::default();
        assert!(policy.is_admin_only("/products"));
        assert!(policy.is_admin_only("/products/42/edit"));
        assert!(policy.is_manager_only("/my-bills"));
        assert!(!policy.is_admin_only("/store-dashboard"));
    }
}
