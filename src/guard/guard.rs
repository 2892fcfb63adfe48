use crate::guard::policy::GuardPolicy;
use crate::guard::types::RouteDecision;
use crate::session::{Role, SessionClaim};

/// Route-access engine: one pure decision per request.
///
/// Rules apply in a fixed order and the first match wins:
/// 1. public paths pass through untouched
/// 2. the login page bounces signed-in users to their home
/// 3. anonymous callers go to the login page
/// 4. each role is bounced off the other role's home and restricted prefixes
///
/// Anything left over is shared ground and passes through.
#[derive(Debug, Clone)]
pub struct RouteGuard {
    policy: GuardPolicy,
}

impl RouteGuard {
    pub fn new(policy: GuardPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> &GuardPolicy {
        &self.policy
    }

    /// Decide what happens to a request for `path` under the given claim
    pub fn decide(&self, path: &str, claim: &SessionClaim) -> RouteDecision {
        let policy = &self.policy;

        if policy.exclusions().is_public(path) {
            return RouteDecision::Continue;
        }

        if path == policy.login_path() {
            return match claim.role {
                Some(role) => RouteDecision::RedirectTo(policy.home_for(role).to_string()),
                None => RouteDecision::Continue,
            };
        }

        let Some(role) = claim.role else {
            return RouteDecision::RedirectTo(policy.login_path().to_string());
        };

        match role {
            Role::StoreManager => {
                if path == policy.admin_home() || policy.is_admin_only(path) {
                    return RouteDecision::RedirectTo(policy.manager_home().to_string());
                }
            }
            Role::Admin => {
                if path == policy.manager_home() || policy.is_manager_only(path) {
                    return RouteDecision::RedirectTo(policy.admin_home().to_string());
                }
            }
        }

        RouteDecision::Continue
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::guard::ExclusionMatcher;

    fn guard() -> RouteGuard {
        RouteGuard::new(GuardPolicy::default())
    }

    fn admin() -> SessionClaim {
        SessionClaim::for_role(Role::Admin)
    }

    fn manager() -> SessionClaim {
        SessionClaim::for_role(Role::StoreManager)
    }

    fn anonymous() -> SessionClaim {
        SessionClaim::anonymous()
    }

    fn redirect(target: &str) -> RouteDecision {
        RouteDecision::RedirectTo(target.to_string())
    }

    #[test]
    fn test_public_paths_pass_for_every_claim() {
        let guard = guard();
        for claim in [anonymous(), admin(), manager()] {
            assert_eq!(guard.decide("/api/auth/session", &claim), RouteDecision::Continue);
            assert_eq!(guard.decide("/health", &claim), RouteDecision::Continue);
            assert_eq!(guard.decide("/favicon.ico", &claim), RouteDecision::Continue);
            assert_eq!(guard.decide("/logo.png", &claim), RouteDecision::Continue);
        }
    }

    #[test]
    fn test_anonymous_goes_to_login_from_any_protected_path() {
        let guard = guard();
        for path in ["/", "/products", "/store-dashboard", "/my-profile", "/no-such-page"] {
            assert_eq!(guard.decide(path, &anonymous()), redirect("/login"));
        }
    }

    #[test]
    fn test_anonymous_may_view_login_page() {
        assert_eq!(guard().decide("/login", &anonymous()), RouteDecision::Continue);
    }

    #[test]
    fn test_signed_in_users_bounce_off_login_to_their_home() {
        let guard = guard();
        assert_eq!(guard.decide("/login", &admin()), redirect("/"));
        assert_eq!(guard.decide("/login", &manager()), redirect("/store-dashboard"));
    }

    #[test]
    fn test_manager_is_kept_out_of_admin_pages() {
        let guard = guard();
        assert_eq!(guard.decide("/products", &manager()), redirect("/store-dashboard"));
        assert_eq!(guard.decide("/billing", &manager()), redirect("/store-dashboard"));
        assert_eq!(guard.decide("/managers", &manager()), redirect("/store-dashboard"));
        assert_eq!(guard.decide("/products/42", &manager()), redirect("/store-dashboard"));
    }

    #[test]
    fn test_manager_is_kept_off_the_admin_home() {
        assert_eq!(guard().decide("/", &manager()), redirect("/store-dashboard"));
    }

    #[test]
    fn test_admin_is_kept_out_of_manager_pages() {
        let guard = guard();
        assert_eq!(guard.decide("/store-dashboard", &admin()), redirect("/"));
        assert_eq!(guard.decide("/create-bill", &admin()), redirect("/"));
        assert_eq!(guard.decide("/my-bills", &admin()), redirect("/"));
        assert_eq!(guard.decide("/my-bills/7", &admin()), redirect("/"));
    }

    #[test]
    fn test_each_role_reaches_its_own_pages() {
        let guard = guard();
        assert_eq!(guard.decide("/", &admin()), RouteDecision::Continue);
        assert_eq!(guard.decide("/products", &admin()), RouteDecision::Continue);
        assert_eq!(guard.decide("/store-dashboard", &manager()), RouteDecision::Continue);
        assert_eq!(guard.decide("/create-bill", &manager()), RouteDecision::Continue);
    }

    #[test]
    fn test_shared_pages_serve_both_roles() {
        let guard = guard();
        assert_eq!(guard.decide("/my-profile", &admin()), RouteDecision::Continue);
        assert_eq!(guard.decide("/my-profile", &manager()), RouteDecision::Continue);
    }

    #[test]
    fn test_every_redirect_target_settles_in_one_hop() {
        // Following any redirect with the same claim must land on Continue
        let guard = guard();
        let paths = [
            "/", "/login", "/products", "/billing", "/managers",
            "/store-dashboard", "/create-bill", "/my-bills", "/my-profile",
            "/products/42/edit", "/my-bills/7", "/somewhere-else",
        ];
        for claim in [anonymous(), admin(), manager()] {
            for path in paths {
                if let RouteDecision::RedirectTo(target) = guard.decide(path, &claim) {
                    assert_eq!(
                        guard.decide(&target, &claim),
                        RouteDecision::Continue,
                        "claim {:?} loops via {} -> {}",
                        claim,
                        path,
                        target
                    );
                }
            }
        }
    }

    #[test]
    fn test_custom_policy_drives_decisions() {
        let policy = GuardPolicy::builder()
            .login_path("/signin")
            .admin_home("/overview")
            .manager_home("/store")
            .admin_only(["/finance"])
            .manager_only(["/registers"])
            .build()
            .unwrap();
        let guard = RouteGuard::new(policy);

        assert_eq!(guard.decide("/finance/q3", &manager()), redirect("/store"));
        assert_eq!(guard.decide("/registers", &admin()), redirect("/overview"));
        assert_eq!(guard.decide("/overview", &manager()), redirect("/store"));
        assert_eq!(guard.decide("/anything", &anonymous()), redirect("/signin"));
        assert_eq!(guard.decide("/signin", &manager()), redirect("/store"));
    }

    #[test]
    fn test_custom_exclusions_replace_the_default_set() {
        let policy = GuardPolicy::builder()
            .exclusions(ExclusionMatcher::new(
                vec!["/public".to_string()],
                vec!["/robots.txt".to_string()],
                vec![".css".to_string()],
            ))
            .build()
            .unwrap();
        let guard = RouteGuard::new(policy);

        // The configured set passes through for every session state
        for claim in [anonymous(), admin(), manager()] {
            assert_eq!(guard.decide("/public/catalog", &claim), RouteDecision::Continue);
            assert_eq!(guard.decide("/robots.txt", &claim), RouteDecision::Continue);
            assert_eq!(guard.decide("/styles/site.css", &claim), RouteDecision::Continue);
        }

        // Paths only the default set excluded are guarded again
        assert_eq!(guard.decide("/api/auth/session", &anonymous()), redirect("/login"));
    }
}
