/// Outcome of evaluating one request path against the access policy
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    /// Let the request through to its handler
    Continue,
    /// Answer with a redirect to this path instead of serving the request
    RedirectTo(String),
}

impl RouteDecision {
    /// Redirect target, if any
    pub fn target(&self) -> Option<&str> {
        match self {
            RouteDecision::Continue => None,
            RouteDecision::RedirectTo(target) => Some(target.as_str()),
        }
    }
}

impl std::fmt::Display for RouteDecision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RouteDecision::Continue => f.write_str("continue"),
            RouteDecision::RedirectTo(target) => write!(f, "redirect to {}", target),
        }
    }
}
