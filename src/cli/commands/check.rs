use serde_json::json;

use crate::cli::{utils, OutputFormat};
use crate::guard::{GuardPolicy, RouteGuard};
use crate::session::{Role, SessionClaim};

/// Evaluate the compiled-in policy for one path/claim pair, offline.
///
/// Useful for answering "where would this request land" without a server.
pub async fn handle(
    path: String,
    role: Option<String>,
    output_format: OutputFormat,
) -> anyhow::Result<()> {
    let claim = match role.as_deref() {
        None => SessionClaim::anonymous(),
        Some(value) => match Role::from_cookie_value(value) {
            Some(role) => SessionClaim::for_role(role),
            None => anyhow::bail!("Unknown role '{}'; expected admin or store_manager", value),
        },
    };

    let guard = RouteGuard::new(GuardPolicy::default());
    let decision = guard.decide(&path, &claim);

    match decision.target() {
        None => utils::output_success(
            &output_format,
            &format!("{} continues to its handler", path),
            Some(json!({
                "path": path,
                "decision": "continue"
            })),
        ),
        Some(target) => utils::output_success(
            &output_format,
            &format!("{} redirects to {}", path, target),
            Some(json!({
                "path": path,
                "decision": "redirect",
                "target": target
            })),
        ),
    }
}
