use std::sync::Arc;

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use axum_extra::extract::cookie::CookieJar;

use crate::config;
use crate::guard::{RouteDecision, RouteGuard};
use crate::session::{SessionClaim, SessionJar};

/// Applies the route-access policy to every request.
///
/// On `Continue` the derived session claim is stored in request extensions for
/// handlers to read; on `RedirectTo` the request is answered with a 307 and
/// never reaches a handler. Redirects depend on the session, so they must not
/// be cacheable: always 307, never 301.
pub async fn route_guard(
    State(guard): State<Arc<RouteGuard>>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Response {
    let claim = SessionClaim::read(&SessionJar::new(jar));
    let decision = guard.decide(request.uri().path(), &claim);

    if config::config().guard.log_decisions {
        tracing::debug!(
            path = %request.uri().path(),
            role = ?claim.role,
            decision = %decision,
            "route guard"
        );
    }

    match decision {
        RouteDecision::Continue => {
            request.extensions_mut().insert(claim);
            next.run(request).await
        }
        RouteDecision::RedirectTo(target) => Redirect::temporary(&target).into_response(),
    }
}
