use std::sync::Arc;

use axum::{
    extract::State,
    http::{HeaderValue, StatusCode, Uri},
    middleware::from_fn_with_state,
    routing::{get, post},
    Json, Router,
};
use serde_json::{json, Value};
use tower_http::{
    cors::{AllowOrigin, Any, CorsLayer},
    trace::TraceLayer,
};

use storeboard_api::backend::BackendClient;
use storeboard_api::config::{self, AppConfig};
use storeboard_api::error::ApiError;
use storeboard_api::guard::{GuardPolicy, RouteGuard};
use storeboard_api::handlers::{auth, pages, AppState};
use storeboard_api::middleware::route_guard;
use storeboard_api::{is_development, is_production};

#[tokio::main]
async fn main() {
    // Load .env if present so cargo run picks up STOREBOARD_BACKEND_URL, etc.
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt::init();

    let config = config::config();
    tracing::info!("Starting Storeboard API in {:?} mode", config.environment);

    if is_development!() {
        tracing::debug!("CORS origins: {:?}", config.api.cors_origins);
    }
    if is_production!() && !config.session.cookie_secure {
        tracing::warn!("session cookies are not marked secure in production");
    }

    // The hosted backend is required at startup
    let backend = BackendClient::from_env()
        .unwrap_or_else(|e| panic!("backend configuration error: {}", e));

    let guard = Arc::new(RouteGuard::new(GuardPolicy::default()));
    let state = AppState {
        backend: Arc::new(backend),
        guard: Arc::clone(&guard),
    };

    let app = app(state, guard);

    // Allow tests or deployments to override port via env
    let port = std::env::var("STOREBOARD_PORT")
        .ok()
        .or_else(|| std::env::var("PORT").ok())
        .and_then(|s| s.parse::<u16>().ok())
        .unwrap_or(3000);

    let bind_addr = format!("0.0.0.0:{}", port);
    let listener = tokio::net::TcpListener::bind(&bind_addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {}: {}", bind_addr, e));

    tracing::info!("Storeboard API listening on http://{}", bind_addr);

    axum::serve(listener, app).await.expect("server");
}

fn app(state: AppState, guard: Arc<RouteGuard>) -> Router {
    let config = config::config();

    // Every route sits behind the guard; its exclusion rules keep /api,
    // /health and asset paths public
    let mut app = Router::new()
        .merge(page_routes())
        .merge(auth_api_routes())
        .route("/health", get(health))
        .fallback(not_found)
        .layer(from_fn_with_state(guard, route_guard))
        .with_state(state);

    if config.api.enable_cors {
        app = app.layer(cors_layer(config));
    }
    if config.api.enable_request_logging {
        app = app.layer(TraceLayer::new_for_http());
    }

    app
}

fn page_routes() -> Router<AppState> {
    Router::new()
        // Admin pages
        .route("/", get(pages::admin::dashboard_get))
        .route("/products", get(pages::admin::products_get))
        .route("/billing", get(pages::admin::billing_get))
        .route("/managers", get(pages::admin::managers_get))
        // Store manager pages
        .route("/store-dashboard", get(pages::manager::store_dashboard_get))
        .route("/create-bill", get(pages::manager::create_bill_get))
        .route("/my-bills", get(pages::manager::my_bills_get))
        // Shared pages
        .route("/my-profile", get(pages::shared::my_profile_get))
        .route("/login", get(pages::shared::login_get))
}

fn auth_api_routes() -> Router<AppState> {
    Router::new()
        .route("/api/auth/login", post(auth::login_post))
        .route("/api/auth/logout", post(auth::logout_post))
        .route("/api/auth/session", get(auth::session_get))
}

fn cors_layer(config: &AppConfig) -> CorsLayer {
    let origins: Vec<HeaderValue> = config
        .api
        .cors_origins
        .iter()
        .filter_map(|origin| origin.parse().ok())
        .collect();

    if origins.is_empty() {
        CorsLayer::permissive()
    } else {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    }
}

async fn health(State(state): State<AppState>) -> (StatusCode, Json<Value>) {
    let now = chrono::Utc::now();

    match state.backend.health().await {
        Ok(_) => (
            StatusCode::OK,
            Json(json!({
                "success": true,
                "data": {
                    "status": "ok",
                    "timestamp": now,
                    "backend": "ok"
                }
            })),
        ),
        Err(e) => (
            StatusCode::SERVICE_UNAVAILABLE,
            Json(json!({
                "success": false,
                "error": "backend unavailable",
                "data": {
                    "status": "degraded",
                    "timestamp": now,
                    "backend_error": e.to_string()
                }
            })),
        ),
    }
}

async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("No route for {}", uri.path()))
}
