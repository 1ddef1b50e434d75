use axum::{
    middleware,
    routing::{delete, get, patch, post},
    Router,
};
use sqlx::PgPool;
use std::sync::Arc;
use std::time::Duration;
use tower_http::{
    compression::CompressionLayer,
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::config::Config;
use crate::middleware::{
    require_admin, require_session, require_super_admin, security_headers_middleware,
};
use crate::routes::{activity_logs, admins, auth, health, notifications};

#[derive(Clone)]
pub struct AppState {
    pub pool: PgPool,
    pub config: Arc<Config>,
}

pub fn create_app(config: Config, pool: PgPool) -> Router {
    let config = Arc::new(config);

    let state = AppState {
        pool,
        config: config.clone(),
    };

    // Build CORS layer based on configuration
    let cors = if config.security.cors_origins.is_empty() {
        // Default: allow any origin (for development)
        CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any)
    } else {
        // Production: only allow specified origins
        use tower_http::cors::AllowOrigin;
        let origins: Vec<_> = config
            .security
            .cors_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods(Any)
            .allow_headers(Any)
    };

    // Public routes (no session required). Logout stays public so a stale
    // cookie can always be cleared.
    let public_routes = Router::new()
        .route("/api/v1/auth/login", post(auth::login))
        .route("/api/v1/auth/logout", post(auth::logout))
        .route("/api/health", get(health::health_check))
        .route("/api/health/ready", get(health::ready))
        .route("/api/health/live", get(health::live));

    // Routes for any authenticated admin, regardless of role
    let session_routes = Router::new()
        .route("/api/v1/auth/me", get(auth::me))
        .route("/api/v1/notifications", get(notifications::list))
        .route(
            "/api/v1/notifications/unread-count",
            get(notifications::unread_count),
        )
        .route(
            "/api/v1/notifications/read-all",
            post(notifications::mark_all_read),
        )
        .route(
            "/api/v1/notifications/read",
            delete(notifications::delete_read),
        )
        .route(
            "/api/v1/notifications/:id/read",
            post(notifications::mark_read),
        )
        .route("/api/v1/notifications/:id", delete(notifications::remove))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // Activity log listing requires at least the admin role.
    // Session auth runs first (outermost layer = runs first), the role gate second.
    let activity_routes = Router::new()
        .route("/api/v1/activity-logs", get(activity_logs::list))
        .route("/api/v1/activity-logs/actions", get(activity_logs::actions))
        .route_layer(middleware::from_fn(require_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // Account management requires super_admin
    let admin_mgmt_routes = Router::new()
        .route("/api/v1/admins", get(admins::list).post(admins::create))
        .route("/api/v1/admins/:id/status", patch(admins::set_status))
        .route("/api/v1/admins/:id", delete(admins::remove))
        .route_layer(middleware::from_fn(require_super_admin))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            require_session,
        ));

    // Merge all routes
    Router::new()
        .merge(public_routes)
        .merge(session_routes)
        .merge(activity_routes)
        .merge(admin_mgmt_routes)
        // Global middleware (order matters: bottom layers run first)
        .layer(middleware::from_fn(security_headers_middleware))
        .layer(CompressionLayer::new())
        .layer(TimeoutLayer::new(Duration::from_secs(
            config.server.request_timeout_secs,
        )))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        .with_state(state)
}
