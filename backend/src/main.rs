use dotenvy::dotenv;
use axum::{
    routing::{get, post, delete},
    Router,
    middleware
};
use diesel::prelude::*;
use diesel::r2d2::{self, ConnectionManager};
use diesel_migrations::{embed_migrations, EmbeddedMigrations, MigrationHarness};
use dashmap::DashMap;
use governor::{RateLimiter, clock::DefaultClock, state::keyed::DefaultKeyedStateStore};
use tower_http::cors::{CorsLayer, AllowOrigin};
use tower_http::services::ServeDir;
use tower_http::trace::{TraceLayer, DefaultMakeSpan, DefaultOnResponse};
use tracing::Level;
use std::sync::Arc;
mod handlers {
    pub mod auth_middleware;
    pub mod auth_dtos;
    pub mod auth_handlers;
    pub mod scan_handlers;
    pub mod contact_handlers;
}
mod utils {
    pub mod images;
    pub mod mailer;
    pub mod report_pdf;
}
mod api {
    pub mod analyze;
}
mod models {
    pub mod scan_models;
}
mod repositories {
    pub mod user_core;
    pub mod scan_repository;
    pub mod contact_repository;
}
mod jobs {
    pub mod scheduler;
}
mod schema;
#[cfg(test)]
mod test_support;
use repositories::user_core::UserCore;
use repositories::scan_repository::ScanRepository;
use repositories::contact_repository::ContactRepository;
use handlers::{auth_handlers, scan_handlers, contact_handlers};
use api::analyze;

pub type DbPool = r2d2::Pool<ConnectionManager<SqliteConnection>>;

pub const MIGRATIONS: EmbeddedMigrations = embed_migrations!("migrations");

async fn health_check() -> &'static str {
    "OK"
}

type KeyedLimiter = RateLimiter<String, DefaultKeyedStateStore<String>, DefaultClock>;

pub struct AppState {
    user_core: Arc<UserCore>,
    scan_repository: Arc<ScanRepository>,
    contact_repository: Arc<ContactRepository>,
    login_limiter: DashMap<String, KeyedLimiter>,
    contact_limiter: DashMap<String, KeyedLimiter>,
    upload_dir: String,
}

pub fn validate_env() {
    let required_vars = [
        "JWT_SECRET_KEY", "DATABASE_URL", "AI_GATEWAY_API_KEY",
        "RESEND_API_KEY", "CONTACT_INBOX_ADDRESS",
    ];
    for var in required_vars.iter() {
        std::env::var(var).expect(&format!("{} must be set", var));
    }
}

#[tokio::main]
async fn main() {
    dotenv().ok();
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,backend=debug"));
    fmt()
        .with_env_filter(filter)
        .with_target(true)
        .init();

    validate_env();

    let database_url = std::env::var("DATABASE_URL")
        .expect("DATABASE_URL must be set in environment");
    let manager = ConnectionManager::<SqliteConnection>::new(database_url);
    let pool = r2d2::Pool::builder()
        .build(manager)
        .expect("Failed to create pool");

    {
        let mut conn = pool.get().expect("Failed to get DB connection");
        conn.run_pending_migrations(MIGRATIONS)
            .expect("Failed to run migrations");
    }

    let upload_dir = std::env::var("UPLOAD_DIR").unwrap_or_else(|_| "uploads".to_string());
    std::fs::create_dir_all(&upload_dir).expect("Failed to create uploads dir");

    let state = Arc::new(AppState {
        user_core: Arc::new(UserCore::new(pool.clone())),
        scan_repository: Arc::new(ScanRepository::new(pool.clone())),
        contact_repository: Arc::new(ContactRepository::new(pool)),
        login_limiter: DashMap::new(),
        contact_limiter: DashMap::new(),
        upload_dir,
    });

    // Public routes that don't need authentication. there's ratelimiting though
    let public_routes = Router::new()
        .route("/api/health", get(health_check))
        .route("/api/login", post(auth_handlers::login))
        .route("/api/register", post(auth_handlers::register))
        .route("/api/analyze", post(analyze::analyze_scalp))
        .route("/api/contact", post(contact_handlers::submit_contact));

    // Protected routes that need user authentication
    let protected_routes = Router::new()
        .route("/api/scans", get(scan_handlers::list_scans))
        .route("/api/scans/{scan_id}", get(scan_handlers::get_scan))
        .route("/api/scans/{scan_id}", delete(scan_handlers::delete_scan))
        .route("/api/scans/{scan_id}/pdf", get(scan_handlers::download_scan_pdf))
        .route_layer(middleware::from_fn(handlers::auth_middleware::require_auth));

    // Admin routes that need admin authentication
    let admin_routes = Router::new()
        .route("/api/admin/contact-messages", get(contact_handlers::list_contact_messages))
        .route_layer(middleware::from_fn_with_state(state.clone(), handlers::auth_middleware::require_admin));

    let app = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .merge(admin_routes)
        .nest_service("/uploads", ServeDir::new(&state.upload_dir))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO))
        )
        .layer(
            CorsLayer::new()
                .allow_methods([axum::http::Method::GET, axum::http::Method::POST, axum::http::Method::OPTIONS, axum::http::Method::DELETE])
                .allow_origin(AllowOrigin::exact(std::env::var("FRONTEND_URL").unwrap_or_else(|_| "http://localhost:8080".to_string()).parse().expect("Invalid FRONTEND_URL")))
                .allow_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::AUTHORIZATION,
                    axum::http::header::ACCEPT,
                    axum::http::header::ORIGIN,
                ])
                .expose_headers([
                    axum::http::header::CONTENT_TYPE,
                    axum::http::header::CONTENT_DISPOSITION,
                ])
        )
        .with_state(state.clone());

    let state_for_scheduler = state.clone();
    tokio::spawn(async move {
        jobs::scheduler::start_scheduler(state_for_scheduler).await;
    });

    use tokio::net::TcpListener;
    let port: u16 = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(3000);
    tracing::info!("Starting server on port {}", port);
    let listener = TcpListener::bind(format!("0.0.0.0:{}", port)).await.unwrap();
    axum::serve(listener, app.into_make_service()).await.unwrap();
}
