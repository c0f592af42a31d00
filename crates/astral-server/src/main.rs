use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::{
    Json, Router, middleware,
    routing::{get, post},
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::info;

use astral_api::auth::{self, AppState, AppStateInner};
use astral_api::error::ApiError;
use astral_api::horoscope;
use astral_api::middleware::require_auth;
use astral_api::rate_limit::{self, RateLimiter};

/// express-rate-limit's old defaults, kept for client compatibility:
/// 5 requests per IP per minute across all /api routes.
const RATE_LIMIT_MAX: u32 = 5;
const RATE_LIMIT_WINDOW: Duration = Duration::from_secs(60);

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "astral=debug,tower_http=debug".into()),
        )
        .init();

    // Config
    let jwt_secret =
        std::env::var("ASTRAL_JWT_SECRET").unwrap_or_else(|_| "dev-secret-change-me".into());
    let db_path = std::env::var("ASTRAL_DB_PATH").unwrap_or_else(|_| "astral.db".into());
    let host = std::env::var("ASTRAL_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("ASTRAL_PORT")
        .unwrap_or_else(|_| "3000".into())
        .parse()?;

    // Init database
    let db = astral_db::Database::open(&PathBuf::from(&db_path))?;

    // Shared state
    let state: AppState = Arc::new(AppStateInner { db, jwt_secret });
    let limiter = RateLimiter::new(RATE_LIMIT_MAX, RATE_LIMIT_WINDOW);

    // Routes
    let public_routes = Router::new()
        .route("/auth/signup", post(auth::signup))
        .route("/auth/login", post(auth::login))
        .route("/horoscope/signs", get(horoscope::signs))
        .with_state(state.clone());

    let protected_routes = Router::new()
        .route("/auth/profile", get(auth::profile))
        .route("/horoscope/today", get(horoscope::today))
        .route("/horoscope/history", get(horoscope::history))
        .route("/horoscope/date/{date}", get(horoscope::by_date))
        .layer(middleware::from_fn_with_state(state.clone(), require_auth))
        .with_state(state);

    let api_routes = Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .layer(middleware::from_fn_with_state(limiter, rate_limit::limit));

    let app = Router::new()
        .nest("/api", api_routes)
        .route("/health", get(health))
        .fallback(not_found)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    info!("Astral server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "OK",
        "message": "Horoscope API is running!"
    }))
}

async fn not_found() -> ApiError {
    ApiError::NotFound
}
