//! API Server Entry Point
//!
//! Application entry point and server initialization.
//! Uses `anyhow` for startup errors, but application-level
//! errors should use `kernel::error::AppError`.

use axum::{
    Router, http,
    http::{Method, header},
};
use identity::{IdentityConfig, PgUserRepository, SessionSigner, identity_router};
use platform::crypto::from_base64;
use sqlx::postgres::PgPoolOptions;
use std::env;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tower_http::cors::{AllowHeaders, AllowMethods, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use wallet::{AdminSecret, PgLedgerRepository, WalletConfig, wallet_router};

// Re-export unified error types for use in handlers
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "api=info,identity=info,wallet=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Database connection
    let database_url = env::var("DATABASE_URL").expect("DATABASE_URL must be set in environment");

    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&database_url)
        .await?;

    tracing::info!("Connected to database");

    // Run migrations
    sqlx::migrate!("../../../database/migrations")
        .run(&pool)
        .await?;

    tracing::info!("Migrations completed");

    // Identity configuration
    let identity_config = if cfg!(debug_assertions) {
        IdentityConfig::development()
    } else {
        // In production, load secret from environment
        let secret_b64 =
            env::var("SESSION_SECRET").expect("SESSION_SECRET must be set in production");
        let secret_bytes = from_base64(&secret_b64)?;
        let mut secret = [0u8; 32];
        secret.copy_from_slice(&secret_bytes);

        let pepper = env::var("PASSWORD_PEPPER").ok().map(|p| p.into_bytes());

        IdentityConfig {
            token_secret: secret,
            password_pepper: pepper,
            ..IdentityConfig::default()
        }
    };

    // Wallet policy, overridable per deployment
    let wallet_config = WalletConfig {
        reward_ad: env_i64("REWARD_AD", 500),
        reward_share: env_i64("REWARD_SHARE", 500),
        min_withdraw: env_i64("MIN_WITHDRAW", 600_000),
        max_tasks_per_day: env_i64("MAX_TASKS_PER_DAY", 60),
        share_window: Duration::from_secs(env_i64("SHARE_WINDOW_SECS", 86_400) as u64),
        ..WalletConfig::default()
    };

    let admin_secret = if cfg!(debug_assertions) {
        AdminSecret::new(&env::var("ADMIN_SECRET").unwrap_or_else(|_| "dev-admin".to_string()))
    } else {
        AdminSecret::new(&env::var("ADMIN_SECRET").expect("ADMIN_SECRET must be set in production"))
    };

    // Both routers verify tokens against the same signer
    let signer = Arc::new(SessionSigner::from_config(&identity_config));

    let identity = identity_router(PgUserRepository::new(pool.clone()), identity_config);
    let wallet = wallet_router(
        PgLedgerRepository::new(pool.clone()),
        wallet_config,
        signer,
        admin_secret,
    );

    // CORS configuration
    let frontend_origins = env::var("FRONTEND_ORIGINS")
        .unwrap_or_else(|_| "http://localhost:3000,http://127.0.0.1:3000".to_string());

    let allowed_origins: Vec<http::HeaderValue> = frontend_origins
        .split(',')
        .filter_map(|origin| origin.trim().parse().ok())
        .collect();

    let cors = CorsLayer::new()
        .allow_origin(allowed_origins)
        .allow_methods(AllowMethods::list([
            Method::GET,
            Method::POST,
            Method::OPTIONS,
        ]))
        .allow_headers(AllowHeaders::list([
            header::CONTENT_TYPE,
            header::AUTHORIZATION,
            header::ACCEPT,
        ]))
        .allow_credentials(true);

    // Build router
    let app = Router::new()
        .nest("/api", identity.merge(wallet))
        .layer(TraceLayer::new_for_http())
        .layer(cors);

    // Start server
    let port = env_i64("PORT", 3000) as u16;
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("Listening on {}", addr);

    let listener = TcpListener::bind(addr).await?;
    axum::serve(
        listener,
        app.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}

fn env_i64(name: &str, default: i64) -> i64 {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}
