//! Identity Router

use axum::{Router, routing::post};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::session::SessionSigner;
use crate::domain::repository::UserRepository;
use crate::infra::postgres::PgUserRepository;
use crate::presentation::handlers::{self, IdentityAppState};

/// Create the identity router with PostgreSQL repository
pub fn identity_router(repo: PgUserRepository, config: IdentityConfig) -> Router {
    identity_router_generic(repo, config)
}

/// Create a generic identity router for any repository implementation
pub fn identity_router_generic<R>(repo: R, config: IdentityConfig) -> Router
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let signer = Arc::new(SessionSigner::from_config(&config));
    let state = IdentityAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        signer,
    };

    Router::new()
        .route("/register", post(handlers::register::<R>))
        .route("/login", post(handlers::login::<R>))
        .with_state(state)
}
