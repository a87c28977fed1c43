//! Wallet Router

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;

use identity::SessionSigner;

use crate::application::config::WalletConfig;
use crate::domain::repository::{AdminRepository, LedgerRepository};
use crate::infra::postgres::PgLedgerRepository;
use crate::presentation::admin_gate::AdminSecret;
use crate::presentation::handlers::{self, WalletAppState};

/// Create the wallet router with PostgreSQL repository
pub fn wallet_router(
    repo: PgLedgerRepository,
    config: WalletConfig,
    signer: Arc<SessionSigner>,
    admin_secret: AdminSecret,
) -> Router {
    wallet_router_generic(repo, config, signer, admin_secret)
}

/// Create a generic wallet router for any repository implementation
pub fn wallet_router_generic<R>(
    repo: R,
    config: WalletConfig,
    signer: Arc<SessionSigner>,
    admin_secret: AdminSecret,
) -> Router
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let state = WalletAppState {
        repo: Arc::new(repo),
        config: Arc::new(config),
        signer,
        admin_secret: Arc::new(admin_secret),
    };

    let admin = Router::new()
        .route("/saques", get(handlers::list_pending_withdrawals::<R>))
        .route("/markPaid", post(handlers::mark_paid::<R>))
        .route("/usuarios", get(handlers::list_users::<R>));

    Router::new()
        .route("/saldo/{id}", get(handlers::get_balance::<R>))
        .route("/tarefa", post(handlers::submit_task::<R>))
        .route("/compartilhar", post(handlers::submit_share::<R>))
        .route("/historico/{id}", get(handlers::get_history::<R>))
        .route("/withdraw", post(handlers::request_withdrawal::<R>))
        .nest("/admin", admin)
        .with_state(state)
}
