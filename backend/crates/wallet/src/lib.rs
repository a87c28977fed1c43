//! Wallet & Reward Ledger Module
//!
//! Clean Architecture structure:
//! - `domain/` - Reward categories, ledger entities, repository traits
//! - `application/` - Reward engine use cases, admin review, wallet config
//! - `infra/` - PostgreSQL ledger repository
//! - `presentation/` - HTTP handlers, DTOs, router, admin gate
//!
//! ## Ledger Model
//! The balance column is a cache over the append-only history table:
//! every credit or debit commits in the same transaction as its history
//! entry, so `saldo == sum(historico.valor)` holds at all times. Rate
//! windows (calendar-day task caps, rolling-24h share cap) are checked
//! under a per-user advisory lock inside that same transaction, which
//! closes the check-then-act race between concurrent requests.

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::WalletConfig;
pub use error::{WalletError, WalletResult};
pub use infra::postgres::PgLedgerRepository;
pub use presentation::admin_gate::{AdminGate, AdminSecret};
pub use presentation::router::wallet_router;

#[cfg(test)]
mod tests;
