//! Wallet Error Types
//!
//! Wallet-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Display strings are the client-facing
//! Portuguese messages of the API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

/// Wallet-specific result type alias
pub type WalletResult<T> = Result<T, WalletError>;

/// Wallet-specific error variants
#[derive(Debug, Error)]
pub enum WalletError {
    /// Required request fields missing or malformed
    #[error("{0}")]
    Validation(String),

    /// Withdrawal below the configured minimum
    #[error("Valor mínimo de saque: {minimum}")]
    BelowMinimum { minimum: i64 },

    /// Calendar-day cap for the reward category reached
    #[error("Limite diário atingido")]
    DailyLimitReached,

    /// A share reward was already granted inside the rolling window
    #[error("Já recebeu recompensa por compartilhamento nas últimas 24h")]
    ShareWindowActive,

    /// Balance cannot cover the requested debit
    #[error("Saldo insuficiente")]
    InsufficientFunds,

    /// Valid session, wrong subject
    #[error("Acesso não autorizado")]
    Forbidden,

    /// No account with that id
    #[error("Usuário não encontrado")]
    UserNotFound,

    /// No pending withdrawal with that id (already paid reports the same)
    #[error("Saque não encontrado")]
    WithdrawalNotFound,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl WalletError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            WalletError::Validation(_)
            | WalletError::BelowMinimum { .. }
            | WalletError::InsufficientFunds => ErrorKind::BadRequest,
            WalletError::DailyLimitReached | WalletError::ShareWindowActive => {
                ErrorKind::TooManyRequests
            }
            WalletError::Forbidden => ErrorKind::Forbidden,
            WalletError::UserNotFound | WalletError::WithdrawalNotFound => ErrorKind::NotFound,
            WalletError::Database(_) | WalletError::Internal(_) => ErrorKind::InternalServerError,
        }
    }

    /// Convert to AppError; internals never reach the client
    pub fn to_app_error(&self) -> AppError {
        match self {
            WalletError::Database(_) | WalletError::Internal(_) => {
                AppError::new(self.kind(), "Erro interno")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            WalletError::Database(e) => {
                tracing::error!(error = %e, "Wallet database error");
            }
            WalletError::Internal(msg) => {
                tracing::error!(message = %msg, "Wallet internal error");
            }
            WalletError::DailyLimitReached | WalletError::ShareWindowActive => {
                tracing::info!(error = %self, "Reward window rejection");
            }
            _ => {
                tracing::debug!(error = %self, "Wallet error");
            }
        }
    }
}

impl IntoResponse for WalletError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
