//! Identity Error Types
//!
//! Identity-specific error variants that integrate with the unified
//! `kernel::error::AppError` system. Display strings are the client-facing
//! Portuguese messages of the API.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use kernel::error::{app_error::AppError, kind::ErrorKind};
use thiserror::Error;

use crate::domain::phone::PhoneError;

/// Identity-specific result type alias
pub type IdentityResult<T> = Result<T, IdentityError>;

/// Identity-specific error variants
#[derive(Debug, Error)]
pub enum IdentityError {
    /// Required request fields missing
    #[error("Preencha todos os campos")]
    MissingFields,

    /// Phone failed the shape check
    #[error("Telefone inválido")]
    InvalidPhone(#[from] PhoneError),

    /// Password policy violation
    #[error("Senha inválida: {0}")]
    PasswordPolicy(String),

    /// Age gate: accounts are 18+
    #[error("Apenas maiores de 18 anos")]
    Underage,

    /// Age outside the storable range
    #[error("Idade inválida")]
    InvalidAge,

    /// Phone already registered
    #[error("Telefone já registado")]
    PhoneTaken,

    /// Unknown phone or wrong password (never distinguished)
    #[error("Credenciais inválidas")]
    InvalidCredentials,

    /// No Authorization header
    #[error("Token ausente")]
    TokenMissing,

    /// Malformed, tampered or expired token
    #[error("Token inválido ou expirado")]
    TokenInvalid,

    /// Valid token, wrong subject
    #[error("Acesso não autorizado")]
    Forbidden,

    /// Database error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl IdentityError {
    /// Get the HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        StatusCode::from_u16(self.kind().status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR)
    }

    /// Get the ErrorKind for this error
    pub fn kind(&self) -> ErrorKind {
        match self {
            IdentityError::MissingFields
            | IdentityError::InvalidPhone(_)
            | IdentityError::PasswordPolicy(_)
            | IdentityError::Underage
            | IdentityError::InvalidAge => ErrorKind::BadRequest,
            IdentityError::PhoneTaken => ErrorKind::Conflict,
            IdentityError::InvalidCredentials
            | IdentityError::TokenMissing
            | IdentityError::TokenInvalid => ErrorKind::Unauthorized,
            IdentityError::Forbidden => ErrorKind::Forbidden,
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                ErrorKind::InternalServerError
            }
        }
    }

    /// Convert to AppError; internals never reach the client
    pub fn to_app_error(&self) -> AppError {
        match self {
            IdentityError::Database(_) | IdentityError::Internal(_) => {
                AppError::new(self.kind(), "Erro interno")
            }
            _ => AppError::new(self.kind(), self.to_string()),
        }
    }

    /// Log the error with appropriate level
    fn log(&self) {
        match self {
            IdentityError::Database(e) => {
                tracing::error!(error = %e, "Identity database error");
            }
            IdentityError::Internal(msg) => {
                tracing::error!(message = %msg, "Identity internal error");
            }
            IdentityError::InvalidCredentials => {
                tracing::warn!("Invalid login attempt");
            }
            IdentityError::Forbidden => {
                tracing::warn!("Subject mismatch on authenticated request");
            }
            _ => {
                tracing::debug!(error = %self, "Identity error");
            }
        }
    }
}

impl IntoResponse for IdentityError {
    fn into_response(self) -> Response {
        self.log();
        self.to_app_error().into_response()
    }
}
