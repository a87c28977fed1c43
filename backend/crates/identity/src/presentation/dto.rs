//! API DTOs (Data Transfer Objects)
//!
//! Wire field names are Portuguese to match the client contract.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Register
// ============================================================================

/// Register request
///
/// Fields are optional so a missing field becomes a domain validation
/// error (400 with a client message) rather than a deserialization 422.
#[derive(Debug, Clone, Deserialize)]
pub struct RegisterRequest {
    pub telefone: Option<String>,
    pub senha: Option<String>,
    pub idade: Option<i64>,
}

/// Register response
#[derive(Debug, Clone, Serialize)]
pub struct RegisterResponse {
    pub sucesso: bool,
    pub mensagem: String,
    pub usuario: UserSummary,
    pub token: String,
}

// ============================================================================
// Login
// ============================================================================

/// Login request
#[derive(Debug, Clone, Deserialize)]
pub struct LoginRequest {
    pub telefone: Option<String>,
    pub senha: Option<String>,
}

/// Login response
#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub sucesso: bool,
    pub usuario: UserSummaryWithBalance,
    pub token: String,
}

// ============================================================================
// User summaries
// ============================================================================

/// Minimal user view returned on registration
#[derive(Debug, Clone, Serialize)]
pub struct UserSummary {
    pub id: Uuid,
    pub telefone: String,
}

/// User view with current balance, returned on login
#[derive(Debug, Clone, Serialize)]
pub struct UserSummaryWithBalance {
    pub id: Uuid,
    pub telefone: String,
    pub saldo: i64,
}
