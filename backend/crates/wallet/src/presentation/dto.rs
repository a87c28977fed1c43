//! API DTOs (Data Transfer Objects)
//!
//! Wire field names are Portuguese to match the client contract.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entity::{AccountSummary, HistoryEntry, PendingWithdrawal};

// ============================================================================
// Balance
// ============================================================================

/// Balance response
#[derive(Debug, Clone, Serialize)]
pub struct BalanceResponse {
    pub sucesso: bool,
    pub saldo: i64,
}

// ============================================================================
// Task / ad reward
// ============================================================================

/// Task submission request.
///
/// `valor` is accepted from the wire for backwards compatibility but the
/// credited amount always comes from the server-side reward schedule.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskRequest {
    pub tipo: Option<String>,
    pub descricao: Option<String>,
    pub valor: Option<i64>,
    pub anuncio_id: Option<String>,
}

/// Task submission response
#[derive(Debug, Clone, Serialize)]
pub struct TaskResponse {
    pub sucesso: bool,
    pub mensagem: String,
    pub ganho: i64,
    pub saldo_atual: i64,
}

// ============================================================================
// Share reward
// ============================================================================

/// Share submission request
#[derive(Debug, Clone, Deserialize)]
pub struct ShareRequest {
    pub link_id: Option<String>,
    pub plataforma: Option<String>,
}

/// Share submission response
#[derive(Debug, Clone, Serialize)]
pub struct ShareResponse {
    pub sucesso: bool,
    pub mensagem: String,
    pub ganho: i64,
    pub saldo_atual: i64,
}

// ============================================================================
// History
// ============================================================================

/// One history entry on the wire
#[derive(Debug, Clone, Serialize)]
pub struct HistoryEntryDto {
    pub id: Uuid,
    pub categoria: String,
    pub descricao: String,
    pub valor: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub anuncio_id: Option<String>,
    pub criado_em: DateTime<Utc>,
}

impl HistoryEntryDto {
    pub fn from_entry(entry: HistoryEntry) -> Self {
        Self {
            id: entry.entry_id.into_uuid(),
            categoria: entry.category.as_str().to_string(),
            descricao: entry.description,
            valor: entry.amount,
            anuncio_id: entry.ad_ref,
            criado_em: entry.created_at,
        }
    }
}

/// History response
#[derive(Debug, Clone, Serialize)]
pub struct HistoryResponse {
    pub sucesso: bool,
    pub historico: Vec<HistoryEntryDto>,
}

// ============================================================================
// Withdrawal
// ============================================================================

/// Withdrawal request
#[derive(Debug, Clone, Deserialize)]
pub struct WithdrawRequest {
    pub valor: Option<i64>,
    pub numero_express: Option<String>,
}

/// Withdrawal response
#[derive(Debug, Clone, Serialize)]
pub struct WithdrawResponse {
    pub sucesso: bool,
    pub mensagem: String,
    pub saldo_atual: i64,
    pub saque_id: Uuid,
}

// ============================================================================
// Admin
// ============================================================================

/// One pending withdrawal as shown to the reviewing admin
#[derive(Debug, Clone, Serialize)]
pub struct PendingWithdrawalDto {
    pub saque_id: Uuid,
    pub user_id: Uuid,
    pub telefone: String,
    pub valor: i64,
    pub numero_express: String,
    pub criado_em: DateTime<Utc>,
}

impl PendingWithdrawalDto {
    pub fn from_pending(pending: PendingWithdrawal) -> Self {
        Self {
            saque_id: pending.withdrawal_id.into_uuid(),
            user_id: pending.user_id.into_uuid(),
            telefone: pending.phone,
            valor: pending.amount,
            numero_express: pending.express_number,
            criado_em: pending.created_at,
        }
    }
}

/// Pending withdrawals listing
#[derive(Debug, Clone, Serialize)]
pub struct PendingWithdrawalsResponse {
    pub sucesso: bool,
    pub saques: Vec<PendingWithdrawalDto>,
}

/// Mark-paid request
#[derive(Debug, Clone, Deserialize)]
pub struct MarkPaidRequest {
    pub saque_id: Option<Uuid>,
}

/// Mark-paid response
#[derive(Debug, Clone, Serialize)]
pub struct MarkPaidResponse {
    pub sucesso: bool,
    pub mensagem: String,
}

/// One account row in the admin user listing
#[derive(Debug, Clone, Serialize)]
pub struct AccountSummaryDto {
    pub id: Uuid,
    pub telefone: String,
    pub idade: i16,
    pub saldo: i64,
    pub criado_em: DateTime<Utc>,
}

impl AccountSummaryDto {
    pub fn from_summary(summary: AccountSummary) -> Self {
        Self {
            id: summary.user_id.into_uuid(),
            telefone: summary.phone,
            idade: summary.age,
            saldo: summary.balance,
            criado_em: summary.created_at,
        }
    }
}

/// Admin user listing
#[derive(Debug, Clone, Serialize)]
pub struct UsersResponse {
    pub sucesso: bool,
    pub usuarios: Vec<AccountSummaryDto>,
}
