//! Ledger Entities

use chrono::{DateTime, Utc};
use kernel::id::{EntryId, ShareEventId, UserId, WithdrawalId};

use crate::domain::category::Category;

/// One row of the append-only audit log.
///
/// `amount` is signed: credits positive, the withdrawal debit negative.
/// The balance cache is always the sum of these amounts per user.
#[derive(Debug, Clone)]
pub struct HistoryEntry {
    pub entry_id: EntryId,
    pub user_id: UserId,
    pub category: Category,
    pub description: String,
    pub amount: i64,
    /// External reference from the ad player, absent for other categories
    pub ad_ref: Option<String>,
    pub created_at: DateTime<Utc>,
}

/// A recorded referral-link share, the unit the rolling 24h window counts
#[derive(Debug, Clone)]
pub struct ShareEvent {
    pub share_id: ShareEventId,
    pub user_id: UserId,
    pub link_id: String,
    pub platform: String,
    pub created_at: DateTime<Utc>,
}

/// Lifecycle of a withdrawal request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WithdrawalStatus {
    Pendente,
    Pago,
}

impl WithdrawalStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            WithdrawalStatus::Pendente => "pendente",
            WithdrawalStatus::Pago => "pago",
        }
    }
}

/// A cash-out request; the balance was debited when it was created
#[derive(Debug, Clone)]
pub struct WithdrawalRequest {
    pub withdrawal_id: WithdrawalId,
    pub user_id: UserId,
    pub amount: i64,
    /// Payout destination account number
    pub express_number: String,
    pub status: WithdrawalStatus,
    pub created_at: DateTime<Utc>,
    pub paid_at: Option<DateTime<Utc>>,
}

/// A pending withdrawal joined with the requesting user's phone,
/// as shown to the reviewing admin
#[derive(Debug, Clone)]
pub struct PendingWithdrawal {
    pub withdrawal_id: WithdrawalId,
    pub user_id: UserId,
    pub phone: String,
    pub amount: i64,
    pub express_number: String,
    pub created_at: DateTime<Utc>,
}

/// Account overview row for the admin user listing
#[derive(Debug, Clone)]
pub struct AccountSummary {
    pub user_id: UserId,
    pub phone: String,
    pub age: i16,
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}
