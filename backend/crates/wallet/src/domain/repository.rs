//! Repository Traits
//!
//! The store is the arbiter of atomicity: each `record_*` method runs the
//! window check and the paired balance+history mutation inside one
//! transaction, serialized per user, so two racing requests can never both
//! pass a window check.

use chrono::{DateTime, Utc};
use kernel::id::{UserId, WithdrawalId};

use crate::domain::category::Category;
use crate::domain::entity::{AccountSummary, HistoryEntry, PendingWithdrawal};
use crate::error::WalletResult;

/// A server-priced task or ad reward to be applied
#[derive(Debug, Clone)]
pub struct TaskReward {
    pub user_id: UserId,
    pub category: Category,
    pub description: String,
    pub amount: i64,
    pub ad_ref: Option<String>,
}

/// A share reward to be applied alongside its ShareEvent
#[derive(Debug, Clone)]
pub struct ShareReward {
    pub user_id: UserId,
    pub link_id: String,
    pub platform: String,
    pub description: String,
    pub amount: i64,
}

/// A validated withdrawal to be opened and debited
#[derive(Debug, Clone)]
pub struct WithdrawalIntent {
    pub user_id: UserId,
    pub amount: i64,
    pub express_number: String,
}

/// Ledger store operations
#[trait_variant::make(LedgerRepository: Send)]
pub trait LocalLedgerRepository {
    /// Current balance; UserNotFound if the account does not exist
    async fn balance(&self, user_id: UserId) -> WalletResult<i64>;

    /// History entries, most recent first, up to `limit`
    async fn list_history(&self, user_id: UserId, limit: i64) -> WalletResult<Vec<HistoryEntry>>;

    /// Count of history entries for a category since `window_start`
    async fn count_events_in_window(
        &self,
        user_id: UserId,
        category: Category,
        window_start: DateTime<Utc>,
    ) -> WalletResult<i64>;

    /// Apply a task/ad reward unless `daily_cap` entries already exist for
    /// the category since `window_start`. Returns the new balance.
    ///
    /// Fails with DailyLimitReached (no mutation) when the cap is hit.
    async fn record_task_reward(
        &self,
        reward: TaskReward,
        window_start: DateTime<Utc>,
        daily_cap: i64,
    ) -> WalletResult<i64>;

    /// Apply a share reward unless a ShareEvent exists since `window_start`.
    /// Credits the balance, inserts the ShareEvent and the history entry in
    /// one transaction. Returns the new balance.
    ///
    /// Fails with ShareWindowActive (no mutation) when the window is hot.
    async fn record_share(
        &self,
        share: ShareReward,
        window_start: DateTime<Utc>,
    ) -> WalletResult<i64>;

    /// Open a pending withdrawal: debit the balance and append the negative
    /// history entry in one transaction. Returns (new balance, request id).
    ///
    /// Fails with InsufficientFunds (no mutation) if the balance cannot
    /// cover the amount.
    async fn record_withdrawal(
        &self,
        intent: WithdrawalIntent,
    ) -> WalletResult<(i64, WithdrawalId)>;
}

/// Admin review operations
#[trait_variant::make(AdminRepository: Send)]
pub trait LocalAdminRepository {
    /// Pending withdrawals joined with the requesting phone, oldest first
    async fn list_pending_withdrawals(&self) -> WalletResult<Vec<PendingWithdrawal>>;

    /// Transition pendente -> pago, stamping the paid time.
    /// Returns false when no pending request matches (nonexistent and
    /// already-paid are indistinguishable).
    async fn mark_paid(&self, withdrawal_id: WithdrawalId) -> WalletResult<bool>;

    /// All accounts, newest first
    async fn list_users(&self) -> WalletResult<Vec<AccountSummary>>;
}
