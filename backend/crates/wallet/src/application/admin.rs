//! Admin Review Use Cases

use std::sync::Arc;

use kernel::id::WithdrawalId;

use crate::domain::entity::{AccountSummary, PendingWithdrawal};
use crate::domain::repository::AdminRepository;
use crate::error::{WalletError, WalletResult};

/// List pending withdrawals use case
pub struct ListPendingWithdrawalsUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
}

impl<R> ListPendingWithdrawalsUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> WalletResult<Vec<PendingWithdrawal>> {
        self.repo.list_pending_withdrawals().await
    }
}

/// Mark paid use case
pub struct MarkPaidUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
}

impl<R> MarkPaidUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    /// Nonexistent and already-paid requests report the same not-found
    pub async fn execute(&self, withdrawal_id: WithdrawalId) -> WalletResult<()> {
        let updated = self.repo.mark_paid(withdrawal_id).await?;
        if !updated {
            return Err(WalletError::WithdrawalNotFound);
        }

        tracing::info!(saque_id = %withdrawal_id, "Withdrawal marked paid");
        Ok(())
    }
}

/// List users use case
pub struct ListUsersUseCase<R>
where
    R: AdminRepository,
{
    repo: Arc<R>,
}

impl<R> ListUsersUseCase<R>
where
    R: AdminRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self) -> WalletResult<Vec<AccountSummary>> {
        self.repo.list_users().await
    }
}
