//! Get Balance Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::domain::repository::LedgerRepository;
use crate::error::WalletResult;

/// Get balance use case
pub struct GetBalanceUseCase<R>
where
    R: LedgerRepository,
{
    repo: Arc<R>,
}

impl<R> GetBalanceUseCase<R>
where
    R: LedgerRepository,
{
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub async fn execute(&self, user_id: UserId) -> WalletResult<i64> {
        self.repo.balance(user_id).await
    }
}
