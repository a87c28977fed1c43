//! Get History Use Case

use std::sync::Arc;

use kernel::id::UserId;

use crate::application::config::WalletConfig;
use crate::domain::entity::HistoryEntry;
use crate::domain::repository::LedgerRepository;
use crate::error::WalletResult;

/// Get history use case
pub struct GetHistoryUseCase<R>
where
    R: LedgerRepository,
{
    repo: Arc<R>,
    config: Arc<WalletConfig>,
}

impl<R> GetHistoryUseCase<R>
where
    R: LedgerRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<WalletConfig>) -> Self {
        Self { repo, config }
    }

    /// Most recent entries first
    pub async fn execute(&self, user_id: UserId) -> WalletResult<Vec<HistoryEntry>> {
        self.repo
            .list_history(user_id, self.config.history_page_size)
            .await
    }
}
