//! Submit Share Reward Use Case

use std::sync::Arc;

use chrono::{Duration as ChronoDuration, Utc};
use kernel::id::UserId;

use crate::application::config::WalletConfig;
use crate::domain::repository::{LedgerRepository, ShareReward};
use crate::error::{WalletError, WalletResult};

/// Share submission input
pub struct SubmitShareInput {
    pub user_id: UserId,
    pub link_id: Option<String>,
    pub plataforma: Option<String>,
}

/// Submit share use case
pub struct SubmitShareUseCase<R>
where
    R: LedgerRepository,
{
    repo: Arc<R>,
    config: Arc<WalletConfig>,
}

impl<R> SubmitShareUseCase<R>
where
    R: LedgerRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<WalletConfig>) -> Self {
        Self { repo, config }
    }

    /// Returns the new balance after crediting the share reward
    pub async fn execute(&self, input: SubmitShareInput) -> WalletResult<i64> {
        let (Some(link_id), Some(plataforma)) = (input.link_id, input.plataforma) else {
            return Err(WalletError::Validation(
                "Preencha todos os campos".to_string(),
            ));
        };

        if link_id.trim().is_empty() || plataforma.trim().is_empty() {
            return Err(WalletError::Validation(
                "Preencha todos os campos".to_string(),
            ));
        }

        // Rolling window measured backward from now
        let window = ChronoDuration::from_std(self.config.share_window)
            .map_err(|e| WalletError::Internal(format!("Share window: {}", e)))?;
        let window_start = Utc::now() - window;

        let share = ShareReward {
            user_id: input.user_id,
            description: format!("Compartilhamento ({})", plataforma),
            link_id,
            platform: plataforma,
            amount: self.config.reward_share,
        };

        let saldo_atual = self.repo.record_share(share, window_start).await?;

        tracing::info!(user_id = %input.user_id, "Share reward credited");

        Ok(saldo_atual)
    }
}
