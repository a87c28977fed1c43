//! Submit Task / Ad Reward Use Case

use std::sync::Arc;

use chrono::Utc;
use kernel::id::UserId;

use crate::application::config::WalletConfig;
use crate::domain::category::Category;
use crate::domain::repository::{LedgerRepository, TaskReward};
use crate::error::{WalletError, WalletResult};

/// Task submission input; the credited amount is decided server-side,
/// the client-sent valor is only validated for presence and sign
pub struct SubmitTaskInput {
    pub user_id: UserId,
    pub tipo: Option<String>,
    pub descricao: Option<String>,
    pub valor: Option<i64>,
    pub anuncio_id: Option<String>,
}

/// Task submission output
pub struct SubmitTaskOutput {
    /// Amount actually credited, from the server schedule
    pub ganho: i64,
    pub saldo_atual: i64,
}

/// Submit task use case
pub struct SubmitTaskUseCase<R>
where
    R: LedgerRepository,
{
    repo: Arc<R>,
    config: Arc<WalletConfig>,
}

impl<R> SubmitTaskUseCase<R>
where
    R: LedgerRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<WalletConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(&self, input: SubmitTaskInput) -> WalletResult<SubmitTaskOutput> {
        let (Some(tipo), Some(descricao), Some(valor)) =
            (input.tipo, input.descricao, input.valor)
        else {
            return Err(WalletError::Validation(
                "Preencha todos os campos".to_string(),
            ));
        };

        if valor <= 0 {
            return Err(WalletError::Validation("Valor inválido".to_string()));
        }

        let category = Category::parse(&tipo)
            .map_err(|e| WalletError::Validation(e.to_string()))?;
        if !category.is_task_rewardable() {
            return Err(WalletError::Validation("Categoria inválida".to_string()));
        }

        if descricao.trim().is_empty() {
            return Err(WalletError::Validation(
                "Preencha todos os campos".to_string(),
            ));
        }

        // Every submission carries the external completion reference
        if input.anuncio_id.as_deref().is_none_or(|r| r.trim().is_empty()) {
            return Err(WalletError::Validation(
                "Preencha todos os campos".to_string(),
            ));
        }

        let amount = self.config.reward_for(category);

        // Calendar-day window in UTC
        let window_start = Utc::now()
            .date_naive()
            .and_hms_opt(0, 0, 0)
            .map(|dt| dt.and_utc())
            .ok_or_else(|| WalletError::Internal("Day boundary computation".to_string()))?;

        let reward = TaskReward {
            user_id: input.user_id,
            category,
            description: descricao,
            amount,
            ad_ref: input.anuncio_id,
        };

        let saldo_atual = self
            .repo
            .record_task_reward(reward, window_start, self.config.max_tasks_per_day)
            .await?;

        tracing::info!(
            user_id = %input.user_id,
            category = %category,
            amount,
            "Task reward credited"
        );

        Ok(SubmitTaskOutput {
            ganho: amount,
            saldo_atual,
        })
    }
}
