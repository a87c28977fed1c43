//! Request Withdrawal Use Case

use std::sync::Arc;

use kernel::id::UserId;
use uuid::Uuid;

use crate::application::config::WalletConfig;
use crate::domain::repository::{LedgerRepository, WithdrawalIntent};
use crate::error::{WalletError, WalletResult};

/// Withdrawal request input
pub struct RequestWithdrawalInput {
    pub user_id: UserId,
    pub valor: Option<i64>,
    pub numero_express: Option<String>,
}

/// Withdrawal request output
pub struct RequestWithdrawalOutput {
    pub saldo_atual: i64,
    pub saque_id: Uuid,
}

/// Request withdrawal use case
pub struct RequestWithdrawalUseCase<R>
where
    R: LedgerRepository,
{
    repo: Arc<R>,
    config: Arc<WalletConfig>,
}

impl<R> RequestWithdrawalUseCase<R>
where
    R: LedgerRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<WalletConfig>) -> Self {
        Self { repo, config }
    }

    pub async fn execute(
        &self,
        input: RequestWithdrawalInput,
    ) -> WalletResult<RequestWithdrawalOutput> {
        let (Some(valor), Some(numero_express)) = (input.valor, input.numero_express) else {
            return Err(WalletError::Validation(
                "Preencha todos os campos".to_string(),
            ));
        };

        if numero_express.trim().is_empty() {
            return Err(WalletError::Validation(
                "Preencha todos os campos".to_string(),
            ));
        }

        if valor < self.config.min_withdraw {
            return Err(WalletError::BelowMinimum {
                minimum: self.config.min_withdraw,
            });
        }

        let intent = WithdrawalIntent {
            user_id: input.user_id,
            amount: valor,
            express_number: numero_express,
        };

        // Balance check happens inside the debit transaction
        let (saldo_atual, saque_id) = self.repo.record_withdrawal(intent).await?;

        tracing::info!(
            user_id = %input.user_id,
            saque_id = %saque_id,
            amount = valor,
            "Withdrawal opened"
        );

        Ok(RequestWithdrawalOutput {
            saldo_atual,
            saque_id: saque_id.into_uuid(),
        })
    }
}
