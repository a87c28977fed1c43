//! Wallet crate tests

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

use chrono::{DateTime, Utc};
use kernel::id::{EntryId, ShareEventId, UserId, WithdrawalId};
use uuid::Uuid;

use crate::application::config::WalletConfig;
use crate::application::{
    ListPendingWithdrawalsUseCase, MarkPaidUseCase, RequestWithdrawalInput,
    RequestWithdrawalUseCase, SubmitShareInput, SubmitShareUseCase, SubmitTaskInput,
    SubmitTaskUseCase,
};
use crate::domain::category::Category;
use crate::domain::entity::{
    AccountSummary, HistoryEntry, PendingWithdrawal, ShareEvent, WithdrawalRequest,
    WithdrawalStatus,
};
use crate::domain::repository::{
    AdminRepository, LedgerRepository, ShareReward, TaskReward, WithdrawalIntent,
};
use crate::error::{WalletError, WalletResult};

// ============================================================================
// In-memory ledger
// ============================================================================

#[derive(Default)]
struct LedgerState {
    balances: HashMap<Uuid, i64>,
    phones: HashMap<Uuid, String>,
    history: Vec<HistoryEntry>,
    shares: Vec<ShareEvent>,
    withdrawals: Vec<WithdrawalRequest>,
}

/// In-memory ledger; the single mutex gives each operation the same
/// all-or-nothing, serialized-per-store semantics the real store has
/// per user.
#[derive(Clone, Default)]
struct MemLedger {
    state: Arc<Mutex<LedgerState>>,
}

impl MemLedger {
    fn with_user(user_id: UserId, balance: i64) -> Self {
        let ledger = Self::default();
        {
            let mut state = ledger.state.lock().unwrap();
            state.balances.insert(user_id.into_uuid(), balance);
            state.phones.insert(user_id.into_uuid(), "911222333".to_string());
            if balance != 0 {
                // Seed entry so the sum invariant holds from the start
                state.history.push(HistoryEntry {
                    entry_id: EntryId::new(),
                    user_id,
                    category: Category::Tarefa,
                    description: "Saldo inicial".to_string(),
                    amount: balance,
                    ad_ref: None,
                    created_at: Utc::now(),
                });
            }
        }
        ledger
    }

    fn balance_of(&self, user_id: UserId) -> i64 {
        *self
            .state
            .lock()
            .unwrap()
            .balances
            .get(user_id.as_uuid())
            .unwrap()
    }

    fn history_sum(&self, user_id: UserId) -> i64 {
        self.state
            .lock()
            .unwrap()
            .history
            .iter()
            .filter(|e| e.user_id == user_id)
            .map(|e| e.amount)
            .sum()
    }

    fn share_count(&self, user_id: UserId) -> usize {
        self.state
            .lock()
            .unwrap()
            .shares
            .iter()
            .filter(|s| s.user_id == user_id)
            .count()
    }

    fn pending_count(&self, user_id: UserId) -> usize {
        self.state
            .lock()
            .unwrap()
            .withdrawals
            .iter()
            .filter(|w| w.user_id == user_id && w.status == WithdrawalStatus::Pendente)
            .count()
    }
}

impl LedgerRepository for MemLedger {
    async fn balance(&self, user_id: UserId) -> WalletResult<i64> {
        let state = self.state.lock().unwrap();
        state
            .balances
            .get(user_id.as_uuid())
            .copied()
            .ok_or(WalletError::UserNotFound)
    }

    async fn list_history(&self, user_id: UserId, limit: i64) -> WalletResult<Vec<HistoryEntry>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .history
            .iter()
            .filter(|e| e.user_id == user_id)
            .rev()
            .take(limit as usize)
            .cloned()
            .collect())
    }

    async fn count_events_in_window(
        &self,
        user_id: UserId,
        category: Category,
        window_start: DateTime<Utc>,
    ) -> WalletResult<i64> {
        let state = self.state.lock().unwrap();
        Ok(state
            .history
            .iter()
            .filter(|e| {
                e.user_id == user_id && e.category == category && e.created_at >= window_start
            })
            .count() as i64)
    }

    async fn record_task_reward(
        &self,
        reward: TaskReward,
        window_start: DateTime<Utc>,
        daily_cap: i64,
    ) -> WalletResult<i64> {
        let mut state = self.state.lock().unwrap();

        let count = state
            .history
            .iter()
            .filter(|e| {
                e.user_id == reward.user_id
                    && e.category == reward.category
                    && e.created_at >= window_start
            })
            .count() as i64;
        if count >= daily_cap {
            return Err(WalletError::DailyLimitReached);
        }

        let saldo = state
            .balances
            .get_mut(reward.user_id.as_uuid())
            .ok_or(WalletError::UserNotFound)?;
        *saldo += reward.amount;
        let saldo = *saldo;

        state.history.push(HistoryEntry {
            entry_id: EntryId::new(),
            user_id: reward.user_id,
            category: reward.category,
            description: reward.description,
            amount: reward.amount,
            ad_ref: reward.ad_ref,
            created_at: Utc::now(),
        });

        Ok(saldo)
    }

    async fn record_share(
        &self,
        share: ShareReward,
        window_start: DateTime<Utc>,
    ) -> WalletResult<i64> {
        let mut state = self.state.lock().unwrap();

        let recent = state
            .shares
            .iter()
            .any(|s| s.user_id == share.user_id && s.created_at > window_start);
        if recent {
            return Err(WalletError::ShareWindowActive);
        }

        let saldo = state
            .balances
            .get_mut(share.user_id.as_uuid())
            .ok_or(WalletError::UserNotFound)?;
        *saldo += share.amount;
        let saldo = *saldo;

        state.shares.push(ShareEvent {
            share_id: ShareEventId::new(),
            user_id: share.user_id,
            link_id: share.link_id,
            platform: share.platform,
            created_at: Utc::now(),
        });
        state.history.push(HistoryEntry {
            entry_id: EntryId::new(),
            user_id: share.user_id,
            category: Category::Compartilhamento,
            description: share.description,
            amount: share.amount,
            ad_ref: None,
            created_at: Utc::now(),
        });

        Ok(saldo)
    }

    async fn record_withdrawal(
        &self,
        intent: WithdrawalIntent,
    ) -> WalletResult<(i64, WithdrawalId)> {
        let mut state = self.state.lock().unwrap();

        let saldo = state
            .balances
            .get_mut(intent.user_id.as_uuid())
            .ok_or(WalletError::UserNotFound)?;
        if *saldo < intent.amount {
            return Err(WalletError::InsufficientFunds);
        }
        *saldo -= intent.amount;
        let saldo = *saldo;

        let withdrawal_id = WithdrawalId::new();
        state.withdrawals.push(WithdrawalRequest {
            withdrawal_id,
            user_id: intent.user_id,
            amount: intent.amount,
            express_number: intent.express_number,
            status: WithdrawalStatus::Pendente,
            created_at: Utc::now(),
            paid_at: None,
        });
        state.history.push(HistoryEntry {
            entry_id: EntryId::new(),
            user_id: intent.user_id,
            category: Category::Saque,
            description: format!("Saque solicitado ({})", withdrawal_id),
            amount: -intent.amount,
            ad_ref: None,
            created_at: Utc::now(),
        });

        Ok((saldo, withdrawal_id))
    }
}

impl AdminRepository for MemLedger {
    async fn list_pending_withdrawals(&self) -> WalletResult<Vec<PendingWithdrawal>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .withdrawals
            .iter()
            .filter(|w| w.status == WithdrawalStatus::Pendente)
            .map(|w| PendingWithdrawal {
                withdrawal_id: w.withdrawal_id,
                user_id: w.user_id,
                phone: state
                    .phones
                    .get(w.user_id.as_uuid())
                    .cloned()
                    .unwrap_or_default(),
                amount: w.amount,
                express_number: w.express_number.clone(),
                created_at: w.created_at,
            })
            .collect())
    }

    async fn mark_paid(&self, withdrawal_id: WithdrawalId) -> WalletResult<bool> {
        let mut state = self.state.lock().unwrap();
        let Some(w) = state
            .withdrawals
            .iter_mut()
            .find(|w| w.withdrawal_id == withdrawal_id && w.status == WithdrawalStatus::Pendente)
        else {
            return Ok(false);
        };
        w.status = WithdrawalStatus::Pago;
        w.paid_at = Some(Utc::now());
        Ok(true)
    }

    async fn list_users(&self) -> WalletResult<Vec<AccountSummary>> {
        let state = self.state.lock().unwrap();
        Ok(state
            .balances
            .iter()
            .map(|(id, saldo)| AccountSummary {
                user_id: UserId::from_uuid(*id),
                phone: state.phones.get(id).cloned().unwrap_or_default(),
                age: 18,
                balance: *saldo,
                created_at: Utc::now(),
            })
            .collect())
    }
}

// ============================================================================
// Helpers
// ============================================================================

fn task_input(user_id: UserId) -> SubmitTaskInput {
    SubmitTaskInput {
        user_id,
        tipo: Some("anuncio".to_string()),
        descricao: Some("Anúncio premiado concluído".to_string()),
        valor: Some(500),
        anuncio_id: Some("ad-0001".to_string()),
    }
}

fn share_input(user_id: UserId) -> SubmitShareInput {
    SubmitShareInput {
        user_id,
        link_id: Some("ref-abc".to_string()),
        plataforma: Some("whatsapp".to_string()),
    }
}

// ============================================================================
// Task / ad rewards
// ============================================================================

#[tokio::test]
async fn test_task_reward_credits_server_amount() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let config = Arc::new(WalletConfig::default());
    let use_case = SubmitTaskUseCase::new(Arc::new(ledger.clone()), config.clone());

    let output = use_case.execute(task_input(user_id)).await.unwrap();

    assert_eq!(output.ganho, config.reward_ad);
    assert_eq!(output.saldo_atual, config.reward_ad);
    assert_eq!(ledger.balance_of(user_id), config.reward_ad);
}

#[tokio::test]
async fn test_task_reward_daily_cap() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let config = Arc::new(WalletConfig::default());
    let use_case = SubmitTaskUseCase::new(Arc::new(ledger.clone()), config.clone());

    for _ in 0..config.max_tasks_per_day {
        use_case.execute(task_input(user_id)).await.unwrap();
    }

    // One past the cap is rejected with no mutation
    let result = use_case.execute(task_input(user_id)).await;
    assert!(matches!(result, Err(WalletError::DailyLimitReached)));
    assert_eq!(
        ledger.balance_of(user_id),
        config.max_tasks_per_day * config.reward_ad
    );
}

#[tokio::test]
async fn test_task_reward_missing_fields() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let use_case = SubmitTaskUseCase::new(Arc::new(ledger), Arc::new(WalletConfig::default()));

    let result = use_case
        .execute(SubmitTaskInput {
            user_id,
            tipo: Some("anuncio".to_string()),
            descricao: None,
            valor: Some(500),
            anuncio_id: Some("ad-0001".to_string()),
        })
        .await;

    assert!(matches!(result, Err(WalletError::Validation(_))));
}

#[tokio::test]
async fn test_task_reward_ignores_forged_amount() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let config = Arc::new(WalletConfig::default());
    let use_case = SubmitTaskUseCase::new(Arc::new(ledger.clone()), config.clone());

    let mut input = task_input(user_id);
    input.valor = Some(9_999_999);

    let output = use_case.execute(input).await.unwrap();

    // The server schedule wins over whatever the client claims
    assert_eq!(output.ganho, config.reward_ad);
    assert_eq!(ledger.balance_of(user_id), config.reward_ad);
}

#[tokio::test]
async fn test_task_reward_rejects_nonpositive_amount() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let use_case = SubmitTaskUseCase::new(Arc::new(ledger), Arc::new(WalletConfig::default()));

    let mut input = task_input(user_id);
    input.valor = Some(0);

    let result = use_case.execute(input).await;
    assert!(matches!(result, Err(WalletError::Validation(_))));
}

#[tokio::test]
async fn test_task_reward_rejects_nonrewardable_category() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let use_case = SubmitTaskUseCase::new(Arc::new(ledger), Arc::new(WalletConfig::default()));

    let result = use_case
        .execute(SubmitTaskInput {
            user_id,
            tipo: Some("saque".to_string()),
            descricao: Some("x".to_string()),
            valor: Some(500),
            anuncio_id: None,
        })
        .await;

    assert!(matches!(result, Err(WalletError::Validation(_))));
}

#[tokio::test]
async fn test_task_requires_external_ref_for_every_category() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let use_case =
        SubmitTaskUseCase::new(Arc::new(ledger.clone()), Arc::new(WalletConfig::default()));

    // The reference is mandatory for tarefa as well as anuncio
    for tipo in ["anuncio", "tarefa"] {
        let result = use_case
            .execute(SubmitTaskInput {
                user_id,
                tipo: Some(tipo.to_string()),
                descricao: Some("Tarefa concluída".to_string()),
                valor: Some(500),
                anuncio_id: None,
            })
            .await;

        assert!(matches!(result, Err(WalletError::Validation(_))));
    }

    assert_eq!(ledger.balance_of(user_id), 0);
}

// ============================================================================
// Share rewards
// ============================================================================

#[tokio::test]
async fn test_share_reward_credits_once_per_window() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let config = Arc::new(WalletConfig::default());
    let use_case = SubmitShareUseCase::new(Arc::new(ledger.clone()), config.clone());

    let saldo = use_case.execute(share_input(user_id)).await.unwrap();
    assert_eq!(saldo, config.reward_share);

    let result = use_case.execute(share_input(user_id)).await;
    assert!(matches!(result, Err(WalletError::ShareWindowActive)));
    assert_eq!(ledger.balance_of(user_id), config.reward_share);
    assert_eq!(ledger.share_count(user_id), 1);
}

#[tokio::test]
async fn test_share_race_single_credit() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let config = Arc::new(WalletConfig::default());
    let repo = Arc::new(ledger.clone());

    let a = SubmitShareUseCase::new(repo.clone(), config.clone());
    let b = SubmitShareUseCase::new(repo, config.clone());

    let (first, second) = tokio::join!(
        a.execute(share_input(user_id)),
        b.execute(share_input(user_id)),
    );

    // Exactly one of the two racing requests wins
    assert_eq!(first.is_ok() as u8 + second.is_ok() as u8, 1);
    assert_eq!(ledger.share_count(user_id), 1);
    assert_eq!(ledger.balance_of(user_id), config.reward_share);
    assert_eq!(ledger.history_sum(user_id), config.reward_share);
}

#[tokio::test]
async fn test_share_missing_fields() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let use_case = SubmitShareUseCase::new(Arc::new(ledger), Arc::new(WalletConfig::default()));

    let result = use_case
        .execute(SubmitShareInput {
            user_id,
            link_id: None,
            plataforma: Some("whatsapp".to_string()),
        })
        .await;

    assert!(matches!(result, Err(WalletError::Validation(_))));
}

// ============================================================================
// Withdrawals
// ============================================================================

#[tokio::test]
async fn test_withdrawal_debits_and_opens_pending() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 1_000_000);
    let use_case =
        RequestWithdrawalUseCase::new(Arc::new(ledger.clone()), Arc::new(WalletConfig::default()));

    let output = use_case
        .execute(RequestWithdrawalInput {
            user_id,
            valor: Some(700_000),
            numero_express: Some("923456789".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(output.saldo_atual, 300_000);
    assert_eq!(ledger.pending_count(user_id), 1);

    // A second identical request no longer has cover
    let result = use_case
        .execute(RequestWithdrawalInput {
            user_id,
            valor: Some(700_000),
            numero_express: Some("923456789".to_string()),
        })
        .await;

    assert!(matches!(result, Err(WalletError::InsufficientFunds)));
    assert_eq!(ledger.balance_of(user_id), 300_000);
    assert_eq!(ledger.pending_count(user_id), 1);
}

#[tokio::test]
async fn test_withdrawal_minimum_boundary() {
    let user_id = UserId::new();
    let config = WalletConfig::default();
    let ledger = MemLedger::with_user(user_id, config.min_withdraw * 2);
    let use_case = RequestWithdrawalUseCase::new(Arc::new(ledger), Arc::new(config.clone()));

    // Exactly the minimum passes
    let output = use_case
        .execute(RequestWithdrawalInput {
            user_id,
            valor: Some(config.min_withdraw),
            numero_express: Some("923456789".to_string()),
        })
        .await
        .unwrap();
    assert_eq!(output.saldo_atual, config.min_withdraw);

    // One below the minimum fails before touching the ledger
    let result = use_case
        .execute(RequestWithdrawalInput {
            user_id,
            valor: Some(config.min_withdraw - 1),
            numero_express: Some("923456789".to_string()),
        })
        .await;
    assert!(matches!(result, Err(WalletError::BelowMinimum { .. })));
}

#[tokio::test]
async fn test_withdrawal_missing_fields() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 1_000_000);
    let use_case =
        RequestWithdrawalUseCase::new(Arc::new(ledger), Arc::new(WalletConfig::default()));

    let result = use_case
        .execute(RequestWithdrawalInput {
            user_id,
            valor: Some(700_000),
            numero_express: None,
        })
        .await;

    assert!(matches!(result, Err(WalletError::Validation(_))));
}

// ============================================================================
// Admin review
// ============================================================================

#[tokio::test]
async fn test_mark_paid_flow() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 1_000_000);
    let repo = Arc::new(ledger.clone());

    let withdraw = RequestWithdrawalUseCase::new(repo.clone(), Arc::new(WalletConfig::default()));
    let output = withdraw
        .execute(RequestWithdrawalInput {
            user_id,
            valor: Some(700_000),
            numero_express: Some("923456789".to_string()),
        })
        .await
        .unwrap();

    let list = ListPendingWithdrawalsUseCase::new(repo.clone());
    let pending = list.execute().await.unwrap();
    assert_eq!(pending.len(), 1);
    assert_eq!(pending[0].amount, 700_000);
    assert_eq!(pending[0].phone, "911222333");

    let mark = MarkPaidUseCase::new(repo.clone());
    mark.execute(WithdrawalId::from_uuid(output.saque_id))
        .await
        .unwrap();

    assert!(list.execute().await.unwrap().is_empty());
    // Paying does not touch the balance; it was debited at request time
    assert_eq!(ledger.balance_of(user_id), 300_000);
}

#[tokio::test]
async fn test_mark_paid_not_found_and_already_paid() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 1_000_000);
    let repo = Arc::new(ledger);

    let mark = MarkPaidUseCase::new(repo.clone());

    // Nonexistent id
    let result = mark.execute(WithdrawalId::new()).await;
    assert!(matches!(result, Err(WalletError::WithdrawalNotFound)));

    // Already paid reports the same not-found
    let withdraw = RequestWithdrawalUseCase::new(repo.clone(), Arc::new(WalletConfig::default()));
    let output = withdraw
        .execute(RequestWithdrawalInput {
            user_id,
            valor: Some(700_000),
            numero_express: Some("923456789".to_string()),
        })
        .await
        .unwrap();

    let saque_id = WithdrawalId::from_uuid(output.saque_id);
    mark.execute(saque_id).await.unwrap();
    let result = mark.execute(saque_id).await;
    assert!(matches!(result, Err(WalletError::WithdrawalNotFound)));
}

// ============================================================================
// Ledger invariants
// ============================================================================

#[tokio::test]
async fn test_balance_equals_history_sum() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 1_000_000);
    let config = Arc::new(WalletConfig::default());
    let repo = Arc::new(ledger.clone());

    let task = SubmitTaskUseCase::new(repo.clone(), config.clone());
    let share = SubmitShareUseCase::new(repo.clone(), config.clone());
    let withdraw = RequestWithdrawalUseCase::new(repo.clone(), config.clone());

    task.execute(task_input(user_id)).await.unwrap();
    task.execute(task_input(user_id)).await.unwrap();
    share.execute(share_input(user_id)).await.unwrap();
    withdraw
        .execute(RequestWithdrawalInput {
            user_id,
            valor: Some(600_000),
            numero_express: Some("923456789".to_string()),
        })
        .await
        .unwrap();

    assert_eq!(ledger.balance_of(user_id), ledger.history_sum(user_id));
}

#[tokio::test]
async fn test_count_events_in_window_scoped_by_category() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let config = Arc::new(WalletConfig::default());
    let repo = Arc::new(ledger);

    let task = SubmitTaskUseCase::new(repo.clone(), config.clone());
    let share = SubmitShareUseCase::new(repo.clone(), config);

    task.execute(task_input(user_id)).await.unwrap();
    task.execute(task_input(user_id)).await.unwrap();
    share.execute(share_input(user_id)).await.unwrap();

    let window_start = Utc::now() - chrono::Duration::hours(1);
    let ads = repo
        .count_events_in_window(user_id, Category::Anuncio, window_start)
        .await
        .unwrap();
    let shares = repo
        .count_events_in_window(user_id, Category::Compartilhamento, window_start)
        .await
        .unwrap();

    assert_eq!(ads, 2);
    assert_eq!(shares, 1);
}

#[tokio::test]
async fn test_history_reverse_chronological() {
    let user_id = UserId::new();
    let ledger = MemLedger::with_user(user_id, 0);
    let config = Arc::new(WalletConfig::default());
    let repo = Arc::new(ledger.clone());

    let task = SubmitTaskUseCase::new(repo.clone(), config.clone());
    for _ in 0..5 {
        task.execute(task_input(user_id)).await.unwrap();
    }

    let entries = repo.list_history(user_id, 100).await.unwrap();
    assert_eq!(entries.len(), 5);
    for pair in entries.windows(2) {
        assert!(pair[0].created_at >= pair[1].created_at);
    }
    assert_eq!(
        entries.iter().map(|e| e.amount).sum::<i64>(),
        ledger.balance_of(user_id)
    );
}

// ============================================================================
// Error statuses
// ============================================================================

#[test]
fn test_error_status_codes() {
    use axum::http::StatusCode;

    assert_eq!(
        WalletError::Validation("x".to_string()).status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        WalletError::BelowMinimum { minimum: 600_000 }.status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        WalletError::InsufficientFunds.status_code(),
        StatusCode::BAD_REQUEST
    );
    assert_eq!(
        WalletError::DailyLimitReached.status_code(),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(
        WalletError::ShareWindowActive.status_code(),
        StatusCode::TOO_MANY_REQUESTS
    );
    assert_eq!(WalletError::Forbidden.status_code(), StatusCode::FORBIDDEN);
    assert_eq!(WalletError::UserNotFound.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(
        WalletError::WithdrawalNotFound.status_code(),
        StatusCode::NOT_FOUND
    );
    assert_eq!(
        WalletError::Internal("x".to_string()).status_code(),
        StatusCode::INTERNAL_SERVER_ERROR
    );
}

#[test]
fn test_internal_errors_are_masked() {
    let err = WalletError::Internal("pool timeout".to_string());
    assert_eq!(err.to_app_error().message(), "Erro interno");
}

// ============================================================================
// DTO wire format
// ============================================================================

#[test]
fn test_task_request_field_names() {
    let json = r#"{"tipo": "anuncio", "descricao": "d", "valor": 999999, "anuncio_id": "ad-1"}"#;
    let req: crate::presentation::dto::TaskRequest = serde_json::from_str(json).unwrap();
    assert_eq!(req.tipo.as_deref(), Some("anuncio"));
    assert_eq!(req.valor, Some(999_999));
    assert_eq!(req.anuncio_id.as_deref(), Some("ad-1"));
}

#[test]
fn test_withdraw_response_field_names() {
    use crate::presentation::dto::WithdrawResponse;

    let resp = WithdrawResponse {
        sucesso: true,
        mensagem: "ok".to_string(),
        saldo_atual: 300_000,
        saque_id: Uuid::nil(),
    };

    let value = serde_json::to_value(&resp).unwrap();
    assert_eq!(value["sucesso"], true);
    assert_eq!(value["saldo_atual"], 300_000);
    assert!(value.get("saque_id").is_some());
}

#[test]
fn test_history_entry_dto_omits_absent_ad_ref() {
    use crate::presentation::dto::HistoryEntryDto;

    let entry = HistoryEntry {
        entry_id: EntryId::new(),
        user_id: UserId::new(),
        category: Category::Compartilhamento,
        description: "d".to_string(),
        amount: 500,
        ad_ref: None,
        created_at: Utc::now(),
    };

    let value = serde_json::to_value(HistoryEntryDto::from_entry(entry)).unwrap();
    assert!(value.get("anuncio_id").is_none());
    assert_eq!(value["categoria"], "compartilhamento");
}
