//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, Path, State};
use std::sync::Arc;
use uuid::Uuid;

use identity::{AuthUser, SessionSigner};
use kernel::id::{UserId, WithdrawalId};

use crate::application::config::WalletConfig;
use crate::application::{
    GetBalanceUseCase, GetHistoryUseCase, ListPendingWithdrawalsUseCase, ListUsersUseCase,
    MarkPaidUseCase, RequestWithdrawalInput, RequestWithdrawalUseCase, SubmitShareInput,
    SubmitShareUseCase, SubmitTaskInput, SubmitTaskUseCase,
};
use crate::domain::repository::{AdminRepository, LedgerRepository};
use crate::error::{WalletError, WalletResult};
use crate::presentation::admin_gate::{AdminGate, AdminSecret};
use crate::presentation::dto::{
    AccountSummaryDto, BalanceResponse, HistoryEntryDto, HistoryResponse, MarkPaidRequest,
    MarkPaidResponse, PendingWithdrawalDto, PendingWithdrawalsResponse, ShareRequest,
    ShareResponse, TaskRequest, TaskResponse, UsersResponse, WithdrawRequest, WithdrawResponse,
};

/// Shared state for wallet handlers
#[derive(Clone)]
pub struct WalletAppState<R>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<WalletConfig>,
    pub signer: Arc<SessionSigner>,
    pub admin_secret: Arc<AdminSecret>,
}

impl<R> FromRef<WalletAppState<R>> for Arc<SessionSigner>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &WalletAppState<R>) -> Self {
        state.signer.clone()
    }
}

impl<R> FromRef<WalletAppState<R>> for Arc<AdminSecret>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &WalletAppState<R>) -> Self {
        state.admin_secret.clone()
    }
}

// ============================================================================
// Balance
// ============================================================================

/// GET /api/saldo/{id}
pub async fn get_balance<R>(
    State(state): State<WalletAppState<R>>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> WalletResult<Json<BalanceResponse>>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    auth.require_subject(id).map_err(|_| WalletError::Forbidden)?;

    let use_case = GetBalanceUseCase::new(state.repo.clone());
    let saldo = use_case.execute(UserId::from_uuid(id)).await?;

    Ok(Json(BalanceResponse {
        sucesso: true,
        saldo,
    }))
}

// ============================================================================
// Task / ad reward
// ============================================================================

/// POST /api/tarefa
pub async fn submit_task<R>(
    State(state): State<WalletAppState<R>>,
    auth: AuthUser,
    Json(req): Json<TaskRequest>,
) -> WalletResult<Json<TaskResponse>>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitTaskUseCase::new(state.repo.clone(), state.config.clone());

    // The credited amount comes from the server schedule, never from the
    // client-sent valor.
    let input = SubmitTaskInput {
        user_id: UserId::from_uuid(auth.0.user_id),
        tipo: req.tipo,
        descricao: req.descricao,
        valor: req.valor,
        anuncio_id: req.anuncio_id,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(TaskResponse {
        sucesso: true,
        mensagem: "Recompensa creditada".to_string(),
        ganho: output.ganho,
        saldo_atual: output.saldo_atual,
    }))
}

// ============================================================================
// Share reward
// ============================================================================

/// POST /api/compartilhar
pub async fn submit_share<R>(
    State(state): State<WalletAppState<R>>,
    auth: AuthUser,
    Json(req): Json<ShareRequest>,
) -> WalletResult<Json<ShareResponse>>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = SubmitShareUseCase::new(state.repo.clone(), state.config.clone());

    let input = SubmitShareInput {
        user_id: UserId::from_uuid(auth.0.user_id),
        link_id: req.link_id,
        plataforma: req.plataforma,
    };

    let saldo_atual = use_case.execute(input).await?;

    Ok(Json(ShareResponse {
        sucesso: true,
        mensagem: "Recompensa de compartilhamento creditada".to_string(),
        ganho: state.config.reward_share,
        saldo_atual,
    }))
}

// ============================================================================
// History
// ============================================================================

/// GET /api/historico/{id}
pub async fn get_history<R>(
    State(state): State<WalletAppState<R>>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> WalletResult<Json<HistoryResponse>>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    auth.require_subject(id).map_err(|_| WalletError::Forbidden)?;

    let use_case = GetHistoryUseCase::new(state.repo.clone(), state.config.clone());
    let entries = use_case.execute(UserId::from_uuid(id)).await?;

    Ok(Json(HistoryResponse {
        sucesso: true,
        historico: entries.into_iter().map(HistoryEntryDto::from_entry).collect(),
    }))
}

// ============================================================================
// Withdrawal
// ============================================================================

/// POST /api/withdraw
pub async fn request_withdrawal<R>(
    State(state): State<WalletAppState<R>>,
    auth: AuthUser,
    Json(req): Json<WithdrawRequest>,
) -> WalletResult<Json<WithdrawResponse>>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = RequestWithdrawalUseCase::new(state.repo.clone(), state.config.clone());

    let input = RequestWithdrawalInput {
        user_id: UserId::from_uuid(auth.0.user_id),
        valor: req.valor,
        numero_express: req.numero_express,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(WithdrawResponse {
        sucesso: true,
        mensagem: "Saque solicitado; aguarde a revisão".to_string(),
        saldo_atual: output.saldo_atual,
        saque_id: output.saque_id,
    }))
}

// ============================================================================
// Admin
// ============================================================================

/// GET /api/admin/saques
pub async fn list_pending_withdrawals<R>(
    State(state): State<WalletAppState<R>>,
    _gate: AdminGate,
) -> WalletResult<Json<PendingWithdrawalsResponse>>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListPendingWithdrawalsUseCase::new(state.repo.clone());
    let pending = use_case.execute().await?;

    Ok(Json(PendingWithdrawalsResponse {
        sucesso: true,
        saques: pending
            .into_iter()
            .map(PendingWithdrawalDto::from_pending)
            .collect(),
    }))
}

/// POST /api/admin/markPaid
pub async fn mark_paid<R>(
    State(state): State<WalletAppState<R>>,
    _gate: AdminGate,
    Json(req): Json<MarkPaidRequest>,
) -> WalletResult<Json<MarkPaidResponse>>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let Some(saque_id) = req.saque_id else {
        return Err(WalletError::Validation("Informe o saque_id".to_string()));
    };

    let use_case = MarkPaidUseCase::new(state.repo.clone());
    use_case.execute(WithdrawalId::from_uuid(saque_id)).await?;

    Ok(Json(MarkPaidResponse {
        sucesso: true,
        mensagem: "Saque marcado como pago".to_string(),
    }))
}

/// GET /api/admin/usuarios
pub async fn list_users<R>(
    State(state): State<WalletAppState<R>>,
    _gate: AdminGate,
) -> WalletResult<Json<UsersResponse>>
where
    R: LedgerRepository + AdminRepository + Clone + Send + Sync + 'static,
{
    let use_case = ListUsersUseCase::new(state.repo.clone());
    let users = use_case.execute().await?;

    Ok(Json(UsersResponse {
        sucesso: true,
        usuarios: users.into_iter().map(AccountSummaryDto::from_summary).collect(),
    }))
}
