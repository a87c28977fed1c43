//! HTTP Handlers

use axum::Json;
use axum::extract::{FromRef, State};
use std::sync::Arc;

use crate::application::config::IdentityConfig;
use crate::application::session::SessionSigner;
use crate::application::{LoginInput, LoginUseCase, RegisterInput, RegisterUseCase};
use crate::domain::repository::UserRepository;
use crate::error::IdentityResult;
use crate::presentation::dto::{
    LoginRequest, LoginResponse, RegisterRequest, RegisterResponse, UserSummary,
    UserSummaryWithBalance,
};

/// Shared state for identity handlers
#[derive(Clone)]
pub struct IdentityAppState<R>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    pub repo: Arc<R>,
    pub config: Arc<IdentityConfig>,
    pub signer: Arc<SessionSigner>,
}

impl<R> FromRef<IdentityAppState<R>> for Arc<SessionSigner>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    fn from_ref(state: &IdentityAppState<R>) -> Self {
        state.signer.clone()
    }
}

// ============================================================================
// Register
// ============================================================================

/// POST /api/register
pub async fn register<R>(
    State(state): State<IdentityAppState<R>>,
    Json(req): Json<RegisterRequest>,
) -> IdentityResult<Json<RegisterResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = RegisterUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.signer.clone(),
    );

    let input = RegisterInput {
        telefone: req.telefone,
        senha: req.senha,
        idade: req.idade,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(RegisterResponse {
        sucesso: true,
        mensagem: "Conta criada com sucesso".to_string(),
        usuario: UserSummary {
            id: output.user_id,
            telefone: output.telefone,
        },
        token: output.token,
    }))
}

// ============================================================================
// Login
// ============================================================================

/// POST /api/login
pub async fn login<R>(
    State(state): State<IdentityAppState<R>>,
    Json(req): Json<LoginRequest>,
) -> IdentityResult<Json<LoginResponse>>
where
    R: UserRepository + Clone + Send + Sync + 'static,
{
    let use_case = LoginUseCase::new(
        state.repo.clone(),
        state.config.clone(),
        state.signer.clone(),
    );

    let input = LoginInput {
        telefone: req.telefone,
        senha: req.senha,
    };

    let output = use_case.execute(input).await?;

    Ok(Json(LoginResponse {
        sucesso: true,
        usuario: UserSummaryWithBalance {
            id: output.user_id,
            telefone: output.telefone,
            saldo: output.saldo,
        },
        token: output.token,
    }))
}
