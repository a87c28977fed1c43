//! Login Use Case
//!
//! Authenticates a user and issues a fresh session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use uuid::Uuid;

use crate::application::config::IdentityConfig;
use crate::application::session::SessionSigner;
use crate::domain::phone::Phone;
use crate::domain::repository::UserRepository;
use crate::error::{IdentityError, IdentityResult};

/// Login input
pub struct LoginInput {
    pub telefone: Option<String>,
    pub senha: Option<String>,
}

/// Login output
pub struct LoginOutput {
    pub user_id: Uuid,
    pub telefone: String,
    pub saldo: i64,
    pub token: String,
}

/// Login use case
pub struct LoginUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<IdentityConfig>,
    signer: Arc<SessionSigner>,
}

impl<R> LoginUseCase<R>
where
    R: UserRepository,
{
    pub fn new(repo: Arc<R>, config: Arc<IdentityConfig>, signer: Arc<SessionSigner>) -> Self {
        Self {
            repo,
            config,
            signer,
        }
    }

    pub async fn execute(&self, input: LoginInput) -> IdentityResult<LoginOutput> {
        let (Some(telefone), Some(senha)) = (input.telefone, input.senha) else {
            return Err(IdentityError::MissingFields);
        };

        // Every failure below is the same generic credential error so the
        // client cannot enumerate registered phones.
        let phone = Phone::new(&telefone).map_err(|_| IdentityError::InvalidCredentials)?;

        let user = self
            .repo
            .find_by_phone(&phone)
            .await?
            .ok_or(IdentityError::InvalidCredentials)?;

        let password =
            ClearTextPassword::new(senha).map_err(|_| IdentityError::InvalidCredentials)?;

        if !user.password_hash.verify(&password, self.config.pepper()) {
            return Err(IdentityError::InvalidCredentials);
        }

        let token = self
            .signer
            .issue(user.user_id.into_uuid(), user.phone.as_str())?;

        tracing::info!(user_id = %user.user_id, "User logged in");

        Ok(LoginOutput {
            user_id: user.user_id.into_uuid(),
            telefone: user.phone.as_str().to_string(),
            saldo: user.balance,
            token,
        })
    }
}
