//! Register Use Case
//!
//! Creates a new wallet account and issues its first session token.

use std::sync::Arc;

use platform::password::ClearTextPassword;
use uuid::Uuid;

use crate::application::config::IdentityConfig;
use crate::application::session::SessionSigner;
use crate::domain::entity::User;
use crate::domain::phone::Phone;
use crate::domain::repository::UserRepository;
use crate::error::{IdentityError, IdentityResult};

/// Register input (fields optional: absence is a validation error, not a 422)
pub struct RegisterInput {
    pub telefone: Option<String>,
    pub senha: Option<String>,
    pub idade: Option<i64>,
}

/// Register output
pub struct RegisterOutput {
    pub user_id: Uuid,
    pub telefone: String,
    pub token: String,
}

/// Register use case
pub struct RegisterUseCase<R>
where
    R: UserRepository,
{
    repo: Arc<R>,
    config: Arc<IdentityConfig>,
    signer: Arc<SessionSigner>,
}

impl<R> RegisterUseCase<R>
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

    pub async fn execute(&self, input: RegisterInput) -> IdentityResult<RegisterOutput> {
        let (Some(telefone), Some(senha), Some(idade)) =
            (input.telefone, input.senha, input.idade)
        else {
            return Err(IdentityError::MissingFields);
        };

        let phone = Phone::new(&telefone)?;

        // Age gate, checked only at creation
        if idade < 18 {
            return Err(IdentityError::Underage);
        }
        let idade = i16::try_from(idade).map_err(|_| IdentityError::InvalidAge)?;

        let password = ClearTextPassword::new(senha)
            .map_err(|e| IdentityError::PasswordPolicy(e.to_string()))?;

        if self.repo.exists_by_phone(&phone).await? {
            return Err(IdentityError::PhoneTaken);
        }

        let password_hash = password
            .hash(self.config.pepper())
            .map_err(|e| IdentityError::Internal(e.to_string()))?;

        let user = User::new(phone, password_hash, idade);

        // The unique constraint on telefone backs up the exists check;
        // the repository maps a racing duplicate insert to PhoneTaken.
        self.repo.create(&user).await?;

        let token = self
            .signer
            .issue(user.user_id.into_uuid(), user.phone.as_str())?;

        tracing::info!(user_id = %user.user_id, "User registered");

        Ok(RegisterOutput {
            user_id: user.user_id.into_uuid(),
            telefone: user.phone.as_str().to_string(),
            token,
        })
    }
}
