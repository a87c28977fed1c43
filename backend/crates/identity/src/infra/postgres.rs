//! PostgreSQL Repository Implementations

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;
use sqlx::PgPool;
use uuid::Uuid;

use crate::domain::entity::User;
use crate::domain::phone::Phone;
use crate::domain::repository::UserRepository;
use crate::error::{IdentityError, IdentityResult};

/// PostgreSQL-backed user repository
#[derive(Clone)]
pub struct PgUserRepository {
    pool: PgPool,
}

impl PgUserRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

impl UserRepository for PgUserRepository {
    async fn create(&self, user: &User) -> IdentityResult<()> {
        let result = sqlx::query(
            r#"
            INSERT INTO usuarios (
                user_id,
                telefone,
                senha_hash,
                idade,
                saldo,
                criado_em
            ) VALUES ($1, $2, $3, $4, $5, $6)
            "#,
        )
        .bind(user.user_id.as_uuid())
        .bind(user.phone.as_str())
        .bind(user.password_hash.as_phc_string())
        .bind(user.age)
        .bind(user.balance)
        .bind(user.created_at)
        .execute(&self.pool)
        .await;

        match result {
            Ok(_) => Ok(()),
            // Racing duplicate registration hits the unique constraint
            Err(sqlx::Error::Database(db_err)) if db_err.code().as_deref() == Some("23505") => {
                Err(IdentityError::PhoneTaken)
            }
            Err(e) => Err(e.into()),
        }
    }

    async fn find_by_phone(&self, phone: &Phone) -> IdentityResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            r#"
            SELECT
                user_id,
                telefone,
                senha_hash,
                idade,
                saldo,
                criado_em
            FROM usuarios
            WHERE telefone = $1
            "#,
        )
        .bind(phone.as_str())
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| r.into_user()).transpose()
    }

    async fn exists_by_phone(&self, phone: &Phone) -> IdentityResult<bool> {
        let exists = sqlx::query_scalar::<_, bool>(
            "SELECT EXISTS(SELECT 1 FROM usuarios WHERE telefone = $1)",
        )
        .bind(phone.as_str())
        .fetch_one(&self.pool)
        .await?;

        Ok(exists)
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct UserRow {
    user_id: Uuid,
    telefone: String,
    senha_hash: String,
    idade: i16,
    saldo: i64,
    criado_em: DateTime<Utc>,
}

impl UserRow {
    fn into_user(self) -> IdentityResult<User> {
        let phone = Phone::new(&self.telefone)
            .map_err(|e| IdentityError::Internal(format!("Invalid stored phone: {}", e)))?;

        let password_hash = HashedPassword::from_phc_string(self.senha_hash)
            .map_err(|e| IdentityError::Internal(format!("Invalid stored hash: {}", e)))?;

        Ok(User {
            user_id: UserId::from_uuid(self.user_id),
            phone,
            password_hash,
            age: self.idade,
            balance: self.saldo,
            created_at: self.criado_em,
        })
    }
}
