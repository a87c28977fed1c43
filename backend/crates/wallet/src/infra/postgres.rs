//! PostgreSQL Ledger Repository
//!
//! Every mutation runs inside a transaction that first takes a per-user
//! advisory lock, so the window check and the balance+history write are
//! serialized against other requests for the same user. The saldo column
//! carries a CHECK (saldo >= 0) and debits are conditional updates, so
//! the database rejects a negative balance even if a bug slipped past
//! the checks here.

use chrono::{DateTime, Utc};
use kernel::id::{EntryId, ShareEventId, UserId, WithdrawalId};
use sqlx::{PgConnection, PgPool};
use uuid::Uuid;

use crate::domain::category::Category;
use crate::domain::entity::{AccountSummary, HistoryEntry, PendingWithdrawal};
use crate::domain::repository::{
    AdminRepository, LedgerRepository, ShareReward, TaskReward, WithdrawalIntent,
};
use crate::error::{WalletError, WalletResult};

/// PostgreSQL-backed ledger repository
#[derive(Clone)]
pub struct PgLedgerRepository {
    pool: PgPool,
}

impl PgLedgerRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Serialize all mutations for one user within the current transaction.
/// The lock is released automatically at commit or rollback.
async fn lock_user(conn: &mut PgConnection, user_id: UserId) -> WalletResult<()> {
    sqlx::query("SELECT pg_advisory_xact_lock(hashtextextended($1::text, 0))")
        .bind(user_id.as_uuid())
        .execute(conn)
        .await?;
    Ok(())
}

/// Credit or debit the balance row; debits are conditional so the
/// balance can never pass below zero.
async fn apply_to_balance(
    conn: &mut PgConnection,
    user_id: UserId,
    amount: i64,
) -> WalletResult<i64> {
    let new_balance = sqlx::query_scalar::<_, i64>(
        r#"
        UPDATE usuarios
        SET saldo = saldo + $2
        WHERE user_id = $1 AND saldo + $2 >= 0
        RETURNING saldo
        "#,
    )
    .bind(user_id.as_uuid())
    .bind(amount)
    .fetch_optional(&mut *conn)
    .await?;

    match new_balance {
        Some(saldo) => Ok(saldo),
        // Distinguish a missing account from an uncovered debit
        None => {
            let exists = sqlx::query_scalar::<_, bool>(
                "SELECT EXISTS(SELECT 1 FROM usuarios WHERE user_id = $1)",
            )
            .bind(user_id.as_uuid())
            .fetch_one(conn)
            .await?;

            if exists {
                Err(WalletError::InsufficientFunds)
            } else {
                Err(WalletError::UserNotFound)
            }
        }
    }
}

/// Append one audit-log row in the current transaction
async fn append_history(
    conn: &mut PgConnection,
    user_id: UserId,
    category: Category,
    description: &str,
    amount: i64,
    ad_ref: Option<&str>,
) -> WalletResult<EntryId> {
    let entry_id = EntryId::new();
    sqlx::query(
        r#"
        INSERT INTO historico (
            entry_id,
            user_id,
            categoria,
            descricao,
            valor,
            anuncio_id,
            criado_em
        ) VALUES ($1, $2, $3, $4, $5, $6, $7)
        "#,
    )
    .bind(entry_id.as_uuid())
    .bind(user_id.as_uuid())
    .bind(category.as_str())
    .bind(description)
    .bind(amount)
    .bind(ad_ref)
    .bind(Utc::now())
    .execute(conn)
    .await?;

    Ok(entry_id)
}

impl LedgerRepository for PgLedgerRepository {
    async fn balance(&self, user_id: UserId) -> WalletResult<i64> {
        let saldo = sqlx::query_scalar::<_, i64>(
            "SELECT saldo FROM usuarios WHERE user_id = $1",
        )
        .bind(user_id.as_uuid())
        .fetch_optional(&self.pool)
        .await?;

        saldo.ok_or(WalletError::UserNotFound)
    }

    async fn list_history(&self, user_id: UserId, limit: i64) -> WalletResult<Vec<HistoryEntry>> {
        let rows = sqlx::query_as::<_, HistoryRow>(
            r#"
            SELECT
                entry_id,
                user_id,
                categoria,
                descricao,
                valor,
                anuncio_id,
                criado_em
            FROM historico
            WHERE user_id = $1
            ORDER BY criado_em DESC
            LIMIT $2
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(limit)
        .fetch_all(&self.pool)
        .await?;

        rows.into_iter().map(|r| r.into_entry()).collect()
    }

    async fn count_events_in_window(
        &self,
        user_id: UserId,
        category: Category,
        window_start: DateTime<Utc>,
    ) -> WalletResult<i64> {
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM historico
            WHERE user_id = $1 AND categoria = $2 AND criado_em >= $3
            "#,
        )
        .bind(user_id.as_uuid())
        .bind(category.as_str())
        .bind(window_start)
        .fetch_one(&self.pool)
        .await?;

        Ok(count)
    }

    async fn record_task_reward(
        &self,
        reward: TaskReward,
        window_start: DateTime<Utc>,
        daily_cap: i64,
    ) -> WalletResult<i64> {
        let mut tx = self.pool.begin().await?;
        lock_user(&mut *tx, reward.user_id).await?;

        // Window check under the lock: racing requests queue behind it
        let count = sqlx::query_scalar::<_, i64>(
            r#"
            SELECT COUNT(*) FROM historico
            WHERE user_id = $1 AND categoria = $2 AND criado_em >= $3
            "#,
        )
        .bind(reward.user_id.as_uuid())
        .bind(reward.category.as_str())
        .bind(window_start)
        .fetch_one(&mut *tx)
        .await?;

        if count >= daily_cap {
            return Err(WalletError::DailyLimitReached);
        }

        let saldo = apply_to_balance(&mut *tx, reward.user_id, reward.amount).await?;
        append_history(
            &mut *tx,
            reward.user_id,
            reward.category,
            &reward.description,
            reward.amount,
            reward.ad_ref.as_deref(),
        )
        .await?;

        tx.commit().await?;
        Ok(saldo)
    }

    async fn record_share(
        &self,
        share: ShareReward,
        window_start: DateTime<Utc>,
    ) -> WalletResult<i64> {
        let mut tx = self.pool.begin().await?;
        lock_user(&mut *tx, share.user_id).await?;

        let recent = sqlx::query_scalar::<_, bool>(
            r#"
            SELECT EXISTS(
                SELECT 1 FROM compartilhamentos
                WHERE user_id = $1 AND criado_em > $2
            )
            "#,
        )
        .bind(share.user_id.as_uuid())
        .bind(window_start)
        .fetch_one(&mut *tx)
        .await?;

        if recent {
            return Err(WalletError::ShareWindowActive);
        }

        let saldo = apply_to_balance(&mut *tx, share.user_id, share.amount).await?;

        let share_id = ShareEventId::new();
        sqlx::query(
            r#"
            INSERT INTO compartilhamentos (
                share_id,
                user_id,
                link_id,
                plataforma,
                criado_em
            ) VALUES ($1, $2, $3, $4, $5)
            "#,
        )
        .bind(share_id.as_uuid())
        .bind(share.user_id.as_uuid())
        .bind(&share.link_id)
        .bind(&share.platform)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        append_history(
            &mut *tx,
            share.user_id,
            Category::Compartilhamento,
            &share.description,
            share.amount,
            None,
        )
        .await?;

        tx.commit().await?;
        Ok(saldo)
    }

    async fn record_withdrawal(
        &self,
        intent: WithdrawalIntent,
    ) -> WalletResult<(i64, WithdrawalId)> {
        let mut tx = self.pool.begin().await?;
        lock_user(&mut *tx, intent.user_id).await?;

        let saldo = apply_to_balance(&mut *tx, intent.user_id, -intent.amount).await?;

        let withdrawal_id = WithdrawalId::new();
        sqlx::query(
            r#"
            INSERT INTO saques (
                saque_id,
                user_id,
                valor,
                numero_express,
                status,
                criado_em
            ) VALUES ($1, $2, $3, $4, 'pendente', $5)
            "#,
        )
        .bind(withdrawal_id.as_uuid())
        .bind(intent.user_id.as_uuid())
        .bind(intent.amount)
        .bind(&intent.express_number)
        .bind(Utc::now())
        .execute(&mut *tx)
        .await?;

        append_history(
            &mut *tx,
            intent.user_id,
            Category::Saque,
            &format!("Saque solicitado ({})", withdrawal_id),
            -intent.amount,
            None,
        )
        .await?;

        tx.commit().await?;
        Ok((saldo, withdrawal_id))
    }
}

impl AdminRepository for PgLedgerRepository {
    async fn list_pending_withdrawals(&self) -> WalletResult<Vec<PendingWithdrawal>> {
        let rows = sqlx::query_as::<_, PendingWithdrawalRow>(
            r#"
            SELECT
                s.saque_id,
                s.user_id,
                u.telefone,
                s.valor,
                s.numero_express,
                s.criado_em
            FROM saques s
            JOIN usuarios u ON u.user_id = s.user_id
            WHERE s.status = 'pendente'
            ORDER BY s.criado_em ASC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_pending()).collect())
    }

    async fn mark_paid(&self, withdrawal_id: WithdrawalId) -> WalletResult<bool> {
        let result = sqlx::query(
            r#"
            UPDATE saques
            SET status = 'pago', pago_em = $2
            WHERE saque_id = $1 AND status = 'pendente'
            "#,
        )
        .bind(withdrawal_id.as_uuid())
        .bind(Utc::now())
        .execute(&self.pool)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    async fn list_users(&self) -> WalletResult<Vec<AccountSummary>> {
        let rows = sqlx::query_as::<_, AccountRow>(
            r#"
            SELECT
                user_id,
                telefone,
                idade,
                saldo,
                criado_em
            FROM usuarios
            ORDER BY criado_em DESC
            "#,
        )
        .fetch_all(&self.pool)
        .await?;

        Ok(rows.into_iter().map(|r| r.into_summary()).collect())
    }
}

// ============================================================================
// Row Types for sqlx mapping
// ============================================================================

#[derive(sqlx::FromRow)]
struct HistoryRow {
    entry_id: Uuid,
    user_id: Uuid,
    categoria: String,
    descricao: String,
    valor: i64,
    anuncio_id: Option<String>,
    criado_em: DateTime<Utc>,
}

impl HistoryRow {
    fn into_entry(self) -> WalletResult<HistoryEntry> {
        let category = Category::parse(&self.categoria)
            .map_err(|_| WalletError::Internal(format!("Unknown category: {}", self.categoria)))?;

        Ok(HistoryEntry {
            entry_id: EntryId::from_uuid(self.entry_id),
            user_id: UserId::from_uuid(self.user_id),
            category,
            description: self.descricao,
            amount: self.valor,
            ad_ref: self.anuncio_id,
            created_at: self.criado_em,
        })
    }
}

#[derive(sqlx::FromRow)]
struct PendingWithdrawalRow {
    saque_id: Uuid,
    user_id: Uuid,
    telefone: String,
    valor: i64,
    numero_express: String,
    criado_em: DateTime<Utc>,
}

impl PendingWithdrawalRow {
    fn into_pending(self) -> PendingWithdrawal {
        PendingWithdrawal {
            withdrawal_id: WithdrawalId::from_uuid(self.saque_id),
            user_id: UserId::from_uuid(self.user_id),
            phone: self.telefone,
            amount: self.valor,
            express_number: self.numero_express,
            created_at: self.criado_em,
        }
    }
}

#[derive(sqlx::FromRow)]
struct AccountRow {
    user_id: Uuid,
    telefone: String,
    idade: i16,
    saldo: i64,
    criado_em: DateTime<Utc>,
}

impl AccountRow {
    fn into_summary(self) -> AccountSummary {
        AccountSummary {
            user_id: UserId::from_uuid(self.user_id),
            phone: self.telefone,
            age: self.idade,
            balance: self.saldo,
            created_at: self.criado_em,
        }
    }
}
