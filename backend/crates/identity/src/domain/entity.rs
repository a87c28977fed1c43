//! User Entity

use chrono::{DateTime, Utc};
use kernel::id::UserId;
use platform::password::HashedPassword;

use crate::domain::phone::Phone;

/// A registered wallet account.
///
/// The balance column lives on this row but is mutated only by the wallet
/// crate's ledger transactions; identity reads it for the login response.
#[derive(Debug, Clone)]
pub struct User {
    pub user_id: UserId,
    pub phone: Phone,
    pub password_hash: HashedPassword,
    pub age: i16,
    /// Balance in the smallest currency unit, never negative
    pub balance: i64,
    pub created_at: DateTime<Utc>,
}

impl User {
    /// Create a new account with a zero balance
    pub fn new(phone: Phone, password_hash: HashedPassword, age: i16) -> Self {
        Self {
            user_id: UserId::new(),
            phone,
            password_hash,
            age,
            balance: 0,
            created_at: Utc::now(),
        }
    }
}
