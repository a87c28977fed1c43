//! Repository Traits
//!
//! Interfaces for data persistence. Implementation is in infrastructure layer.

use crate::domain::entity::User;
use crate::domain::phone::Phone;
use crate::error::IdentityResult;

/// User repository trait
#[trait_variant::make(UserRepository: Send)]
pub trait LocalUserRepository {
    /// Persist a new user
    async fn create(&self, user: &User) -> IdentityResult<()>;

    /// Find user by canonical phone
    async fn find_by_phone(&self, phone: &Phone) -> IdentityResult<Option<User>>;

    /// Check if a phone is already registered
    async fn exists_by_phone(&self, phone: &Phone) -> IdentityResult<bool>;
}
