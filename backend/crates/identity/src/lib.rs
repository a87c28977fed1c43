//! Identity & Session Backend Module
//!
//! Clean Architecture structure:
//! - `domain/` - User entity, phone value object, repository trait
//! - `application/` - Register/login use cases, session token signing
//! - `infra/` - PostgreSQL repository
//! - `presentation/` - HTTP handlers, DTOs, router, auth extractor
//!
//! ## Security Model
//! - Passwords hashed with Argon2id (optional application pepper)
//! - Stateless bearer tokens: HMAC-SHA256 signed claims with 7-day expiry
//! - Unknown phone and wrong password are indistinguishable to the client

pub mod application;
pub mod domain;
pub mod error;
pub mod infra;
pub mod presentation;

// Re-exports for convenience
pub use application::config::IdentityConfig;
pub use application::session::{SessionClaims, SessionSigner};
pub use error::{IdentityError, IdentityResult};
pub use infra::postgres::PgUserRepository;
pub use presentation::extract::AuthUser;
pub use presentation::router::identity_router;

// Re-export kernel error types for unified error handling
pub use kernel::error::{
    app_error::{AppError, AppResult},
    kind::ErrorKind,
};
