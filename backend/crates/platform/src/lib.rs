//! Platform - Cross-cutting technical services
//!
//! Infrastructure-level building blocks with no domain knowledge:
//! - `crypto` - random bytes, hashing, base64, constant-time comparison
//! - `password` - Argon2id password hashing with zeroization

pub mod crypto;
pub mod password;
