//! Application Layer - Use Cases

pub mod config;
pub mod login;
pub mod register;
pub mod session;

pub use login::{LoginInput, LoginOutput, LoginUseCase};
pub use register::{RegisterInput, RegisterOutput, RegisterUseCase};
