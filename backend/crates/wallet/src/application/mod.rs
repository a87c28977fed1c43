//! Application Layer - Use Cases

pub mod admin;
pub mod balance;
pub mod config;
pub mod history;
pub mod share;
pub mod task;
pub mod withdraw;

pub use admin::{ListPendingWithdrawalsUseCase, ListUsersUseCase, MarkPaidUseCase};
pub use balance::GetBalanceUseCase;
pub use history::GetHistoryUseCase;
pub use share::{SubmitShareInput, SubmitShareUseCase};
pub use task::{SubmitTaskInput, SubmitTaskOutput, SubmitTaskUseCase};
pub use withdraw::{RequestWithdrawalInput, RequestWithdrawalOutput, RequestWithdrawalUseCase};
