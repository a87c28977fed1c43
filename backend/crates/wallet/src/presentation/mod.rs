//! Presentation Layer

pub mod admin_gate;
pub mod dto;
pub mod handlers;
pub mod router;
