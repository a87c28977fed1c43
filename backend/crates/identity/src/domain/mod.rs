//! Domain Layer

pub mod entity;
pub mod phone;
pub mod repository;
