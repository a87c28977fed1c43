//! Reward Categories
//!
//! The category on a history entry decides which rate window and which
//! server-side reward amount applies. Wire values are the Portuguese
//! strings the client sends and the database stores.

use std::fmt;
use thiserror::Error;

/// Category parse error
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Categoria inválida")]
pub struct CategoryParseError;

/// Ledger entry category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    /// Rewarded ad completion, capped per calendar day
    Anuncio,
    /// Generic task completion, capped per calendar day
    Tarefa,
    /// Referral-link share, one reward per rolling 24h
    Compartilhamento,
    /// Withdrawal debit (negative amount)
    Saque,
}

impl Category {
    /// Database / wire string
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Anuncio => "anuncio",
            Category::Tarefa => "tarefa",
            Category::Compartilhamento => "compartilhamento",
            Category::Saque => "saque",
        }
    }

    /// Parse from the wire string
    pub fn parse(s: &str) -> Result<Self, CategoryParseError> {
        match s {
            "anuncio" => Ok(Category::Anuncio),
            "tarefa" => Ok(Category::Tarefa),
            "compartilhamento" => Ok(Category::Compartilhamento),
            "saque" => Ok(Category::Saque),
            _ => Err(CategoryParseError),
        }
    }

    /// True for categories a client may claim through the task endpoint
    pub fn is_task_rewardable(&self) -> bool {
        matches!(self, Category::Anuncio | Category::Tarefa)
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        for c in [
            Category::Anuncio,
            Category::Tarefa,
            Category::Compartilhamento,
            Category::Saque,
        ] {
            assert_eq!(Category::parse(c.as_str()), Ok(c));
        }
    }

    #[test]
    fn test_parse_rejects_unknown() {
        assert!(Category::parse("bonus").is_err());
        assert!(Category::parse("").is_err());
        assert!(Category::parse("Anuncio").is_err());
    }

    #[test]
    fn test_task_rewardable() {
        assert!(Category::Anuncio.is_task_rewardable());
        assert!(Category::Tarefa.is_task_rewardable());
        assert!(!Category::Compartilhamento.is_task_rewardable());
        assert!(!Category::Saque.is_task_rewardable());
    }
}
