//! Wallet Configuration

use std::time::Duration;

use crate::domain::category::Category;

/// Reward schedule and withdrawal policy.
///
/// Amounts are in the smallest currency unit. The server owns this
/// schedule: client-supplied reward values are never trusted.
#[derive(Debug, Clone)]
pub struct WalletConfig {
    /// Credit per completed rewarded ad
    pub reward_ad: i64,
    /// Credit per referral-link share
    pub reward_share: i64,
    /// Minimum cash-out amount
    pub min_withdraw: i64,
    /// Calendar-day cap per task/ad category
    pub max_tasks_per_day: i64,
    /// Rolling window during which a second share earns nothing
    pub share_window: Duration,
    /// Maximum history entries returned per listing
    pub history_page_size: i64,
}

impl Default for WalletConfig {
    fn default() -> Self {
        Self {
            reward_ad: 500,
            reward_share: 500,
            min_withdraw: 600_000,
            max_tasks_per_day: 60,
            share_window: Duration::from_secs(24 * 60 * 60),
            history_page_size: 100,
        }
    }
}

impl WalletConfig {
    /// Development configuration
    pub fn development() -> Self {
        Self::default()
    }

    /// Server-side reward for a task-claimable category
    pub fn reward_for(&self, category: Category) -> i64 {
        match category {
            Category::Anuncio => self.reward_ad,
            Category::Tarefa => self.reward_ad,
            Category::Compartilhamento => self.reward_share,
            Category::Saque => 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = WalletConfig::default();
        assert_eq!(config.reward_ad, 500);
        assert_eq!(config.reward_share, 500);
        assert_eq!(config.min_withdraw, 600_000);
        assert_eq!(config.max_tasks_per_day, 60);
        assert_eq!(config.share_window, Duration::from_secs(86_400));
    }

    #[test]
    fn test_reward_schedule() {
        let config = WalletConfig::default();
        assert_eq!(config.reward_for(Category::Anuncio), 500);
        assert_eq!(config.reward_for(Category::Compartilhamento), 500);
        assert_eq!(config.reward_for(Category::Saque), 0);
    }
}
