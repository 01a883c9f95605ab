//! Storefront analytics snapshot.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Headline numbers shown on the storefront dashboard.
///
/// The snapshot is display-only: it is set once when the store state is
/// created and never updated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalyticsSnapshot {
    /// Revenue attributed to recommendations, in dollars.
    pub total_revenue: Decimal,
    /// Conversion rate as a percentage.
    pub conversion_rate: Decimal,
    pub active_users: u32,
    /// Recommendation accuracy as a percentage.
    pub ai_accuracy: Decimal,
}

impl Default for AnalyticsSnapshot {
    fn default() -> Self {
        Self {
            total_revenue: Decimal::new(12_500_000, 0),
            conversion_rate: Decimal::new(473, 1),
            active_users: 125_000,
            ai_accuracy: Decimal::new(894, 1),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_snapshot_values() {
        let snapshot = AnalyticsSnapshot::default();
        assert_eq!(snapshot.total_revenue.to_string(), "12500000");
        assert_eq!(snapshot.conversion_rate.to_string(), "47.3");
        assert_eq!(snapshot.active_users, 125_000);
        assert_eq!(snapshot.ai_accuracy.to_string(), "89.4");
    }
}
