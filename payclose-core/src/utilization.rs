//! Portfolio credit-utilization summary.

use serde::{Deserialize, Serialize};

use crate::profile::BillingProfile;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardUtilization {
    pub id: String,
    pub name: String,
    pub limit: f64,
    pub balance: f64,
    /// Percent of the limit in use; 0.0 when no limit is set.
    pub utilization: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UtilizationSummary {
    pub total_limit: f64,
    pub total_balance: f64,
    pub utilization_percentage: f64,
    pub cards: Vec<CardUtilization>,
}

/// Per-card and portfolio-wide utilization.
pub fn utilization_summary(cards: &[BillingProfile]) -> UtilizationSummary {
    let mut total_limit = 0.0;
    let mut total_balance = 0.0;

    let per_card: Vec<CardUtilization> = cards
        .iter()
        .map(|card| {
            total_limit += card.credit_limit;
            total_balance += card.balance;
            CardUtilization {
                id: card.id.clone(),
                name: card.name.clone(),
                limit: card.credit_limit,
                balance: card.balance,
                utilization: percent_of(card.balance, card.credit_limit),
            }
        })
        .collect();

    UtilizationSummary {
        total_limit,
        total_balance,
        utilization_percentage: percent_of(total_balance, total_limit),
        cards: per_card,
    }
}

fn percent_of(part: f64, whole: f64) -> f64 {
    if whole > 0.0 { (part / whole) * 100.0 } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_totals_and_per_card() {
        let cards = vec![
            BillingProfile::new("a", "A", "Chase")
                .with_balance(1000.0)
                .with_credit_limit(5000.0),
            BillingProfile::new("b", "B", "Amex")
                .with_balance(500.0)
                .with_credit_limit(5000.0),
        ];
        let summary = utilization_summary(&cards);

        assert_eq!(summary.total_limit, 10000.0);
        assert_eq!(summary.total_balance, 1500.0);
        assert_eq!(summary.utilization_percentage, 15.0);
        assert_eq!(summary.cards[0].utilization, 20.0);
        assert_eq!(summary.cards[1].utilization, 10.0);
    }

    #[test]
    fn test_zero_limit_guards_division() {
        let cards = vec![BillingProfile::new("a", "A", "Chase").with_balance(100.0)];
        let summary = utilization_summary(&cards);

        assert_eq!(summary.cards[0].utilization, 0.0);
        assert_eq!(summary.utilization_percentage, 0.0);
    }

    #[test]
    fn test_empty_portfolio() {
        let summary = utilization_summary(&[]);
        assert_eq!(summary.utilization_percentage, 0.0);
        assert!(summary.cards.is_empty());
    }
}
