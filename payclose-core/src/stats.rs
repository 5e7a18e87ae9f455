//! Aggregate counts over the event feed and card set.

use serde::{Deserialize, Serialize};

use crate::events::PayCloseEvent;
use crate::profile::BillingProfile;

const URGENT_WINDOW_DAYS: i64 = 2;
const UPCOMING_WINDOW_DAYS: i64 = 7;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayCloseStats {
    pub total_events: usize,
    /// Events landing within two days.
    pub urgent_events: usize,
    /// Events landing within a week.
    pub upcoming_events: usize,
    pub configured_cards: usize,
    pub total_cards: usize,
    /// Percent of cards with both cycle days set; 0.0 with no cards.
    pub configuration_rate: f64,
}

pub fn aggregate_stats(cards: &[BillingProfile], events: &[PayCloseEvent]) -> PayCloseStats {
    let configured = cards.iter().filter(|c| c.is_configured()).count();

    PayCloseStats {
        total_events: events.len(),
        urgent_events: events
            .iter()
            .filter(|e| e.days_until <= URGENT_WINDOW_DAYS)
            .count(),
        upcoming_events: events
            .iter()
            .filter(|e| e.days_until <= UPCOMING_WINDOW_DAYS)
            .count(),
        configured_cards: configured,
        total_cards: cards.len(),
        configuration_rate: if cards.is_empty() {
            0.0
        } else {
            (configured as f64 / cards.len() as f64) * 100.0
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::list_events;
    use chrono::NaiveDate;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn test_zero_cards_zero_rate() {
        let stats = aggregate_stats(&[], &[]);
        assert_eq!(stats.total_events, 0);
        assert_eq!(stats.configuration_rate, 0.0);
    }

    #[test]
    fn test_counts_and_rate() {
        let today = d(2026, 2, 1);
        let cards = vec![
            // Closing Feb 3 (2 days: urgent), due Feb 6 (5 days: upcoming).
            BillingProfile::new("a", "A", "Chase")
                .with_closing_day(3)
                .with_due_day(6),
            // Closing Feb 20: beyond both windows. No due day.
            BillingProfile::new("b", "B", "Amex").with_closing_day(20),
        ];
        let events = list_events(&cards, today);
        let stats = aggregate_stats(&cards, &events);

        assert_eq!(stats.total_events, 3);
        assert_eq!(stats.urgent_events, 1);
        assert_eq!(stats.upcoming_events, 2);
        assert_eq!(stats.configured_cards, 1);
        assert_eq!(stats.total_cards, 2);
        assert_eq!(stats.configuration_rate, 50.0);
    }
}
