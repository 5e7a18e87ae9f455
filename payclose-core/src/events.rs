//! Merged closing/payment event feed across a set of cards.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;
use crate::profile::BillingProfile;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Closing,
    Payment,
}

impl EventKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Closing => "closing",
            EventKind::Payment => "payment",
        }
    }
}

/// One upcoming cycle event for one card. Recomputed on every query,
/// never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayCloseEvent {
    pub id: String,
    pub card_id: String,
    pub card_name: String,
    pub card_bank: String,
    pub kind: EventKind,
    pub date: NaiveDate,
    pub days_until: i64,
    /// Minimum payment; present on payment events only.
    pub amount: Option<f64>,
    pub notification_enabled: bool,
    pub notification_days_before: i64,
}

/// One closing and one payment event per configured card, soonest first.
///
/// Events are emitted whenever the cycle day is configured; the reminder
/// flag rides along for the notification layer to gate delivery. Ties
/// keep the input card order (stable sort).
pub fn list_events(cards: &[BillingProfile], today: NaiveDate) -> Vec<PayCloseEvent> {
    let mut events = Vec::new();

    for card in cards {
        if let Some(day) = card.closing_day {
            let date = calendar::next_occurrence(day, today);
            events.push(PayCloseEvent {
                id: format!("{}-closing", card.id),
                card_id: card.id.clone(),
                card_name: card.name.clone(),
                card_bank: card.bank.clone(),
                kind: EventKind::Closing,
                date,
                days_until: calendar::days_until(date, today),
                amount: None,
                notification_enabled: card.reminder_closing,
                notification_days_before: card.days_before_closing,
            });
        }

        if let Some(day) = card.due_day {
            let date = calendar::next_occurrence(day, today);
            events.push(PayCloseEvent {
                id: format!("{}-payment", card.id),
                card_id: card.id.clone(),
                card_name: card.name.clone(),
                card_bank: card.bank.clone(),
                kind: EventKind::Payment,
                date,
                days_until: calendar::days_until(date, today),
                amount: Some(card.minimum_payment),
                notification_enabled: card.reminder_payment,
                notification_days_before: card.days_before_payment,
            });
        }
    }

    events.sort_by_key(|e| e.days_until);
    events
}
