//! Reminder intent projection for the notification layer.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::events::{EventKind, PayCloseEvent};

/// A concrete "notify the user on this date" instruction. Delivery,
/// channels, and retries belong to whoever consumes these.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReminderIntent {
    pub intent_id: String,
    pub card_id: String,
    pub title: String,
    pub body: String,
    pub fire_on: NaiveDate,
    pub dedupe_key: String,
}

/// Project enabled events into reminder intents.
///
/// An intent fires `notification_days_before` days ahead of its event; a
/// lead window that already started fires today. Events with reminders
/// switched off project nothing.
pub fn project_event_reminders(events: &[PayCloseEvent], today: NaiveDate) -> Vec<ReminderIntent> {
    let mut out = Vec::new();

    for event in events {
        if !event.notification_enabled {
            continue;
        }

        let lead_start = event.date - Duration::days(event.notification_days_before);
        let fire_on = lead_start.max(today);

        let title = match event.kind {
            EventKind::Closing => format!("Closing reminder: {}", event.card_name),
            EventKind::Payment => format!("Payment reminder: {}", event.card_name),
        };
        let body = match event.amount {
            Some(minimum) => format!(
                "{} payment is due in {} days (minimum ${:.2}).",
                event.card_name, event.days_until, minimum
            ),
            None => format!(
                "{} closes its statement in {} days.",
                event.card_name, event.days_until
            ),
        };

        // Unique per concrete (card, kind, date) slot.
        let dedupe_key = format!("{}:{}:{}", event.card_id, event.kind.as_str(), event.date);

        out.push(ReminderIntent {
            intent_id: format!("pc-{}", event.id),
            card_id: event.card_id.clone(),
            title,
            body,
            fire_on,
            dedupe_key,
        });
    }

    out
}
