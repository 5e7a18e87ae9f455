//! Grace/billing phase classification within a statement cycle.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::calendar;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CyclePhase {
    /// Between the last closing and the upcoming due date: the previous
    /// statement's balance is payable without counting as new spend.
    Grace,
    /// Anywhere else in the cycle: nothing is currently due.
    Billing,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PhaseView {
    pub phase: CyclePhase,
    pub last_closing: NaiveDate,
}

/// Classify `today` against the upcoming closing and due dates.
///
/// The most recent past closing is approximated as `next_closing` minus
/// one calendar month (clamped), not recomputed from the day-of-month
/// rule. Near short months the two can differ by a few days; the
/// approximation is deliberate.
pub fn classify_phase(next_closing: NaiveDate, next_due: NaiveDate, today: NaiveDate) -> PhaseView {
    let last_closing = calendar::sub_months(next_closing, 1);
    let phase = if today > last_closing && today < next_due {
        CyclePhase::Grace
    } else {
        CyclePhase::Billing
    };
    PhaseView {
        phase,
        last_closing,
    }
}
