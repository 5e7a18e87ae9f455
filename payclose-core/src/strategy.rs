//! Strategy synthesis: turns one billing profile plus "today" into the
//! upcoming cycle dates, the current phase, and a list of actionable
//! recommendations for keeping reported utilization low.

use chrono::{Duration, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::business::BusinessCardMatcher;
use crate::calendar;
use crate::phase::{CyclePhase, classify_phase};
use crate::profile::BillingProfile;

/// Within this many days of closing, paying down the balance now is the
/// move that changes what gets reported.
const PAY_NOW_LEAD_DAYS: i64 = 3;
/// Financing window asserted for business cards.
const BUSINESS_FINANCING_DAYS: i64 = 60;
/// Days past the due date a business card stays interest-free.
const BUSINESS_NO_INTEREST_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Urgent,
    Optimal,
    Info,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub severity: Severity,
    pub message: String,
    pub action: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct OptimizeCredit {
    pub should_pay_now: bool,
    pub payment_date: NaiveDate,
    pub stop_usage_date: NaiveDate,
    pub resume_usage_date: NaiveDate,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BusinessStrategy {
    /// Outside grace there is no statement balance to protect.
    pub can_use_freely: bool,
    pub max_financing_days: i64,
    pub no_interest_until: NaiveDate,
    pub no_credit_reporting: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PayCloseStrategy {
    pub next_closing_date: NaiveDate,
    pub next_due_date: NaiveDate,
    pub days_until_closing: i64,
    pub days_until_due: i64,
    pub current_phase: CyclePhase,
    /// Last day a payment can post and still be reflected before the cut.
    pub payment_deadline_for_zero_util: NaiveDate,
    pub days_until_payment_deadline: i64,
    /// First day new spend lands on the following statement.
    pub safe_usage_start_date: NaiveDate,
    /// Live balance during grace; nothing is due during billing.
    pub next_payment_amount: f64,
    pub optimize_credit: OptimizeCredit,
    pub business_strategy: Option<BusinessStrategy>,
    pub recommendations: Vec<Recommendation>,
}

/// Build the full strategy for one card.
///
/// Returns `None` when the card lacks a closing or due day. Callers treat
/// absence as the normal "not configured" state, not a failure.
pub fn build_strategy(
    profile: &BillingProfile,
    today: NaiveDate,
    matcher: &BusinessCardMatcher,
) -> Option<PayCloseStrategy> {
    let closing_day = profile.closing_day?;
    let due_day = profile.due_day?;

    let next_closing = calendar::next_occurrence(closing_day, today);
    let next_due = calendar::next_occurrence(due_day, today);
    let days_until_closing = calendar::days_until(next_closing, today);
    let days_until_due = calendar::days_until(next_due, today);

    let view = classify_phase(next_closing, next_due, today);
    let in_grace = view.phase == CyclePhase::Grace;

    let payment_deadline = next_closing - Duration::days(1);
    let safe_usage_start = next_closing + Duration::days(1);

    let is_business = matcher.matches(profile);

    let recommendations = recommendations(
        days_until_closing,
        days_until_due,
        profile.balance,
        is_business,
        in_grace,
    );

    let business_strategy = is_business.then(|| BusinessStrategy {
        can_use_freely: !in_grace,
        max_financing_days: BUSINESS_FINANCING_DAYS,
        no_interest_until: next_due + Duration::days(BUSINESS_NO_INTEREST_DAYS),
        no_credit_reporting: true,
    });

    Some(PayCloseStrategy {
        next_closing_date: next_closing,
        next_due_date: next_due,
        days_until_closing,
        days_until_due,
        current_phase: view.phase,
        payment_deadline_for_zero_util: payment_deadline,
        days_until_payment_deadline: calendar::days_until(payment_deadline, today),
        safe_usage_start_date: safe_usage_start,
        next_payment_amount: if in_grace { profile.balance } else { 0.0 },
        optimize_credit: OptimizeCredit {
            should_pay_now: days_until_closing <= PAY_NOW_LEAD_DAYS && profile.balance > 0.0,
            payment_date: payment_deadline,
            stop_usage_date: payment_deadline,
            resume_usage_date: safe_usage_start,
        },
        business_strategy,
        recommendations,
    })
}

/// Fixed threshold rules, evaluated and emitted in this order.
///
/// Rules are independent: none suppresses another, and several can fire
/// for the same card on the same day.
fn recommendations(
    days_until_closing: i64,
    days_until_due: i64,
    balance: f64,
    is_business: bool,
    in_grace: bool,
) -> Vec<Recommendation> {
    let mut out = Vec::new();

    if days_until_closing <= 1 && balance > 0.0 {
        out.push(Recommendation {
            severity: Severity::Urgent,
            message: "Your card closes in less than 24 hours".to_string(),
            action: "Pay the full balance today to report 0% utilization".to_string(),
        });
    }

    if days_until_due <= 2 && in_grace {
        out.push(Recommendation {
            severity: Severity::Urgent,
            message: "Your payment due date is very close".to_string(),
            action: "Pay whatever is still pending from the last statement".to_string(),
        });
    }

    if (2..=5).contains(&days_until_closing) && balance > 0.0 {
        out.push(Recommendation {
            severity: Severity::Optimal,
            message: "Good window to optimize your reported utilization".to_string(),
            action: format!(
                "Pay in full within {} days and stop using the card",
                days_until_closing - 1
            ),
        });
    }

    if days_until_closing >= 1 && balance == 0.0 {
        out.push(Recommendation {
            severity: Severity::Optimal,
            message: "Your card will report 0% utilization".to_string(),
            action: "Use the card freely again after the closing date".to_string(),
        });
    }

    if is_business && !in_grace {
        out.push(Recommendation {
            severity: Severity::Info,
            message: "Business card: no personal bureau reporting".to_string(),
            action: "Take up to 60 days of interest-free financing".to_string(),
        });
    }

    out
}
