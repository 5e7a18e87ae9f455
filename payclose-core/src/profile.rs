//! Billing profile: the read-only credit-card view the cycle engine consumes.

use anyhow::{Result, bail};
use serde::{Deserialize, Serialize};

/// Snapshot of one credit card's billing configuration.
///
/// Owned and persisted elsewhere; the engine only reads it. `closing_day`
/// and `due_day` are independent day-of-month values with no ordering
/// constraint between them; a card missing either is simply "not
/// configured" for cycle computation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BillingProfile {
    pub id: String,
    pub name: String,
    pub bank: String,

    /// Current outstanding amount.
    pub balance: f64,
    pub credit_limit: f64,
    pub minimum_payment: f64,

    /// Day-of-month (1-31) the statement closes.
    pub closing_day: Option<u32>,
    /// Day-of-month (1-31) payment is due.
    pub due_day: Option<u32>,

    pub reminder_closing: bool,
    pub reminder_payment: bool,

    /// Lead days (1-30) for closing reminders.
    pub days_before_closing: i64,
    /// Lead days (1-30) for payment reminders.
    pub days_before_payment: i64,
}

impl BillingProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>, bank: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            bank: bank.into(),
            balance: 0.0,
            credit_limit: 0.0,
            minimum_payment: 0.0,
            closing_day: None,
            due_day: None,
            reminder_closing: true,
            reminder_payment: true,
            days_before_closing: 3,
            days_before_payment: 5,
        }
    }

    pub fn with_balance(mut self, balance: f64) -> Self {
        self.balance = balance;
        self
    }

    pub fn with_credit_limit(mut self, limit: f64) -> Self {
        self.credit_limit = limit;
        self
    }

    pub fn with_minimum_payment(mut self, minimum: f64) -> Self {
        self.minimum_payment = minimum;
        self
    }

    pub fn with_closing_day(mut self, day: u32) -> Self {
        self.closing_day = Some(day);
        self
    }

    pub fn with_due_day(mut self, day: u32) -> Self {
        self.due_day = Some(day);
        self
    }

    pub fn with_reminders(mut self, closing: bool, payment: bool) -> Self {
        self.reminder_closing = closing;
        self.reminder_payment = payment;
        self
    }

    pub fn with_lead_days(mut self, before_closing: i64, before_payment: i64) -> Self {
        self.days_before_closing = before_closing;
        self.days_before_payment = before_payment;
        self
    }

    /// Both cycle days configured.
    pub fn is_configured(&self) -> bool {
        self.closing_day.is_some() && self.due_day.is_some()
    }

    /// Range checks for the layers that construct profiles.
    ///
    /// The engine itself never re-checks: out-of-range days must be
    /// rejected here, before a profile reaches any cycle computation.
    pub fn validate(&self) -> Result<()> {
        for (field, day) in [("closing_day", self.closing_day), ("due_day", self.due_day)] {
            if let Some(d) = day {
                if !(1..=31).contains(&d) {
                    bail!("card {}: {field} {d} is outside 1-31", self.id);
                }
            }
        }

        for (field, lead) in [
            ("days_before_closing", self.days_before_closing),
            ("days_before_payment", self.days_before_payment),
        ] {
            if !(1..=30).contains(&lead) {
                bail!("card {}: {field} {lead} is outside 1-30", self.id);
            }
        }

        for (field, amount) in [
            ("balance", self.balance),
            ("credit_limit", self.credit_limit),
            ("minimum_payment", self.minimum_payment),
        ] {
            if amount < 0.0 {
                bail!("card {}: {field} is negative", self.id);
            }
        }

        Ok(())
    }
}
