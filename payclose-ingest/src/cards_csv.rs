//! Hand-maintained card sheets: one card per CSV row.
//!
//! Expected header:
//! id,name,bank,balance,credit_limit,minimum_payment,closing_day,due_day,
//! reminder_closing,reminder_payment,days_before_closing,days_before_payment
//!
//! Empty cells fall back to the same defaults as the JSON snapshot.

use anyhow::{Context, Result};
use payclose_core::BillingProfile;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct CardRow {
    id: String,
    name: String,
    bank: String,
    #[serde(default)]
    balance: Option<f64>,
    #[serde(default)]
    credit_limit: Option<f64>,
    #[serde(default)]
    minimum_payment: Option<f64>,
    #[serde(default)]
    closing_day: Option<u32>,
    #[serde(default)]
    due_day: Option<u32>,
    #[serde(default)]
    reminder_closing: Option<bool>,
    #[serde(default)]
    reminder_payment: Option<bool>,
    #[serde(default)]
    days_before_closing: Option<i64>,
    #[serde(default)]
    days_before_payment: Option<i64>,
}

impl CardRow {
    fn into_profile(self) -> BillingProfile {
        let mut profile = BillingProfile::new(self.id, self.name, self.bank)
            .with_balance(self.balance.unwrap_or(0.0))
            .with_credit_limit(self.credit_limit.unwrap_or(0.0))
            .with_minimum_payment(self.minimum_payment.unwrap_or(0.0))
            .with_reminders(
                self.reminder_closing.unwrap_or(true),
                self.reminder_payment.unwrap_or(true),
            )
            .with_lead_days(
                self.days_before_closing.unwrap_or(3),
                self.days_before_payment.unwrap_or(5),
            );
        profile.closing_day = self.closing_day;
        profile.due_day = self.due_day;
        profile
    }
}

/// Parse a card sheet from CSV text. Rows that fail to deserialize are
/// skipped with a warning; rows that parse but carry out-of-range values
/// reject the whole sheet.
pub fn parse_cards_csv(text: &str) -> Result<Vec<BillingProfile>> {
    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());

    let mut profiles = Vec::new();
    for (i, row) in rdr.deserialize::<CardRow>().enumerate() {
        match row {
            Ok(row) => {
                let profile = row.into_profile();
                profile.validate()?;
                profiles.push(profile);
            }
            Err(err) => {
                tracing::warn!(row = i + 1, %err, "skipping unparseable card row");
            }
        }
    }
    Ok(profiles)
}

/// Parse a card sheet from a file on disk.
pub fn parse_cards_csv_file(path: impl AsRef<Path>) -> Result<Vec<BillingProfile>> {
    let text = fs::read_to_string(path.as_ref())
        .with_context(|| format!("reading {}", path.as_ref().display()))?;
    parse_cards_csv(&text)
}
