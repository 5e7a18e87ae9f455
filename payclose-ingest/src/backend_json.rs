//! Backend card-snapshot JSON: the wire shape the finance API serves.

use anyhow::{Context, Result};
use payclose_core::BillingProfile;
use serde::{Deserialize, Serialize};

fn default_true() -> bool {
    true
}

fn default_days_before_closing() -> i64 {
    3
}

fn default_days_before_payment() -> i64 {
    5
}

/// One card as the backend serializes it (camelCase, optional cycle
/// configuration). Fields the engine does not consume are not modeled.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CardRecord {
    pub id: String,
    pub name: String,
    pub bank: String,
    #[serde(default)]
    pub balance: f64,
    #[serde(default)]
    pub credit_limit: f64,
    #[serde(default)]
    pub minimum_payment: f64,
    #[serde(default)]
    pub closing_day: Option<u32>,
    #[serde(default)]
    pub due_day: Option<u32>,
    #[serde(default = "default_true")]
    pub is_active: bool,
    #[serde(default = "default_true")]
    pub reminder_closing: bool,
    #[serde(default = "default_true")]
    pub reminder_payment: bool,
    #[serde(default = "default_days_before_closing")]
    pub days_before_closing: i64,
    #[serde(default = "default_days_before_payment")]
    pub days_before_payment: i64,
}

impl CardRecord {
    pub fn into_profile(self) -> BillingProfile {
        BillingProfile {
            id: self.id,
            name: self.name,
            bank: self.bank,
            balance: self.balance,
            credit_limit: self.credit_limit,
            minimum_payment: self.minimum_payment,
            closing_day: self.closing_day,
            due_day: self.due_day,
            reminder_closing: self.reminder_closing,
            reminder_payment: self.reminder_payment,
            days_before_closing: self.days_before_closing,
            days_before_payment: self.days_before_payment,
        }
    }
}

/// Drop inactive cards and validate the rest before anything downstream
/// sees them. The engine assumes validated input.
pub fn collect_profiles(records: Vec<CardRecord>) -> Result<Vec<BillingProfile>> {
    let total = records.len();
    let profiles: Vec<BillingProfile> = records
        .into_iter()
        .filter(|r| r.is_active)
        .map(CardRecord::into_profile)
        .collect();

    if profiles.len() < total {
        tracing::debug!(total, active = profiles.len(), "dropped inactive cards");
    }

    for profile in &profiles {
        profile.validate()?;
    }
    Ok(profiles)
}

/// Parse a JSON snapshot (an array of card records) into validated
/// billing profiles.
pub fn parse_cards_json(text: &str) -> Result<Vec<BillingProfile>> {
    let records: Vec<CardRecord> =
        serde_json::from_str(text).context("parsing card snapshot JSON")?;
    collect_profiles(records)
}
