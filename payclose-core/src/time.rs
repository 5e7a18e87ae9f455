//! Time boundary helpers: resolving "today" in the user's timezone.

use anyhow::Result;
use chrono::{DateTime, NaiveDate, Utc};
use chrono_tz::Tz;

/// Calendar date of a UTC instant in an IANA tz like "America/Chicago".
///
/// Day-of-month math is timezone sensitive: a statement that closes "on
/// the 5th" closes on the card holder's 5th, not UTC's. Callers read the
/// clock once at the boundary and pass the resulting date down; nothing
/// in the engine reads time ambiently.
pub fn local_date(now_utc: DateTime<Utc>, tz: &str) -> Result<NaiveDate> {
    let tz: Tz = tz
        .parse()
        .map_err(|_| anyhow::anyhow!("invalid timezone: {tz}"))?;
    Ok(now_utc.with_timezone(&tz).date_naive())
}

/// Parse a `YYYY-MM-DD` date override.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|e| anyhow::anyhow!("invalid date '{s}': {e}"))
}
