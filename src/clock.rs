//! Lecture des heures : `HH:MM`, `HH:MM:SS` ou horodatage complet.
//!
//! Les horodatages sont lus à leur heure murale (le décalage est conservé,
//! pas de conversion UTC) : un créneau `09:00+02:00` s'affiche à 9h.

use crate::layout::LayoutError;
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Timelike};

/// Fin de journée : chrono refuse `24:00`, courant comme heure de fermeture.
const END_OF_DAY: [&str; 2] = ["24:00", "24:00:00"];
const TIME_FORMATS: [&str; 3] = ["%H:%M", "%H:%M:%S", "%H:%M:%S%.f"];
const DATETIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%d %H:%M",
];

/// Minutes depuis minuit ; erreur si la valeur est illisible.
pub fn parse_minutes(raw: &str) -> Result<u32, LayoutError> {
    let trimmed = raw.trim();
    if END_OF_DAY.contains(&trimmed) {
        return Ok(24 * 60);
    }
    let time = parse_time(trimmed).ok_or_else(|| LayoutError::InvalidTime(raw.to_string()))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Variante tolérante utilisée par le placement : une valeur illisible vaut minuit.
pub fn minutes_or_midnight(raw: &str) -> u32 {
    match parse_minutes(raw) {
        Ok(m) => m,
        Err(err) => {
            #[cfg(feature = "logging")]
            tracing::warn!(value = raw, %err, "unparseable time, placed at midnight");
            #[cfg(not(feature = "logging"))]
            let _ = err;
            0
        }
    }
}

/// Date portée par un horodatage (ou une date seule), si présente.
pub fn entry_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.date_naive());
    }
    if let Some(dt) = parse_naive_datetime(raw) {
        return Some(dt.date());
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d").ok()
}

/// `HH:MM`, sans repli à minuit : 1450 donne `24:10`.
pub fn format_minutes(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

fn parse_time(raw: &str) -> Option<NaiveTime> {
    if raw.is_empty() {
        return None;
    }
    if let Some(t) = TIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveTime::parse_from_str(raw, fmt).ok())
    {
        return Some(t);
    }
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Some(dt.time());
    }
    parse_naive_datetime(raw).map(|dt| dt.time())
}

fn parse_naive_datetime(raw: &str) -> Option<NaiveDateTime> {
    DATETIME_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(raw, fmt).ok())
}
