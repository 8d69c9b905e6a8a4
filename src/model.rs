use crate::{clock, layout};
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Identifiant fort pour ShiftEntry
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct EntryId(String);

impl EntryId {
    pub fn new<S: AsRef<str>>(s: S) -> Self {
        Self(s.as_ref().to_owned())
    }
    pub fn random() -> Self {
        Self(Uuid::new_v4().to_string())
    }
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Créneau brut tel que reçu de l'amont (affectation d'un employé ou shift nommé).
///
/// `start`/`end` restent du texte : `HH:MM`, `HH:MM:SS` ou un horodatage complet.
/// Les noms de champs sont souples à la lecture (`start_time`, `employee`, ...).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftEntry {
    #[cfg_attr(feature = "serde", serde(default = "EntryId::random"))]
    pub id: EntryId,
    #[cfg_attr(
        feature = "serde",
        serde(
            default,
            alias = "shift_date",
            alias = "shiftDate",
            skip_serializing_if = "Option::is_none"
        )
    )]
    pub date: Option<NaiveDate>,
    #[cfg_attr(feature = "serde", serde(alias = "start_time", alias = "startTime"))]
    pub start: String,
    #[cfg_attr(
        feature = "serde",
        serde(default, alias = "end_time", alias = "endTime")
    )]
    pub end: String,
    #[cfg_attr(
        feature = "serde",
        serde(
            alias = "name",
            alias = "employee",
            alias = "employee_name",
            alias = "employeeName"
        )
    )]
    pub label: String,
}

impl ShiftEntry {
    pub fn new<L, S, E>(label: L, start: S, end: E) -> Self
    where
        L: Into<String>,
        S: Into<String>,
        E: Into<String>,
    {
        Self {
            id: EntryId::random(),
            date: None,
            start: start.into(),
            end: end.into(),
            label: label.into(),
        }
    }

    pub fn on(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Jour du créneau : la date explicite, sinon celle de l'horodatage de début.
    pub fn resolved_date(&self) -> Option<NaiveDate> {
        self.date.or_else(|| clock::entry_date(&self.start))
    }
}

/// Intervalle d'une journée, en minutes depuis minuit, `[start, end)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ShiftInterval {
    pub start_minutes: u32,
    pub end_minutes: u32,
    pub label: String,
}

impl ShiftInterval {
    /// Construit l'intervalle ; si `end <= start`, la fin passe à `start + min_duration`.
    pub fn new<L: Into<String>>(label: L, start: u32, end: u32, min_duration: u32) -> Self {
        let end_minutes = if end <= start {
            start.saturating_add(min_duration)
        } else {
            end
        };
        Self {
            start_minutes: start,
            end_minutes,
            label: label.into(),
        }
    }

    /// Durée en minutes.
    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes - self.start_minutes
    }
}

/// Intervalle placé dans un couloir.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LanedInterval {
    pub start_minutes: u32,
    pub end_minutes: u32,
    pub label: String,
    pub lane: usize,
    pub lane_count: usize,
}

impl LanedInterval {
    pub fn duration_minutes(&self) -> u32 {
        self.end_minutes - self.start_minutes
    }

    pub fn overlaps(&self, other: &LanedInterval) -> bool {
        layout::overlaps(
            self.start_minutes,
            self.end_minutes,
            other.start_minutes,
            other.end_minutes,
        )
    }
}

/// Planning local : l'ensemble des créneaux connus.
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Planning {
    pub entries: Vec<ShiftEntry>,
}

impl Planning {
    pub fn remove_entry(&mut self, id: &EntryId) -> Option<ShiftEntry> {
        let pos = self.entries.iter().position(|e| &e.id == id)?;
        Some(self.entries.remove(pos))
    }

    pub fn entries_on(&self, date: NaiveDate) -> Vec<ShiftEntry> {
        self.entries
            .iter()
            .filter(|e| e.resolved_date() == Some(date))
            .cloned()
            .collect()
    }
}
