use crate::model::LanedInterval;
use chrono::NaiveDate;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Options de placement
#[derive(Debug, Clone, Copy)]
pub struct LayoutOptions {
    /// Durée minimale affichée pour un créneau nul ou inversé.
    pub min_duration_minutes: u32,
    /// Début de la plage visible (minutes depuis minuit).
    pub day_start_minutes: u32,
    /// Fin de la plage visible.
    pub day_end_minutes: u32,
    /// Fusionne les créneaux de mêmes bornes avant placement.
    pub group_identical: bool,
}

impl Default for LayoutOptions {
    fn default() -> Self {
        Self {
            min_duration_minutes: 15,
            day_start_minutes: 6 * 60,
            day_end_minutes: 24 * 60,
            group_identical: false,
        }
    }
}

/// Résultat du placement d'une journée.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DayLayout {
    #[cfg_attr(feature = "serde", serde(default, skip_serializing_if = "Option::is_none"))]
    pub date: Option<NaiveDate>,
    pub lane_count: usize,
    pub items: Vec<LanedInterval>,
}

impl DayLayout {
    pub fn empty(date: Option<NaiveDate>) -> Self {
        Self {
            date,
            lane_count: 1,
            items: Vec::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Blocs d'un couloir, dans l'ordre de début.
    pub fn lane(&self, lane: usize) -> impl Iterator<Item = &LanedInterval> {
        self.items.iter().filter(move |i| i.lane == lane)
    }
}

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("invalid time value: {0:?}")]
    InvalidTime(String),
    #[error("invalid date value: {0:?}")]
    InvalidDate(String),
    #[error("unknown entry: {0}")]
    UnknownEntry(String),
}
