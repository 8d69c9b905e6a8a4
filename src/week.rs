//! Fenêtre de semaine (lundi → dimanche) et placement jour par jour.

use crate::layout::{self, DayLayout, LayoutOptions};
use crate::model::ShiftEntry;
use chrono::{Datelike, Days, NaiveDate};

/// Sept jours consécutifs commençant un lundi.
///
/// Les constructeurs renvoient `None` si la semaine sort du calendrier de chrono.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WeekWindow {
    monday: NaiveDate,
    sunday: NaiveDate,
}

impl WeekWindow {
    /// Semaine contenant `date`.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        let back = u64::from(date.weekday().num_days_from_monday());
        Self::from_monday(date.checked_sub_days(Days::new(back))?)
    }

    /// Décale la fenêtre de `weeks` semaines (négatif = passé).
    pub fn offset(self, weeks: i64) -> Option<Self> {
        let days = Days::new(weeks.checked_mul(7)?.unsigned_abs());
        let monday = if weeks >= 0 {
            self.monday.checked_add_days(days)?
        } else {
            self.monday.checked_sub_days(days)?
        };
        Self::from_monday(monday)
    }

    fn from_monday(monday: NaiveDate) -> Option<Self> {
        let sunday = monday.checked_add_days(Days::new(6))?;
        Some(Self { monday, sunday })
    }

    pub fn monday(&self) -> NaiveDate {
        self.monday
    }

    pub fn sunday(&self) -> NaiveDate {
        self.sunday
    }

    pub fn dates(&self) -> [NaiveDate; 7] {
        let mut days = self.monday.iter_days();
        std::array::from_fn(|_| days.next().unwrap_or(self.sunday))
    }

    pub fn contains(&self, date: NaiveDate) -> bool {
        self.monday <= date && date <= self.sunday
    }
}

/// Place les créneaux de la semaine : un `DayLayout` par jour, du lundi au dimanche.
///
/// Un créneau sans date exploitable, ou hors de la fenêtre, est ignoré.
pub fn layout_week(
    entries: &[ShiftEntry],
    window: WeekWindow,
    opts: &LayoutOptions,
) -> Vec<DayLayout> {
    let mut buckets: [Vec<ShiftEntry>; 7] = Default::default();

    for entry in entries {
        match entry.resolved_date() {
            Some(date) if window.contains(date) => {
                let idx = date.signed_duration_since(window.monday()).num_days() as usize;
                buckets[idx].push(entry.clone());
            }
            _other => {
                #[cfg(feature = "logging")]
                tracing::debug!(entry = entry.id.as_str(), date = ?_other, "entry outside week, skipped");
            }
        }
    }

    window
        .dates()
        .into_iter()
        .zip(buckets)
        .map(|(date, day_entries)| {
            let mut day = layout::layout_day(&day_entries, opts);
            day.date = Some(date);
            day
        })
        .collect()
}
