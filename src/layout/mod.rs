//! Placement en couloirs des créneaux d'une journée.
//!
//! Tri par `(début, fin)` puis affectation gloutonne au premier couloir
//! dont l'occupant est terminé. Deux créneaux d'un même couloir ne se
//! chevauchent jamais (convention `[start, end)`), et `lane_count` vaut le
//! nombre maximal de créneaux ouverts simultanément.

mod group;
mod lanes;
mod types;
mod util;

pub use group::group_identical;
pub use types::{DayLayout, LayoutError, LayoutOptions};
pub(crate) use util::overlaps;

use crate::clock;
use crate::model::{ShiftEntry, ShiftInterval};

/// Convertit un créneau brut ; une fin absente ou illisible vaut le début
/// (puis le plancher de durée s'applique).
pub fn to_interval(entry: &ShiftEntry, opts: &LayoutOptions) -> ShiftInterval {
    let start = clock::minutes_or_midnight(&entry.start);
    let end = if entry.end.trim().is_empty() {
        start
    } else {
        clock::parse_minutes(&entry.end).unwrap_or_else(|_err| {
            #[cfg(feature = "logging")]
            tracing::warn!(entry = entry.id.as_str(), value = %entry.end, error = %_err, "unparseable end, using start");
            start
        })
    };
    ShiftInterval::new(entry.label.clone(), start, end, opts.min_duration_minutes)
}

/// Affecte un couloir à chaque intervalle.
pub fn assign_lanes(intervals: Vec<ShiftInterval>) -> DayLayout {
    lanes::assign_lanes(intervals)
}

/// Place les créneaux d'une journée.
pub fn layout_day(entries: &[ShiftEntry], opts: &LayoutOptions) -> DayLayout {
    let mut intervals: Vec<ShiftInterval> =
        entries.iter().map(|e| to_interval(e, opts)).collect();
    if opts.group_identical {
        intervals = group_identical(intervals);
    }
    let layout = assign_lanes(intervals);
    #[cfg(feature = "logging")]
    tracing::debug!(
        entries = entries.len(),
        items = layout.items.len(),
        lanes = layout.lane_count,
        "day laid out"
    );
    layout
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(label: &str, start: &str, end: &str) -> ShiftEntry {
        ShiftEntry::new(label, start, end)
    }

    #[test]
    fn reference_example() {
        let layout = layout_day(
            &[
                entry("A", "09:00", "10:00"),
                entry("B", "09:30", "09:45"),
                entry("C", "10:00", "11:00"),
            ],
            &LayoutOptions::default(),
        );
        assert_eq!(layout.lane_count, 2);
        let lane_of = |label: &str| {
            layout
                .items
                .iter()
                .find(|i| i.label == label)
                .map(|i| i.lane)
                .unwrap()
        };
        assert_eq!(lane_of("A"), 0);
        assert_eq!(lane_of("B"), 1);
        assert_eq!(lane_of("C"), 0);
        assert!(layout.items.iter().all(|i| i.lane_count == 2));
    }

    #[test]
    fn missing_or_bad_end_gets_floor() {
        let opts = LayoutOptions::default();
        let a = to_interval(&entry("A", "10:00", ""), &opts);
        let b = to_interval(&entry("B", "10:00", "??"), &opts);
        let c = to_interval(&entry("C", "10:00", "09:00"), &opts);
        for i in [a, b, c] {
            assert_eq!(i.start_minutes, 600);
            assert_eq!(i.end_minutes, 615);
        }
    }

    #[test]
    fn floor_follows_options() {
        let opts = LayoutOptions {
            min_duration_minutes: 30,
            ..LayoutOptions::default()
        };
        let i = to_interval(&entry("A", "10:00", "10:00"), &opts);
        assert_eq!(i.duration_minutes(), 30);
    }

    #[test]
    fn grouping_reduces_lanes() {
        let entries = [
            entry("Ana", "09:00", "17:00"),
            entry("Bao", "09:00", "17:00"),
        ];
        let plain = layout_day(&entries, &LayoutOptions::default());
        assert_eq!(plain.lane_count, 2);

        let grouped = layout_day(
            &entries,
            &LayoutOptions {
                group_identical: true,
                ..LayoutOptions::default()
            },
        );
        assert_eq!(grouped.lane_count, 1);
        assert_eq!(grouped.items.len(), 1);
        assert_eq!(grouped.items[0].label, "Ana, Bao");
    }
}
