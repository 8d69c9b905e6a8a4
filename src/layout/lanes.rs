use super::{util, DayLayout};
use crate::model::{LanedInterval, ShiftInterval};

pub(super) fn assign_lanes(mut intervals: Vec<ShiftInterval>) -> DayLayout {
    if intervals.is_empty() {
        return DayLayout::empty(None);
    }

    // (début, fin) puis libellé : l'ordre d'entrée ne change pas le résultat.
    intervals.sort_by(|a, b| {
        (a.start_minutes, a.end_minutes, &a.label).cmp(&(b.start_minutes, b.end_minutes, &b.label))
    });

    let mut lane_end: Vec<u32> = Vec::new();
    let mut placed = Vec::with_capacity(intervals.len());

    for interval in intervals {
        let lane = match util::first_free_lane(&lane_end, interval.start_minutes) {
            Some(i) => {
                lane_end[i] = interval.end_minutes;
                i
            }
            None => {
                lane_end.push(interval.end_minutes);
                lane_end.len() - 1
            }
        };
        placed.push((interval, lane));
    }

    let lane_count = lane_end.len().max(1);
    let items = placed
        .into_iter()
        .map(|(interval, lane)| LanedInterval {
            start_minutes: interval.start_minutes,
            end_minutes: interval.end_minutes,
            label: interval.label,
            lane,
            lane_count,
        })
        .collect();

    DayLayout {
        date: None,
        lane_count,
        items,
    }
}
