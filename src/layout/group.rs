use crate::model::ShiftInterval;
use std::collections::HashMap;

/// Fusionne les intervalles aux bornes identiques en une seule entrée
/// dont le libellé joint les libellés d'origine, triés.
///
/// La sortie est triée par `(début, fin)` : l'ordre d'entrée n'a pas d'effet.
pub fn group_identical(mut intervals: Vec<ShiftInterval>) -> Vec<ShiftInterval> {
    intervals.sort_by(|a, b| {
        (a.start_minutes, a.end_minutes, &a.label).cmp(&(b.start_minutes, b.end_minutes, &b.label))
    });

    let mut index: HashMap<(u32, u32), usize> = HashMap::new();
    let mut out: Vec<ShiftInterval> = Vec::with_capacity(intervals.len());

    for interval in intervals {
        let key = (interval.start_minutes, interval.end_minutes);
        match index.get(&key) {
            Some(&pos) => {
                let grouped = &mut out[pos];
                grouped.label.push_str(", ");
                grouped.label.push_str(&interval.label);
            }
            None => {
                index.insert(key, out.len());
                out.push(interval);
            }
        }
    }

    out
}
