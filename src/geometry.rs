use crate::layout::LayoutOptions;
use crate::model::LanedInterval;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Position d'un bloc dans la grille, en pourcentages de la colonne du jour.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct BlockGeometry {
    pub left_pct: f64,
    pub width_pct: f64,
    pub top_pct: f64,
    pub height_pct: f64,
}

impl BlockGeometry {
    /// `width = 100 / lane_count`, `left = width * lane` ; la hauteur suit la
    /// plage visible `[day_start, day_end)`, bornée à `[0, 100]`.
    pub fn for_interval(item: &LanedInterval, day_start: u32, day_end: u32) -> Self {
        let lanes = item.lane_count.max(1) as f64;
        let width_pct = 100.0 / lanes;
        let span = f64::from(day_end.saturating_sub(day_start).max(1));
        let at = |minutes: u32| -> f64 {
            let rel = (f64::from(minutes) - f64::from(day_start)) / span * 100.0;
            rel.clamp(0.0, 100.0)
        };
        let top_pct = at(item.start_minutes);
        let bottom_pct = at(item.end_minutes);
        Self {
            left_pct: width_pct * item.lane as f64,
            width_pct,
            top_pct,
            height_pct: bottom_pct - top_pct,
        }
    }

    pub fn with_options(item: &LanedInterval, opts: &LayoutOptions) -> Self {
        Self::for_interval(item, opts.day_start_minutes, opts.day_end_minutes)
    }

    /// Vrai si le bloc tombe entièrement hors de la plage visible.
    pub fn is_hidden(&self) -> bool {
        self.height_pct <= 0.0
    }
}
