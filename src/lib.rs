#![forbid(unsafe_code)]
//! Shiftgrid — placement de créneaux de travail pour vues calendrier jour/semaine.
//!
//! - Lecture souple des heures (`HH:MM`, `HH:MM:SS`, horodatages).
//! - Affectation gloutonne en couloirs, sans chevauchement par couloir.
//! - Fenêtre de semaine lundi → dimanche, géométrie en pourcentages.
//! - Stockage fichiers (JSON/CSV), sans base de données.

pub mod clock;
pub mod geometry;
#[cfg(feature = "serde")]
pub mod io;
pub mod layout;
pub mod model;
#[cfg(feature = "serde")]
pub mod storage;
pub mod week;

pub use geometry::BlockGeometry;
pub use layout::{
    assign_lanes, group_identical, layout_day, to_interval, DayLayout, LayoutError, LayoutOptions,
};
pub use model::{EntryId, LanedInterval, Planning, ShiftEntry, ShiftInterval};
#[cfg(feature = "serde")]
pub use storage::{JsonStorage, Storage};
pub use week::{layout_week, WeekWindow};
