//! Reshaping transforms for the annual extracts
//!
//! The achievement extract arrives long/narrow, one row per measure per
//! practice/indicator pair, and is pivoted into one wide row per contiguous
//! (practice, indicator) run. The prevalence extract needs no grouping and
//! passes through verbatim with the year prepended.

mod pivot;
mod prevalence;
mod types;

pub use pivot::{pivot, Pivot};
pub use prevalence::prepend_year;
pub use types::{AchievementRecord, MeasurementRecord};
