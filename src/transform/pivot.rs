//! The achievement pivot
//!
//! Converts repeated narrow rows (one per measure) into wide rows, one per
//! maximal contiguous (practice, indicator) run, preserving first-seen order.
//! Input is assumed pre-grouped; a pair that recurs non-adjacently produces
//! two separate output records.

use super::types::{AchievementRecord, MeasurementRecord};
use crate::error::Result;

/// Pivot an ordered sequence of measurements into wide achievement records,
/// each stamped with `year`.
///
/// Lazy: rows are pulled from `records` one at a time and each output record
/// is emitted as soon as its run ends. Errors from the input sequence, and
/// unknown or unparseable measures, end the iteration.
pub fn pivot<I>(year: &str, records: I) -> Pivot<I::IntoIter>
where
    I: IntoIterator<Item = Result<MeasurementRecord>>,
{
    Pivot {
        year: year.to_string(),
        records: records.into_iter(),
        current: None,
        done: false,
    }
}

/// Iterator adapter produced by [`pivot`]
pub struct Pivot<I> {
    year: String,
    records: I,
    current: Option<AchievementRecord>,
    done: bool,
}

impl<I> Iterator for Pivot<I>
where
    I: Iterator<Item = Result<MeasurementRecord>>,
{
    type Item = Result<AchievementRecord>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        loop {
            let record = match self.records.next() {
                Some(Ok(record)) => record,
                Some(Err(e)) => {
                    self.done = true;
                    return Some(Err(e));
                }
                None => {
                    // End of input: emit the open accumulator, if one was
                    // ever opened. Empty input emits nothing.
                    self.done = true;
                    return self.current.take().map(Ok);
                }
            };

            let run_ended = self
                .current
                .as_ref()
                .is_some_and(|current| !current.same_run(&record));
            let finished = if run_ended { self.current.take() } else { None };

            let accumulator = self.current.get_or_insert_with(|| {
                AchievementRecord::open(&self.year, &record.practice_code, &record.indicator_code)
            });
            if let Err(e) = accumulator.set_measure(&record.measure, &record.value) {
                self.done = true;
                return Some(Err(e));
            }

            if let Some(finished) = finished {
                return Some(Ok(finished));
            }
        }
    }
}
