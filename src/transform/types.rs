//! Record types flowing through the transforms

use crate::error::{Error, Result};

/// One clinical measure value for one practice/indicator pair, as read from
/// the achievement extract
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MeasurementRecord {
    pub practice_code: String,
    pub indicator_code: String,
    pub measure: String,
    pub value: String,
}

/// The full achievement profile for one (year, practice, indicator) triple
///
/// Built by accumulating the measures of one contiguous input run. A measure
/// column is `Some` iff the run contained that measure name
/// (case-insensitive); the rest stay `None` and load as NULL.
#[derive(Debug, Clone, PartialEq)]
pub struct AchievementRecord {
    pub year: String,
    pub practice_id: String,
    pub indicator: String,
    pub achieved_points: Option<f64>,
    pub register: Option<i64>,
    pub numerator: Option<i64>,
    pub denominator: Option<i64>,
    pub exceptions: Option<i64>,
}

impl AchievementRecord {
    /// Open an empty accumulator for a new (practice, indicator) run
    pub(crate) fn open(year: &str, practice_code: &str, indicator_code: &str) -> Self {
        Self {
            year: year.to_string(),
            practice_id: practice_code.to_string(),
            indicator: indicator_code.to_string(),
            achieved_points: None,
            register: None,
            numerator: None,
            denominator: None,
            exceptions: None,
        }
    }

    /// Whether `record` belongs to this accumulator's run
    pub(crate) fn same_run(&self, record: &MeasurementRecord) -> bool {
        self.practice_id == record.practice_code && self.indicator == record.indicator_code
    }

    /// Assign the measure column named by `measure`, case-folded to
    /// lowercase. A name outside the fixed five is fatal.
    pub(crate) fn set_measure(&mut self, measure: &str, value: &str) -> Result<()> {
        match measure.to_lowercase().as_str() {
            "achieved_points" => self.achieved_points = Some(parse_float(measure, value)?),
            "register" => self.register = Some(parse_int(measure, value)?),
            "numerator" => self.numerator = Some(parse_int(measure, value)?),
            "denominator" => self.denominator = Some(parse_int(measure, value)?),
            "exceptions" => self.exceptions = Some(parse_int(measure, value)?),
            _ => {
                return Err(Error::UnknownMeasure {
                    measure: measure.to_string(),
                    practice: self.practice_id.clone(),
                    indicator: self.indicator.clone(),
                })
            }
        }
        Ok(())
    }

    /// CSV fields in achievement-schema column order; unset measures become
    /// empty fields (warehouse NULL)
    pub fn to_fields(&self) -> Vec<String> {
        vec![
            self.year.clone(),
            self.practice_id.clone(),
            self.indicator.clone(),
            format_opt(self.achieved_points),
            format_opt(self.register),
            format_opt(self.numerator),
            format_opt(self.denominator),
            format_opt(self.exceptions),
        ]
    }
}

fn format_opt<T: ToString>(value: Option<T>) -> String {
    value.map_or_else(String::new, |v| v.to_string())
}

fn parse_int(measure: &str, value: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseIntError| Error::InvalidValue {
            measure: measure.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        })
}

fn parse_float(measure: &str, value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|e: std::num::ParseFloatError| Error::InvalidValue {
            measure: measure.to_string(),
            value: value.to_string(),
            message: e.to_string(),
        })
}
