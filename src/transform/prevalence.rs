//! Prevalence reshape
//!
//! No pivot here: the header row is dropped by the CSV reader and each
//! remaining row passes through verbatim with the year prepended.

use crate::error::Result;

/// Prepend `year` to every row, preserving row order and field order.
pub fn prepend_year<I>(year: &str, rows: I) -> impl Iterator<Item = Result<Vec<String>>>
where
    I: IntoIterator<Item = Result<Vec<String>>>,
{
    let year = year.to_string();
    rows.into_iter().map(move |row| {
        row.map(|fields| {
            let mut out = Vec::with_capacity(fields.len() + 1);
            out.push(year.clone());
            out.extend(fields);
            out
        })
    })
}
