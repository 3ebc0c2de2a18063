use chrono::NaiveDate;

use crate::analytics::models::{InvalidDateError, JobRecord};

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Returns a new sequence of the input records ordered by applied date,
/// latest first. The input is left untouched, and the sort is stable:
/// records sharing a date keep their relative input order.
///
/// Fails on the first record whose date does not parse, rather than guessing
/// a placement for it.
pub fn sort_by_applied_date(records: &[JobRecord]) -> Result<Vec<JobRecord>, InvalidDateError> {
    let mut keyed: Vec<(NaiveDate, JobRecord)> = Vec::with_capacity(records.len());
    for (index, record) in records.iter().enumerate() {
        let date = NaiveDate::parse_from_str(&record.applied_date, DATE_FORMAT).map_err(|_| {
            InvalidDateError {
                index,
                company: record.company.clone(),
                role: record.role.clone(),
                value: record.applied_date.clone(),
            }
        })?;
        keyed.push((date, record.clone()));
    }

    // Vec::sort_by is stable; comparing b to a flips it to descending.
    keyed.sort_by(|a, b| b.0.cmp(&a.0));
    Ok(keyed.into_iter().map(|(_, record)| record).collect())
}
