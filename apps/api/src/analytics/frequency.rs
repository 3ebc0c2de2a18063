use crate::analytics::models::{FrequencyMap, JobRecord};

/// Counts how many records carry each distinct status label.
/// Labels are compared by exact string equality; unknown labels are counted
/// as-is and statuses absent from the input do not appear in the result.
pub fn count_status_frequency(records: &[JobRecord]) -> FrequencyMap {
    let mut counts = FrequencyMap::new();
    for record in records {
        *counts.entry(record.status.clone()).or_insert(0) += 1;
    }
    counts
}
