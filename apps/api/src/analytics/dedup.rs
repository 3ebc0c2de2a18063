use std::collections::hash_map::Entry;
use std::collections::HashMap;

use crate::analytics::models::{DuplicatePair, JobRecord};

/// Scans the records once, in input order, flagging every record whose
/// case-insensitive (company, role) pair was already seen. The first record
/// observed with a key stays `original` for every later duplicate of that
/// key, even when the later records differ in date or status.
///
/// The identity key is a structural tuple, so company or role text containing
/// any delimiter character cannot collide with another pair. Applied date is
/// deliberately not part of the key: a re-application to the same role at a
/// later date still counts as a duplicate.
pub fn find_duplicate_applications(records: &[JobRecord]) -> Vec<DuplicatePair> {
    let mut first_seen: HashMap<(String, String), &JobRecord> =
        HashMap::with_capacity(records.len());
    let mut duplicates = Vec::new();

    for record in records {
        let key = (record.company.to_lowercase(), record.role.to_lowercase());
        match first_seen.entry(key) {
            Entry::Occupied(entry) => duplicates.push(DuplicatePair {
                original: (*entry.get()).clone(),
                duplicate: record.clone(),
            }),
            Entry::Vacant(entry) => {
                entry.insert(record);
            }
        }
    }

    duplicates
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(company: &str, role: &str, date: &str) -> JobRecord {
        JobRecord {
            company: company.to_string(),
            role: role.to_string(),
            applied_date: date.to_string(),
            status: "Applied".to_string(),
        }
    }

    #[test]
    fn test_no_duplicates() {
        let jobs = vec![
            record("Google", "SDE Intern", "2025-04-01"),
            record("Microsoft", "SWE", "2025-03-15"),
            record("Amazon", "Frontend Dev", "2025-04-10"),
        ];
        assert!(find_duplicate_applications(&jobs).is_empty());
    }

    #[test]
    fn test_duplicate_across_unrelated_record() {
        let jobs = vec![
            record("Google", "SDE Intern", "2025-04-01"),
            record("Microsoft", "SWE", "2025-03-15"),
            record("Google", "SDE Intern", "2025-02-15"),
        ];
        let pairs = find_duplicate_applications(&jobs);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].original.applied_date, "2025-04-01");
        assert_eq!(pairs[0].duplicate.applied_date, "2025-02-15");
    }

    #[test]
    fn test_case_insensitive_key() {
        let jobs = vec![
            record("Google", "SDE Intern", "2025-04-01"),
            record("google", "sde intern", "2025-02-15"),
        ];
        let pairs = find_duplicate_applications(&jobs);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].original.company, "Google");
        assert_eq!(pairs[0].duplicate.company, "google");
    }

    #[test]
    fn test_three_way_all_reference_first() {
        let jobs = vec![
            record("Acme", "Engineer", "2025-01-01"),
            record("ACME", "engineer", "2025-02-01"),
            record("acme", "ENGINEER", "2025-03-01"),
        ];
        let pairs = find_duplicate_applications(&jobs);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].original.applied_date, "2025-01-01");
        assert_eq!(pairs[1].original.applied_date, "2025-01-01");
        assert_eq!(pairs[0].duplicate.applied_date, "2025-02-01");
        assert_eq!(pairs[1].duplicate.applied_date, "2025-03-01");
    }

    #[test]
    fn test_identical_records_still_pair() {
        let jobs = vec![
            record("Acme", "Engineer", "2025-01-01"),
            record("Acme", "Engineer", "2025-01-01"),
        ];
        assert_eq!(find_duplicate_applications(&jobs).len(), 1);
    }

    #[test]
    fn test_tuple_key_survives_embedded_delimiters() {
        // "a|b" + "c" and "a" + "b|c" concatenate identically; the tuple key
        // keeps them distinct.
        let jobs = vec![record("a|b", "c", "2025-01-01"), record("a", "b|c", "2025-01-02")];
        assert!(find_duplicate_applications(&jobs).is_empty());
    }

    #[test]
    fn test_empty_input() {
        assert!(find_duplicate_applications(&[]).is_empty());
    }
}
