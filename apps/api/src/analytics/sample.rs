use crate::analytics::models::JobRecord;

/// Fixed illustrative dataset for the analytics endpoints when the store has
/// nothing to offer. Callers pass this in explicitly; the analytics functions
/// themselves never reach for it.
pub fn sample_jobs() -> Vec<JobRecord> {
    [
        ("Google", "SDE Intern", "2025-04-01", "Applied"),
        ("Microsoft", "Software Engineer", "2025-03-15", "Interview"),
        ("Amazon", "Frontend Developer", "2025-04-10", "Applied"),
        ("Meta", "React Developer", "2025-02-20", "Rejected"),
        ("Apple", "iOS Developer", "2025-03-05", "Offer"),
        ("Netflix", "Full Stack Engineer", "2025-03-25", "Interview"),
        ("Google", "Product Manager", "2025-04-05", "Applied"),
        ("Microsoft", "SDE Intern", "2025-03-10", "Rejected"),
        ("google", "sde intern", "2025-02-15", "Applied"),
    ]
    .into_iter()
    .map(|(company, role, applied_date, status)| JobRecord {
        company: company.to_string(),
        role: role.to_string(),
        applied_date: applied_date.to_string(),
        status: status.to_string(),
    })
    .collect()
}
