// src/analytics/search.rs

use std::collections::BTreeSet;

use crate::store::RecordStore;

/// Titles of courses whose subject contains `subject` case-insensitively,
/// with at least `min_percent_audited` percent audited and at most
/// `max_total_hours` total hours (both bounds inclusive). Deduplicated and
/// lexicographically sorted; an empty result is a valid outcome.
pub fn search_courses(
    store: &RecordStore,
    subject: &str,
    min_percent_audited: f64,
    max_total_hours: f64,
) -> Vec<String> {
    let needle = subject.to_lowercase();
    let titles: BTreeSet<String> = store
        .iter()
        .filter(|r| {
            r.subject.to_lowercase().contains(&needle)
                && r.percent_audited >= min_percent_audited
                && r.total_hours <= max_total_hours
        })
        .map(|r| r.title.clone())
        .collect();
    titles.into_iter().collect()
}
