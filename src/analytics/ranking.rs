// src/analytics/ranking.rs

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::UnsupportedMetricError;
use crate::store::{CourseRecord, RecordStore};

/// The first `k` distinct course titles, ranked descending by the chosen
/// metric (`"hours"` = total hours, `"participants"`) with ties broken by
/// ascending title. Dedup preserves rank order, so a re-offered course is
/// counted at its best-ranked offering. Fewer than `k` distinct titles just
/// yields all of them.
pub fn top_courses(
    store: &RecordStore,
    metric: &str,
    k: usize,
) -> Result<Vec<String>, UnsupportedMetricError> {
    let compare: fn(&CourseRecord, &CourseRecord) -> Ordering = match metric {
        "hours" => |a, b| b.total_hours.total_cmp(&a.total_hours),
        "participants" => |a, b| b.participants.cmp(&a.participants),
        other => return Err(UnsupportedMetricError(other.to_string())),
    };

    let mut ranked: Vec<&CourseRecord> = store.iter().collect();
    ranked.sort_by(|a, b| compare(a, b).then_with(|| a.title.cmp(&b.title)));

    let mut seen = HashSet::new();
    Ok(ranked
        .into_iter()
        .filter(|r| seen.insert(r.title.as_str()))
        .take(k)
        .map(|r| r.title.clone())
        .collect())
}
