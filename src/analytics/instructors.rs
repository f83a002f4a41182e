// src/analytics/instructors.rs

use std::collections::{BTreeMap, BTreeSet};

use serde::Serialize;

use crate::store::{CourseRecord, RecordStore};

/// Course titles taught by one instructor, partitioned by whether the record
/// listed them alone or alongside others. Each list is deduplicated and
/// lexicographically sorted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InstructorCourses {
    pub solo: Vec<String>,
    pub co_taught: Vec<String>,
}

/// Index every instructor name to their course titles. A record listing
/// several instructors contributes its title under each of their names, and
/// the solo/co-taught split is decided per record by that record's own
/// instructor count.
pub fn courses_by_instructor(store: &RecordStore) -> BTreeMap<String, InstructorCourses> {
    // Pass 1: instructor -> every record mentioning them.
    let mut by_instructor: BTreeMap<String, Vec<&CourseRecord>> = BTreeMap::new();
    for record in store.iter() {
        for name in record.instructor_names() {
            by_instructor
                .entry(name.to_string())
                .or_default()
                .push(record);
        }
    }

    // Pass 2: classify each record independently, then dedup + sort via sets.
    by_instructor
        .into_iter()
        .map(|(name, records)| {
            let mut solo = BTreeSet::new();
            let mut co_taught = BTreeSet::new();
            for record in records {
                if record.is_solo_taught() {
                    solo.insert(record.title.clone());
                } else {
                    co_taught.insert(record.title.clone());
                }
            }
            let courses = InstructorCourses {
                solo: solo.into_iter().collect(),
                co_taught: co_taught.into_iter().collect(),
            };
            (name, courses)
        })
        .collect()
}
