// src/analytics/participation.rs

use std::cmp::Reverse;
use std::collections::{BTreeMap, HashMap};

use crate::store::RecordStore;

/// Total participants per institution. `BTreeMap` keeps the institutions in
/// ascending name order.
pub fn participants_by_institution(store: &RecordStore) -> BTreeMap<String, i64> {
    let mut totals: BTreeMap<String, i64> = BTreeMap::new();
    for record in store.iter() {
        *totals.entry(record.institution.clone()).or_default() += record.participants;
    }
    totals
}

/// Total participants per `institution-subject` key, ordered by descending
/// total and, for equal totals, ascending key. The ordering is part of the
/// contract, so the result is a sequence of pairs rather than a map.
pub fn participants_by_institution_and_subject(store: &RecordStore) -> Vec<(String, i64)> {
    // Pass 1: fold every record into its group's accumulator.
    let mut totals: HashMap<String, i64> = HashMap::new();
    for record in store.iter() {
        let key = format!("{}-{}", record.institution, record.subject);
        *totals.entry(key).or_default() += record.participants;
    }

    // Pass 2: impose the contractual order.
    let mut pairs: Vec<(String, i64)> = totals.into_iter().collect();
    pairs.sort_by(|(ka, va), (kb, vb)| (Reverse(va), ka).cmp(&(Reverse(vb), kb)));
    pairs
}
