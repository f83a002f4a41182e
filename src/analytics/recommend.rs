// src/analytics/recommend.rs

use std::collections::{HashMap, HashSet};

use crate::store::{CourseRecord, RecordStore};

/// How many representative titles a recommendation returns at most.
const RECOMMENDATION_LIMIT: usize = 10;

/// Aggregate view of one course offering group: every record sharing the
/// same (institution, courseNumber) pair.
#[derive(Debug)]
struct OfferingProfile<'a> {
    /// Title of the latest offering; equal launch dates resolve to the
    /// lexicographically smallest title so the pick is deterministic.
    representative: &'a CourseRecord,
    avg_median_age: f64,
    avg_percent_male: f64,
    avg_percent_degree: f64,
}

impl<'a> OfferingProfile<'a> {
    fn from_group(records: &[&'a CourseRecord]) -> Option<Self> {
        let representative = records.iter().copied().max_by(|a, b| {
            a.launch_date
                .cmp(&b.launch_date)
                .then_with(|| b.title.cmp(&a.title))
        })?;

        let n = records.len() as f64;
        Some(OfferingProfile {
            representative,
            avg_median_age: records.iter().map(|r| r.median_age).sum::<f64>() / n,
            avg_percent_male: records.iter().map(|r| r.percent_male).sum::<f64>() / n,
            avg_percent_degree: records.iter().map(|r| r.percent_degree).sum::<f64>() / n,
        })
    }

    /// Squared Euclidean distance to a user's demographic point. Units stay
    /// raw (years vs 0-100 percentages); the asymmetry is part of the
    /// contract, not something to normalize away.
    fn distance(&self, age: f64, male: bool, bachelor_or_higher: bool) -> f64 {
        let gender = if male { 100.0 } else { 0.0 };
        let degree = if bachelor_or_higher { 100.0 } else { 0.0 };
        (age - self.avg_median_age).powi(2)
            + (gender - self.avg_percent_male).powi(2)
            + (degree - self.avg_percent_degree).powi(2)
    }
}

/// Up to ten course titles nearest the given demographic profile. Offerings
/// of the same course are grouped by (institution, courseNumber); each group
/// is labelled by its representative title, scored on its mean demographics,
/// and ranked by ascending distance with ties broken by ascending title.
pub fn recommend_courses(
    store: &RecordStore,
    age: f64,
    male: bool,
    bachelor_or_higher: bool,
) -> Vec<String> {
    let mut groups: HashMap<(&str, &str), Vec<&CourseRecord>> = HashMap::new();
    for record in store.iter() {
        groups.entry(record.offering_key()).or_default().push(record);
    }

    let mut scored: Vec<(&str, f64)> = groups
        .values()
        .filter_map(|records| {
            let profile = OfferingProfile::from_group(records)?;
            let dist = profile.distance(age, male, bachelor_or_higher);
            Some((profile.representative.title.as_str(), dist))
        })
        .collect();
    scored.sort_by(|(ta, da), (tb, db)| da.total_cmp(db).then_with(|| ta.cmp(tb)));

    let mut seen = HashSet::new();
    scored
        .into_iter()
        .filter(|(title, _)| seen.insert(*title))
        .take(RECOMMENDATION_LIMIT)
        .map(|(title, _)| title.to_string())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::test_support::{record, store_of};
    use crate::store::CourseRecord;

    fn with_profile(
        institution: &str,
        number: &str,
        launch: &str,
        title: &str,
        median_age: f64,
        percent_male: f64,
        percent_degree: f64,
    ) -> CourseRecord {
        let mut r = record(institution, number, launch, title, "X", "CS", 1);
        r.median_age = median_age;
        r.percent_male = percent_male;
        r.percent_degree = percent_degree;
        r
    }

    #[test]
    fn nearest_group_comes_first() {
        let store = store_of(vec![
            with_profile("A", "C1", "2020-01-01", "Young Course", 20.0, 0.0, 0.0),
            with_profile("A", "C2", "2020-01-01", "Old Course", 60.0, 0.0, 0.0),
        ]);
        let recs = recommend_courses(&store, 22.0, false, false);
        assert_eq!(recs, vec!["Young Course", "Old Course"]);
    }

    #[test]
    fn group_is_scored_on_mean_demographics_but_labelled_by_latest_offering() {
        let store = store_of(vec![
            with_profile("A", "C1", "2019-01-01", "Intro 2019", 20.0, 40.0, 40.0),
            with_profile("A", "C1", "2021-01-01", "Intro 2021", 40.0, 60.0, 60.0),
            // Single offering sitting exactly on the group mean of C1.
            with_profile("A", "C2", "2020-01-01", "Rival", 30.0, 50.0, 50.0),
        ]);
        // Point equal to both profiles: distance ties, title breaks it.
        let recs = recommend_courses(&store, 30.0, false, false);
        assert_eq!(recs[0], "Intro 2021");
        assert_eq!(recs[1], "Rival");
    }

    #[test]
    fn equal_launch_dates_pick_the_smallest_title() {
        let store = store_of(vec![
            with_profile("A", "C1", "2020-01-01", "Zeta run", 30.0, 0.0, 0.0),
            with_profile("A", "C1", "2020-01-01", "Alpha run", 30.0, 0.0, 0.0),
        ]);
        let recs = recommend_courses(&store, 30.0, false, false);
        assert_eq!(recs, vec!["Alpha run"]);
    }

    #[test]
    fn same_number_at_different_institutions_is_two_groups() {
        let store = store_of(vec![
            with_profile("A", "C1", "2020-01-01", "A's Course", 20.0, 0.0, 0.0),
            with_profile("B", "C1", "2020-01-01", "B's Course", 60.0, 0.0, 0.0),
        ]);
        let recs = recommend_courses(&store, 20.0, false, false);
        assert_eq!(recs, vec!["A's Course", "B's Course"]);
    }

    #[test]
    fn flags_project_onto_the_percentage_scale() {
        let store = store_of(vec![
            with_profile("A", "C1", "2020-01-01", "Mostly Male Grads", 30.0, 100.0, 100.0),
            with_profile("A", "C2", "2020-01-01", "Mostly Female Undergrads", 30.0, 0.0, 0.0),
        ]);
        let recs = recommend_courses(&store, 30.0, true, true);
        assert_eq!(recs[0], "Mostly Male Grads");
        let recs = recommend_courses(&store, 30.0, false, false);
        assert_eq!(recs[0], "Mostly Female Undergrads");
    }

    #[test]
    fn shared_representative_titles_are_deduped_first_wins() {
        let store = store_of(vec![
            with_profile("A", "C1", "2020-01-01", "Same Title", 30.0, 0.0, 0.0),
            with_profile("B", "C9", "2020-01-01", "Same Title", 80.0, 0.0, 0.0),
        ]);
        let recs = recommend_courses(&store, 30.0, false, false);
        assert_eq!(recs, vec!["Same Title"]);
    }

    #[test]
    fn caps_at_ten_titles() {
        let records = (0..15)
            .map(|i| {
                with_profile(
                    "A",
                    &format!("C{i}"),
                    "2020-01-01",
                    &format!("Course {i:02}"),
                    20.0 + i as f64,
                    0.0,
                    0.0,
                )
            })
            .collect();
        let recs = recommend_courses(&store_of(records), 20.0, false, false);
        assert_eq!(recs.len(), 10);
        // Ascending distance from age 20 means ascending course index.
        assert_eq!(recs[0], "Course 00");
        assert_eq!(recs[9], "Course 09");
    }
}
