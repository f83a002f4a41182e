// src/store/date_parser.rs

use chrono::NaiveDate;

/// Parse a launch date as it appears in the source table. The dataset writes
/// `M/D/YYYY` (zero-padding optional); ISO `YYYY-MM-DD` is accepted as well.
pub fn parse_launch_date(s: &str) -> Option<NaiveDate> {
    let s = s.trim().trim_matches('"');
    NaiveDate::parse_from_str(s, "%m/%d/%Y")
        .or_else(|_| NaiveDate::parse_from_str(s, "%Y-%m-%d"))
        .ok()
}
