// src/store/record.rs

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::MalformedRecordError;
use crate::store::date_parser::parse_launch_date;

/// Number of columns in the source table, in the fixed schema order.
pub const FIELD_COUNT: usize = 23;

/// One row of the course table, fully typed. Immutable after construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CourseRecord {
    pub institution: String,
    pub course_number: String,
    pub launch_date: NaiveDate,
    pub title: String,
    /// Comma-separated instructor names, outer quotes already stripped.
    pub instructors: String,
    pub subject: String,
    pub year: i32,
    pub honor_code: i32,
    pub participants: i64,
    pub audited: i64,
    pub certified: i64,
    pub percent_audited: f64,
    pub percent_certified: f64,
    pub percent_certified_50: f64,
    pub percent_video: f64,
    pub percent_forum: f64,
    pub grade_higher_zero: f64,
    pub total_hours: f64,
    pub median_hours_certification: f64,
    pub median_age: f64,
    pub percent_male: f64,
    pub percent_female: f64,
    pub percent_degree: f64,
}

/// Trim whitespace + strip outer quotes if present. Idempotent: an already
/// unquoted value passes through unchanged.
pub fn clean_str(raw: &str) -> String {
    let trimmed = raw.trim();
    if trimmed.starts_with('"') && trimmed.ends_with('"') && trimmed.len() >= 2 {
        trimmed[1..trimmed.len() - 1].to_string()
    } else {
        trimmed.to_string()
    }
}

fn parse_int(
    fields: &[String],
    idx: usize,
    column: &'static str,
    line: usize,
) -> Result<i64, MalformedRecordError> {
    fields[idx]
        .trim()
        .parse()
        .map_err(|_| MalformedRecordError::InvalidNumber {
            line,
            column,
            value: fields[idx].clone(),
        })
}

fn parse_float(
    fields: &[String],
    idx: usize,
    column: &'static str,
    line: usize,
) -> Result<f64, MalformedRecordError> {
    fields[idx]
        .trim()
        .parse()
        .map_err(|_| MalformedRecordError::InvalidNumber {
            line,
            column,
            value: fields[idx].clone(),
        })
}

impl CourseRecord {
    /// Build a record from one raw field tuple. `line` is the 1-based source
    /// row number, used only for error reporting.
    pub fn from_fields(fields: &[String], line: usize) -> Result<Self, MalformedRecordError> {
        if fields.len() != FIELD_COUNT {
            return Err(MalformedRecordError::WrongArity {
                line,
                expected: FIELD_COUNT,
                found: fields.len(),
            });
        }

        let launch_date =
            parse_launch_date(&fields[2]).ok_or_else(|| MalformedRecordError::InvalidDate {
                line,
                value: fields[2].clone(),
            })?;

        Ok(CourseRecord {
            institution: fields[0].trim().to_string(),
            course_number: fields[1].trim().to_string(),
            launch_date,
            title: clean_str(&fields[3]),
            instructors: clean_str(&fields[4]),
            subject: clean_str(&fields[5]),
            year: parse_int(fields, 6, "year", line)? as i32,
            honor_code: parse_int(fields, 7, "honor_code", line)? as i32,
            participants: parse_int(fields, 8, "participants", line)?,
            audited: parse_int(fields, 9, "audited", line)?,
            certified: parse_int(fields, 10, "certified", line)?,
            percent_audited: parse_float(fields, 11, "percent_audited", line)?,
            percent_certified: parse_float(fields, 12, "percent_certified", line)?,
            percent_certified_50: parse_float(fields, 13, "percent_certified_50", line)?,
            percent_video: parse_float(fields, 14, "percent_video", line)?,
            percent_forum: parse_float(fields, 15, "percent_forum", line)?,
            grade_higher_zero: parse_float(fields, 16, "grade_higher_zero", line)?,
            total_hours: parse_float(fields, 17, "total_hours", line)?,
            median_hours_certification: parse_float(fields, 18, "median_hours_certification", line)?,
            median_age: parse_float(fields, 19, "median_age", line)?,
            percent_male: parse_float(fields, 20, "percent_male", line)?,
            percent_female: parse_float(fields, 21, "percent_female", line)?,
            percent_degree: parse_float(fields, 22, "percent_degree", line)?,
        })
    }

    /// Individual instructor names, split on commas and trimmed.
    pub fn instructor_names(&self) -> Vec<&str> {
        self.instructors
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .collect()
    }

    /// True when exactly one instructor is listed.
    pub fn is_solo_taught(&self) -> bool {
        self.instructor_names().len() == 1
    }

    /// Identity pair of the course offering group this record belongs to.
    pub fn offering_key(&self) -> (&str, &str) {
        (&self.institution, &self.course_number)
    }
}
