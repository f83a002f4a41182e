// src/analytics/mod.rs
//
// The six query operations. Each one is a pure function of the record store
// plus its explicit parameters: no shared state, no mutation, safe to call
// in any order or in parallel.

pub mod instructors;
pub mod participation;
pub mod ranking;
pub mod recommend;
pub mod search;

pub use instructors::{courses_by_instructor, InstructorCourses};
pub use participation::{participants_by_institution, participants_by_institution_and_subject};
pub use ranking::top_courses;
pub use recommend::recommend_courses;
pub use search::search_courses;
