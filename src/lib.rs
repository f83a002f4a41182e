// src/lib.rs

pub mod analytics;
pub mod error;
pub mod ingest;
pub mod store;

pub use error::{MalformedRecordError, UnsupportedMetricError};
pub use store::{CourseRecord, RecordStore};
