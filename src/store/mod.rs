// src/store/mod.rs

pub mod date_parser;
pub mod record;

use std::path::Path;

use anyhow::{Context, Result};
use tracing::info;

use crate::error::MalformedRecordError;
use crate::ingest;

pub use record::{clean_str, CourseRecord, FIELD_COUNT};

/// In-memory, load-once view of the whole course table. Records keep their
/// source order; nothing is mutated or removed after construction.
#[derive(Debug, Default)]
pub struct RecordStore {
    records: Vec<CourseRecord>,
}

impl RecordStore {
    /// Build a store from raw field tuples, one per source row. The first
    /// malformed tuple aborts the whole load — a fixed schema has no useful
    /// partial-load semantics.
    pub fn from_rows(rows: &[Vec<String>]) -> Result<Self, MalformedRecordError> {
        let mut records = Vec::with_capacity(rows.len());
        for (i, fields) in rows.iter().enumerate() {
            // +2: rows are 0-indexed and the header row was row 1.
            records.push(CourseRecord::from_fields(fields, i + 2)?);
        }
        Ok(RecordStore { records })
    }

    /// Read a dataset file and load every row.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let rows = ingest::read_rows(path)?;
        let store = Self::from_rows(&rows)
            .with_context(|| format!("loading records from `{}`", path.display()))?;
        info!(records = store.len(), path = %path.display(), "dataset loaded");
        Ok(store)
    }

    pub fn records(&self) -> &[CourseRecord] {
        &self.records
    }

    pub fn iter(&self) -> impl Iterator<Item = &CourseRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
