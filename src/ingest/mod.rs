// src/ingest/mod.rs

use std::{fs::File, io::BufReader, path::Path};

use anyhow::{Context, Result};
use csv::ReaderBuilder;
use tracing::debug;

/// Read the raw field tuples out of a dataset file, one per data row. The
/// single header row is skipped; quoted commas are respected, so a field may
/// contain literal commas only when wrapped in quotes. Arity and numeric
/// validation happen later, in the store.
pub fn read_rows(path: impl AsRef<Path>) -> Result<Vec<Vec<String>>> {
    let path = path.as_ref();
    let file =
        File::open(path).with_context(|| format!("opening dataset `{}`", path.display()))?;

    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true) // arity is enforced by the store, with a row number attached
        .trim(csv::Trim::None)
        .from_reader(BufReader::new(file));

    let mut rows = Vec::new();
    for (idx, result) in rdr.records().enumerate() {
        let record = result
            .with_context(|| format!("CSV parse error in `{}` at row {}", path.display(), idx + 2))?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    debug!(rows = rows.len(), path = %path.display(), "read raw rows");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn skips_header_and_respects_quoted_commas() -> Result<()> {
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "institution,number,title")?;
        writeln!(tmp, "MITx,6.002x,\"Circuits, and Electronics\"")?;
        writeln!(tmp, "HarvardX,CS50x,Computer Science")?;

        let rows = read_rows(tmp.path())?;
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0][2], "Circuits, and Electronics");
        assert_eq!(rows[1][0], "HarvardX");
        Ok(())
    }

    #[test]
    fn tolerates_uneven_arity() -> Result<()> {
        // Wrong field counts surface at store construction, not here.
        let mut tmp = NamedTempFile::new()?;
        writeln!(tmp, "a,b,c")?;
        writeln!(tmp, "1,2")?;
        writeln!(tmp, "1,2,3,4")?;

        let rows = read_rows(tmp.path())?;
        assert_eq!(rows[0].len(), 2);
        assert_eq!(rows[1].len(), 4);
        Ok(())
    }

    #[test]
    fn missing_file_is_an_error() {
        assert!(read_rows("/no/such/dataset.csv").is_err());
    }
}
