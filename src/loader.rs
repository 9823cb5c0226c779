use crate::error::AppError;
use crate::types::{
    ComplaintRecord, COL_BOROUGH, COL_COMPLAINT_TYPE, COL_CREATED_DATE, REQUIRED_COLUMNS,
};
use crate::util::{parse_created_date, title_case};
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::path::Path;

/// The input file materialized in memory: one header record plus every data
/// row, columns addressable by header name.
#[derive(Debug)]
pub struct RawTable {
    headers: StringRecord,
    rows: Vec<StringRecord>,
}

impl RawTable {
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|h| h == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }
}

/// Positions of the three required columns within the header.
#[derive(Debug, Clone, Copy)]
pub struct SchemaColumns {
    created_date: usize,
    complaint_type: usize,
    borough: usize,
}

/// Read the whole CSV into memory.
///
/// The reader is flexible, so ragged rows are kept (missing cells read back
/// as empty strings) rather than aborting the run. `display_path` is the
/// path as the user typed it; a not-found error reports that form, not the
/// resolved absolute one.
pub fn load(path: &Path, display_path: &str) -> Result<RawTable, AppError> {
    let file = File::open(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            AppError::NotFound(display_path.to_string())
        } else {
            AppError::Io(e)
        }
    })?;
    let mut rdr = ReaderBuilder::new().flexible(true).from_reader(file);
    let headers = rdr.headers()?.clone();
    let mut rows = Vec::new();
    for result in rdr.records() {
        rows.push(result?);
    }
    Ok(RawTable { headers, rows })
}

/// Check that all required columns are present, in the fixed order
/// `Created Date`, `Complaint Type`, `Borough`. The first missing column is
/// the one named in the error, and the pipeline halts before producing any
/// output.
pub fn validate_schema(table: &RawTable) -> Result<SchemaColumns, AppError> {
    for name in REQUIRED_COLUMNS {
        if table.column_index(name).is_none() {
            return Err(AppError::MissingColumn(name));
        }
    }
    // Indices exist after the loop above.
    let lookup = |name| table.column_index(name).unwrap_or_default();
    Ok(SchemaColumns {
        created_date: lookup(COL_CREATED_DATE),
        complaint_type: lookup(COL_COMPLAINT_TYPE),
        borough: lookup(COL_BOROUGH),
    })
}

/// Turn raw rows into typed records: borough trimmed and title-cased on
/// every row, timestamp parsed against the fixed format.
///
/// No row is dropped here. Rows whose timestamp failed to parse carry
/// `created_at: None` and fall out at the range filter instead.
pub fn clean(table: &RawTable, cols: SchemaColumns) -> Vec<ComplaintRecord> {
    table
        .rows
        .iter()
        .map(|row| {
            let cell = |i: usize| row.get(i).unwrap_or("");
            ComplaintRecord {
                created_at: parse_created_date(cell(cols.created_date)),
                complaint_type: cell(cols.complaint_type).to_string(),
                borough: title_case(cell(cols.borough)),
            }
        })
        .collect()
}
