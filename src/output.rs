use std::io::{self, Write};
use std::path::Path;
use tabled::{settings::Style, Table, Tabled};

use crate::error::AppError;
use crate::types::{CountRow, COL_BOROUGH, COL_COMPLAINT_TYPE};

/// Output header, fixed as `Complaint Type,Borough,count`.
pub const OUTPUT_HEADER: [&str; 3] = [COL_COMPLAINT_TYPE, COL_BOROUGH, "count"];

/// Serialize the count table as CSV into any writer.
///
/// The header is written explicitly rather than through serde so an empty
/// result still carries it.
pub fn write_rows<W: Write>(wtr: W, rows: &[CountRow]) -> Result<(), AppError> {
    let mut wtr = csv::WriterBuilder::new().has_headers(false).from_writer(wtr);
    wtr.write_record(OUTPUT_HEADER)?;
    for r in rows {
        wtr.serialize(r)?;
    }
    wtr.flush()?;
    Ok(())
}

pub fn write_csv(path: &Path, rows: &[CountRow]) -> Result<(), AppError> {
    let file = std::fs::File::create(path)?;
    write_rows(file, rows)
}

/// Write the table to stdout with no framing beyond the CSV itself.
pub fn write_stdout(rows: &[CountRow]) -> Result<(), AppError> {
    let stdout = io::stdout();
    write_rows(stdout.lock(), rows)
}

/// Print a markdown preview of the leading rows to the console. Used only
/// when the full table goes to a file.
pub fn preview_table_rows<T>(rows: &[T], max_rows: usize)
where
    T: Tabled + Clone,
{
    let slice: Vec<T> = rows.iter().cloned().take(max_rows).collect();
    if slice.is_empty() {
        println!("(no rows)\n");
        return;
    }
    let table_str = Table::new(slice).with(Style::markdown()).to_string();
    println!("{}\n", table_str);
}
