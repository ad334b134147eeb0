//! Comma-separated output.

use std::io::Write;

use crate::{COLUMNS, ExportError, ExportTable};

/// Writes a header row followed by one record per meal.
pub fn write_csv<W: Write>(table: &ExportTable<'_>, writer: W) -> Result<(), ExportError> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    csv_writer.write_record(COLUMNS)?;
    for row in table.rows() {
        csv_writer.write_record(row.iter().map(ToString::to_string))?;
    }
    csv_writer.flush()?;
    Ok(())
}

/// Renders the table as CSV in memory.
pub fn csv_bytes(table: &ExportTable<'_>) -> Result<Vec<u8>, ExportError> {
    let mut buf = Vec::new();
    write_csv(table, &mut buf)?;
    Ok(buf)
}
