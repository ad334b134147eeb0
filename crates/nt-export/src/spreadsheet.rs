//! XLSX workbook output.

use std::path::Path;

use rust_xlsxwriter::{Format, Workbook};

use crate::{COLUMNS, Cell, ExportError, ExportTable};

/// Name of the single worksheet.
pub const SHEET_NAME: &str = "Meals";

fn build_workbook(table: &ExportTable<'_>) -> Result<Workbook, ExportError> {
    let mut workbook = Workbook::new();
    let header = Format::new().set_bold();
    let sheet = workbook.add_worksheet();
    sheet.set_name(SHEET_NAME)?;

    for (col, title) in (0u16..).zip(COLUMNS) {
        sheet.write_string_with_format(0, col, title, &header)?;
    }

    // Blank cells and empty text are skipped so the sheet has no
    // empty-string values.
    for (row, cells) in (1u32..).zip(table.rows()) {
        for (col, cell) in (0u16..).zip(cells) {
            match cell {
                Cell::Text(text) if !text.is_empty() => {
                    sheet.write_string(row, col, text)?;
                }
                Cell::Number(n) => {
                    sheet.write_number(row, col, n)?;
                }
                Cell::Text(_) | Cell::Blank => {}
            }
        }
    }

    Ok(workbook)
}

/// Renders the table as an XLSX workbook in memory.
pub fn xlsx_bytes(table: &ExportTable<'_>) -> Result<Vec<u8>, ExportError> {
    let mut workbook = build_workbook(table)?;
    Ok(workbook.save_to_buffer()?)
}

/// Saves the table as an XLSX workbook at `path`.
pub fn write_xlsx(table: &ExportTable<'_>, path: &Path) -> Result<(), ExportError> {
    let mut workbook = build_workbook(table)?;
    workbook.save(path)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Cursor;

    use calamine::{Data, Reader, Xlsx, open_workbook_from_rs};
    use nt_core::{ActivityLevel, MealEntry, UserProfile};

    use crate::ProfileLayout;

    fn read_back(bytes: Vec<u8>) -> (Vec<String>, Vec<Vec<Data>>) {
        let mut workbook: Xlsx<_> = open_workbook_from_rs(Cursor::new(bytes)).unwrap();
        let names = workbook.sheet_names();
        let range = workbook.worksheet_range(SHEET_NAME).unwrap();
        let rows = range.rows().map(<[Data]>::to_vec).collect();
        (names, rows)
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    fn header() -> Vec<Data> {
        COLUMNS.into_iter().map(text).collect()
    }

    fn two_meals() -> [MealEntry; 2] {
        [
            MealEntry::new("Breakfast", 300.0, 10.0, 40.0, 10.0).unwrap(),
            MealEntry::new("Lunch", 500.0, 20.0, 60.0, 15.0).unwrap(),
        ]
    }

    #[test]
    fn first_row_layout_leaves_later_profile_cells_empty() {
        let profile = UserProfile::new("Ada", 70.0, 170.0, 25, ActivityLevel::Sedentary).unwrap();
        let meals = two_meals();
        let table = ExportTable::new(&profile, &meals, ProfileLayout::FirstRow).unwrap();

        let bytes = xlsx_bytes(&table).unwrap();
        assert!(bytes.starts_with(b"PK"));

        let (names, rows) = read_back(bytes);
        assert_eq!(names, [SHEET_NAME]);
        assert_eq!(
            rows,
            [
                header(),
                vec![
                    text("Ada"),
                    Data::Float(70.0),
                    Data::Float(170.0),
                    Data::Float(25.0),
                    text("Breakfast"),
                    Data::Float(300.0),
                    Data::Float(10.0),
                    Data::Float(40.0),
                    Data::Float(10.0),
                ],
                vec![
                    Data::Empty,
                    Data::Empty,
                    Data::Empty,
                    Data::Empty,
                    text("Lunch"),
                    Data::Float(500.0),
                    Data::Float(20.0),
                    Data::Float(60.0),
                    Data::Float(15.0),
                ],
            ]
        );
    }

    #[test]
    fn write_xlsx_saves_every_row_layout() {
        let temp = tempfile::tempdir().unwrap();
        let path = temp.path().join("log.xlsx");
        let profile = UserProfile::default();
        let meals = two_meals();
        let table = ExportTable::new(&profile, &meals, ProfileLayout::EveryRow).unwrap();

        write_xlsx(&table, &path).unwrap();
        let (names, rows) = read_back(std::fs::read(&path).unwrap());

        assert_eq!(names, [SHEET_NAME]);
        assert_eq!(rows.len(), 3);
        assert_eq!(rows[0], header());
        for (row, meal) in rows[1..].iter().zip(["Breakfast", "Lunch"]) {
            // Unnamed profile: the name cell stays empty.
            assert_eq!(row[0], Data::Empty);
            assert_eq!(row[1..4], [Data::Float(70.0), Data::Float(170.0), Data::Float(25.0)]);
            assert_eq!(row[4], text(meal));
        }
    }
}
