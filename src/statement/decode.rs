//! Decodes uploaded CSV data into raw statement rows.

use csv::{ReaderBuilder, Trim};

use crate::Error;

use super::rows::{CellValue, RawRow};

/// Decode a headered CSV document into raw rows keyed by column name.
///
/// The reader is deliberately lenient about shape: records may be shorter
/// or longer than the header row (extra cells are ignored, missing cells
/// are simply absent from the row), and empty cells are left out entirely
/// so the normalizer's column probing sees only columns that hold a value.
///
/// # Errors
///
/// Returns [Error::UnsupportedStatement] if the input cannot be interpreted
/// as tabular data at all: no header row, or data that is not valid text.
/// Malformed individual rows do not produce errors here; deciding whether a
/// row is usable is the normalizer's job.
pub fn decode_csv(data: &[u8]) -> Result<Vec<RawRow>, Error> {
    let mut reader = ReaderBuilder::new()
        .flexible(true)
        .trim(Trim::All)
        .from_reader(data);

    let headers = reader
        .headers()
        .map_err(|error| {
            Error::UnsupportedStatement(format!("could not read the header row: {error}"))
        })?
        .clone();

    if headers.iter().all(str::is_empty) {
        return Err(Error::UnsupportedStatement(
            "the file has no header row".to_owned(),
        ));
    }

    let mut rows = Vec::new();

    for record in reader.records() {
        let record = record.map_err(|error| {
            Error::UnsupportedStatement(format!("could not read the file as CSV: {error}"))
        })?;

        let mut row = RawRow::new();

        for (column, value) in headers.iter().zip(record.iter()) {
            if column.is_empty() || value.is_empty() {
                continue;
            }

            row.insert(column, CellValue::Text(value.to_owned()));
        }

        rows.push(row);
    }

    tracing::debug!("decoded {} rows from {} bytes of CSV", rows.len(), data.len());

    Ok(rows)
}

#[cfg(test)]
mod decode_csv_tests {
    use crate::Error;

    use super::decode_csv;
    use super::super::rows::CellValue;

    #[test]
    fn decodes_headered_csv() {
        let csv = "Date,Description,Amount\n\
            2024-05-01,Coffee,-4.50\n\
            2024-05-02,Salary,1000.00";

        let rows = decode_csv(csv.as_bytes()).expect("Could not decode CSV");

        assert_eq!(rows.len(), 2);
        assert_eq!(
            rows[0].get("Description"),
            Some(&CellValue::Text("Coffee".to_owned()))
        );
        assert_eq!(
            rows[1].get("Amount"),
            Some(&CellValue::Text("1000.00".to_owned()))
        );
    }

    #[test]
    fn omits_empty_cells() {
        let csv = "Date,Debit,Credit\n\
            2024-05-01,150,\n\
            2024-05-02,,50";

        let rows = decode_csv(csv.as_bytes()).expect("Could not decode CSV");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Credit"), None);
        assert_eq!(rows[1].get("Debit"), None);
    }

    #[test]
    fn tolerates_short_and_long_records() {
        let csv = "Date,Description,Amount\n\
            2024-05-01,Coffee\n\
            2024-05-02,Salary,1000.00,extra";

        let rows = decode_csv(csv.as_bytes()).expect("Could not decode CSV");

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].get("Amount"), None);
        assert_eq!(
            rows[1].get("Amount"),
            Some(&CellValue::Text("1000.00".to_owned()))
        );
    }

    #[test]
    fn fails_on_empty_input() {
        let result = decode_csv(b"");

        assert!(matches!(result, Err(Error::UnsupportedStatement(_))));
    }

    #[test]
    fn fails_on_non_text_input() {
        // Invalid UTF-8 cannot be interpreted as a table.
        let result = decode_csv(&[0x44, 0x61, 0x74, 0x65, 0x0a, 0xff, 0xfe, 0x2c, 0x80]);

        assert!(matches!(result, Err(Error::UnsupportedStatement(_))));
    }
}
