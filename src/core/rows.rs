use crate::core::errors::Result;
use csv::{ReaderBuilder, StringRecord, Trim};

/*-------------------------------------------------------------------------------------------------
  CSV Rows
-------------------------------------------------------------------------------------------------*/

/// Read every row of a headerless CSV document. Rows may have a variable number of
/// fields and every field is trimmed of surrounding whitespace.
pub fn read(text: &str) -> Result<Vec<StringRecord>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(text.as_bytes());

    let mut rows = Vec::new();
    for row in reader.records() {
        rows.push(row?);
    }

    Ok(rows)
}

/// Field at `index`, or an empty string when the row is shorter.
pub fn field(row: &StringRecord, index: usize) -> String {
    row.get(index).unwrap_or_default().to_string()
}

/*-------------------------------------------------------------------------------------------------
  Unit Tests
-------------------------------------------------------------------------------------------------*/
