use std::path::Path;

use anyhow::{Context, Result};
use calamine::{open_workbook_auto, Data, Reader};

use crate::domain::entities::record::TabularData;

/// Text form of a cell; `None` for empty cells.
pub fn cell_to_string(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::String(v) => v.trim().to_string(),
        Data::Float(v) => v.to_string(),
        Data::Int(v) => v.to_string(),
        Data::Bool(v) => v.to_string(),
        Data::DateTime(v) => v.to_string(),
        Data::DateTimeIso(v) => v.to_string(),
        Data::DurationIso(v) => v.to_string(),
        Data::Error(v) => format!("{v:?}"),
        Data::Empty => String::new(),
    };
    (!text.is_empty()).then_some(text)
}

/// Reads one sheet: the named one, or else the first sheet that has any cells.
/// The first row is the header.
pub fn read_xlsx_table(xlsx_path: &Path, sheet: Option<&str>) -> Result<TabularData> {
    let mut workbook = open_workbook_auto(xlsx_path)
        .with_context(|| format!("failed to open xlsx: {}", xlsx_path.display()))?;

    let range = match sheet {
        Some(name) => workbook
            .worksheet_range(name)
            .with_context(|| format!("failed to read sheet: {name}"))?,
        None => {
            let mut found = None;
            for name in workbook.sheet_names() {
                let range = workbook
                    .worksheet_range(&name)
                    .with_context(|| format!("failed to read sheet: {name}"))?;
                if !range.is_empty() {
                    found = Some(range);
                    break;
                }
            }
            found.with_context(|| format!("no sheet with data in {}", xlsx_path.display()))?
        }
    };

    let mut rows = range.rows();
    let columns: Vec<String> = rows
        .next()
        .map(|header| {
            header
                .iter()
                .map(|cell| cell_to_string(cell).unwrap_or_default())
                .collect()
        })
        .unwrap_or_default();

    if columns.iter().all(|name| name.is_empty()) {
        anyhow::bail!("xlsx header is required")
    }

    let rows: Vec<Vec<Option<String>>> = rows
        .map(|row| {
            (0..columns.len())
                .map(|col_idx| row.get(col_idx).and_then(cell_to_string))
                .collect()
        })
        .filter(|row: &Vec<Option<String>>| row.iter().any(Option::is_some))
        .collect();

    tracing::debug!(
        path = %xlsx_path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "read xlsx"
    );
    Ok(TabularData { columns, rows })
}
