use std::path::Path;

use anyhow::{Context, Result};
use csv::StringRecord;

use crate::domain::entities::record::TabularData;

pub fn read_csv_table(csv_path: &Path) -> Result<TabularData> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_path(csv_path)
        .with_context(|| format!("failed to open csv: {}", csv_path.display()))?;
    let headers = reader
        .headers()
        .with_context(|| format!("failed to read headers from csv: {}", csv_path.display()))?
        .clone();

    if headers.is_empty() {
        anyhow::bail!("csv header is required")
    }

    let columns = header_names(&headers);
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.context("failed to parse csv record")?;
        let row = (0..columns.len())
            .map(|col_idx| {
                record
                    .get(col_idx)
                    .filter(|value| !value.trim().is_empty())
                    .map(str::to_string)
            })
            .collect();
        rows.push(row);
    }

    tracing::debug!(
        path = %csv_path.display(),
        columns = columns.len(),
        rows = rows.len(),
        "read csv"
    );
    Ok(TabularData { columns, rows })
}

fn header_names(headers: &StringRecord) -> Vec<String> {
    headers
        .iter()
        .map(|name| name.trim_start_matches('\u{feff}').trim().to_string())
        .collect()
}
