use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};

use crate::domain::entities::record::{display_cells, RecordKind, ReportRecord};
use crate::domain::report::view::ReportView;

/// `<kind>-report-<MMDD>.csv`
pub fn report_file_name(kind: RecordKind, date: NaiveDate) -> String {
    format!("{kind}-report-{}.csv", date.format("%m%d"))
}

pub fn default_report_file_name(kind: RecordKind) -> String {
    report_file_name(kind, Local::now().date_naive())
}

/// Writes the whole ordered view (not just the current page) with the active columns.
pub fn write_report<R: ReportRecord, W: Write>(view: &ReportView<R>, out: W) -> Result<usize> {
    let mut writer = csv::Writer::from_writer(out);
    let columns = view.active_columns();

    writer
        .write_record(columns)
        .context("failed to write report header")?;

    let mut written = 0;
    for record in view.ordered_view() {
        writer
            .write_record(display_cells(record, columns))
            .context("failed to write report row")?;
        written += 1;
    }

    writer.flush().context("failed to flush report")?;
    Ok(written)
}

pub fn export_report<R: ReportRecord>(view: &ReportView<R>, path: &Path) -> Result<usize> {
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("failed to create parent dir: {}", parent.display()))?;
    }

    let file = std::fs::File::create(path)
        .with_context(|| format!("failed to create report: {}", path.display()))?;
    let written = write_report(view, file)?;

    tracing::info!(kind = %R::KIND, rows = written, path = %path.display(), "exported report");
    Ok(written)
}
