use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use crate::domain::entities::record::{RecordKind, TabularData};
use crate::infra::import::csv::read_csv_table;
use crate::infra::import::xlsx::read_xlsx_table;
use crate::usecase::ports::repo::{NewRecordSource, RecordRepository};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportResult {
    pub kind: RecordKind,
    pub row_count: i64,
}

pub struct ImportService {
    repo: Arc<dyn RecordRepository>,
}

impl ImportService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    /// Reads a CSV or spreadsheet and replaces the stored records of `kind` with it.
    pub fn import_file(
        &self,
        kind: RecordKind,
        path: &Path,
        sheet: Option<&str>,
    ) -> Result<ImportResult> {
        let data = read_table(path, sheet)?;
        let source = NewRecordSource {
            source_path: path.to_string_lossy().into_owned(),
        };

        self.repo.init()?;
        let row_count = self.repo.replace_records(kind, source, data)?;
        Ok(ImportResult { kind, row_count })
    }
}

pub fn read_table(path: &Path, sheet: Option<&str>) -> Result<TabularData> {
    let extension = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map(str::to_ascii_lowercase)
        .unwrap_or_default();

    match extension.as_str() {
        "xlsx" | "xlsm" | "xls" | "ods" => read_xlsx_table(path, sheet),
        _ => read_csv_table(path),
    }
}
