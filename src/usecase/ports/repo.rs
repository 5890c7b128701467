use thiserror::Error;

use crate::domain::entities::record::{RecordKind, TabularData};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RepoError {
    #[error("{0}")]
    Message(String),
    #[error("no {0} records have been imported")]
    NotImported(RecordKind),
}

impl From<anyhow::Error> for RepoError {
    fn from(err: anyhow::Error) -> Self {
        RepoError::Message(format!("{err:#}"))
    }
}

/// Where report records come from and where per-kind column selections are kept.
pub trait RecordRepository: Send + Sync {
    fn init(&self) -> Result<(), RepoError>;

    fn list_sources(&self) -> Result<Vec<RecordSourceMeta>, RepoError>;

    /// Replaces every stored record of `kind` with `data`. Returns the row count.
    fn replace_records(
        &self,
        kind: RecordKind,
        source: NewRecordSource,
        data: TabularData,
    ) -> Result<i64, RepoError>;

    fn load_records(&self, kind: RecordKind) -> Result<TabularData, RepoError>;

    fn load_column_selection(&self, kind: RecordKind) -> Result<Vec<String>, RepoError>;
    fn save_column_selection(&self, kind: RecordKind, columns: &[String])
        -> Result<(), RepoError>;
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordSourceMeta {
    pub kind: RecordKind,
    pub source_path: String,
    pub row_count: i64,
    pub imported_at: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecordSource {
    pub source_path: String,
}
