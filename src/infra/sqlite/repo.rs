use std::path::PathBuf;

use crate::domain::entities::record::{RecordKind, TabularData};
use crate::infra::sqlite::queries::{
    list_sources, load_column_selection, load_records, replace_records, save_column_selection,
};
use crate::infra::sqlite::schema::init_db;
use crate::usecase::ports::repo::{
    NewRecordSource, RecordRepository, RecordSourceMeta, RepoError,
};

pub struct SqliteRepo {
    pub db_path: PathBuf,
}

impl SqliteRepo {
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

impl RecordRepository for SqliteRepo {
    fn init(&self) -> Result<(), RepoError> {
        init_db(&self.db_path).map_err(RepoError::from)
    }

    fn list_sources(&self) -> Result<Vec<RecordSourceMeta>, RepoError> {
        list_sources(&self.db_path).map_err(RepoError::from)
    }

    fn replace_records(
        &self,
        kind: RecordKind,
        source: NewRecordSource,
        data: TabularData,
    ) -> Result<i64, RepoError> {
        replace_records(&self.db_path, kind, &source.source_path, &data).map_err(RepoError::from)
    }

    fn load_records(&self, kind: RecordKind) -> Result<TabularData, RepoError> {
        load_records(&self.db_path, kind)?.ok_or(RepoError::NotImported(kind))
    }

    fn load_column_selection(&self, kind: RecordKind) -> Result<Vec<String>, RepoError> {
        load_column_selection(&self.db_path, kind).map_err(RepoError::from)
    }

    fn save_column_selection(
        &self,
        kind: RecordKind,
        columns: &[String],
    ) -> Result<(), RepoError> {
        save_column_selection(&self.db_path, kind, columns).map_err(RepoError::from)
    }
}
