use std::sync::Arc;

use crate::domain::entities::record::{records_from_table, ReportRecord};
use crate::domain::report::pagination::Pagination;
use crate::domain::report::view::ReportView;
use crate::usecase::ports::repo::{RecordRepository, RecordSourceMeta, RepoError};

pub struct QueryService {
    repo: Arc<dyn RecordRepository>,
}

impl QueryService {
    pub fn new(repo: Arc<dyn RecordRepository>) -> Self {
        Self { repo }
    }

    pub fn list_sources(&self) -> Result<Vec<RecordSourceMeta>, RepoError> {
        self.repo.init()?;
        self.repo.list_sources()
    }

    /// Loads the stored records of one kind and restores its saved column selection.
    pub fn open_report<R: ReportRecord>(
        &self,
        page_size: usize,
    ) -> Result<ReportView<R>, RepoError> {
        self.repo.init()?;
        let table = self.repo.load_records(R::KIND)?;
        let records = records_from_table::<R>(&table);

        let mut view = ReportView::with_pagination(records, Pagination::new(page_size));
        let saved = self.repo.load_column_selection(R::KIND)?;
        if !saved.is_empty() {
            view.columns_mut().select_columns(&saved);
        }

        tracing::debug!(
            kind = %R::KIND,
            rows = view.records().len(),
            active_columns = view.active_columns().len(),
            "opened report"
        );
        Ok(view)
    }

    pub fn save_columns<R: ReportRecord>(&self, view: &ReportView<R>) -> Result<(), RepoError> {
        self.repo
            .save_column_selection(R::KIND, view.active_columns())
    }
}
