use crate::domain::entities::clause::{FilterClause, SortClause};
use crate::domain::entities::page::Page;
use crate::domain::entities::record::{display_cells, ReportRecord};
use crate::domain::report::columns::{ColumnError, ColumnRegistry};
use crate::domain::report::filter::FilterEngine;
use crate::domain::report::pagination::Pagination;
use crate::domain::report::sort::SortEngine;

/// Report state for one record kind: the loaded records, the clause lists,
/// the column selection and the derived views.
///
/// Views are positions into `records`, which is never modified after load.
/// `filtered` is always recomputed from the full collection, and `ordered` is
/// `filtered` run through the sort clauses. Every filter or sort change sends
/// the pager back to page 1.
#[derive(Debug, Clone)]
pub struct ReportView<R: ReportRecord> {
    records: Vec<R>,
    columns: ColumnRegistry,
    filters: FilterEngine,
    sorting: SortEngine,
    pagination: Pagination,
    filtered: Vec<usize>,
    ordered: Vec<usize>,
}

impl<R: ReportRecord> Default for ReportView<R> {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl<R: ReportRecord> ReportView<R> {
    pub fn new(records: Vec<R>) -> Self {
        Self::with_pagination(records, Pagination::default())
    }

    pub fn with_pagination(records: Vec<R>, pagination: Pagination) -> Self {
        let all: Vec<usize> = (0..records.len()).collect();
        Self {
            records,
            columns: ColumnRegistry::for_kind::<R>(),
            filters: FilterEngine::new(),
            sorting: SortEngine::new(),
            pagination,
            filtered: all.clone(),
            ordered: all,
        }
    }

    /// Replaces the record collection and re-runs the current clauses over it.
    pub fn load(&mut self, records: Vec<R>) {
        tracing::debug!(kind = %R::KIND, rows = records.len(), "loaded records");
        self.records = records;
        self.apply_filters();
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    // Columns

    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> &mut ColumnRegistry {
        &mut self.columns
    }

    pub fn toggle_column(&mut self, name: &str) -> Result<bool, ColumnError> {
        self.columns.toggle_column(name)
    }

    pub fn all_columns(&self) -> &[String] {
        self.columns.all_columns()
    }

    pub fn active_columns(&self) -> &[String] {
        self.columns.active_columns()
    }

    // Filters

    pub fn filters(&self) -> &[FilterClause] {
        self.filters.clauses()
    }

    /// Appends a blank clause. The view is unchanged until the clause is filled
    /// in and [`apply_filters`](Self::apply_filters) runs.
    pub fn add_filter(&mut self) -> usize {
        self.pagination.reset();
        self.filters.add_clause()
    }

    /// Edits a clause in place. Re-run [`apply_filters`](Self::apply_filters) to see the result.
    pub fn filter_mut(&mut self, index: usize) -> Option<&mut FilterClause> {
        self.pagination.reset();
        self.filters.clause_mut(index)
    }

    /// Appends a filled-in clause and applies it.
    pub fn push_filter(&mut self, clause: FilterClause) {
        self.filters.push(clause);
        self.apply_filters();
    }

    /// Removes a clause and immediately re-applies the rest.
    pub fn remove_filter(&mut self, index: usize) -> Option<FilterClause> {
        let removed = self.filters.remove_clause(index);
        self.apply_filters();
        removed
    }

    /// Drops every clause; the filtered view is the full collection again.
    pub fn clear_filters(&mut self) {
        self.filters.clear();
        self.apply_filters();
    }

    pub fn apply_filters(&mut self) {
        self.filtered = self.filters.apply(&self.records);
        self.ordered = self.filtered.clone();
        self.sorting.apply(&self.records, &mut self.ordered);
        self.pagination.reset();
    }

    // Sorting

    pub fn sort_clauses(&self) -> &[SortClause] {
        self.sorting.clauses()
    }

    /// Appends an ascending clause on the first default column.
    pub fn add_sort(&mut self) -> usize {
        let column = self.columns.first_default().unwrap_or_default().to_string();
        self.pagination.reset();
        self.sorting.add_clause(&column)
    }

    pub fn sort_mut(&mut self, index: usize) -> Option<&mut SortClause> {
        self.pagination.reset();
        self.sorting.clause_mut(index)
    }

    /// Appends a clause and applies sorting.
    pub fn push_sort(&mut self, clause: SortClause) {
        self.sorting.push(clause);
        self.apply_sort();
    }

    /// Removes a clause. The ordered view keeps its current order until the
    /// next [`apply_sort`](Self::apply_sort).
    pub fn remove_sort(&mut self, index: usize) -> Option<SortClause> {
        self.pagination.reset();
        self.sorting.remove_clause(index)
    }

    /// Drops every clause and puts the view back in filtered order.
    pub fn clear_sort(&mut self) {
        self.sorting.clear();
        self.ordered = self.filtered.clone();
        self.pagination.reset();
    }

    pub fn apply_sort(&mut self) {
        self.ordered = self.filtered.clone();
        self.sorting.apply(&self.records, &mut self.ordered);
        self.pagination.reset();
    }

    // Views

    pub fn filtered_view(&self) -> impl Iterator<Item = &R> + '_ {
        self.filtered.iter().map(|&idx| &self.records[idx])
    }

    pub fn ordered_view(&self) -> impl Iterator<Item = &R> + '_ {
        self.ordered.iter().map(|&idx| &self.records[idx])
    }

    pub fn filtered_len(&self) -> usize {
        self.filtered.len()
    }

    pub fn ordered_len(&self) -> usize {
        self.ordered.len()
    }

    // Pagination

    pub fn pagination(&self) -> Pagination {
        self.pagination
    }

    pub fn current_page(&self) -> usize {
        self.pagination.page()
    }

    pub fn page_size(&self) -> usize {
        self.pagination.page_size()
    }

    pub fn page_count(&self) -> usize {
        self.pagination.page_count(self.ordered.len())
    }

    pub fn go_to_page(&mut self, page: usize) {
        self.pagination.go_to(page);
    }

    pub fn set_page_size(&mut self, page_size: usize) {
        self.pagination.set_page_size(page_size);
    }

    pub fn page(&self) -> Page<'_, R> {
        let rows = self
            .pagination
            .slice(&self.ordered)
            .iter()
            .map(|&idx| &self.records[idx])
            .collect();

        Page {
            rows,
            page: self.pagination.page(),
            page_size: self.pagination.page_size(),
            page_count: self.page_count(),
            total_rows: self.ordered.len(),
        }
    }

    /// The current page as display text, one cell per active column.
    pub fn page_cells(&self) -> Vec<Vec<String>> {
        let active = self.columns.active_columns();
        self.page()
            .rows
            .into_iter()
            .map(|record| display_cells(record, active))
            .collect()
    }
}
