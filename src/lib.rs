//! Filter, sort and paginate task, user and region report records.
//!
//! [`ReportView`] is the entry point: load records of one kind, edit its filter
//! and sort clauses and column selection, and read back the current page.

pub mod config;
pub mod domain;
pub mod infra;
pub mod logging;
pub mod usecase;

pub use domain::entities::clause::{ClauseParseError, FilterClause, Operator, SortClause};
pub use domain::entities::page::Page;
pub use domain::entities::record::{Count, RecordKind, ReportRecord, TabularData, Value};
pub use domain::entities::region::Region;
pub use domain::entities::task::Task;
pub use domain::entities::user::User;
pub use domain::report::columns::{ColumnError, ColumnRegistry};
pub use domain::report::pagination::{Pagination, DEFAULT_PAGE_SIZE};
pub use domain::report::view::ReportView;
