use thiserror::Error;

use crate::domain::entities::record::{check_schema, ReportRecord};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ColumnError {
    #[error("unknown column: {0}")]
    Unknown(String),
}

/// Default and optional column names for one record kind, plus the active selection.
///
/// `active` is always a subset of `all` in `all`'s order. Redefining either list
/// discards the selection and starts over from the defaults.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnRegistry {
    default: Vec<String>,
    optional: Vec<String>,
    all: Vec<String>,
    active: Vec<String>,
}

impl ColumnRegistry {
    pub fn new(default: Vec<String>, optional: Vec<String>) -> Self {
        let mut registry = Self {
            default,
            optional,
            ..Self::default()
        };
        registry.rebuild();
        registry
    }

    /// Registry for a record kind. Debug builds panic if the kind's column
    /// table does not cover its column lists.
    pub fn for_kind<R: ReportRecord>() -> Self {
        let schema = check_schema::<R>();
        debug_assert!(schema.is_ok(), "{schema:?}");

        Self::new(
            R::DEFAULT_COLUMNS.iter().map(|name| name.to_string()).collect(),
            R::OPTIONAL_COLUMNS.iter().map(|name| name.to_string()).collect(),
        )
    }

    pub fn set_default_columns(&mut self, names: Vec<String>) {
        self.default = names;
        self.rebuild();
    }

    pub fn set_optional_columns(&mut self, names: Vec<String>) {
        self.optional = names;
        self.rebuild();
    }

    /// Adds or removes `name` from the active selection. Returns whether it is now active.
    pub fn toggle_column(&mut self, name: &str) -> Result<bool, ColumnError> {
        if !self.all.iter().any(|column| column == name) {
            return Err(ColumnError::Unknown(name.to_string()));
        }

        let now_active = !self.is_active(name);
        let keep = |column: &String| {
            if column == name {
                now_active
            } else {
                self.active.contains(column)
            }
        };
        self.active = self.all.iter().filter(|column| keep(column)).cloned().collect();
        Ok(now_active)
    }

    /// Replaces the active selection; names outside `all` are dropped.
    pub fn select_columns<S: AsRef<str>>(&mut self, names: &[S]) {
        self.active = self
            .all
            .iter()
            .filter(|column| names.iter().any(|name| name.as_ref() == column.as_str()))
            .cloned()
            .collect();
    }

    pub fn reset_selection(&mut self) {
        self.select_columns(&self.default.clone());
    }

    pub fn is_active(&self, name: &str) -> bool {
        self.active.iter().any(|column| column == name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.all.iter().any(|column| column == name)
    }

    pub fn default_columns(&self) -> &[String] {
        &self.default
    }

    pub fn optional_columns(&self) -> &[String] {
        &self.optional
    }

    pub fn all_columns(&self) -> &[String] {
        &self.all
    }

    pub fn active_columns(&self) -> &[String] {
        &self.active
    }

    /// The column a freshly added sort clause starts on.
    pub fn first_default(&self) -> Option<&str> {
        self.default.first().map(String::as_str)
    }

    fn rebuild(&mut self) {
        let mut all: Vec<String> = Vec::with_capacity(self.default.len() + self.optional.len());
        for name in self.default.iter().chain(&self.optional) {
            if !all.contains(name) {
                all.push(name.clone());
            }
        }
        self.all = all;
        self.reset_selection();
    }
}
