use std::borrow::Cow;
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A single cell as seen by the filter and sort engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value<'a> {
    Text(&'a str),
    Number(f64),
}

impl<'a> Value<'a> {
    /// Text form used for display, equality and `contains` checks.
    pub fn as_text(&self) -> Cow<'a, str> {
        match *self {
            Value::Text(text) => Cow::Borrowed(text),
            Value::Number(number) => Cow::Owned(number.to_string()),
        }
    }

    /// Best-effort numeric form; text that does not parse is NaN.
    pub fn as_number(&self) -> f64 {
        match *self {
            Value::Text(text) => parse_number(text),
            Value::Number(number) => number,
        }
    }
}

pub fn parse_number(text: &str) -> f64 {
    text.trim().parse::<f64>().unwrap_or(f64::NAN)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordKind {
    Task,
    User,
    Region,
}

impl RecordKind {
    pub const ALL: [RecordKind; 3] = [RecordKind::Task, RecordKind::User, RecordKind::Region];

    pub fn as_str(&self) -> &'static str {
        match self {
            RecordKind::Task => "task",
            RecordKind::User => "user",
            RecordKind::Region => "region",
        }
    }
}

impl fmt::Display for RecordKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown record kind: {0}")]
pub struct UnknownKind(pub String);

impl FromStr for RecordKind {
    type Err = UnknownKind;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "task" | "tasks" => Ok(RecordKind::Task),
            "user" | "users" => Ok(RecordKind::User),
            "region" | "regions" => Ok(RecordKind::Region),
            other => Err(UnknownKind(other.to_string())),
        }
    }
}

pub type Getter<R> = for<'a> fn(&'a R) -> Option<Value<'a>>;
pub type Setter<R> = fn(&mut R, &str);

/// One entry of a record kind's column table.
pub struct Field<R> {
    pub name: &'static str,
    pub get: Getter<R>,
    pub set: Setter<R>,
}

impl<R> Field<R> {
    pub const fn new(name: &'static str, get: Getter<R>, set: Setter<R>) -> Self {
        Self { name, get, set }
    }
}

/// A record kind: a typed row plus the table mapping column names to its fields.
pub trait ReportRecord: Default + Clone + fmt::Debug + 'static {
    const KIND: RecordKind;
    const FIELDS: &'static [Field<Self>];
    const DEFAULT_COLUMNS: &'static [&'static str];
    const OPTIONAL_COLUMNS: &'static [&'static str];

    fn field(column: &str) -> Option<&'static Field<Self>> {
        Self::FIELDS.iter().find(|field| field.name == column)
    }

    /// Looks up a column by name; unknown columns read as absent.
    fn value(&self, column: &str) -> Option<Value<'_>> {
        Self::field(column).and_then(|field| (field.get)(self))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SchemaError {
    #[error("{kind}: column {column:?} is declared more than once")]
    DuplicateColumn { kind: RecordKind, column: String },
    #[error("{kind}: registry column {column:?} has no accessor")]
    MissingAccessor { kind: RecordKind, column: String },
}

/// Verifies that a kind's column table is well formed and covers its registry columns.
pub fn check_schema<R: ReportRecord>() -> Result<(), SchemaError> {
    let mut seen = HashSet::new();
    for field in R::FIELDS {
        if !seen.insert(field.name) {
            return Err(SchemaError::DuplicateColumn {
                kind: R::KIND,
                column: field.name.to_string(),
            });
        }
    }

    for column in R::DEFAULT_COLUMNS.iter().chain(R::OPTIONAL_COLUMNS) {
        if !seen.contains(column) {
            return Err(SchemaError::MissingAccessor {
                kind: R::KIND,
                column: column.to_string(),
            });
        }
    }

    Ok(())
}

/// Column names plus nullable text cells, as produced by the importers and the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct TabularData {
    pub columns: Vec<String>,
    pub rows: Vec<Vec<Option<String>>>,
}

/// Builds typed records from tabular cells. Absent cells leave the field at its default.
pub fn records_from_table<R: ReportRecord>(data: &TabularData) -> Vec<R> {
    let setters: Vec<Option<Setter<R>>> = data
        .columns
        .iter()
        .map(|column| {
            let field = R::field(column.trim());
            if field.is_none() {
                tracing::debug!(kind = %R::KIND, column = %column, "ignoring unknown column");
            }
            field.map(|field| field.set)
        })
        .collect();

    data.rows
        .iter()
        .map(|row| {
            let mut record = R::default();
            for (set, cell) in setters.iter().zip(row) {
                if let (Some(set), Some(cell)) = (set, cell) {
                    set(&mut record, cell);
                }
            }
            record
        })
        .collect()
}

/// Renders the given columns of a record as display text; absent cells are empty.
pub fn display_cells<R: ReportRecord>(record: &R, columns: &[String]) -> Vec<String> {
    columns
        .iter()
        .map(|column| {
            record
                .value(column)
                .map(|value| value.as_text().into_owned())
                .unwrap_or_default()
        })
        .collect()
}

pub(crate) fn non_empty(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

pub(crate) fn text_value(text: &Option<String>) -> Option<Value<'_>> {
    text.as_deref().map(Value::Text)
}

pub(crate) fn count_value(count: &Option<Count>) -> Option<Value<'_>> {
    count.as_ref().map(Count::value)
}

/// A numeric cell that keeps the text it was imported from. Text that is not a
/// finite number reads back as text, so `== N/A` can still match it.
#[derive(Debug, Clone, PartialEq)]
pub struct Count {
    text: String,
    number: Option<f64>,
}

impl Count {
    /// `None` for blank input.
    pub fn parse(raw: &str) -> Option<Self> {
        let text = non_empty(raw)?;
        let number = text.parse::<f64>().ok().filter(|number| number.is_finite());
        Some(Self { text, number })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn number(&self) -> Option<f64> {
        self.number
    }

    pub fn value(&self) -> Value<'_> {
        match self.number {
            Some(number) => Value::Number(number),
            None => Value::Text(&self.text),
        }
    }
}

impl From<i64> for Count {
    fn from(count: i64) -> Self {
        Self {
            text: count.to_string(),
            number: Some(count as f64),
        }
    }
}
