use std::fmt;

use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Eq,
    Ne,
    Gt,
    Lt,
    Ge,
    Le,
    Contains,
}

impl Operator {
    /// Picker order.
    pub const ALL: [Operator; 7] = [
        Operator::Eq,
        Operator::Ne,
        Operator::Gt,
        Operator::Lt,
        Operator::Ge,
        Operator::Le,
        Operator::Contains,
    ];

    pub fn symbol(&self) -> &'static str {
        match self {
            Operator::Eq => "==",
            Operator::Ne => "!=",
            Operator::Gt => ">",
            Operator::Lt => "<",
            Operator::Ge => ">=",
            Operator::Le => "<=",
            Operator::Contains => "contains",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Operator::Eq => "Equals",
            Operator::Ne => "Not Equals",
            Operator::Gt => "Greater Than",
            Operator::Lt => "Less Than",
            Operator::Ge => "Greater Than or Equal",
            Operator::Le => "Less Than or Equal",
            Operator::Contains => "Contains",
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Operator::ALL
            .into_iter()
            .find(|operator| operator.symbol() == symbol.trim())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// A filter row as edited by the operator. All three parts stay raw text until
/// evaluation so a half-filled row is representable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterClause {
    pub column: String,
    pub operator: String,
    pub value: String,
}

impl FilterClause {
    pub fn new(column: impl Into<String>, operator: Operator, value: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            operator: operator.symbol().to_string(),
            value: value.into(),
        }
    }

    /// None for an unrecognised operator symbol.
    pub fn operator(&self) -> Option<Operator> {
        Operator::from_symbol(&self.operator)
    }

    pub fn is_incomplete(&self) -> bool {
        self.column.trim().is_empty() || self.operator.trim().is_empty() || self.value.is_empty()
    }

    /// Parses `COLUMN OP VALUE`, e.g. `Task Status==completed` or `Email contains gmail`.
    pub fn parse(expr: &str) -> Result<Self, ClauseParseError> {
        let expr = expr.trim();
        if expr.is_empty() {
            return Err(ClauseParseError::Empty);
        }

        let lowered = expr.to_ascii_lowercase();
        if let Some(pos) = lowered.find(" contains ") {
            let column = expr[..pos].trim();
            let value = expr[pos + " contains ".len()..].trim();
            return Self::from_parts(expr, column, Operator::Contains, value);
        }

        // Earliest symbol wins; at the same position `>=` beats `>`.
        let found = [
            Operator::Ge,
            Operator::Le,
            Operator::Ne,
            Operator::Eq,
            Operator::Gt,
            Operator::Lt,
        ]
        .into_iter()
        .filter_map(|operator| expr.find(operator.symbol()).map(|pos| (pos, operator)))
        .min_by_key(|(pos, operator)| (*pos, std::cmp::Reverse(operator.symbol().len())));

        match found {
            Some((pos, operator)) => {
                let column = expr[..pos].trim();
                let value = expr[pos + operator.symbol().len()..].trim();
                Self::from_parts(expr, column, operator, value)
            }
            None => Err(ClauseParseError::MissingOperator(expr.to_string())),
        }
    }

    fn from_parts(
        expr: &str,
        column: &str,
        operator: Operator,
        value: &str,
    ) -> Result<Self, ClauseParseError> {
        if column.is_empty() {
            return Err(ClauseParseError::MissingColumn(expr.to_string()));
        }
        Ok(Self::new(column, operator, value))
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortClause {
    pub column: String,
    pub ascending: bool,
}

impl SortClause {
    pub fn ascending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: true,
        }
    }

    pub fn descending(column: impl Into<String>) -> Self {
        Self {
            column: column.into(),
            ascending: false,
        }
    }

    /// Parses `COLUMN`, `COLUMN:asc` or `COLUMN:desc`.
    pub fn parse(expr: &str) -> Result<Self, ClauseParseError> {
        let expr = expr.trim();
        let (column, direction) = match expr.rsplit_once(':') {
            Some((column, direction)) => (column.trim(), Some(direction.trim())),
            None => (expr, None),
        };
        if column.is_empty() {
            return Err(ClauseParseError::MissingColumn(expr.to_string()));
        }

        match direction.map(str::to_ascii_lowercase).as_deref() {
            None | Some("asc") => Ok(Self::ascending(column)),
            Some("desc") => Ok(Self::descending(column)),
            Some(other) => Err(ClauseParseError::BadDirection(other.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClauseParseError {
    #[error("empty clause")]
    Empty,
    #[error("no operator in {0:?} (expected one of ==, !=, >, <, >=, <=, contains)")]
    MissingOperator(String),
    #[error("no column in {0:?}")]
    MissingColumn(String),
    #[error("unknown sort direction {0:?} (expected asc or desc)")]
    BadDirection(String),
}
