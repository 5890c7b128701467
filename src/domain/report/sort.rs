use std::cmp::Ordering;

use crate::domain::entities::clause::SortClause;
use crate::domain::entities::record::{ReportRecord, Value};

/// Ordered sort clauses; earlier clauses take priority, later ones break ties.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SortEngine {
    clauses: Vec<SortClause>,
}

impl SortEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &[SortClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Appends an ascending clause on `column`. Returns its index.
    pub fn add_clause(&mut self, column: &str) -> usize {
        self.clauses.push(SortClause::ascending(column));
        self.clauses.len() - 1
    }

    pub fn push(&mut self, clause: SortClause) {
        self.clauses.push(clause);
    }

    pub fn clause_mut(&mut self, index: usize) -> Option<&mut SortClause> {
        self.clauses.get_mut(index)
    }

    pub fn remove_clause(&mut self, index: usize) -> Option<SortClause> {
        (index < self.clauses.len()).then(|| self.clauses.remove(index))
    }

    pub fn clear(&mut self) {
        self.clauses.clear();
    }

    /// Reorders `rows` (positions into `records`) in place. The sort is stable,
    /// so rows that tie on every clause keep their relative order.
    pub fn apply<R: ReportRecord>(&self, records: &[R], rows: &mut [usize]) {
        if self.clauses.is_empty() {
            return;
        }

        rows.sort_by(|&a, &b| self.compare(&records[a], &records[b]));
        tracing::debug!(
            kind = %R::KIND,
            clauses = self.clauses.len(),
            rows = rows.len(),
            "applied sorting"
        );
    }

    pub fn compare<R: ReportRecord>(&self, a: &R, b: &R) -> Ordering {
        for clause in &self.clauses {
            let ordering = compare_values(a.value(&clause.column), b.value(&clause.column));
            let ordering = if clause.ascending {
                ordering
            } else {
                ordering.reverse()
            };
            if ordering != Ordering::Equal {
                return ordering;
            }
        }
        Ordering::Equal
    }
}

/// Ascending order of two cells. Absent sorts lowest; text collates; numbers
/// compare numerically; a text/number pair collates the number's text form.
pub fn compare_values(a: Option<Value<'_>>, b: Option<Value<'_>>) -> Ordering {
    match (a, b) {
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
        (Some(Value::Number(a)), Some(Value::Number(b))) => {
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(Value::Text(a)), Some(Value::Text(b))) => collate(a, b),
        (Some(a), Some(b)) => collate(&a.as_text(), &b.as_text()),
    }
}

/// Case-insensitive first; on a case-only difference lowercase sorts first.
pub fn collate(a: &str, b: &str) -> Ordering {
    a.chars()
        .flat_map(char::to_lowercase)
        .cmp(b.chars().flat_map(char::to_lowercase))
        .then_with(|| b.cmp(a))
}
