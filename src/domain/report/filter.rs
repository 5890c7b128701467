use crate::domain::entities::clause::{FilterClause, Operator};
use crate::domain::entities::record::{parse_number, ReportRecord};

/// Ordered filter clauses, combined with AND.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterEngine {
    clauses: Vec<FilterClause>,
}

impl FilterEngine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clauses(&self) -> &[FilterClause] {
        &self.clauses
    }

    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Appends a blank clause for the caller to fill in. Returns its index.
    pub fn add_clause(&mut self) -> usize {
        self.clauses.push(FilterClause::default());
        self.clauses.len() - 1
    }

    pub fn push(&mut self, clause: FilterClause) {
        self.clauses.push(clause);
    }

    pub fn clause_mut(&mut self, index: usize) -> Option<&mut FilterClause> {
        self.clauses.get_mut(index)
    }

    pub fn remove_clause(&mut self, index: usize) -> Option<FilterClause> {
        (index < self.clauses.len()).then(|| self.clauses.remove(index))
    }

    pub fn clear(&mut self) {
        self.clauses.clear();
    }

    /// Positions in `records` that satisfy every clause, in original order.
    pub fn apply<R: ReportRecord>(&self, records: &[R]) -> Vec<usize> {
        let kept: Vec<usize> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(*record))
            .map(|(idx, _)| idx)
            .collect();

        tracing::debug!(
            kind = %R::KIND,
            clauses = self.clauses.len(),
            total = records.len(),
            kept = kept.len(),
            "applied filters"
        );
        kept
    }

    pub fn matches<R: ReportRecord>(&self, record: &R) -> bool {
        self.clauses
            .iter()
            .all(|clause| clause_matches(record, clause))
    }
}

pub fn clause_matches<R: ReportRecord>(record: &R, clause: &FilterClause) -> bool {
    if clause.is_incomplete() {
        return true;
    }

    let Some(value) = record.value(clause.column.trim()) else {
        return false;
    };

    let Some(operator) = clause.operator() else {
        return true;
    };

    match operator {
        Operator::Eq => value.as_text().to_lowercase() == clause.value.to_lowercase(),
        Operator::Ne => value.as_text().to_lowercase() != clause.value.to_lowercase(),
        Operator::Contains => value
            .as_text()
            .to_lowercase()
            .contains(&clause.value.to_lowercase()),
        // NaN on either side makes every comparison false.
        Operator::Gt => value.as_number() > parse_number(&clause.value),
        Operator::Lt => value.as_number() < parse_number(&clause.value),
        Operator::Ge => value.as_number() >= parse_number(&clause.value),
        Operator::Le => value.as_number() <= parse_number(&clause.value),
    }
}
