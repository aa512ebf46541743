//! Select query clause set.

use crate::ast::Expr;

/// A structured search query over documents.
///
/// Only the where-clause is meaningful to the policy layer; every other slot
/// is carried through rewrites untouched and interpreted solely by the
/// document store's executor.
#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct SelectQuery {
    /// Projected fields; empty means "all".
    pub select: Vec<String>,
    /// Source document set.
    pub from: String,
    /// Filter predicate tree, if any.
    pub where_clause: Option<Expr>,
    /// Grouping fields.
    pub group_by: Vec<String>,
    /// Post-grouping filter, if any.
    pub having: Option<Expr>,
    /// Ordering fields.
    pub order_by: Vec<String>,
    /// Maximum number of results.
    pub limit: Option<u64>,
    /// Number of results to skip.
    pub offset: Option<u64>,
}

impl SelectQuery {
    /// Query over a document set with no clauses.
    #[must_use]
    pub fn from_source(from: impl Into<String>) -> Self {
        Self {
            from: from.into(),
            ..Self::default()
        }
    }

    /// Replace the where-clause.
    #[must_use]
    pub fn with_where(mut self, expr: Expr) -> Self {
        self.where_clause = Some(expr);
        self
    }

    /// Replace the result window.
    #[must_use]
    pub fn with_window(mut self, limit: u64, offset: u64) -> Self {
        self.limit = Some(limit);
        self.offset = Some(offset);
        self
    }
}
