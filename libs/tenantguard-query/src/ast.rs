//! Predicate tree for document queries.
//!
//! Expressions are immutable tagged unions. Combinators consume their
//! operands and build fresh nodes; no shared node is ever mutated, so a
//! rewritten query never aliases state with the query it was built from.

use std::fmt;

/// Binary operator in a predicate tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Operator {
    /// Logical conjunction of two predicates.
    And,
    /// Logical disjunction of two predicates.
    Or,
    /// String equality.
    Eq,
    /// String inequality.
    NotEq,
    /// String prefix match.
    StartsWith,
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Eq => "=",
            Self::NotEq => "<>",
            Self::StartsWith => "STARTSWITH",
        };
        f.write_str(text)
    }
}

/// Node of a where-clause predicate tree.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Expr {
    /// Reference to a named document field.
    Reference(String),
    /// String literal.
    Literal(String),
    /// Binary node combining two sub-expressions.
    Binary {
        /// Left operand.
        lhs: Box<Expr>,
        /// Operator.
        op: Operator,
        /// Right operand.
        rhs: Box<Expr>,
    },
}

impl Expr {
    /// Reference to a named field.
    #[must_use]
    pub fn reference(name: impl Into<String>) -> Self {
        Self::Reference(name.into())
    }

    /// String literal.
    #[must_use]
    pub fn literal(value: impl Into<String>) -> Self {
        Self::Literal(value.into())
    }

    /// Binary node from two operands.
    #[must_use]
    pub fn binary(lhs: Self, op: Operator, rhs: Self) -> Self {
        Self::Binary {
            lhs: Box::new(lhs),
            op,
            rhs: Box::new(rhs),
        }
    }

    /// `field STARTSWITH prefix` predicate.
    #[must_use]
    pub fn starts_with(field: impl Into<String>, prefix: impl Into<String>) -> Self {
        Self::binary(
            Self::reference(field),
            Operator::StartsWith,
            Self::literal(prefix),
        )
    }

    /// `field = value` predicate.
    #[must_use]
    pub fn eq_field(field: impl Into<String>, value: impl Into<String>) -> Self {
        Self::binary(Self::reference(field), Operator::Eq, Self::literal(value))
    }

    /// Conjunction with another predicate.
    #[must_use]
    pub fn and(self, other: Self) -> Self {
        Self::binary(self, Operator::And, other)
    }

    /// Disjunction with another predicate.
    #[must_use]
    pub fn or(self, other: Self) -> Self {
        Self::binary(self, Operator::Or, other)
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Reference(name) => f.write_str(name),
            Self::Literal(value) => write!(f, "'{value}'"),
            Self::Binary { lhs, op, rhs } => write!(f, "({lhs} {op} {rhs})"),
        }
    }
}
