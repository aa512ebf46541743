//! Structural evaluation of predicate trees against flat field maps.
//!
//! Production searches run inside the document store's own executor; this
//! evaluator exists for in-memory store implementations and for tests that
//! need to observe what a rewritten where-clause actually matches. It is
//! strict: unknown fields and operand kind mismatches are errors, not silent
//! non-matches, so a malformed predicate cannot pass as "filtered out".

use std::collections::BTreeMap;

use crate::ast::{Expr, Operator};

/// Evaluation failure for a predicate tree.
#[derive(Debug, thiserror::Error)]
pub enum EvalError {
    /// A reference named a field the document does not carry.
    #[error("unknown field '{name}'")]
    UnknownField {
        /// The missing field name.
        name: String,
    },

    /// A referenced field held a non-string value.
    #[error("field '{name}' is not a string")]
    NonStringField {
        /// The offending field name.
        name: String,
    },

    /// An operator was applied to operands of the wrong kind.
    #[error("operator {op} expects {expected} operands")]
    OperandMismatch {
        /// The operator that failed.
        op: Operator,
        /// Human-readable operand kind ("boolean" or "string").
        expected: &'static str,
    },

    /// The root of the tree was not a predicate.
    #[error("expression is not a predicate")]
    NotAPredicate,
}

enum Operand {
    Bool(bool),
    Str(String),
}

/// Evaluate a predicate tree against a document's fields.
///
/// # Errors
///
/// Returns [`EvalError`] when the tree references unknown or non-string
/// fields, mixes operand kinds, or is not a predicate at its root.
pub fn evaluate(
    expr: &Expr,
    fields: &BTreeMap<String, serde_json::Value>,
) -> Result<bool, EvalError> {
    match eval_operand(expr, fields)? {
        Operand::Bool(value) => Ok(value),
        Operand::Str(_) => Err(EvalError::NotAPredicate),
    }
}

fn eval_operand(
    expr: &Expr,
    fields: &BTreeMap<String, serde_json::Value>,
) -> Result<Operand, EvalError> {
    match expr {
        Expr::Reference(name) => {
            let value = fields.get(name).ok_or_else(|| EvalError::UnknownField {
                name: name.clone(),
            })?;
            let text = value.as_str().ok_or_else(|| EvalError::NonStringField {
                name: name.clone(),
            })?;
            Ok(Operand::Str(text.to_owned()))
        }
        Expr::Literal(value) => Ok(Operand::Str(value.clone())),
        Expr::Binary { lhs, op, rhs } => {
            let lhs = eval_operand(lhs, fields)?;
            let rhs = eval_operand(rhs, fields)?;
            apply(*op, lhs, rhs)
        }
    }
}

fn apply(op: Operator, lhs: Operand, rhs: Operand) -> Result<Operand, EvalError> {
    match op {
        Operator::And | Operator::Or => {
            let (Operand::Bool(l), Operand::Bool(r)) = (lhs, rhs) else {
                return Err(EvalError::OperandMismatch {
                    op,
                    expected: "boolean",
                });
            };
            let value = if matches!(op, Operator::And) {
                l && r
            } else {
                l || r
            };
            Ok(Operand::Bool(value))
        }
        Operator::Eq | Operator::NotEq | Operator::StartsWith => {
            let (Operand::Str(l), Operand::Str(r)) = (lhs, rhs) else {
                return Err(EvalError::OperandMismatch {
                    op,
                    expected: "string",
                });
            };
            let value = match op {
                Operator::Eq => l == r,
                Operator::NotEq => l != r,
                _ => l.starts_with(&r),
            };
            Ok(Operand::Bool(value))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(path: &str, tenant: &str) -> BTreeMap<String, serde_json::Value> {
        let mut fields = BTreeMap::new();
        fields.insert("path".to_owned(), serde_json::json!(path));
        fields.insert("tenantId".to_owned(), serde_json::json!(tenant));
        fields
    }

    #[test]
    fn starts_with_matches_prefix() {
        let fields = doc("/acme/reports/q3", "acme");
        let expr = Expr::starts_with("path", "/acme");
        assert!(evaluate(&expr, &fields).unwrap());

        let expr = Expr::starts_with("path", "/globex");
        assert!(!evaluate(&expr, &fields).unwrap());
    }

    #[test]
    fn and_or_combine_predicates() {
        let fields = doc("/acme/notes", "acme");
        let both = Expr::starts_with("path", "/acme").and(Expr::eq_field("tenantId", "acme"));
        assert!(evaluate(&both, &fields).unwrap());

        let either = Expr::eq_field("tenantId", "globex").or(Expr::starts_with("path", "/"));
        assert!(evaluate(&either, &fields).unwrap());

        let neither = Expr::eq_field("tenantId", "globex").and(Expr::starts_with("path", "/"));
        assert!(!evaluate(&neither, &fields).unwrap());
    }

    #[test]
    fn not_eq_compares_strings() {
        let fields = doc("/acme/notes", "acme");
        let expr = Expr::binary(
            Expr::reference("tenantId"),
            Operator::NotEq,
            Expr::literal("globex"),
        );
        assert!(evaluate(&expr, &fields).unwrap());
    }

    #[test]
    fn unknown_field_is_an_error() {
        let fields = doc("/acme/notes", "acme");
        let expr = Expr::eq_field("owner", "alice");
        assert!(matches!(
            evaluate(&expr, &fields),
            Err(EvalError::UnknownField { name }) if name == "owner"
        ));
    }

    #[test]
    fn non_string_field_is_an_error() {
        let mut fields = doc("/acme/notes", "acme");
        fields.insert("size".to_owned(), serde_json::json!(42));
        let expr = Expr::eq_field("size", "42");
        assert!(matches!(
            evaluate(&expr, &fields),
            Err(EvalError::NonStringField { .. })
        ));
    }

    #[test]
    fn logical_operator_over_strings_is_an_error() {
        let fields = doc("/acme/notes", "acme");
        let expr = Expr::binary(
            Expr::reference("path"),
            Operator::And,
            Expr::literal("/acme"),
        );
        assert!(matches!(
            evaluate(&expr, &fields),
            Err(EvalError::OperandMismatch { .. })
        ));
    }

    #[test]
    fn bare_literal_is_not_a_predicate() {
        let fields = doc("/acme/notes", "acme");
        assert!(matches!(
            evaluate(&Expr::literal("/acme"), &fields),
            Err(EvalError::NotAPredicate)
        ));
    }
}
