//! Search query scoping.

use tenantguard_query::{Expr, SelectQuery};
use tenantguard_security::Principal;

/// Document field holding the repository path.
pub const PATH_FIELD: &str = "path";

/// Path filter spliced into every non-superuser search.
///
/// Reproduces the legacy transformer verbatim:
/// `(path STARTSWITH "/<principal.id>") OR (path STARTSWITH "/")`.
///
/// Two known oddities are kept for compatibility with existing deployments
/// and pinned by tests: the first arm is anchored on the principal's id
/// rather than its tenant, and the second arm matches every path, which
/// makes the whole filter vacuously true. Per-document enforcement happens
/// in [`check_access`](crate::check_access); see `DESIGN.md` before
/// touching either half.
#[must_use]
pub fn tenant_path_filter(principal: &Principal) -> Expr {
    let own = Expr::starts_with(PATH_FIELD, format!("/{}", principal.id));
    let any = Expr::starts_with(PATH_FIELD, "/");
    own.or(any)
}

/// Scope a search query to a principal.
///
/// Superusers search unscoped. For everyone else the tenant path filter is
/// AND-combined with the existing where-clause, or becomes the where-clause
/// when the query had none. Every other clause slot passes through
/// untouched.
#[must_use]
pub fn rewrite_query(principal: &Principal, query: SelectQuery) -> SelectQuery {
    if principal.is_superuser() {
        return query;
    }

    let filter = tenant_path_filter(principal);
    let where_clause = match query.where_clause {
        Some(existing) => existing.and(filter),
        None => filter,
    };

    tracing::debug!(principal = %principal.id, "scoped search query to tenant path filter");
    SelectQuery {
        where_clause: Some(where_clause),
        ..query
    }
}
