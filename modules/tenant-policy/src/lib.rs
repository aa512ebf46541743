//! Tenant access policy for the shared document repository.
//!
//! Two entry points, exercised on every request:
//!
//! - [`check_access`] — per-document decision layered on top of the
//!   repository ACL mechanism. Deny-overrides: it can only narrow access
//!   granted elsewhere, never widen it.
//! - [`rewrite_query`] — scopes search queries before they reach the store's
//!   executor by splicing a path filter into the where-clause.
//!
//! Both are pure synchronous functions over an immutable [`Principal`]
//! snapshot and may run concurrently across requests without coordination.
//!
//! [`Principal`]: tenantguard_security::Principal

pub mod policy;
pub mod transformer;

pub use policy::check_access;
pub use transformer::{PATH_FIELD, rewrite_query, tenant_path_filter};
