//! Reserved security names shared across TenantGuard.
//!
//! These values are part of the wire contract with the identity provider and
//! the directory service: changing any of them changes who is a superuser and
//! how derived group names are spelled.

/// Subject identifier of the built-in system account.
pub const SYSTEM_SUBJECT: &str = "system";

/// Membership in this group grants superuser status.
pub const ADMINISTRATORS_GROUP: &str = "administrators";

/// Claim value asserting membership in the implicit everyone group.
///
/// Never materialized as a group: every principal is implicitly a member.
pub const EVERYONE_CLAIM: &str = "Everyone";

/// Claim value requesting tenant-administrator promotion.
///
/// Never materialized as a group; it triggers an update of the tenant
/// document's administrators list instead.
pub const TENANT_ADMIN_CLAIM: &str = "Tenant_ADMIN";

/// Derive the tenant-scoped name for a raw group claim.
///
/// Raw claims from the identity provider are namespaced per tenant so that
/// `editor` in tenant `acme` and `editor` in tenant `globex` stay distinct
/// principals' groups in the shared directory.
#[must_use]
pub fn tenant_scoped_group(tenant_id: &str, group: &str) -> String {
    format!("tenant_{tenant_id}_{group}")
}
