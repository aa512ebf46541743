//! Per-document access check.

use tenantguard_security::{AccessDecision, Principal};

/// Decide access to a document path for a principal.
///
/// Decision table:
///
/// | Condition | Result |
/// |---|---|
/// | superuser | `Delegate` (ACL decides) |
/// | path is the repository root `/` | `Delegate` |
/// | path starts with `/<tenant_id>`, tenant id non-empty | `Delegate` |
/// | anything else | `Deny` |
///
/// A principal with an empty tenant id is denied every non-root path: a
/// record that never went through provisioning gets the narrow default, not
/// the wide one.
#[must_use]
pub fn check_access(principal: &Principal, document_path: &str) -> AccessDecision {
    if principal.is_superuser() {
        return AccessDecision::Delegate;
    }

    if document_path == "/" {
        return AccessDecision::Delegate;
    }

    if !principal.tenant_id.is_empty()
        && document_path.starts_with(&format!("/{}", principal.tenant_id))
    {
        return AccessDecision::Delegate;
    }

    tracing::debug!(
        principal = %principal.id,
        tenant = %principal.tenant_id,
        path = %document_path,
        "document outside principal tenant, denying"
    );
    AccessDecision::Deny
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn tenant_user(id: &str, tenant: &str) -> Principal {
        let mut principal = Principal::bare(id);
        principal.tenant_id = tenant.to_owned();
        principal.company = tenant.to_owned();
        principal
    }

    #[test]
    fn superuser_always_delegates() {
        let system = Principal::bare("system");
        let mut admin = Principal::bare("root@acme.com");
        admin.groups = BTreeSet::from(["administrators".to_owned()]);

        for path in ["/", "/acme/doc", "/globex/doc", "/anything"] {
            assert_eq!(check_access(&system, path), AccessDecision::Delegate);
            assert_eq!(check_access(&admin, path), AccessDecision::Delegate);
        }
    }

    #[test]
    fn tenant_user_delegates_inside_own_tenant() {
        let alice = tenant_user("alice@acme.com", "acme");
        assert_eq!(check_access(&alice, "/acme/reports"), AccessDecision::Delegate);
        assert_eq!(check_access(&alice, "/acme"), AccessDecision::Delegate);
    }

    #[test]
    fn root_path_always_delegates() {
        let alice = tenant_user("alice@acme.com", "acme");
        assert_eq!(check_access(&alice, "/"), AccessDecision::Delegate);
    }

    #[test]
    fn foreign_tenant_path_is_denied() {
        let alice = tenant_user("alice@acme.com", "acme");
        assert_eq!(check_access(&alice, "/globex/reports"), AccessDecision::Deny);
        assert_eq!(check_access(&alice, "/globex"), AccessDecision::Deny);
    }

    #[test]
    fn empty_tenant_id_denies_all_non_root_paths() {
        let stray = Principal::bare("stray@nowhere.com");
        assert_eq!(check_access(&stray, "/"), AccessDecision::Delegate);
        assert_eq!(check_access(&stray, "/acme/doc"), AccessDecision::Deny);
        assert_eq!(check_access(&stray, "/x"), AccessDecision::Deny);
    }
}
