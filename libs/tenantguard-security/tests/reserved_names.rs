#![allow(clippy::unwrap_used, clippy::expect_used)]

use tenantguard_security::Principal;
use tenantguard_security::constants::{
    ADMINISTRATORS_GROUP, EVERYONE_CLAIM, SYSTEM_SUBJECT, TENANT_ADMIN_CLAIM, tenant_scoped_group,
};

// The reserved names are a wire contract; these values must never drift.
#[test]
fn reserved_names_are_stable() {
    assert_eq!(SYSTEM_SUBJECT, "system");
    assert_eq!(ADMINISTRATORS_GROUP, "administrators");
    assert_eq!(EVERYONE_CLAIM, "Everyone");
    assert_eq!(TENANT_ADMIN_CLAIM, "Tenant_ADMIN");
}

#[test]
fn derived_group_names_use_the_tenant_prefix() {
    assert_eq!(tenant_scoped_group("acme", "reader"), "tenant_acme_reader");
}

#[test]
fn superuser_rule_matches_reserved_names_only() {
    let mut principal = Principal::bare("dave@acme.com");
    principal.groups.insert(tenant_scoped_group("acme", ADMINISTRATORS_GROUP));
    // A tenant-scoped administrators group is not the global one.
    assert!(!principal.is_superuser());

    principal.groups.insert(ADMINISTRATORS_GROUP.to_owned());
    assert!(principal.is_superuser());
}
