//! Local user identity record.

use std::collections::BTreeSet;

use crate::constants;

/// A local user identity record, the target of provisioning from a federated
/// assertion.
///
/// The record is owned by the directory service. The identity provisioner is
/// the only writer of identity and group fields; policy code only reads.
/// Tenant membership and group membership are first-class typed fields —
/// policy decisions never rely on runtime type inspection of a generic
/// principal interface.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Principal {
    /// Directory identifier. For federated users this is the assertion
    /// subject, i.e. the email address.
    pub id: String,
    /// Contact email. Set from the assertion subject on every sign-in.
    pub email: String,
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Company / tenant label as asserted by the identity provider.
    pub company: String,
    /// Identifier of the tenant this principal belongs to. Rooted at the
    /// repository path `/<tenant_id>`.
    pub tenant_id: String,
    /// Group memberships. Set semantics: duplicates are impossible by
    /// construction, insertion order carries no meaning.
    pub groups: BTreeSet<String>,
}

impl Principal {
    /// Create a bare principal carrying only its identifier.
    ///
    /// Mirrors the directory's bare user model: all identity fields empty
    /// until the first provisioning pass fills them in.
    #[must_use]
    pub fn bare(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            email: String::new(),
            first_name: String::new(),
            last_name: String::new(),
            company: String::new(),
            tenant_id: String::new(),
            groups: BTreeSet::new(),
        }
    }

    /// Returns `true` if this principal bypasses tenant isolation.
    ///
    /// Superusers are the built-in system account and any member of the
    /// administrators group.
    #[must_use]
    pub fn is_superuser(&self) -> bool {
        self.id == constants::SYSTEM_SUBJECT
            || self.groups.contains(constants::ADMINISTRATORS_GROUP)
    }
}
