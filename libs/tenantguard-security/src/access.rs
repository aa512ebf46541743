//! Access decision vocabulary for layered security policies.

/// Outcome of a security policy consulted for a document access.
///
/// Policies are layered on top of the repository's ACL mechanism: a policy
/// may short-circuit with [`AccessDecision::Deny`], grant outright with
/// [`AccessDecision::Allow`], or express no opinion with
/// [`AccessDecision::Delegate`] and let the ACL layer decide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessDecision {
    /// Grant access regardless of the underlying ACL.
    Allow,
    /// Refuse access regardless of the underlying ACL.
    Deny,
    /// No opinion; defer to the underlying ACL mechanism.
    Delegate,
}

impl AccessDecision {
    /// Returns `true` if this decision is a hard deny.
    #[inline]
    #[must_use]
    pub fn is_deny(self) -> bool {
        matches!(self, Self::Deny)
    }

    /// Returns `true` if this decision defers to the ACL layer.
    #[inline]
    #[must_use]
    pub fn is_delegate(self) -> bool {
        matches!(self, Self::Delegate)
    }
}
