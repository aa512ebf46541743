//! Consumed port: the user directory service.

use async_trait::async_trait;
use tenantguard_security::Principal;

/// Errors surfaced by the directory service.
#[derive(Debug, thiserror::Error)]
pub enum DirectoryError {
    /// No record for the given identifier.
    #[error("no directory record for '{id}'")]
    NotFound {
        /// The identifier that missed.
        id: String,
    },

    /// The record changed under a concurrent update.
    ///
    /// The directory guarantees single-record atomicity; a lost race
    /// surfaces here and is retryable by the sign-in flow. This crate never
    /// retries.
    #[error("concurrent update conflict on '{id}'")]
    Conflict {
        /// The contended identifier.
        id: String,
    },

    /// Any other backend failure.
    #[error("directory backend error: {0}")]
    Backend(String),
}

/// The user directory service.
///
/// Owns all principal records. Lookup by email is the provisioning entry
/// point: a missing record is `Ok(None)`, never an error — it signals
/// creation.
#[async_trait]
pub trait UserDirectory: Send + Sync {
    /// Find a principal id by email key.
    async fn find_by_email(&self, email: &str) -> Result<Option<String>, DirectoryError>;

    /// Create a bare record with the given identifier and persist it.
    ///
    /// Returns the new record's id.
    async fn create_bare(&self, id: &str) -> Result<String, DirectoryError>;

    /// Load the full principal record.
    async fn get_principal(&self, id: &str) -> Result<Principal, DirectoryError>;

    /// Persist a modified principal record.
    ///
    /// Returns the record as persisted.
    async fn update_principal(&self, principal: Principal) -> Result<Principal, DirectoryError>;

    /// Name of the directory field holding the email key.
    fn email_field(&self) -> &str;

    /// Name of the directory field holding the record identifier.
    fn id_field(&self) -> &str;
}
