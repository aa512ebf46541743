//! Provisioning errors.

use crate::directory::DirectoryError;
use crate::store::StoreError;

/// Failure of a provisioning operation.
///
/// Any variant fails `find_or_create_user` as a whole; no partial identity
/// state is committed beyond what the collaborator itself guarantees per
/// call. The sign-in flow treats a failed provisioning as "user not
/// authenticated this session".
#[derive(Debug, thiserror::Error)]
pub enum ProvisioningError {
    /// Lookup, creation, or update failed against the user directory.
    #[error("directory operation failed: {0}")]
    Directory(#[from] DirectoryError),

    /// No tenant document matched the principal's company label during
    /// admin promotion.
    #[error("no tenant document found for company '{company}'")]
    TenantLookupFailed {
        /// The company label that matched nothing.
        company: String,
    },

    /// The document store failed while persisting the tenant document.
    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),
}
