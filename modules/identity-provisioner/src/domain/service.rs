//! The identity provisioner service.

use std::sync::Arc;

use tenantguard_security::Principal;
use tracing::instrument;

use crate::assertion::{Assertion, AttributeMapping};
use crate::config::ProvisionerConfig;
use crate::directory::UserDirectory;
use crate::domain::error::ProvisioningError;
use crate::domain::groups::GroupResolver;
use crate::store::DocumentStore;

/// Maps a sign-in assertion onto a directory principal.
///
/// One instance serves all sign-ins; the service holds no per-request state.
/// Collaborator calls are awaited one at a time — the read-modify-write
/// sequence against a principal record relies on the directory's
/// single-record atomicity, and a lost race surfaces as a retryable
/// conflict for the caller.
pub struct IdentityProvisioner {
    directory: Arc<dyn UserDirectory>,
    groups: GroupResolver,
}

impl IdentityProvisioner {
    /// Provisioner over a directory and a document store.
    #[must_use]
    pub fn new(
        directory: Arc<dyn UserDirectory>,
        store: Arc<dyn DocumentStore>,
        config: ProvisionerConfig,
    ) -> Self {
        Self {
            directory,
            groups: GroupResolver::new(store, config),
        }
    }

    /// Find or create the principal for a sign-in assertion.
    ///
    /// The assertion subject is the email key. A missing record triggers
    /// creation of a bare principal under that identifier; either way the
    /// assertion's field mapping and group derivation are applied and the
    /// record is persisted. Returns the principal's directory identifier.
    ///
    /// Re-running with identical assertion content is idempotent: groups are
    /// a set and the admin promotion is contains-checked.
    ///
    /// # Errors
    ///
    /// Every failure is logged and fails the sign-in as a whole; see
    /// [`ProvisioningError`].
    #[instrument(skip_all, fields(subject = %assertion.subject()))]
    pub async fn find_or_create_user(
        &self,
        assertion: &Assertion,
    ) -> Result<String, ProvisioningError> {
        match self.provision(assertion).await {
            Ok(id) => Ok(id),
            Err(e) => {
                tracing::error!(error = %e, "identity provisioning failed");
                Err(e)
            }
        }
    }

    async fn provision(&self, assertion: &Assertion) -> Result<String, ProvisioningError> {
        let principal = match self.directory.find_by_email(assertion.subject()).await? {
            Some(id) => {
                tracing::debug!(principal = %id, "updating existing principal");
                self.directory.get_principal(&id).await?
            }
            None => {
                tracing::debug!("no principal for subject, creating bare record");
                let id = self.directory.create_bare(assertion.subject()).await?;
                self.directory.get_principal(&id).await?
            }
        };

        let updated = self.update_principal(principal, assertion).await?;
        let persisted = self.directory.update_principal(updated).await?;
        Ok(persisted.id)
    }

    /// Apply an assertion to a principal record.
    ///
    /// Sets the email from the subject, then walks the attributes in
    /// assertion order: name fields take the attribute's first value, the
    /// organization sets both the company label and the tenant identifier,
    /// and each `groups` attribute is resolved against the tenant context
    /// established so far. Unrecognized attributes and attributes without
    /// values are ignored.
    ///
    /// Normally invoked through [`find_or_create_user`], which also
    /// persists the result.
    ///
    /// # Errors
    ///
    /// Group resolution may fail; see [`GroupResolver::resolve`].
    ///
    /// [`find_or_create_user`]: Self::find_or_create_user
    pub async fn update_principal(
        &self,
        mut principal: Principal,
        assertion: &Assertion,
    ) -> Result<Principal, ProvisioningError> {
        principal.email = assertion.subject().to_owned();

        for attribute in assertion.attributes() {
            match AttributeMapping::from_name(attribute.name()) {
                AttributeMapping::FirstName => {
                    if let Some(value) = attribute.first_value() {
                        principal.first_name = value.to_owned();
                    }
                }
                AttributeMapping::LastName => {
                    if let Some(value) = attribute.first_value() {
                        principal.last_name = value.to_owned();
                    }
                }
                AttributeMapping::Organization => {
                    if let Some(value) = attribute.first_value() {
                        principal.company = value.to_owned();
                        principal.tenant_id = value.to_owned();
                    }
                }
                AttributeMapping::Groups => {
                    let resolved = self
                        .groups
                        .resolve(
                            &principal.groups,
                            attribute.values(),
                            &principal.company,
                            &principal.tenant_id,
                            &principal.id,
                        )
                        .await?;
                    principal.groups = resolved;
                }
                AttributeMapping::Unknown => {}
            }
        }

        Ok(principal)
    }
}
