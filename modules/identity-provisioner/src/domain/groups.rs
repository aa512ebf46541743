//! Group membership derivation from assertion claims.

use std::collections::BTreeSet;
use std::sync::Arc;

use tenantguard_query::Expr;
use tenantguard_security::constants;

use crate::config::ProvisionerConfig;
use crate::domain::error::ProvisioningError;
use crate::store::DocumentStore;

/// Derives a principal's group set from the `groups` claim values.
///
/// Two claim values are reserved and never become groups: the everyone
/// marker is dropped outright, and the tenant-admin marker is turned into an
/// update of the tenant document's administrators list. Everything else is
/// namespaced under the principal's tenant.
pub struct GroupResolver {
    store: Arc<dyn DocumentStore>,
    config: ProvisionerConfig,
}

impl GroupResolver {
    /// Resolver over a document store.
    #[must_use]
    pub fn new(store: Arc<dyn DocumentStore>, config: ProvisionerConfig) -> Self {
        Self { store, config }
    }

    /// Resolve the final group set for one `groups` attribute.
    ///
    /// Starts from the existing set, so re-applying the same claim values is
    /// idempotent: no duplicates, and groups unrelated to this assertion are
    /// never lost. Claim values are processed in assertion order.
    ///
    /// # Errors
    ///
    /// - [`ProvisioningError::TenantLookupFailed`] when an admin promotion
    ///   finds no tenant document for `tenant_label`
    /// - [`ProvisioningError::Persistence`] when the store fails
    pub async fn resolve(
        &self,
        existing: &BTreeSet<String>,
        values: &[String],
        tenant_label: &str,
        tenant_id: &str,
        principal_id: &str,
    ) -> Result<BTreeSet<String>, ProvisioningError> {
        let mut groups = existing.clone();

        for value in values {
            if value == constants::EVERYONE_CLAIM {
                // Implicit membership; nothing to record.
                continue;
            }
            if value == constants::TENANT_ADMIN_CLAIM {
                self.promote_tenant_admin(tenant_label, principal_id).await?;
                continue;
            }
            groups.insert(constants::tenant_scoped_group(tenant_id, value));
        }

        Ok(groups)
    }

    /// Append the principal to its tenant's administrators list.
    ///
    /// The tenant document is found by company label. Zero matches is an
    /// error, never silently skipped; the append is contains-checked so a
    /// repeated promotion leaves the list unchanged.
    async fn promote_tenant_admin(
        &self,
        tenant_label: &str,
        principal_id: &str,
    ) -> Result<(), ProvisioningError> {
        let filter = Expr::eq_field(&self.config.tenant_id_field, tenant_label);
        let Some(mut tenant) = self.store.query_one(&filter).await? else {
            tracing::warn!(
                company = %tenant_label,
                principal = %principal_id,
                "tenant admin claim for a company with no tenant document"
            );
            return Err(ProvisioningError::TenantLookupFailed {
                company: tenant_label.to_owned(),
            });
        };

        let mut administrators = tenant
            .string_list_field(&self.config.administrators_field)
            .unwrap_or_default();
        if administrators.iter().any(|admin| admin == principal_id) {
            return Ok(());
        }

        administrators.push(principal_id.to_owned());
        tenant.set_string_list_field(&self.config.administrators_field, administrators);
        self.store.save(tenant).await?;

        tracing::info!(
            company = %tenant_label,
            principal = %principal_id,
            "promoted principal to tenant administrator"
        );
        Ok(())
    }
}
