//! Configuration for the identity provisioner.

use serde::Deserialize;

/// Configuration.
///
/// The tenant document schema is a deployment convention of the document
/// store; the field names are configurable with defaults matching the
/// canonical schema.
#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProvisionerConfig {
    /// Field on tenant documents holding the tenant identifier.
    pub tenant_id_field: String,

    /// Field on tenant documents holding the administrator id list.
    pub administrators_field: String,
}

impl Default for ProvisionerConfig {
    fn default() -> Self {
        Self {
            tenant_id_field: "tenantId".to_owned(),
            administrators_field: "administrators".to_owned(),
        }
    }
}
