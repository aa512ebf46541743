//! Identity provisioning from federated single-sign-on assertions.
//!
//! A validated [`Assertion`] arrives once per sign-in event. The
//! [`IdentityProvisioner`] finds or creates the matching [`Principal`] in the
//! user directory, maps assertion attributes onto identity fields, and
//! derives group memberships — including the conditional promotion of the
//! principal into its tenant's administrators list.
//!
//! The directory and the document store are consumed collaborators behind
//! the [`UserDirectory`] and [`DocumentStore`] ports; `test_support` carries
//! in-memory implementations of both.
//!
//! ```ignore
//! let provisioner = IdentityProvisioner::new(directory, store, ProvisionerConfig::default());
//! let principal_id = provisioner.find_or_create_user(&assertion).await?;
//! ```
//!
//! A failed provisioning means "user not authenticated this session"; the
//! sign-in flow owns any retry policy.
//!
//! [`Principal`]: tenantguard_security::Principal

pub mod assertion;
pub mod config;
pub mod directory;
pub mod domain;
pub mod store;
pub mod test_support;

pub use assertion::{Assertion, AssertionAttribute, AttributeMapping};
pub use config::ProvisionerConfig;
pub use directory::{DirectoryError, UserDirectory};
pub use domain::{GroupResolver, IdentityProvisioner, ProvisioningError};
pub use store::{Document, DocumentStore, StoreError};
