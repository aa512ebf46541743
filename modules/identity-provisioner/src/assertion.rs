//! Validated federated identity assertion.

/// One named attribute of an assertion: a name plus an ordered value list.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct AssertionAttribute {
    name: String,
    values: Vec<String>,
}

impl AssertionAttribute {
    /// Attribute from a name and its values.
    #[must_use]
    pub fn new(name: impl Into<String>, values: Vec<String>) -> Self {
        Self {
            name: name.into(),
            values,
        }
    }

    /// Attribute name as sent by the identity provider.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// All values, in assertion order.
    #[must_use]
    pub fn values(&self) -> &[String] {
        &self.values
    }

    /// First value, if any.
    #[must_use]
    pub fn first_value(&self) -> Option<&str> {
        self.values.first().map(String::as_str)
    }
}

/// A validated federated identity assertion.
///
/// Created once per sign-in event from the already-verified SSO payload and
/// discarded after provisioning. Immutable: signature validation and
/// protocol parsing happened upstream, so nothing in this crate may alter
/// what was asserted.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Assertion {
    subject: String,
    attributes: Vec<AssertionAttribute>,
}

impl Assertion {
    /// Assertion from a subject identifier and its attribute list.
    #[must_use]
    pub fn new(subject: impl Into<String>, attributes: Vec<AssertionAttribute>) -> Self {
        Self {
            subject: subject.into(),
            attributes,
        }
    }

    /// The federated unique identifier, treated as an email address.
    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    /// Attributes in assertion order.
    #[must_use]
    pub fn attributes(&self) -> &[AssertionAttribute] {
        &self.attributes
    }
}

/// How an assertion attribute maps onto the principal record.
///
/// Closed enumeration over the attribute names this system consumes; any
/// other name is [`AttributeMapping::Unknown`] and ignored by provisioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeMapping {
    /// `firstName` → principal given name.
    FirstName,
    /// `lastName` → principal family name.
    LastName,
    /// `organization` → principal company label and tenant identifier.
    Organization,
    /// `groups` → group membership derivation.
    Groups,
    /// Any attribute this system does not consume.
    Unknown,
}

impl AttributeMapping {
    /// Classify an attribute name. Exact match, case sensitive.
    #[must_use]
    pub fn from_name(name: &str) -> Self {
        match name {
            "firstName" => Self::FirstName,
            "lastName" => Self::LastName,
            "organization" => Self::Organization,
            "groups" => Self::Groups,
            _ => Self::Unknown,
        }
    }
}
