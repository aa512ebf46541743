pub mod access;
pub mod constants;
pub mod principal;

pub use access::AccessDecision;
pub use principal::Principal;
