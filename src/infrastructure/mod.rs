//! Infrastructure layer: concrete implementations of domain traits.
//!
//! - [`soap`] - CRBR registry client implementing
//!   [`crate::domain::transport::RegistryTransport`]

pub mod soap;
