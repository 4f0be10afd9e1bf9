//! Core domain entities.
//!
//! Entities are plain data structures without serialization concerns;
//! the HTTP representation lives in [`crate::api::dto`].

pub mod beneficial_owner;

pub use beneficial_owner::BeneficialOwner;
