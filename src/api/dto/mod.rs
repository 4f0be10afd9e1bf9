//! Data Transfer Objects for API responses.
//!
//! All DTOs use Serde for JSON serialization with camelCase field names.

pub mod beneficial_owner;
pub mod health;
pub mod me;
