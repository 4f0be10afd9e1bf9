//! Application layer services implementing business logic.
//!
//! Services combine domain functions with the registry transport and map
//! outcomes onto [`crate::error::AppError`] for the HTTP layer.
//!
//! # Available Services
//!
//! - [`services::beneficial_owner_service::BeneficialOwnerService`] - NIP lookup

pub mod services;
