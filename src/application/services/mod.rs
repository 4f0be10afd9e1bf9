//! Business logic services for the application layer.

pub mod beneficial_owner_service;

pub use beneficial_owner_service::BeneficialOwnerService;
