//! SOAP transport for the CRBR review API.
//!
//! Provides [`SoapRegistryClient`] and the envelope helpers it relies on.

mod client;
pub mod envelope;

pub use client::SoapRegistryClient;
