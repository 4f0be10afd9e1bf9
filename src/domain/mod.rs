//! Domain layer: identifier validation and registry response extraction.
//!
//! Nothing in this layer performs I/O. The registry itself is reached through
//! the [`transport::RegistryTransport`] trait, implemented in
//! `crate::infrastructure`.
//!
//! # Modules
//!
//! - [`nip`] - NIP checksum validation
//! - [`xml_tree`] - nested key-value view of XML documents
//! - [`extractor`] - beneficial owner extraction from registry responses
//! - [`transport`] - registry transport trait and outcome classification
//! - [`entities`] - domain data structures
//!
//! # Lookup Flow
//!
//! 1. [`nip::is_valid_nip`] rejects malformed identifiers up front
//! 2. The transport returns a [`transport::UpstreamOutcome`]
//! 3. [`extractor::parse_beneficial_owners`] turns a successful payload into records

pub mod entities;
pub mod extractor;
pub mod nip;
pub mod transport;
pub mod xml_tree;
