//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod beneficial_owners;
pub mod health;
pub mod me;

pub use beneficial_owners::beneficial_owners_handler;
pub use health::health_handler;
pub use me::me_handler;
