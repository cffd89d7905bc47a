//! Data Transfer Objects sent to the backend
//!
//! DTOs are validated on construction so that a malformed request can never
//! be serialized onto the wire.

pub mod repository;
pub mod search;
