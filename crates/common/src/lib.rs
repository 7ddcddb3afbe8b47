//! Common types, protocol definitions, and errors shared across `protect-svc` crates.

pub mod error;
pub mod protocol;

pub use error::ServiceError;
