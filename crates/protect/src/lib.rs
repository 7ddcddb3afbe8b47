//! `protect-svc` — data-protection primitives behind an HTTP boundary.
//!
//! Two leaf components compose into the protection layer:
//!
//! - [`algo::base64`] — a reversible encoding of arbitrary JSON values
//!   into printable strings, and its exact inverse.
//! - [`algo::hmac`] — keyed, order-invariant integrity signatures over
//!   JSON objects, built from the raw SHA-256 primitive.
//!
//! The [`server`] module orchestrates both over four endpoints
//! (`/encrypt`, `/decrypt`, `/sign`, `/verify`), depth one per payload.

pub mod algo;
pub mod config;
pub mod server;
pub mod telemetry;
