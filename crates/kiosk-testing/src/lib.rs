//! Test doubles for the museum ticketing backend.
//!
//! Integration tests talk to a real HTTP server on an ephemeral localhost
//! port instead of stubbing the client, so the wire contracts themselves
//! are exercised end to end.

pub mod backend;
pub mod fixtures;

pub use backend::{BackendScript, MockBackend};
