//! amara-core
//!
//! Pure domain types for the amara screening system. No I/O, no async:
//! this is the shared vocabulary consumed by the screening engine, the
//! storage layer, and (via ts-rs bindings) the web client.

pub mod error;
pub mod models;
