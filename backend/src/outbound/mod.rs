//! Outbound adapters implementing domain ports.
//!
//! - **memory**: process-lifetime, mutex-guarded user collection.
//!
//! Adapters are thin translators between domain types and the way data is
//! held; they contain no HTTP concerns.

pub mod memory;
