//! Domain primitives and ports.
//!
//! Purpose: define the user record, identifier assignment, and the
//! transport-agnostic error type shared by every adapter.
//!
//! Public surface:
//! - Error / ErrorCode: failure payload and its stable category.
//! - IdPolicy: how new users receive identifiers.
//! - User / UserFields / UserId / UserUpdate: the stored record, its parts, and
//!   the update patch.
//! - ports: driving ports implemented by the store.

pub mod error;
pub mod id_policy;
pub mod ports;
pub mod user;

pub use self::error::{Error, ErrorCode, ErrorValidationError, USER_NOT_FOUND};
pub use self::id_policy::{IdPolicy, IdPolicyParseError};
pub use self::user::{User, UserFields, UserId, UserUpdate};

/// HTTP header carrying the per-request trace identifier.
pub const TRACE_ID_HEADER: &str = "trace-id";
