//! HTTP inbound adapter exposing the users REST endpoints, the landing
//! page, and health probes.

pub mod error;
pub mod health;
pub mod home;
pub mod state;
pub mod users;

pub use error::{ApiError, ApiResult};
