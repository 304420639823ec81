//! Driving port for user reads.
//!
//! Inbound adapters use this port to fetch users without knowing how the
//! collection is held.

use async_trait::async_trait;

use crate::domain::{Error, User, UserId};

/// Read-only use-cases over the user collection.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersQuery: Send + Sync {
    /// Every user, in insertion order.
    async fn list_users(&self) -> Result<Vec<User>, Error>;

    /// The first user whose identifier equals `id`.
    ///
    /// Fails with [`crate::domain::ErrorCode::NotFound`] when none matches.
    async fn find_user(&self, id: UserId) -> Result<User, Error>;
}
