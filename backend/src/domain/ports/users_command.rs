//! Driving port for user mutations.

use async_trait::async_trait;

use crate::domain::{Error, User, UserFields, UserId, UserUpdate};

/// Mutating use-cases over the user collection.
///
/// Identifier-keyed operations fail with
/// [`crate::domain::ErrorCode::NotFound`] when no user matches.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UsersCommand: Send + Sync {
    /// Append a user built from `fields` and return it with its assigned id.
    async fn create_user(&self, fields: UserFields) -> Result<User, Error>;

    /// Shallow-merge `update` onto the user and return the result.
    ///
    /// An explicit `update.id` renames the user.
    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, Error>;

    /// Remove the user, keeping the order of the remaining ones.
    async fn delete_user(&self, id: UserId) -> Result<(), Error>;
}
