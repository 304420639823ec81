//! Mutex-guarded user collection implementing both user ports.
//!
//! The collection is a `Vec` so insertion order is the listing order, and
//! every lookup is a linear scan for the first matching identifier. All five
//! operations take the same lock and never hold it across an `.await`, which
//! keeps them atomic with respect to each other on Actix's worker threads.

use std::sync::{Mutex, MutexGuard};

use async_trait::async_trait;
use tracing::{debug, error, info};

use crate::domain::ports::{UsersCommand, UsersQuery};
use crate::domain::{Error, IdPolicy, User, UserFields, UserId, UserUpdate};

#[derive(Debug)]
struct StoreState {
    users: Vec<User>,
    next_id: UserId,
}

impl StoreState {
    fn position(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id() == id)
    }
}

/// Process-lifetime owner of the user collection.
///
/// Build one in the composition root and share it behind an `Arc`.
///
/// # Examples
/// ```
/// use users_api::domain::IdPolicy;
/// use users_api::outbound::memory::InMemoryUserStore;
///
/// let store = InMemoryUserStore::seeded(IdPolicy::Sequence);
/// assert_eq!(store.id_policy(), IdPolicy::Sequence);
/// ```
#[derive(Debug)]
pub struct InMemoryUserStore {
    policy: IdPolicy,
    state: Mutex<StoreState>,
}

impl InMemoryUserStore {
    /// An empty store.
    pub fn new(policy: IdPolicy) -> Self {
        Self::with_users(policy, Vec::new())
    }

    /// A store holding the single seed record.
    pub fn seeded(policy: IdPolicy) -> Self {
        Self::with_users(policy, vec![User::seed()])
    }

    /// A store pre-populated with `users`, kept in the given order.
    ///
    /// The sequence counter starts after the highest identifier present.
    pub fn with_users(policy: IdPolicy, users: Vec<User>) -> Self {
        let next_id = users
            .iter()
            .map(User::id)
            .max()
            .map_or(UserId::new(1), UserId::next);
        Self {
            policy,
            state: Mutex::new(StoreState { users, next_id }),
        }
    }

    /// Policy used when assigning identifiers.
    pub fn id_policy(&self) -> IdPolicy {
        self.policy
    }

    fn lock(&self) -> Result<MutexGuard<'_, StoreState>, Error> {
        self.state.lock().map_err(|err| {
            error!(error = %err, "user store lock poisoned");
            Error::internal("user store unavailable")
        })
    }
}

#[async_trait]
impl UsersQuery for InMemoryUserStore {
    async fn list_users(&self) -> Result<Vec<User>, Error> {
        let state = self.lock()?;
        debug!(count = state.users.len(), "listing users");
        Ok(state.users.clone())
    }

    async fn find_user(&self, id: UserId) -> Result<User, Error> {
        let state = self.lock()?;
        let user = state
            .users
            .iter()
            .find(|user| user.id() == id)
            .cloned()
            .ok_or_else(Error::user_not_found)?;
        debug!(user_id = %id, "user found");
        Ok(user)
    }
}

#[async_trait]
impl UsersCommand for InMemoryUserStore {
    async fn create_user(&self, fields: UserFields) -> Result<User, Error> {
        let mut state = self.lock()?;
        let id = self.policy.assign(state.users.len(), state.next_id);
        if id >= state.next_id {
            state.next_id = id.next();
        }
        let user = User::new(id, fields);
        state.users.push(user.clone());
        info!(user_id = %id, policy = %self.policy, "user created");
        Ok(user)
    }

    async fn update_user(&self, id: UserId, update: UserUpdate) -> Result<User, Error> {
        let mut state = self.lock()?;
        let index = state.position(id).ok_or_else(Error::user_not_found)?;
        let user = state
            .users
            .get_mut(index)
            .ok_or_else(Error::user_not_found)?;
        update.apply_to(user);
        let updated = user.clone();
        if updated.id() >= state.next_id {
            state.next_id = updated.id().next();
        }
        info!(user_id = %id, new_user_id = %updated.id(), "user updated");
        Ok(updated)
    }

    async fn delete_user(&self, id: UserId) -> Result<(), Error> {
        let mut state = self.lock()?;
        let index = state.position(id).ok_or_else(Error::user_not_found)?;
        state.users.remove(index);
        info!(user_id = %id, "user deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    //! Behaviour of the store's five operations under both id policies.

    use super::*;
    use crate::domain::ErrorCode;
    use rstest::{fixture, rstest};
    use serde_json::json;

    fn fields(name: &str, username: &str, email: &str) -> UserFields {
        UserFields {
            name: Some(json!(name)),
            username: Some(json!(username)),
            email: Some(json!(email)),
        }
    }

    fn ids(users: &[User]) -> Vec<i64> {
        users.iter().map(|user| user.id().get()).collect()
    }

    #[fixture]
    fn store() -> InMemoryUserStore {
        InMemoryUserStore::seeded(IdPolicy::Sequence)
    }

    #[fixture]
    fn legacy_store() -> InMemoryUserStore {
        InMemoryUserStore::seeded(IdPolicy::CollectionLength)
    }

    #[rstest]
    #[tokio::test]
    async fn list_is_stable_without_mutation(store: InMemoryUserStore) {
        let first = store.list_users().await.expect("list");
        let second = store.list_users().await.expect("list");
        assert_eq!(first, second);
        assert_eq!(first, vec![User::seed()]);
    }

    #[rstest]
    #[tokio::test]
    async fn empty_store_lists_nothing() {
        let store = InMemoryUserStore::new(IdPolicy::Sequence);
        assert!(store.list_users().await.expect("list").is_empty());
    }

    #[rstest]
    #[case(IdPolicy::Sequence)]
    #[case(IdPolicy::CollectionLength)]
    #[tokio::test]
    async fn create_appends_with_next_id(#[case] policy: IdPolicy) {
        let store = InMemoryUserStore::seeded(policy);
        let before = store.list_users().await.expect("list").len();

        let created = store
            .create_user(fields("A", "a", "a@x.com"))
            .await
            .expect("create");

        let after = store.list_users().await.expect("list");
        assert_eq!(after.len(), before + 1);
        assert_eq!(created.id().get(), 2);
        assert_eq!(after.last(), Some(&created));
    }

    #[rstest]
    #[tokio::test]
    async fn create_keeps_missing_fields_absent(store: InMemoryUserStore) {
        let created = store
            .create_user(UserFields {
                name: Some(json!(5)),
                ..UserFields::default()
            })
            .await
            .expect("create");
        assert_eq!(created.name(), Some(&json!(5)));
        assert_eq!(created.username(), None);
        assert_eq!(created.email(), None);
    }

    #[rstest]
    #[tokio::test]
    async fn find_returns_every_stored_user(store: InMemoryUserStore) {
        store
            .create_user(fields("A", "a", "a@x.com"))
            .await
            .expect("create");
        for user in store.list_users().await.expect("list") {
            let found = store.find_user(user.id()).await.expect("find");
            assert_eq!(found, user);
        }
    }

    #[rstest]
    #[case(0)]
    #[case(2)]
    #[case(-1)]
    #[tokio::test]
    async fn find_reports_missing_ids(store: InMemoryUserStore, #[case] raw: i64) {
        let err = store
            .find_user(UserId::new(raw))
            .await
            .expect_err("missing user");
        assert_eq!(err.code(), ErrorCode::NotFound);
    }

    #[rstest]
    #[tokio::test]
    async fn update_merges_present_fields(store: InMemoryUserStore) {
        let updated = store
            .update_user(
                UserId::new(1),
                UserFields {
                    email: Some(json!("x")),
                    ..UserFields::default()
                }
                .into(),
            )
            .await
            .expect("update");

        assert_eq!(updated.id(), UserId::new(1));
        assert_eq!(updated.name(), Some(&json!("Fernando Terceros")));
        assert_eq!(updated.username(), Some(&json!("jci_terceros")));
        assert_eq!(updated.email(), Some(&json!("x")));
        assert_eq!(
            store.find_user(UserId::new(1)).await.expect("find"),
            updated
        );
    }

    #[rstest]
    #[tokio::test]
    async fn update_reports_missing_ids(store: InMemoryUserStore) {
        let err = store
            .update_user(UserId::new(42), UserUpdate::default())
            .await
            .expect_err("missing user");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(store.list_users().await.expect("list"), vec![User::seed()]);
    }

    #[rstest]
    #[tokio::test]
    async fn delete_removes_one_and_keeps_order(store: InMemoryUserStore) {
        for n in 0..3 {
            store
                .create_user(fields(&format!("u{n}"), "u", "u@x.com"))
                .await
                .expect("create");
        }
        assert_eq!(ids(&store.list_users().await.expect("list")), [1, 2, 3, 4]);

        store.delete_user(UserId::new(2)).await.expect("delete");
        assert_eq!(ids(&store.list_users().await.expect("list")), [1, 3, 4]);

        let err = store
            .delete_user(UserId::new(2))
            .await
            .expect_err("already deleted");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(ids(&store.list_users().await.expect("list")), [1, 3, 4]);
    }

    #[rstest]
    #[tokio::test]
    async fn collection_length_policy_reuses_live_ids(legacy_store: InMemoryUserStore) {
        let first = legacy_store
            .create_user(fields("A", "a", "a@x.com"))
            .await
            .expect("create");
        assert_eq!(first.id(), UserId::new(2));

        legacy_store
            .delete_user(UserId::new(1))
            .await
            .expect("delete seed");

        let second = legacy_store
            .create_user(fields("B", "b", "b@x.com"))
            .await
            .expect("create");

        // Length was 1 after the delete, so the new user collides with `first`.
        assert_eq!(second.id(), UserId::new(2));
        assert_eq!(ids(&legacy_store.list_users().await.expect("list")), [2, 2]);
        assert_eq!(
            legacy_store.find_user(UserId::new(2)).await.expect("find"),
            first
        );
    }

    #[rstest]
    #[tokio::test]
    async fn sequence_policy_never_reuses_ids(store: InMemoryUserStore) {
        store
            .create_user(fields("A", "a", "a@x.com"))
            .await
            .expect("create");
        store.delete_user(UserId::new(1)).await.expect("delete seed");
        let second = store
            .create_user(fields("B", "b", "b@x.com"))
            .await
            .expect("create");
        assert_eq!(second.id(), UserId::new(3));

        store.delete_user(UserId::new(3)).await.expect("delete last");
        let third = store
            .create_user(fields("C", "c", "c@x.com"))
            .await
            .expect("create");
        assert_eq!(third.id(), UserId::new(4));
        assert_eq!(ids(&store.list_users().await.expect("list")), [2, 4]);
    }

    #[rstest]
    #[tokio::test]
    async fn sequence_starts_after_highest_existing_id() {
        let store = InMemoryUserStore::with_users(
            IdPolicy::Sequence,
            vec![
                User::new(UserId::new(7), UserFields::default()),
                User::new(UserId::new(3), UserFields::default()),
            ],
        );
        let created = store
            .create_user(UserFields::default())
            .await
            .expect("create");
        assert_eq!(created.id(), UserId::new(8));
        assert_eq!(ids(&store.list_users().await.expect("list")), [7, 3, 8]);
    }

    #[rstest]
    #[tokio::test]
    async fn update_with_explicit_id_renames_user(store: InMemoryUserStore) {
        let renamed = store
            .update_user(
                UserId::new(1),
                UserUpdate {
                    id: Some(UserId::new(5)),
                    fields: UserFields::default(),
                },
            )
            .await
            .expect("update");
        assert_eq!(renamed.id(), UserId::new(5));
        assert_eq!(renamed.name(), Some(&json!("Fernando Terceros")));

        let err = store
            .find_user(UserId::new(1))
            .await
            .expect_err("old id is gone");
        assert_eq!(err.code(), ErrorCode::NotFound);
        assert_eq!(store.find_user(UserId::new(5)).await.expect("find"), renamed);

        let created = store
            .create_user(fields("A", "a", "a@x.com"))
            .await
            .expect("create");
        assert_eq!(created.id(), UserId::new(6));
    }
}
