//! Shared HTTP adapter state.
//!
//! Handlers receive this via `web::Data` so they depend only on the domain
//! ports and stay testable with doubles.

use std::sync::Arc;

use crate::domain::ports::{UsersCommand, UsersQuery};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    pub users: Arc<dyn UsersQuery>,
    pub users_command: Arc<dyn UsersCommand>,
}

impl HttpState {
    /// Construct state from separate read and write ports.
    pub fn new(users: Arc<dyn UsersQuery>, users_command: Arc<dyn UsersCommand>) -> Self {
        Self {
            users,
            users_command,
        }
    }

    /// Construct state from one value implementing both ports.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use users_api::domain::IdPolicy;
    /// use users_api::inbound::http::state::HttpState;
    /// use users_api::outbound::memory::InMemoryUserStore;
    ///
    /// let store = Arc::new(InMemoryUserStore::seeded(IdPolicy::Sequence));
    /// let _state = HttpState::from_store(store);
    /// ```
    pub fn from_store<S>(store: Arc<S>) -> Self
    where
        S: UsersQuery + UsersCommand + 'static,
    {
        Self::new(store.clone(), store)
    }
}
