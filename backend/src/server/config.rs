//! HTTP server configuration object.

use std::net::SocketAddr;
use std::sync::Arc;

use users_api::domain::ports::{UsersCommand, UsersQuery};
use users_api::outbound::memory::InMemoryUserStore;

/// Everything [`super::create_server`] needs, built once in `main`.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) users: Arc<dyn UsersQuery>,
    pub(crate) users_command: Arc<dyn UsersCommand>,
}

impl ServerConfig {
    /// Serve `store` on `bind_addr`.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, store: Arc<InMemoryUserStore>) -> Self {
        Self {
            bind_addr,
            users: store.clone(),
            users_command: store,
        }
    }
}
