//! Domain ports for the users resource.
//!
//! Reads and writes are split into two driving ports so handlers depend only
//! on the capability they use. A single store may implement both.

mod users_command;
mod users_query;

#[cfg(test)]
pub use users_command::MockUsersCommand;
pub use users_command::UsersCommand;
#[cfg(test)]
pub use users_query::MockUsersQuery;
pub use users_query::UsersQuery;
