//! User record held by the in-memory store.
//!
//! The record is transport agnostic: inbound adapters translate it to and
//! from their wire DTOs. Descriptive fields hold arbitrary JSON values and
//! are optional because the service stores whatever the client sent without
//! validation.

use std::fmt;

use serde_json::Value;

/// Store-assigned user identifier.
///
/// # Examples
/// ```
/// use users_api::domain::UserId;
///
/// let id = UserId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(UserId::parse_path("7"), Some(id));
/// assert_eq!(UserId::parse_path("seven"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct UserId(i64);

impl UserId {
    /// Wrap a raw identifier.
    pub const fn new(raw: i64) -> Self {
        Self(raw)
    }

    /// Raw integer value.
    pub const fn get(self) -> i64 {
        self.0
    }

    /// Parse an identifier taken from a URL path segment.
    ///
    /// Returns `None` for anything that is not a plain decimal integer, so
    /// callers can treat unparseable input as an identifier that matches no
    /// record.
    pub fn parse_path(segment: &str) -> Option<Self> {
        segment.parse::<i64>().ok().map(Self)
    }

    /// Identifier following this one.
    pub(crate) const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Descriptive user fields.
///
/// Used both as the payload of a create (absent fields stay absent) and as
/// the overlay of an update (only present fields overwrite). Values are kept
/// exactly as supplied; a string is the usual shape but not a requirement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserFields {
    /// Display name.
    pub name: Option<Value>,
    /// Login handle.
    pub username: Option<Value>,
    /// Contact address.
    pub email: Option<Value>,
}

impl UserFields {
    fn overlay(self, target: &mut Self) {
        let Self {
            name,
            username,
            email,
        } = self;
        if name.is_some() {
            target.name = name;
        }
        if username.is_some() {
            target.username = username;
        }
        if email.is_some() {
            target.email = email;
        }
    }
}

/// Shallow-merge patch applied by an update.
///
/// Present fields overwrite, absent ones are preserved. An explicit `id`
/// replaces the user's identifier.
///
/// # Examples
/// ```
/// use serde_json::json;
/// use users_api::domain::{User, UserFields, UserId, UserUpdate};
///
/// let mut user = User::new(
///     UserId::new(1),
///     UserFields {
///         name: Some(json!("Ada")),
///         username: Some(json!("ada")),
///         email: Some(json!("ada@example.com")),
///     },
/// );
/// UserUpdate {
///     id: None,
///     fields: UserFields {
///         email: Some(json!("countess@example.com")),
///         ..UserFields::default()
///     },
/// }
/// .apply_to(&mut user);
///
/// assert_eq!(user.name(), Some(&json!("Ada")));
/// assert_eq!(user.email(), Some(&json!("countess@example.com")));
/// assert_eq!(user.id(), UserId::new(1));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserUpdate {
    /// Replacement identifier, when the client supplied one.
    pub id: Option<UserId>,
    /// Field overlay.
    pub fields: UserFields,
}

impl UserUpdate {
    /// Merge this patch into `user`.
    pub fn apply_to(self, user: &mut User) {
        let Self { id, fields } = self;
        if let Some(id) = id {
            user.id = id;
        }
        fields.overlay(&mut user.fields);
    }
}

impl From<UserFields> for UserUpdate {
    fn from(fields: UserFields) -> Self {
        Self { id: None, fields }
    }
}

/// A stored user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    id: UserId,
    fields: UserFields,
}

impl User {
    /// Build a user from an identifier and its fields.
    pub fn new(id: UserId, fields: UserFields) -> Self {
        Self { id, fields }
    }

    /// The record every fresh store starts with.
    pub fn seed() -> Self {
        Self::new(
            UserId::new(1),
            UserFields {
                name: Some(Value::from("Fernando Terceros")),
                username: Some(Value::from("jci_terceros")),
                email: Some(Value::from("jciterceros@domain.com")),
            },
        )
    }

    /// Identifier.
    pub fn id(&self) -> UserId {
        self.id
    }

    /// Display name, if set.
    pub fn name(&self) -> Option<&Value> {
        self.fields.name.as_ref()
    }

    /// Login handle, if set.
    pub fn username(&self) -> Option<&Value> {
        self.fields.username.as_ref()
    }

    /// Contact address, if set.
    pub fn email(&self) -> Option<&Value> {
        self.fields.email.as_ref()
    }

    /// Borrow the descriptive fields.
    pub fn fields(&self) -> &UserFields {
        &self.fields
    }
}
