//! Identifier assignment for newly created users.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use super::UserId;

/// How the store picks the identifier of a new user.
///
/// # Examples
/// ```
/// use users_api::domain::IdPolicy;
///
/// let policy: IdPolicy = "collection-length".parse().expect("known policy");
/// assert_eq!(policy, IdPolicy::CollectionLength);
/// assert_eq!(IdPolicy::default(), IdPolicy::Sequence);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IdPolicy {
    /// Monotonic counter seeded from the highest existing identifier.
    /// Identifiers are never reused, so they stay unique after deletions.
    #[default]
    Sequence,
    /// `collection length + 1`. After a deletion this can hand out an
    /// identifier that is still in use; kept for compatibility with clients
    /// that predict identifiers this way.
    CollectionLength,
}

impl IdPolicy {
    /// Canonical configuration spelling.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Sequence => "sequence",
            Self::CollectionLength => "collection-length",
        }
    }

    /// Pick the identifier for the next insert.
    ///
    /// `len` is the current collection length and `next_sequence` the
    /// store's counter. Returns the identifier to use.
    pub(crate) fn assign(self, len: usize, next_sequence: UserId) -> UserId {
        match self {
            Self::Sequence => next_sequence,
            Self::CollectionLength => {
                let len = i64::try_from(len).unwrap_or(i64::MAX);
                UserId::new(len.saturating_add(1))
            }
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raised when a configured policy name is not recognised.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown id policy `{value}`; expected `sequence` or `collection-length`")]
pub struct IdPolicyParseError {
    value: String,
}

impl FromStr for IdPolicy {
    type Err = IdPolicyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sequence" => Ok(Self::Sequence),
            "collection-length" | "collection_length" | "length" => Ok(Self::CollectionLength),
            _ => Err(IdPolicyParseError {
                value: s.to_owned(),
            }),
        }
    }
}
