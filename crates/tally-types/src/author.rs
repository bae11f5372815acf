use std::fmt;

use serde::{Deserialize, Serialize};

/// Display form of [`AuthorId::Unavailable`].
pub const UNAVAILABLE_LABEL: &str = "[deleted]";

/// Stable identity of a content author.
///
/// An `AuthorId` is derived from the account name the content source reports.
/// The same account always produces the same identity, which makes it safe to
/// use as a ledger key independently of the source's own object model.
///
/// Content whose author is gone (deleted account, removed post) carries the
/// reserved [`AuthorId::Unavailable`] sentinel. All such content shares that
/// one key.
///
/// Ordering: accounts compare by name; the sentinel sorts after every account.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(from = "Option<String>", into = "Option<String>")]
pub enum AuthorId {
    /// A live account, keyed by its name.
    Account(String),
    /// Author unavailable (deleted or removed).
    Unavailable,
}

impl AuthorId {
    /// Identity for a named account.
    pub fn account(name: impl Into<String>) -> Self {
        Self::Account(name.into())
    }

    /// Returns `true` for the unavailable-author sentinel.
    pub fn is_unavailable(&self) -> bool {
        matches!(self, Self::Unavailable)
    }

    /// The account name, if any.
    pub fn name(&self) -> Option<&str> {
        match self {
            Self::Account(name) => Some(name),
            Self::Unavailable => None,
        }
    }
}

/// Content with no reported author is attributed to the sentinel.
impl Default for AuthorId {
    fn default() -> Self {
        Self::Unavailable
    }
}

impl From<Option<String>> for AuthorId {
    fn from(name: Option<String>) -> Self {
        match name {
            Some(name) => Self::Account(name),
            None => Self::Unavailable,
        }
    }
}

impl From<AuthorId> for Option<String> {
    fn from(id: AuthorId) -> Self {
        match id {
            AuthorId::Account(name) => Some(name),
            AuthorId::Unavailable => None,
        }
    }
}

impl fmt::Debug for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(name) => write!(f, "AuthorId({name})"),
            Self::Unavailable => write!(f, "AuthorId(<unavailable>)"),
        }
    }
}

impl fmt::Display for AuthorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Account(name) => write!(f, "{name}"),
            Self::Unavailable => write!(f, "{UNAVAILABLE_LABEL}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn same_account_is_same_identity() {
        let a = AuthorId::account("spez");
        let b = AuthorId::from(Some("spez".to_string()));
        assert_eq!(a, b);

        let set: HashSet<_> = [a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn names_are_case_sensitive() {
        assert_ne!(AuthorId::account("Alice"), AuthorId::account("alice"));
    }

    #[test]
    fn missing_name_maps_to_sentinel() {
        let id = AuthorId::from(None);
        assert!(id.is_unavailable());
        assert_eq!(id.name(), None);
    }

    #[test]
    fn sentinel_sorts_after_accounts() {
        let mut ids = vec![
            AuthorId::Unavailable,
            AuthorId::account("zed"),
            AuthorId::account("amy"),
        ];
        ids.sort();
        assert_eq!(
            ids,
            vec![
                AuthorId::account("amy"),
                AuthorId::account("zed"),
                AuthorId::Unavailable,
            ]
        );
    }

    #[test]
    fn display_format() {
        assert_eq!(AuthorId::account("bob").to_string(), "bob");
        assert_eq!(AuthorId::Unavailable.to_string(), "[deleted]");
    }

    #[test]
    fn serializes_as_nullable_string() {
        let json = serde_json::to_string(&AuthorId::account("bob")).unwrap();
        assert_eq!(json, "\"bob\"");
        let json = serde_json::to_string(&AuthorId::Unavailable).unwrap();
        assert_eq!(json, "null");

        let parsed: AuthorId = serde_json::from_str("null").unwrap();
        assert!(parsed.is_unavailable());
        let parsed: AuthorId = serde_json::from_str("\"bob\"").unwrap();
        assert_eq!(parsed, AuthorId::account("bob"));
    }
}
