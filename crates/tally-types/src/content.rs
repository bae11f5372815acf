use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Serialize};

use crate::author::AuthorId;
use crate::error::TypeError;

/// A submission (top-level post) in a community.
///
/// The engine only looks at `author` and `created_at`; `id` is the source's
/// opaque handle used to request the submission's comments.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub id: String,
    #[serde(default)]
    pub author: AuthorId,
    pub created_at: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
}

impl Submission {
    pub fn new(id: impl Into<String>, author: AuthorId, created_at: DateTime<Utc>) -> Self {
        Self {
            id: id.into(),
            author,
            created_at,
            title: None,
        }
    }

    /// Build a submission from a UNIX timestamp in seconds.
    pub fn from_unix(
        id: impl Into<String>,
        author: AuthorId,
        created_utc: i64,
    ) -> Result<Self, TypeError> {
        let created_at = Utc
            .timestamp_opt(created_utc, 0)
            .single()
            .ok_or(TypeError::InvalidTimestamp(created_utc))?;
        Ok(Self::new(id, author, created_at))
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}

/// A comment under a submission, after the source flattened the thread.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub author: AuthorId,
}

impl Comment {
    pub fn new(author: AuthorId) -> Self {
        Self { id: None, author }
    }

    pub fn with_id(id: impl Into<String>, author: AuthorId) -> Self {
        Self {
            id: Some(id.into()),
            author,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_unix_timestamp() {
        let s = Submission::from_unix("abc", AuthorId::account("amy"), 1_700_000_000).unwrap();
        assert_eq!(s.created_at.timestamp(), 1_700_000_000);
        assert_eq!(s.id, "abc");
    }

    #[test]
    fn from_unix_rejects_out_of_range() {
        let err = Submission::from_unix("abc", AuthorId::Unavailable, i64::MAX).unwrap_err();
        assert_eq!(err, TypeError::InvalidTimestamp(i64::MAX));
    }

    #[test]
    fn missing_author_deserializes_to_sentinel() {
        let c: Comment = serde_json::from_str("{}").unwrap();
        assert!(c.author.is_unavailable());

        let s: Submission =
            serde_json::from_str(r#"{"id":"x","created_at":"2024-01-01T00:00:00Z"}"#).unwrap();
        assert!(s.author.is_unavailable());
        assert!(s.title.is_none());
    }
}
