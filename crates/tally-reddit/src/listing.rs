//! Wire shapes of Reddit API responses, and their mapping to Tally types.

use std::fmt;

use serde::de::value::MapAccessDeserializer;
use serde::de::{self, IgnoredAny, MapAccess, Unexpected, Visitor};
use serde::{Deserialize, Deserializer};

use tally_types::{AuthorId, Comment, Submission, TypeError};

/// Author name Reddit reports for deleted accounts and removed content.
pub const DELETED_AUTHOR: &str = "[deleted]";

/// A paginated list of things.
#[derive(Debug, Deserialize)]
pub struct Listing<T> {
    pub data: ListingData<T>,
}

#[derive(Debug, Deserialize)]
pub struct ListingData<T> {
    #[serde(default = "Vec::new")]
    pub children: Vec<T>,
}

/// A `t3` (submission) entry of a `/new` listing.
#[derive(Debug, Deserialize)]
pub struct LinkThing {
    pub data: LinkData,
}

#[derive(Debug, Deserialize)]
pub struct LinkData {
    pub id: String,
    #[serde(default)]
    pub author: Option<String>,
    pub created_utc: f64,
    #[serde(default)]
    pub title: Option<String>,
}

impl LinkData {
    pub fn into_submission(self) -> Result<Submission, TypeError> {
        let submission =
            Submission::from_unix(self.id, author_id(self.author), self.created_utc as i64)?;
        Ok(match self.title {
            Some(title) => submission.with_title(title),
            None => submission,
        })
    }
}

/// A node of a comment tree: either a comment or a placeholder for more.
#[derive(Debug, Deserialize)]
#[serde(tag = "kind", content = "data")]
pub enum CommentNode {
    #[serde(rename = "t1")]
    Comment(CommentData),
    #[serde(rename = "more")]
    More(MoreData),
}

#[derive(Debug, Deserialize)]
pub struct CommentData {
    pub id: String,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub replies: Replies,
}

impl CommentData {
    pub fn to_comment(&self) -> Comment {
        Comment::with_id(self.id.clone(), author_id(self.author.clone()))
    }
}

/// Replies are an empty string when a comment has none.
#[derive(Debug, Default)]
pub enum Replies {
    Listing(Listing<CommentNode>),
    #[default]
    Empty,
}

impl Replies {
    pub fn into_children(self) -> Vec<CommentNode> {
        match self {
            Self::Listing(listing) => listing.data.children,
            Self::Empty => Vec::new(),
        }
    }
}

impl<'de> Deserialize<'de> for Replies {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(RepliesVisitor)
    }
}

struct RepliesVisitor;

impl<'de> Visitor<'de> for RepliesVisitor {
    type Value = Replies;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a comment listing or an empty string")
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Replies, E> {
        if value.is_empty() {
            Ok(Replies::Empty)
        } else {
            Err(E::invalid_value(Unexpected::Str(value), &self))
        }
    }

    fn visit_unit<E: de::Error>(self) -> Result<Replies, E> {
        Ok(Replies::Empty)
    }

    fn visit_none<E: de::Error>(self) -> Result<Replies, E> {
        Ok(Replies::Empty)
    }

    fn visit_map<A: MapAccess<'de>>(self, map: A) -> Result<Replies, A::Error> {
        Listing::deserialize(MapAccessDeserializer::new(map)).map(Replies::Listing)
    }
}

/// A "load more comments" placeholder.
///
/// With child ids it expands through `/api/morechildren`. Without any it is
/// a "continue this thread" link, expanded by re-reading the thread rooted at
/// `parent_id`.
#[derive(Clone, Debug, Deserialize)]
pub struct MoreData {
    pub id: String,
    pub parent_id: String,
    #[serde(default)]
    pub children: Vec<String>,
    #[serde(default)]
    pub count: u64,
}

impl MoreData {
    pub fn is_continue_thread(&self) -> bool {
        self.children.is_empty()
    }

    /// Identity for deduplication. Continue-thread links all share the id
    /// `_`, so they are told apart by parent.
    pub fn key(&self) -> String {
        format!("{}:{}", self.id, self.parent_id)
    }
}

/// `/comments/{id}` answers with the submission listing, then the comment
/// forest.
#[derive(Debug, Deserialize)]
pub struct ThreadResponse(pub IgnoredAny, pub Listing<CommentNode>);

/// `/api/morechildren?api_type=json` body.
#[derive(Debug, Deserialize)]
pub struct MoreChildrenResponse {
    pub json: MoreChildrenJson,
}

#[derive(Debug, Deserialize)]
pub struct MoreChildrenJson {
    #[serde(default)]
    pub errors: Vec<serde_json::Value>,
    #[serde(default)]
    pub data: Option<MoreChildrenData>,
}

#[derive(Debug, Deserialize)]
pub struct MoreChildrenData {
    #[serde(default)]
    pub things: Vec<CommentNode>,
}

impl MoreChildrenResponse {
    pub fn into_things(self) -> Vec<CommentNode> {
        self.json.data.map(|d| d.things).unwrap_or_default()
    }
}

/// `/api/v1/access_token` body. Reddit reports some failures with a 200 and
/// an `error` field.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    #[serde(default)]
    pub access_token: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

/// Map a Reddit author name to an identity.
pub fn author_id(name: Option<String>) -> AuthorId {
    match name {
        Some(name) if !name.is_empty() && name != DELETED_AUTHOR => AuthorId::Account(name),
        _ => AuthorId::Unavailable,
    }
}
