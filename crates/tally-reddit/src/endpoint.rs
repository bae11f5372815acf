/// HTTP endpoint paths for the Reddit API.
pub mod endpoints {
    pub const ACCESS_TOKEN: &str = "/api/v1/access_token";
    pub const MORE_CHILDREN: &str = "/api/morechildren";

    /// Newest-first submission listing for a community.
    pub fn new_listing(community: &str) -> String {
        format!("/r/{community}/new")
    }

    /// Comment tree for a submission.
    pub fn comments(submission_id: &str) -> String {
        format!("/comments/{submission_id}")
    }
}

pub const DEFAULT_AUTH_URL: &str = "https://www.reddit.com";
pub const DEFAULT_API_URL: &str = "https://oauth.reddit.com";

/// Largest page `/new` will serve.
pub const MAX_PAGE_LIMIT: usize = 100;

/// Largest id batch `/api/morechildren` accepts.
pub const MORE_CHILDREN_BATCH: usize = 100;

/// Prefix of submission fullnames (`t3_abc123`).
pub const LINK_PREFIX: &str = "t3_";

/// Strip a `tN_` kind prefix from a fullname.
pub fn strip_kind(fullname: &str) -> &str {
    match fullname.split_once('_') {
        Some((kind, id)) if kind.len() == 2 && kind.starts_with('t') => id,
        _ => fullname,
    }
}
