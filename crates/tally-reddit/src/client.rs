use std::time::Duration;

use reqwest::blocking::{Client, Response};
use reqwest::redirect::Policy;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, info};

use tally_engine::{ContentSource, SourceError, SourceResult};
use tally_types::{Comment, Submission};

use crate::config::RedditConfig;
use crate::credentials::Credentials;
use crate::endpoint::{endpoints, LINK_PREFIX, MAX_PAGE_LIMIT};
use crate::expand::{expand_thread, ThreadFetcher};
use crate::flatten::CommentCollector;
use crate::listing::{LinkThing, Listing, MoreChildrenResponse, ThreadResponse, TokenResponse};

const CONNECT_TIMEOUT: Duration = Duration::from_secs(15);

/// Which kind of request a response answers, for status mapping.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Endpoint {
    Token,
    Listing,
    Thread,
}

/// Authenticated Reddit API client serving one community's content.
#[derive(Debug)]
pub struct RedditSource {
    http: Client,
    config: RedditConfig,
    token: SecretString,
}

impl RedditSource {
    /// Build the HTTP client and exchange `credentials` for an app-only
    /// access token.
    pub fn connect(credentials: &Credentials, config: RedditConfig) -> SourceResult<Self> {
        let http = Client::builder()
            .user_agent(credentials.user_agent.clone())
            .connect_timeout(CONNECT_TIMEOUT.min(config.timeout()))
            .timeout(config.timeout())
            .redirect(Policy::none())
            .build()
            .map_err(|e| SourceError::Unavailable(format!("cannot build HTTP client: {e}")))?;

        let token = request_token(&http, &config, credentials)?;
        info!(api = %config.api_url, client_id = %credentials.client_id, "authenticated");
        Ok(Self {
            http,
            config,
            token,
        })
    }

    fn get_json<T: DeserializeOwned>(
        &self,
        path: &str,
        query: &[(&str, String)],
        endpoint: Endpoint,
        target: &str,
    ) -> SourceResult<T> {
        let url = self.config.api(path);
        debug!(%url, ?query, "GET");
        let response = self
            .http
            .get(&url)
            .bearer_auth(self.token.expose_secret())
            .query(query)
            .send()
            .map_err(transport_error)?;
        read_json(response, endpoint, target)
    }

    fn read_thread(
        &self,
        submission_id: &str,
        focus: Option<&str>,
    ) -> SourceResult<ThreadResponse> {
        let mut query = vec![("raw_json", "1".to_string())];
        if let Some(comment) = focus {
            query.push(("comment", comment.to_string()));
        }
        self.get_json(
            &endpoints::comments(submission_id),
            &query,
            Endpoint::Thread,
            submission_id,
        )
    }
}

impl ThreadFetcher for RedditSource {
    fn continue_thread(
        &self,
        submission_id: &str,
        comment_id: &str,
    ) -> SourceResult<ThreadResponse> {
        self.read_thread(submission_id, Some(comment_id))
    }

    fn more_children(
        &self,
        submission_id: &str,
        children: &[String],
    ) -> SourceResult<MoreChildrenResponse> {
        self.get_json(
            endpoints::MORE_CHILDREN,
            &[
                ("api_type", "json".to_string()),
                ("link_id", format!("{LINK_PREFIX}{submission_id}")),
                ("children", children.join(",")),
                ("raw_json", "1".to_string()),
            ],
            Endpoint::Thread,
            submission_id,
        )
    }
}

impl ContentSource for RedditSource {
    fn fetch_recent_submissions(
        &self,
        community: &str,
        limit: usize,
    ) -> SourceResult<Vec<Submission>> {
        let limit = limit.min(MAX_PAGE_LIMIT);
        let listing: Listing<LinkThing> = self.get_json(
            &endpoints::new_listing(community),
            &[("limit", limit.to_string()), ("raw_json", "1".to_string())],
            Endpoint::Listing,
            community,
        )?;
        listing
            .data
            .children
            .into_iter()
            .map(|thing| {
                thing
                    .data
                    .into_submission()
                    .map_err(|e| SourceError::MalformedResponse(e.to_string()))
            })
            .collect()
    }

    fn fetch_flattened_comments(&self, submission: &Submission) -> SourceResult<Vec<Comment>> {
        let thread = self.read_thread(&submission.id, None)?;
        let mut collector = CommentCollector::new();
        collector.absorb(thread.1.data.children);
        expand_thread(self, &submission.id, &mut collector, self.config.expand_limit)?;
        Ok(collector.finish())
    }
}

fn request_token(
    http: &Client,
    config: &RedditConfig,
    credentials: &Credentials,
) -> SourceResult<SecretString> {
    let response = http
        .post(config.auth(endpoints::ACCESS_TOKEN))
        .basic_auth(
            &credentials.client_id,
            Some(credentials.client_secret.expose_secret()),
        )
        .form(&[("grant_type", "client_credentials")])
        .send()
        .map_err(transport_error)?;
    let body: TokenResponse = read_json(response, Endpoint::Token, "access token")?;
    match (body.access_token, body.error) {
        (Some(token), _) if !token.is_empty() => Ok(SecretString::from(token)),
        (_, Some(error)) => Err(SourceError::AuthenticationFailed(error)),
        _ => Err(SourceError::AuthenticationFailed(
            "token response carried no access token".into(),
        )),
    }
}

fn read_json<T: DeserializeOwned>(
    response: Response,
    endpoint: Endpoint,
    target: &str,
) -> SourceResult<T> {
    let status = response.status();
    if !status.is_success() {
        return Err(classify(status, endpoint, target));
    }
    let body = response.text().map_err(transport_error)?;
    serde_json::from_str(&body)
        .map_err(|e| SourceError::MalformedResponse(format!("{target}: {e}")))
}

fn transport_error(error: reqwest::Error) -> SourceError {
    if error.is_timeout() {
        SourceError::Unavailable(format!("request timed out: {error}"))
    } else {
        SourceError::Unavailable(error.to_string())
    }
}

/// Map a non-success status to a source error.
pub(crate) fn classify(status: StatusCode, endpoint: Endpoint, target: &str) -> SourceError {
    match (status, endpoint) {
        (StatusCode::UNAUTHORIZED, _) => {
            SourceError::AuthenticationFailed(format!("{target}: HTTP {status}"))
        }
        (StatusCode::FORBIDDEN | StatusCode::NOT_FOUND, Endpoint::Listing) => {
            SourceError::CommunityNotFound(target.to_string())
        }
        // Unknown communities redirect to search.
        (s, Endpoint::Listing) if s.is_redirection() => {
            SourceError::CommunityNotFound(target.to_string())
        }
        (StatusCode::FORBIDDEN, _) => {
            SourceError::AuthenticationFailed(format!("{target}: HTTP {status}"))
        }
        (s, Endpoint::Token) if s.is_client_error() => {
            SourceError::AuthenticationFailed(format!("{target}: HTTP {status}"))
        }
        _ => SourceError::Unavailable(format!("{target}: HTTP {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unauthorized_is_auth_failure_everywhere() {
        for endpoint in [Endpoint::Token, Endpoint::Listing, Endpoint::Thread] {
            assert!(matches!(
                classify(StatusCode::UNAUTHORIZED, endpoint, "x"),
                SourceError::AuthenticationFailed(_)
            ));
        }
    }

    #[test]
    fn listing_not_found_and_redirect_mean_unknown_community() {
        assert_eq!(
            classify(StatusCode::NOT_FOUND, Endpoint::Listing, "nosuchsub"),
            SourceError::CommunityNotFound("nosuchsub".into())
        );
        assert_eq!(
            classify(StatusCode::FOUND, Endpoint::Listing, "nosuchsub"),
            SourceError::CommunityNotFound("nosuchsub".into())
        );
        assert_eq!(
            classify(StatusCode::FORBIDDEN, Endpoint::Listing, "private"),
            SourceError::CommunityNotFound("private".into())
        );
    }

    #[test]
    fn token_client_errors_are_auth_failures() {
        assert!(matches!(
            classify(StatusCode::BAD_REQUEST, Endpoint::Token, "access token"),
            SourceError::AuthenticationFailed(_)
        ));
    }

    #[test]
    fn server_errors_are_unavailable() {
        for endpoint in [Endpoint::Token, Endpoint::Listing, Endpoint::Thread] {
            assert!(matches!(
                classify(StatusCode::SERVICE_UNAVAILABLE, endpoint, "x"),
                SourceError::Unavailable(_)
            ));
        }
        assert!(matches!(
            classify(StatusCode::TOO_MANY_REQUESTS, Endpoint::Thread, "abc"),
            SourceError::Unavailable(_)
        ));
    }

    #[test]
    fn connect_to_unreachable_host_is_unavailable() {
        let config = RedditConfig {
            auth_url: "http://127.0.0.1:1".into(),
            api_url: "http://127.0.0.1:1".into(),
            timeout_secs: 2,
            expand_limit: None,
        };
        let credentials = Credentials::new("id", "secret", "tally-test/0.1");
        let err = RedditSource::connect(&credentials, config).unwrap_err();
        assert!(matches!(err, SourceError::Unavailable(_)));
    }
}
