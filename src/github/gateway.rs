//! Gateway for loading issue comments through Octocrab.
//!
//! This module provides a trait-based gateway for communicating with the
//! GitHub API. The trait-based design enables mocking in tests while the
//! Octocrab implementation handles real HTTP requests.

use async_trait::async_trait;
use http::{StatusCode, Uri};
use octocrab::{Octocrab, Page};
use url::Url;

use super::error::AnalysisError;
use super::locator::{IssueLocator, PersonalAccessToken};
use super::models::{ApiComment, IssueComment};

/// Builds an Octocrab client for the given token and API base URL.
///
/// # Errors
///
/// Returns `AnalysisError::InvalidUrl` when the base URI cannot be parsed or
/// `AnalysisError::Api` when Octocrab fails to construct a client.
fn build_octocrab_client(
    token: &PersonalAccessToken,
    api_base: &Url,
) -> Result<Octocrab, AnalysisError> {
    let base_uri: Uri = api_base
        .as_str()
        .parse::<Uri>()
        .map_err(|error| AnalysisError::InvalidUrl(error.to_string()))?;

    Octocrab::builder()
        .personal_token(token.as_ref())
        .base_uri(base_uri)
        .map_err(|error| AnalysisError::Api {
            message: format!("build client failed: {error}"),
        })?
        .build()
        .map_err(|error| map_octocrab_error("build client", &error))
}

/// Gateway that can load the comment thread of an issue.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait IssueCommentGateway: Send + Sync {
    /// Fetch every comment of the issue, fully materialized in API order.
    async fn issue_comments(
        &self,
        locator: &IssueLocator,
    ) -> Result<Vec<IssueComment>, AnalysisError>;
}

/// Octocrab-backed gateway.
pub struct OctocrabGateway {
    client: Octocrab,
}

impl OctocrabGateway {
    /// Creates a new gateway from an Octocrab client.
    #[must_use]
    pub const fn new(client: Octocrab) -> Self {
        Self { client }
    }

    /// Builds an Octocrab-backed gateway for the given token and API base.
    ///
    /// The client is intended to be constructed once at startup and shared
    /// read-only across requests.
    ///
    /// # Errors
    ///
    /// Returns `AnalysisError::InvalidUrl` when the base URI cannot be parsed
    /// or `AnalysisError::Api` when Octocrab fails to construct a client.
    pub fn for_token(token: &PersonalAccessToken, api_base: &Url) -> Result<Self, AnalysisError> {
        let octocrab = build_octocrab_client(token, api_base)?;
        Ok(Self::new(octocrab))
    }
}

#[async_trait]
impl IssueCommentGateway for OctocrabGateway {
    async fn issue_comments(
        &self,
        locator: &IssueLocator,
    ) -> Result<Vec<IssueComment>, AnalysisError> {
        let page = self
            .client
            .get::<Page<ApiComment>, _, _>(locator.comments_path(), None::<&()>)
            .await
            .map_err(|error| map_octocrab_error("issue comments", &error))?;

        // Downstream aggregation needs full totals, so every page is drained.
        self.client
            .all_pages(page)
            .await
            .map(|comments| comments.into_iter().map(ApiComment::into).collect())
            .map_err(|error| map_octocrab_error("issue comments", &error))
    }
}

// --- Error mapping helpers ---

/// Checks if a GitHub error status indicates an authentication failure.
const fn is_auth_failure(status: StatusCode) -> bool {
    matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN)
}

/// Checks if an octocrab error represents a network/transport issue.
const fn is_network_error(error: &octocrab::Error) -> bool {
    matches!(
        error,
        octocrab::Error::Http { .. }
            | octocrab::Error::Hyper { .. }
            | octocrab::Error::Service { .. }
    )
}

/// Checks whether the GitHub error represents a rate limit error based on the
/// HTTP status and message / documentation URL content.
fn is_rate_limit_error(source: &octocrab::GitHubError) -> bool {
    let is_rate_limit_status = matches!(
        source.status_code,
        StatusCode::FORBIDDEN | StatusCode::TOO_MANY_REQUESTS
    );

    let message_indicates_rate_limit = source.message.to_lowercase().contains("rate limit")
        || source
            .documentation_url
            .as_deref()
            .is_some_and(|url| url.contains("rate-limit"));

    is_rate_limit_status && message_indicates_rate_limit
}

pub(super) fn map_octocrab_error(operation: &str, error: &octocrab::Error) -> AnalysisError {
    if let octocrab::Error::GitHub { source, .. } = error {
        if is_rate_limit_error(source) {
            return AnalysisError::RateLimitExceeded {
                message: format!("{operation} failed: {message}", message = source.message),
            };
        }

        return if is_auth_failure(source.status_code) {
            AnalysisError::Authentication {
                message: format!(
                    "{operation} failed: GitHub returned {status} {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        } else {
            AnalysisError::Api {
                message: format!(
                    "{operation} failed with status {status}: {message}",
                    status = source.status_code,
                    message = source.message
                ),
            }
        };
    }

    if is_network_error(error) {
        return AnalysisError::Network {
            message: format!("{operation} failed: {error}"),
        };
    }

    AnalysisError::Api {
        message: format!("{operation} failed: {error}"),
    }
}

#[cfg(test)]
mod tests {
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::{AnalysisError, IssueCommentGateway, OctocrabGateway};
    use crate::github::locator::{IssueLocator, PersonalAccessToken};
    use url::Url;

    fn gateway_for(server: &MockServer) -> OctocrabGateway {
        let api_base = Url::parse(&server.uri()).expect("mock server URI should parse");
        let token = PersonalAccessToken::new("valid-token").expect("token should be valid");
        OctocrabGateway::for_token(&token, &api_base).expect("should create gateway")
    }

    fn sample_locator() -> IssueLocator {
        IssueLocator::from_parameters("owner", "repo", "7").expect("sample locator should build")
    }

    #[tokio::test]
    async fn issue_comments_preserve_api_order() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let response = ResponseTemplate::new(200).set_body_json(serde_json::json!([
            { "id": 10, "body": "first comment" },
            { "id": 11, "body": "second comment" },
            { "id": 12, "body": null }
        ]));

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues/7/comments"))
            .respond_with(response)
            .mount(&server)
            .await;

        let comments = gateway
            .issue_comments(&sample_locator())
            .await
            .expect("request should succeed");

        let bodies: Vec<&str> = comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["first comment", "second comment", ""]);
        let ids: Vec<u64> = comments.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![10, 11, 12]);
    }

    #[tokio::test]
    async fn issue_comments_follow_pagination_links() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let comments_path = "/repos/owner/repo/issues/7/comments";
        let next_url = format!("{}{comments_path}?page=2", server.uri());
        let first_page = ResponseTemplate::new(200)
            .set_body_json(serde_json::json!([{ "id": 1, "body": "page one" }]))
            .insert_header("Link", format!("<{next_url}>; rel=\"next\""));
        let second_page = ResponseTemplate::new(200)
            .set_body_json(serde_json::json!([{ "id": 2, "body": "page two" }]));

        Mock::given(method("GET"))
            .and(path(comments_path))
            .and(wiremock::matchers::query_param("page", "2"))
            .respond_with(second_page)
            .mount(&server)
            .await;
        Mock::given(method("GET"))
            .and(path(comments_path))
            .respond_with(first_page)
            .mount(&server)
            .await;

        let comments = gateway
            .issue_comments(&sample_locator())
            .await
            .expect("request should succeed");

        let bodies: Vec<&str> = comments.iter().map(|c| c.body.as_str()).collect();
        assert_eq!(bodies, vec!["page one", "page two"]);
    }

    #[tokio::test]
    async fn issue_comments_map_authentication_failures() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let response = ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "message": "Bad credentials"
        }));

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues/7/comments"))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .issue_comments(&sample_locator())
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, AnalysisError::Authentication { ref message } if message.contains("Bad credentials")),
            "expected Authentication, got {error:?}"
        );
    }

    #[tokio::test]
    async fn issue_comments_map_rate_limit_errors() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let response = ResponseTemplate::new(403).set_body_json(serde_json::json!({
            "message": "API rate limit exceeded for user",
            "documentation_url": "https://docs.github.com/rest/rate-limit"
        }));

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues/7/comments"))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .issue_comments(&sample_locator())
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, AnalysisError::RateLimitExceeded { ref message } if message.contains("rate limit")),
            "expected RateLimitExceeded, got {error:?}"
        );
    }

    #[tokio::test]
    async fn issue_comments_map_not_found_as_api_error() {
        let server = MockServer::start().await;
        let gateway = gateway_for(&server);

        let response = ResponseTemplate::new(404).set_body_json(serde_json::json!({
            "message": "Not Found"
        }));

        Mock::given(method("GET"))
            .and(path("/repos/owner/repo/issues/7/comments"))
            .respond_with(response)
            .mount(&server)
            .await;

        let error = gateway
            .issue_comments(&sample_locator())
            .await
            .expect_err("request should fail");

        assert!(
            matches!(error, AnalysisError::Api { ref message } if message.contains("Not Found")),
            "expected Api, got {error:?}"
        );
    }
}
