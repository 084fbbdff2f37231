//! The analysis request pipeline behind `GET /analyze`.
//!
//! A linear pipeline: parse query parameters, fetch the comment thread,
//! score each comment, sum the totals, render the report. Validation
//! failures answer 400 before any remote call; remote failures answer 502
//! so a bad upstream never crashes the handler or hangs the connection.

use std::sync::Arc;

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use serde::Deserialize;
use tokio::time::timeout;
use tracing::{info, instrument, warn};

use crate::github::{AnalysisError, IssueLocator};
use crate::report::{AggregateScore, ScoredComment, render_report};

use super::AppState;

/// Fixed body for requests with missing or malformed query parameters.
const INVALID_PARAMETERS_BODY: &str = "Invalid query parameters";

/// Raw query parameters of an analysis request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AnalyzeParams {
    /// Repository owner login.
    pub owner: Option<String>,
    /// Repository name.
    pub repository: Option<String>,
    /// Issue number, kept as text so parse failures stay a validation
    /// concern rather than an extractor rejection.
    #[serde(rename = "issueNumber")]
    pub issue_number: Option<String>,
}

impl AnalyzeParams {
    fn validate(&self) -> Result<IssueLocator, AnalysisError> {
        IssueLocator::from_parameters(
            self.owner.as_deref().unwrap_or_default(),
            self.repository.as_deref().unwrap_or_default(),
            self.issue_number.as_deref().unwrap_or_default(),
        )
    }
}

/// Runs the full pipeline: validate, fetch, score, aggregate, render.
#[instrument(name = "analyze_route", skip(state, params))]
pub async fn analyze_route(
    State(state): State<Arc<AppState>>,
    params: Result<Query<AnalyzeParams>, QueryRejection>,
) -> Response {
    let Ok(Query(query)) = params else {
        return invalid_parameters();
    };

    let locator = match query.validate() {
        Ok(locator) => locator,
        Err(error) => {
            warn!(%error, "rejected analysis request");
            return invalid_parameters();
        }
    };

    let fetch = state.gateway.issue_comments(&locator);
    let comments = match timeout(state.fetch_timeout, fetch).await {
        Err(_elapsed) => {
            return upstream_failure(&AnalysisError::FetchTimeout {
                seconds: state.fetch_timeout.as_secs(),
            });
        }
        Ok(Err(error)) => return upstream_failure(&error),
        Ok(Ok(comments)) => comments,
    };

    info!(
        owner = locator.owner().as_str(),
        repository = locator.repository().as_str(),
        issue = locator.number().get(),
        comments = comments.len(),
        "scoring fetched comments"
    );

    let scored: Vec<ScoredComment> = comments
        .into_iter()
        .map(|comment| {
            let score = state.analyzer.score(&comment.body);
            ScoredComment::new(comment, score)
        })
        .collect();
    let totals = AggregateScore::from_scored(&scored);

    match render_report(&scored, &totals) {
        Ok(body) => Html(body).into_response(),
        Err(error) => {
            warn!(%error, "report rendering failed");
            (StatusCode::INTERNAL_SERVER_ERROR, error.to_string()).into_response()
        }
    }
}

fn invalid_parameters() -> Response {
    (StatusCode::BAD_REQUEST, INVALID_PARAMETERS_BODY).into_response()
}

fn upstream_failure(error: &AnalysisError) -> Response {
    warn!(%error, "issue comment fetch failed");
    (StatusCode::BAD_GATEWAY, error.to_string()).into_response()
}
