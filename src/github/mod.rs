//! GitHub issue comment intake and token validation.
//!
//! This module wraps Octocrab to validate personal access tokens and
//! retrieve the full comment thread of an issue. Errors are mapped into
//! user-friendly variants so that callers can surface precise failures
//! without exposing Octocrab internals.

pub mod error;
pub mod gateway;
pub mod locator;
pub mod models;

pub use error::AnalysisError;
pub use gateway::{IssueCommentGateway, OctocrabGateway};
pub use locator::{IssueLocator, IssueNumber, PersonalAccessToken, RepositoryName, RepositoryOwner};
pub use models::IssueComment;

#[cfg(test)]
pub use gateway::MockIssueCommentGateway;
