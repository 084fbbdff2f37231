//! Morale library crate providing GitHub issue sentiment reporting.
//!
//! The library wraps Octocrab to retrieve the comments of a GitHub issue,
//! scores each comment with a VADER lexicon analyzer, aggregates the four
//! sub-scores, and renders an HTML report served from a single HTTP route.

pub mod config;
pub mod github;
pub mod report;
pub mod sentiment;
pub mod server;
pub mod telemetry;

pub use config::MoraleConfig;
pub use github::{
    AnalysisError, IssueComment, IssueCommentGateway, IssueLocator, OctocrabGateway,
    PersonalAccessToken,
};
pub use report::{AggregateScore, ScoredComment, render_report};
pub use sentiment::{SentimentAnalyzer, SentimentScore};
