//! Data models representing issue comments.

use serde::Deserialize;

/// A single comment fetched from an issue's discussion thread.
///
/// Comments keep the order in which the API returned them; a comment whose
/// body is absent upstream is carried with an empty body so that scoring
/// stays total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IssueComment {
    /// Comment identifier.
    pub id: u64,
    /// Comment body text.
    pub body: String,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ApiComment {
    pub(super) id: u64,
    pub(super) body: Option<String>,
}

impl From<ApiComment> for IssueComment {
    fn from(value: ApiComment) -> Self {
        Self {
            id: value.id,
            body: value.body.unwrap_or_default(),
        }
    }
}
