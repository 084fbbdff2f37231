//! Per-request aggregation model for scored comments.

use crate::github::IssueComment;
use crate::sentiment::SentimentScore;

/// A fetched comment paired with its sentiment score.
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredComment {
    /// The comment as fetched, order preserved.
    pub comment: IssueComment,
    /// Score produced for exactly this comment.
    pub score: SentimentScore,
}

impl ScoredComment {
    /// Pairs a comment with its score.
    #[must_use]
    pub const fn new(comment: IssueComment, score: SentimentScore) -> Self {
        Self { comment, score }
    }
}

/// Summed sentiment across all comments of one request.
///
/// Each field is the arithmetic sum (not the mean) of the corresponding
/// [`SentimentScore`] field; all fields are zero when no comments were
/// fetched.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct AggregateScore {
    /// Sum of compound scores.
    pub compound: f64,
    /// Sum of positive proportions.
    pub positive: f64,
    /// Sum of neutral proportions.
    pub neutral: f64,
    /// Sum of negative proportions.
    pub negative: f64,
}

impl AggregateScore {
    /// Adds one comment's score into the running totals.
    pub fn accumulate(&mut self, score: &SentimentScore) {
        self.compound += score.compound;
        self.positive += score.positive;
        self.neutral += score.neutral;
        self.negative += score.negative;
    }

    /// Sums every field across the given scored comments.
    #[must_use]
    pub fn from_scored(scored: &[ScoredComment]) -> Self {
        let mut totals = Self::default();
        for entry in scored {
            totals.accumulate(&entry.score);
        }
        totals
    }
}
