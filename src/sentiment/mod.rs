//! Sentiment scoring of comment text.
//!
//! Wraps the VADER lexicon analyzer behind a small facade. Scoring is a
//! pure function of the input text: the same text always yields the same
//! four sub-scores, and any string (including the empty string) scores
//! without failure.

use vader_sentiment::SentimentIntensityAnalyzer;

/// The four sub-scores produced by the lexicon analyzer for one text.
///
/// `compound` is the normalized aggregate; `positive`, `neutral`, and
/// `negative` are the proportions of the text attributed to each polarity.
/// Ranges are the analyzer's contract and are not validated here.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct SentimentScore {
    /// Normalized aggregate score in the analyzer's `[-1, 1]` convention.
    pub compound: f64,
    /// Proportion of the text rated positive.
    pub positive: f64,
    /// Proportion of the text rated neutral.
    pub neutral: f64,
    /// Proportion of the text rated negative.
    pub negative: f64,
}

/// Lexicon-backed sentiment analyzer, constructed once and shared
/// read-only across requests.
pub struct SentimentAnalyzer {
    inner: SentimentIntensityAnalyzer<'static>,
}

impl SentimentAnalyzer {
    /// Creates an analyzer backed by the built-in VADER lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: SentimentIntensityAnalyzer::new(),
        }
    }

    /// Scores a single text.
    ///
    /// Sub-scores missing from the analyzer's polarity map default to zero,
    /// which also covers the empty string.
    #[must_use]
    pub fn score(&self, text: &str) -> SentimentScore {
        let polarity = self.inner.polarity_scores(text);
        let field = |key: &str| polarity.get(key).copied().unwrap_or(0.0);

        SentimentScore {
            compound: field("compound"),
            positive: field("pos"),
            neutral: field("neu"),
            negative: field("neg"),
        }
    }
}

impl Default for SentimentAnalyzer {
    fn default() -> Self {
        Self::new()
    }
}
