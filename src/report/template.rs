//! Template-driven HTML rendering of the analysis report.
//!
//! The report is rendered with the `minijinja` template engine. The
//! template is named with an `.html` suffix so the engine's default
//! auto-escaping applies at every insertion point, covering both the
//! visible cell text and the `title` attribute that carries the full
//! comment body.

use chrono::Utc;
use minijinja::{Environment, context};
use serde::Serialize;

use crate::github::AnalysisError;

use super::model::{AggregateScore, ScoredComment};

/// Longest comment body shown in a detail cell, ellipsis included.
const DISPLAY_LIMIT: usize = 200;

const ELLIPSIS: &str = "...";

const REPORT_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
<head>
<title>Sentiment Analysis Results</title>
<style>
body { font-family: Arial, sans-serif; margin: 40px; }
table { width: 100%; border-collapse: collapse; }
th, td { border: 1px solid #ddd; padding: 8px; text-align: left; max-width: 200px; overflow: hidden; white-space: nowrap; text-overflow: ellipsis; }
th { background-color: #f2f2f2; }
tr:nth-child(even) { background-color: #f9f9f9; }
tr:hover { background-color: #f1f1f1; }
.table-container { overflow-x: auto; }
</style>
</head>
<body>
<h1>Sentiment Analysis Results</h1>
<div class="table-container"><table>
<tr><th>Comment</th><th>Compound</th><th>Positive</th><th>Neutral</th><th>Negative</th></tr>
{% for row in rows %}<tr><td title="{{ row.full_body }}">{{ row.display_body }}</td><td>{{ row.compound }}</td><td>{{ row.positive }}</td><td>{{ row.neutral }}</td><td>{{ row.negative }}</td></tr>
{% endfor %}</table></div>
<table>
<tr><th>Total</th><th>Compound</th><th>Positive</th><th>Neutral</th><th>Negative</th></tr>
<tr><td>Total</td><td>{{ totals.compound }}</td><td>{{ totals.positive }}</td><td>{{ totals.neutral }}</td><td>{{ totals.negative }}</td></tr>
</table>
<p class="generated-at">Generated at {{ generated_at }}</p>
</body>
</html>
"#;

/// Template context for a single detail row.
#[derive(Debug, Clone, Serialize)]
struct ReportRow {
    /// Full comment body, carried in the `title` attribute.
    full_body: String,
    /// Truncated copy shown in the cell.
    display_body: String,
    compound: String,
    positive: String,
    neutral: String,
    negative: String,
}

impl From<&ScoredComment> for ReportRow {
    fn from(entry: &ScoredComment) -> Self {
        Self {
            full_body: entry.comment.body.clone(),
            display_body: truncate_body(&entry.comment.body),
            compound: format_score(entry.score.compound),
            positive: format_score(entry.score.positive),
            neutral: format_score(entry.score.neutral),
            negative: format_score(entry.score.negative),
        }
    }
}

/// Template context for the totals row.
#[derive(Debug, Clone, Serialize)]
struct ReportTotals {
    compound: String,
    positive: String,
    neutral: String,
    negative: String,
}

impl From<&AggregateScore> for ReportTotals {
    fn from(totals: &AggregateScore) -> Self {
        Self {
            compound: format_score(totals.compound),
            positive: format_score(totals.positive),
            neutral: format_score(totals.neutral),
            negative: format_score(totals.negative),
        }
    }
}

/// Truncates a body for display.
///
/// Bodies longer than [`DISPLAY_LIMIT`] characters are cut to the first
/// 197 characters plus a three-character ellipsis; shorter bodies are
/// shown in full. Counting is `char`-based so multi-byte text never
/// splits inside a code point.
fn truncate_body(body: &str) -> String {
    if body.chars().count() <= DISPLAY_LIMIT {
        return body.to_owned();
    }

    let mut truncated: String = body.chars().take(DISPLAY_LIMIT - ELLIPSIS.len()).collect();
    truncated.push_str(ELLIPSIS);
    truncated
}

/// Fixed 4-decimal rendering keeps rows byte-stable across runs.
fn format_score(value: f64) -> String {
    format!("{value:.4}")
}

/// Renders the HTML report for one analysis request.
///
/// Produces one detail row per scored comment in the order given, followed
/// by a single totals table.
///
/// # Errors
///
/// Returns [`AnalysisError::Render`] when the template fails to compile or
/// render.
pub fn render_report(
    scored: &[ScoredComment],
    totals: &AggregateScore,
) -> Result<String, AnalysisError> {
    let mut env = Environment::new();

    env.add_template("report.html", REPORT_TEMPLATE)
        .map_err(|error| AnalysisError::Render {
            message: format!("invalid template syntax: {error}"),
        })?;

    let rows: Vec<ReportRow> = scored.iter().map(ReportRow::from).collect();
    let generated_at = Utc::now().to_rfc3339();

    let ctx = context! {
        rows => rows,
        totals => ReportTotals::from(totals),
        generated_at => generated_at,
    };

    let tmpl = env
        .get_template("report.html")
        .map_err(|error| AnalysisError::Render {
            message: format!("failed to retrieve template: {error}"),
        })?;

    tmpl.render(ctx).map_err(|error| AnalysisError::Render {
        message: format!("template rendering failed: {error}"),
    })
}

#[cfg(test)]
#[path = "template_tests.rs"]
mod tests;
