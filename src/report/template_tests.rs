//! Unit tests for HTML report rendering.

use rstest::rstest;

use super::{render_report, truncate_body};
use crate::github::IssueComment;
use crate::report::model::{AggregateScore, ScoredComment};
use crate::sentiment::SentimentScore;

fn scored_with_body(id: u64, body: &str) -> ScoredComment {
    ScoredComment::new(
        IssueComment {
            id,
            body: body.to_owned(),
        },
        SentimentScore {
            compound: 0.5,
            positive: 0.25,
            neutral: 0.5,
            negative: 0.25,
        },
    )
}

fn detail_row_count(html: &str) -> usize {
    html.matches("title=\"").count()
}

/// Strips the generated-at footer so runs can be compared byte-for-byte.
fn without_footer(html: &str) -> &str {
    html.split("<p class=\"generated-at\">")
        .next()
        .unwrap_or(html)
}

#[rstest]
fn renders_one_detail_row_per_comment_in_order() {
    let entries = vec![
        scored_with_body(1, "alpha comment"),
        scored_with_body(2, "beta comment"),
        scored_with_body(3, "gamma comment"),
    ];
    let totals = AggregateScore::from_scored(&entries);

    let html = render_report(&entries, &totals).expect("render should succeed");

    assert_eq!(detail_row_count(&html), 3, "expected three detail rows");
    let alpha = html.find("alpha comment").expect("alpha row missing");
    let beta = html.find("beta comment").expect("beta row missing");
    let gamma = html.find("gamma comment").expect("gamma row missing");
    assert!(alpha < beta && beta < gamma, "rows should keep fetch order");
    assert_eq!(
        html.matches("<td>Total</td>").count(),
        1,
        "expected exactly one totals row"
    );
}

#[rstest]
fn renders_empty_report_with_zero_totals() {
    let html =
        render_report(&[], &AggregateScore::default()).expect("empty render should succeed");

    assert_eq!(detail_row_count(&html), 0, "expected no detail rows");
    assert!(
        html.contains("<td>Total</td><td>0.0000</td><td>0.0000</td><td>0.0000</td><td>0.0000</td>"),
        "expected all-zero totals row, got: {html}"
    );
}

#[rstest]
fn escapes_html_in_comment_bodies() {
    let entries = vec![scored_with_body(1, "<script>alert('pwned')</script>")];
    let totals = AggregateScore::from_scored(&entries);

    let html = render_report(&entries, &totals).expect("render should succeed");

    assert!(
        !html.contains("<script>"),
        "script tag must not survive escaping: {html}"
    );
    assert!(
        html.contains("&lt;script&gt;"),
        "expected escaped markup, got: {html}"
    );
}

#[rstest]
fn truncates_long_bodies_to_two_hundred_characters() {
    let body = "x".repeat(250);
    let entries = vec![scored_with_body(1, &body)];
    let totals = AggregateScore::from_scored(&entries);

    let html = render_report(&entries, &totals).expect("render should succeed");

    let expected_cell = format!("\">{}...</td>", "x".repeat(197));
    assert!(
        html.contains(&expected_cell),
        "expected 197 characters plus ellipsis in the cell"
    );
    let expected_title = format!("title=\"{body}\"");
    assert!(
        html.contains(&expected_title),
        "title attribute should carry the full body"
    );
}

#[rstest]
fn shows_short_bodies_in_full_without_ellipsis() {
    let body = "y".repeat(150);
    let entries = vec![scored_with_body(1, &body)];
    let totals = AggregateScore::from_scored(&entries);

    let html = render_report(&entries, &totals).expect("render should succeed");

    assert!(
        html.contains(&format!("\">{body}</td>")),
        "short body should render unmodified"
    );
    assert!(
        !html.contains(&format!("{body}...")),
        "short body must not gain an ellipsis"
    );
}

#[rstest]
#[case(0, "")]
#[case(200, "")]
#[case(201, "...")]
fn truncation_boundary_is_two_hundred_characters(#[case] length: usize, #[case] suffix: &str) {
    let body = "z".repeat(length);
    let displayed = truncate_body(&body);

    assert!(
        displayed.ends_with(suffix) || suffix.is_empty(),
        "unexpected suffix for length {length}"
    );
    let expected_chars = if length > 200 { 200 } else { length };
    assert_eq!(
        displayed.chars().count(),
        expected_chars,
        "display length mismatch for body of length {length}"
    );
}

#[rstest]
fn truncation_respects_multibyte_characters() {
    let body = "é".repeat(250);
    let displayed = truncate_body(&body);

    assert_eq!(displayed.chars().count(), 200, "display length mismatch");
    assert!(displayed.ends_with("..."), "expected ellipsis marker");
}

#[rstest]
fn detail_rows_are_deterministic() {
    let entries = vec![
        scored_with_body(1, "stable first"),
        scored_with_body(2, "stable second"),
    ];
    let totals = AggregateScore::from_scored(&entries);

    let first = render_report(&entries, &totals).expect("first render should succeed");
    let second = render_report(&entries, &totals).expect("second render should succeed");

    assert_eq!(
        without_footer(&first),
        without_footer(&second),
        "detail rows should be byte-identical across renders"
    );
}

#[rstest]
fn scores_render_with_four_decimal_places() {
    let entries = vec![scored_with_body(1, "plain comment")];
    let totals = AggregateScore::from_scored(&entries);

    let html = render_report(&entries, &totals).expect("render should succeed");

    assert!(
        html.contains("<td>0.5000</td>"),
        "compound should render with four decimals"
    );
    assert!(
        html.contains("<td>0.2500</td>"),
        "proportions should render with four decimals"
    );
}
