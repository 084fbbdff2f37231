//! HTML report rendering for scored comment threads.
//!
//! This module owns the per-request aggregation model (scored comments and
//! their summed totals) and the template-driven HTML rendering of the
//! analysis report.
//!
//! # Ordering
//!
//! Detail rows are rendered in fetch order: the sequence handed to the
//! renderer is the sequence the API returned, untouched.

mod model;
mod template;

pub use model::{AggregateScore, ScoredComment};
pub use template::render_report;
