//! Selector extraction.
//!
//! The extractor scans a query left to right and stops at every `{`. For each
//! brace it recovers the metric name directly before it, balances the group to
//! find the selector body, and reduces the body to label names.
//!
//! This is not a PromQL parser. Operators, functions and aggregations are
//! simply skipped over, which is what makes the extractor total: any string
//! produces a (possibly meaningless) list of records and nothing ever fails.
//!
//! # Nested braces
//!
//! The scan does not jump over a group once it has been read. A `{` inside an
//! earlier group's body is therefore picked up as a group of its own, with a
//! metric name made of whatever metric characters precede it:
//!
//! ```rust
//! use promql_selector_extract::extract;
//!
//! let records = extract("m{a={b}}");
//! assert_eq!(records.len(), 2);
//! assert_eq!(records[0].metric, "m");
//! assert_eq!(records[0].label_names, ["ab"]);
//! assert_eq!(records[1].metric, "");
//! assert_eq!(records[1].label_names, ["b"]);
//! ```
//!
//! Valid PromQL never nests braces outside of string literals, so in practice
//! this only shows up for braces inside regex values such as `=~"a{2}"`.

use crate::lexer::label::label_names;
use crate::lexer::metric::metric_name_before;
use crate::lexer::selector::selector_body;
use crate::record::ExtractionRecord;

/// Lazy iterator over the selectors of a query.
///
/// Created by [`selectors()`].
#[derive(Debug, Clone)]
pub struct Selectors<'a> {
    query: &'a str,
    pos: usize,
}

impl<'a> Selectors<'a> {
    pub fn new(query: &'a str) -> Self {
        Self { query, pos: 0 }
    }
}

impl Iterator for Selectors<'_> {
    type Item = ExtractionRecord;

    fn next(&mut self) -> Option<Self::Item> {
        let rest = self.query.as_bytes().get(self.pos..)?;
        let brace = self.pos + rest.iter().position(|&b| b == b'{')?;
        // Resume right after this brace, not after its group.
        self.pos = brace + 1;

        let metric = metric_name_before(self.query, brace);
        let body = selector_body(self.query, brace);
        Some(ExtractionRecord::new(metric, label_names(body)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.query.len().saturating_sub(self.pos);
        (0, Some(remaining))
    }
}

impl std::iter::FusedIterator for Selectors<'_> {}

/// Iterate over the selectors of `query` without collecting them.
///
/// # Examples
///
/// ```
/// use promql_selector_extract::selectors;
///
/// let metrics: Vec<String> = selectors(r#"a{x="1"} / b{y="2"}"#)
///     .map(|record| record.metric)
///     .collect();
/// assert_eq!(metrics, ["a", "b"]);
/// ```
pub fn selectors(query: &str) -> Selectors<'_> {
    Selectors::new(query)
}

/// Extract one record per `{` in `query`, in order of appearance.
///
/// # Examples
///
/// ```
/// use promql_selector_extract::extract;
///
/// let records = extract(r#"sum(rate(http_requests_total{job="api",code=~"5.."}[5m]))"#);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].metric, "http_requests_total");
/// assert_eq!(records[0].label_names, ["job", "code"]);
///
/// assert!(extract("up").is_empty());
/// ```
pub fn extract(query: &str) -> Vec<ExtractionRecord> {
    selectors(query).collect()
}

/// Extract the records of every query in `queries`, concatenated in order.
pub fn extract_all<I, S>(queries: I) -> Vec<ExtractionRecord>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    queries
        .into_iter()
        .flat_map(|query| extract(query.as_ref()))
        .collect()
}
