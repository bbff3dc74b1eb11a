//! # PromQL Selector Extract
//!
//! Extracts metric names and the label names used in their selector braces
//! from PromQL query strings, for example to check that every label a
//! dashboard filters on actually exists on the metric it queries.
//!
//! This is a lenient scanner, not a parser. It never fails: any input produces
//! a list of records, one per `{` in the query.
//!
//! ## Quick Start
//!
//! ```rust
//! use promql_selector_extract::extract;
//!
//! let records = extract(r#"sum by (job) (rate(http_requests_total{job="api", code=~"5.."}[5m]))"#);
//! assert_eq!(records.len(), 1);
//! assert_eq!(records[0].metric, "http_requests_total");
//! assert_eq!(records[0].label_names, ["job", "code"]);
//! ```
//!
//! ## Examples
//!
//! ### Several selectors in one query
//!
//! ```rust
//! use promql_selector_extract::extract;
//!
//! let records = extract(r#"m1{a="1"} + m2{b="2"}"#);
//! let metrics: Vec<_> = records.iter().map(|r| r.metric.as_str()).collect();
//! assert_eq!(metrics, ["m1", "m2"]);
//! ```
//!
//! ### Selectors without a metric name
//!
//! ```rust
//! use promql_selector_extract::extract;
//!
//! let records = extract(r#"{__name__="up", job="node"}"#);
//! assert!(records[0].is_anonymous());
//! assert_eq!(records[0].label_names, ["__name__", "job"]);
//! ```
//!
//! ### Label values are ignored
//!
//! ```rust
//! use promql_selector_extract::extract;
//!
//! let records = extract(r#"m{a="x,y=z",b!="w"}"#);
//! assert_eq!(records[0].label_names, ["a", "b"]);
//! ```
//!
//! ## Modules
//!
//! - [`mod@extract`] - Selector extraction entry points
//! - [`record`] - The [`ExtractionRecord`] output type
//! - [`lexer`] - Byte-level scanners (metric names, brace balancing, labels)
//! - [`dashboard`] - Query collection from Grafana dashboard JSON
//! - [`validate`] - Checking records against a metrics backend
//!
//! ## Display
//!
//! Records implement [`std::fmt::Display`] as `metric{label, ...}`:
//!
//! ```rust
//! use promql_selector_extract::extract;
//!
//! let records = extract(r#"up{job="node",instance="a:9100"}"#);
//! assert_eq!(records[0].to_string(), "up{job, instance}");
//! ```

pub mod dashboard;
pub mod extract;
pub mod lexer;
pub mod record;
pub mod validate;

// Re-export commonly used types and functions
pub use extract::{Selectors, extract, extract_all, selectors};
pub use record::ExtractionRecord;
pub use validate::{Finding, Series, SeriesSource, ValidationError, ValidationReport};
