//! Validation of extracted selectors against a metrics backend.
//!
//! For every label name of every record, the metric is looked up with an
//! instant query. A metric that returns no series is reported as missing. A
//! label that appears on none of the returned series is reported as missing
//! for that metric. Everything else counts as a passed check.
//!
//! The backend is abstracted behind [`SeriesSource`]; this module performs no
//! I/O itself. Closures can be used directly as a source:
//!
//! ```rust
//! use promql_selector_extract::validate::{Series, validate};
//! use promql_selector_extract::extract;
//!
//! let records = extract(r#"up{job="node",zone="a"}"#);
//! let mut backend = |_metric: &str| -> Result<Vec<Series>, std::convert::Infallible> {
//!     Ok(vec![Series::from([("job".to_string(), "node".to_string())])])
//! };
//! let report = validate(&records, &mut backend).unwrap();
//! assert_eq!(report.passed, 1);
//! assert_eq!(report.findings.len(), 1);
//! assert_eq!(report.findings[0].to_string(), "zone label does not exist for the metric up");
//! ```

use std::collections::BTreeMap;
use std::fmt;

use crate::record::ExtractionRecord;

/// Label set of one returned series.
pub type Series = BTreeMap<String, String>;

/// Backend that answers instant queries for a bare metric name.
pub trait SeriesSource {
    type Error;

    /// Return the series currently present for `metric`.
    fn instant_query(&mut self, metric: &str) -> Result<Vec<Series>, Self::Error>;
}

impl<F, E> SeriesSource for F
where
    F: FnMut(&str) -> Result<Vec<Series>, E>,
{
    type Error = E;

    fn instant_query(&mut self, metric: &str) -> Result<Vec<Series>, E> {
        self(metric)
    }
}

/// A mismatch between a selector and the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Finding {
    /// The metric returned no series at all
    MetricMissing { metric: String },
    /// The metric exists but no series carries the label
    LabelMissing { metric: String, label: String },
}

impl fmt::Display for Finding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Finding::MetricMissing { metric } => write!(f, "{metric} metric does not exist"),
            Finding::LabelMissing { metric, label } => {
                write!(f, "{label} label does not exist for the metric {metric}")
            }
        }
    }
}

/// Outcome of [`validate`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Number of (metric, label) checks where the label was found
    pub passed: usize,
    pub findings: Vec<Finding>,
}

impl ValidationReport {
    pub fn is_clean(&self) -> bool {
        self.findings.is_empty()
    }
}

/// Errors from [`validate`].
#[derive(Debug, thiserror::Error)]
pub enum ValidationError<E>
where
    E: std::error::Error + 'static,
{
    #[error("querying metric {metric:?} failed")]
    Query {
        metric: String,
        #[source]
        source: E,
    },
}

/// Check every (metric, label) pair of `records` against `source`.
///
/// The metric is queried once per label name, empty names included. The first
/// backend error aborts validation.
pub fn validate<S>(
    records: &[ExtractionRecord],
    source: &mut S,
) -> Result<ValidationReport, ValidationError<S::Error>>
where
    S: SeriesSource,
    S::Error: std::error::Error + 'static,
{
    let mut report = ValidationReport::default();

    for record in records {
        let metric = record.metric.as_str();
        for label in &record.label_names {
            let series = source
                .instant_query(metric)
                .map_err(|err| ValidationError::Query {
                    metric: metric.to_string(),
                    source: err,
                })?;

            let finding = if series.is_empty() {
                Finding::MetricMissing {
                    metric: metric.to_string(),
                }
            } else if series.iter().any(|s| s.contains_key(label)) {
                report.passed += 1;
                continue;
            } else {
                Finding::LabelMissing {
                    metric: metric.to_string(),
                    label: label.clone(),
                }
            };
            tracing::warn!(%finding, "selector check failed");
            report.findings.push(finding);
        }
    }

    tracing::info!(
        passed = report.passed,
        failed = report.findings.len(),
        "validation finished"
    );
    Ok(report)
}
