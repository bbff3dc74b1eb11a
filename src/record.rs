//! Extraction record type.

use std::fmt;

/// One selector found in a query: the metric name before a `{` and the label
/// names inside the group it opens.
///
/// `metric` is empty for selectors without a name (`{__name__="up"}`).
/// `label_names` keeps the order of the selector body, including duplicates
/// and empty names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct ExtractionRecord {
    pub metric: String,
    pub label_names: Vec<String>,
}

impl ExtractionRecord {
    pub fn new(metric: impl Into<String>, label_names: Vec<String>) -> Self {
        Self {
            metric: metric.into(),
            label_names,
        }
    }

    /// Label names with empty entries skipped.
    ///
    /// Empty names come from segments like a trailing comma or an
    /// unterminated group; most consumers want to ignore them.
    pub fn non_empty_labels(&self) -> impl Iterator<Item = &str> {
        self.label_names
            .iter()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// Returns true if the selector had no metric name before its brace.
    pub fn is_anonymous(&self) -> bool {
        self.metric.is_empty()
    }
}

impl fmt::Display for ExtractionRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{{{}}}", self.metric, self.label_names.join(", "))
    }
}
