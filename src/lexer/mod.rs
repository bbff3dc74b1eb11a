//! Byte-level scanners used by the selector extractor.
//!
//! - [`metric`] - metric name recovery, scanning backward from a `{`
//! - [`selector`] - brace balancing for selector bodies
//! - [`label`] - quote stripping and label name recovery

pub mod label;
pub mod metric;
pub mod selector;

pub use label::{is_label_char, label_names, strip_quoted};
pub use metric::{is_metric_char, metric_name_before};
pub use selector::{closing_brace, selector_body};
