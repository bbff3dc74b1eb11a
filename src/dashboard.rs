//! Query collection from Grafana dashboard definitions.
//!
//! A dashboard is a JSON document with a top-level `panels` array. Each panel
//! may have a `targets` array, and each target an `expr` string holding the
//! PromQL query. Collapsed rows (`"type": "row"`) keep their children in a
//! nested `panels` array, which is walked right after the row itself.
//!
//! Fetching the document is the caller's job; this module only walks an
//! already decoded [`serde_json::Value`].
//!
//! # Examples
//!
//! ```rust
//! use promql_selector_extract::dashboard::queries_from_str;
//!
//! let json = r#"{
//!   "panels": [
//!     { "targets": [ { "expr": "up{job=\"node\"}" }, { "expr": "" } ] },
//!     { "type": "text" }
//!   ]
//! }"#;
//! let queries = queries_from_str(json).unwrap();
//! assert_eq!(queries, [r#"up{job="node"}"#]);
//! ```

use serde_json::Value;

/// Errors from [`queries_from_str`].
#[derive(Debug, thiserror::Error)]
pub enum DashboardError {
    #[error("invalid dashboard JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Collect every non-empty `expr` string under `panels[].targets[]`.
///
/// Fields that are missing or have an unexpected type are skipped.
pub fn queries(dashboard: &Value) -> Vec<String> {
    let mut out = Vec::new();
    if let Some(panels) = dashboard.get("panels").and_then(Value::as_array) {
        collect_panels(panels, &mut out);
    }
    tracing::debug!(total = out.len(), "collected dashboard expressions");
    out
}

/// Decode `json` and collect its queries.
pub fn queries_from_str(json: &str) -> Result<Vec<String>, DashboardError> {
    let dashboard: Value = serde_json::from_str(json)?;
    Ok(queries(&dashboard))
}

fn collect_panels(panels: &[Value], out: &mut Vec<String>) {
    for panel in panels {
        let targets = panel.get("targets").and_then(Value::as_array);
        for target in targets.into_iter().flatten() {
            match target.get("expr").and_then(Value::as_str) {
                Some(expr) if !expr.is_empty() => {
                    tracing::debug!(expr, "found expression");
                    out.push(expr.to_string());
                }
                _ => {}
            }
        }

        if is_row(panel) {
            if let Some(children) = panel.get("panels").and_then(Value::as_array) {
                collect_panels(children, out);
            }
        }
    }
}

fn is_row(panel: &Value) -> bool {
    panel.get("type").and_then(Value::as_str) == Some("row")
}
