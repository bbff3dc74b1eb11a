//! Metric name recovery.
//!
//! Metric names may contain ASCII letters, digits, underscores and colons
//! (`[a-zA-Z_:][a-zA-Z0-9_:]*`, colons being used by recording rules).
//!
//! The extractor never parses a metric name forward. It starts at the `{` of a
//! selector and walks backward over metric characters, so the recovered name is
//! whatever run of metric characters sits directly before the brace. Nothing
//! checks that the run starts with a valid leading character: `5m{` yields `5m`.

/// Check if a byte can appear in a metric name (alphanumeric, underscore, or colon)
#[inline]
pub fn is_metric_char(b: u8) -> bool {
    b == b'_' || b == b':' || b.is_ascii_alphanumeric()
}

/// Return the run of metric characters that ends right before byte `brace`.
///
/// `brace` is the byte offset of an opening `{` in `query`. The returned slice
/// may be empty, for selectors such as `{__name__="up"}`.
///
/// # Examples
///
/// ```
/// use promql_selector_extract::lexer::metric::metric_name_before;
///
/// let query = r#"rate(http_requests_total{job="api"}[5m])"#;
/// let brace = query.find('{').unwrap();
/// assert_eq!(metric_name_before(query, brace), "http_requests_total");
///
/// assert_eq!(metric_name_before("{a=\"1\"}", 0), "");
/// assert_eq!(metric_name_before("job:rate:5m{}", 11), "job:rate:5m");
/// ```
pub fn metric_name_before(query: &str, brace: usize) -> &str {
    let bytes = query.as_bytes();
    let end = brace.min(bytes.len());
    let start = bytes[..end]
        .iter()
        .rposition(|&b| !is_metric_char(b))
        .map_or(0, |pos| pos + 1);
    // Every byte in start..end is ASCII, so both ends sit on char boundaries.
    &query[start..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metric_chars() {
        for b in b"azAZ09_:" {
            assert!(is_metric_char(*b), "{:?} should be a metric char", *b as char);
        }
        for b in b"{}()=!~\", -+*/ \t\n." {
            assert!(!is_metric_char(*b), "{:?} should not be a metric char", *b as char);
        }
    }

    #[test]
    fn test_non_ascii_is_not_metric_char() {
        for b in "é☺".bytes() {
            assert!(!is_metric_char(b));
        }
    }

    #[test]
    fn test_name_at_start_of_query() {
        assert_eq!(metric_name_before("up{}", 2), "up");
    }

    #[test]
    fn test_name_after_operator() {
        let query = "a{} + b_total{}";
        let brace = query.rfind('{').unwrap();
        assert_eq!(metric_name_before(query, brace), "b_total");
    }

    #[test]
    fn test_name_after_open_paren() {
        let query = "sum(node_cpu_seconds_total{mode=\"idle\"})";
        assert_eq!(metric_name_before(query, 26), "node_cpu_seconds_total");
    }

    #[test]
    fn test_empty_name_after_space() {
        assert_eq!(metric_name_before("foo {}", 4), "");
    }

    #[test]
    fn test_empty_name_at_start() {
        assert_eq!(metric_name_before("{}", 0), "");
    }

    #[test]
    fn test_name_after_multibyte_char() {
        let query = "é_metric{}";
        let brace = query.find('{').unwrap();
        assert_eq!(metric_name_before(query, brace), "_metric");
    }

    #[test]
    fn test_brace_past_end_is_clamped() {
        assert_eq!(metric_name_before("abc", 10), "abc");
    }
}
