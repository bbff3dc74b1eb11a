//! Brace balancing for label selector bodies.
//!
//! A selector body is the text strictly between a `{` and its balancing `}`.
//! Balancing is purely structural: quotes are not taken into account, so a
//! brace inside a label value (`{a="}"}`) closes the group early.

/// Find the byte offset of the `}` that balances the `{` at `open`.
///
/// Returns `None` if `open` is not a `{` or if the input ends before the
/// balance counter returns to zero.
///
/// # Examples
///
/// ```
/// use promql_selector_extract::lexer::selector::closing_brace;
///
/// assert_eq!(closing_brace("m{a=\"1\"}", 1), Some(7));
/// assert_eq!(closing_brace("{{}}", 0), Some(3));
/// assert_eq!(closing_brace("{{}", 0), None);
/// ```
pub fn closing_brace(query: &str, open: usize) -> Option<usize> {
    let bytes = query.as_bytes();
    if bytes.get(open) != Some(&b'{') {
        return None;
    }
    let mut balance = 0usize;
    for (offset, &b) in bytes[open..].iter().enumerate() {
        match b {
            b'{' => balance += 1,
            b'}' => {
                balance -= 1;
                if balance == 0 {
                    return Some(open + offset);
                }
            }
            _ => {}
        }
    }
    None
}

/// Return the selector body of the group opened at `open`.
///
/// An unterminated group has an empty body.
///
/// # Examples
///
/// ```
/// use promql_selector_extract::lexer::selector::selector_body;
///
/// assert_eq!(selector_body(r#"up{job="api"}"#, 2), r#"job="api""#);
/// assert_eq!(selector_body(r#"up{job="api""#, 2), "");
/// ```
pub fn selector_body(query: &str, open: usize) -> &str {
    match closing_brace(query, open) {
        Some(close) => &query[open + 1..close],
        None => "",
    }
}
