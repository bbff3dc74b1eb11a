//! Label name recovery from a selector body.
//!
//! Label names may contain ASCII letters, digits and underscores
//! (`[a-zA-Z_][a-zA-Z0-9_]*`). A selector body such as
//! `job="api", instance=~"10\.0\..*"` is reduced to label names in three steps:
//!
//! 1. every double-quoted literal is removed, quotes included, so commas and
//!    operators inside values cannot be mistaken for structure;
//! 2. the remainder is split on `,`;
//! 3. every byte that is not a label character is dropped from each segment.
//!
//! Segments that reduce to nothing still produce an (empty) label name, so the
//! number of names always equals the number of segments.
//!
//! # Examples
//!
//! ```rust
//! use promql_selector_extract::lexer::label::label_names;
//!
//! assert_eq!(label_names(r#"job="api", mode!~"idle|iowait""#), ["job", "mode"]);
//! assert_eq!(label_names(r#"a="x,y",b="z""#), ["a", "b"]);
//! assert_eq!(label_names(""), [""]);
//! ```

use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag, take_till, take_till1},
    character::complete::char,
    combinator::{recognize, value},
    multi::fold_many0,
    sequence::delimited,
};

/// Check if a byte can appear in a label name (alphanumeric or underscore)
#[inline]
pub fn is_label_char(b: u8) -> bool {
    b == b'_' || b.is_ascii_alphanumeric()
}

/// Match the shortest double-quoted literal at the start of the input.
/// No escape processing: `\"` ends the literal.
fn quoted_literal(input: &str) -> IResult<&str, &str> {
    recognize(delimited(char('"'), take_till(|c| c == '"'), char('"'))).parse(input)
}

/// Match a run of text without quotes.
fn unquoted_text(input: &str) -> IResult<&str, &str> {
    take_till1(|c| c == '"')(input)
}

/// Match a quote that has no partner; it is kept as text.
fn lone_quote(input: &str) -> IResult<&str, &str> {
    tag("\"")(input)
}

/// Remove every double-quoted literal (quotes included) from `input`.
///
/// Quotes pair up left to right. A final unpaired quote and everything after
/// it are left in place.
///
/// # Examples
///
/// ```
/// use promql_selector_extract::lexer::label::strip_quoted;
///
/// assert_eq!(strip_quoted(r#"a="1",b=~"x|y""#), "a=,b=~");
/// assert_eq!(strip_quoted(r#"a="1",b="#), "a=,b=");
/// assert_eq!(strip_quoted(r#"a="1",b=""#), "a=,b=\"");
/// ```
pub fn strip_quoted(input: &str) -> String {
    let result = fold_many0(
        alt((value("", quoted_literal), unquoted_text, lone_quote)),
        || String::with_capacity(input.len()),
        |mut acc, text| {
            acc.push_str(text);
            acc
        },
    )
    .parse(input);

    match result {
        Ok(("", stripped)) => stripped,
        // Every alternative consumes input, so the fold always reaches the end.
        // Fall back to the raw text rather than dropping anything.
        _ => input.to_string(),
    }
}

/// Keep only the label characters of a single selector segment.
///
/// `job="api"` has already lost its value by the time it gets here, so a
/// segment usually looks like ` job=` or `mode!~`.
pub fn label_name(segment: &str) -> String {
    segment
        .bytes()
        .filter(|&b| is_label_char(b))
        .map(char::from)
        .collect()
}

/// Split a selector body into label names, in order of appearance.
///
/// Duplicates and empty names are kept.
pub fn label_names(body: &str) -> Vec<String> {
    strip_quoted(body).split(',').map(label_name).collect()
}
