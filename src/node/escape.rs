//! Delimiter splitting and escape handling for the node string format.
//!
//! Structured node strings pack several fields into one string, separated by a
//! delimiter character (`.` by default). A field that needs to contain the
//! delimiter literally carries an escape character (`\`) in front of it, so
//! `meta.a\.b.c` encodes the key `a.b` and the value `c`.
//!
//! This module is the single place that knows the escaping rules. Every parser
//! that extracts multi-field payloads ([`crate::node::parse::parse_meta_type`],
//! [`crate::node::parse::parse_prefix_type`],
//! [`crate::node::parse::parse_suffix_type`]) builds on [`split_escaped`], and
//! the node string builders in [`crate::node::build`] use [`escape`] to produce
//! strings that survive a parse round trip.
//!
//! # Rules
//!
//! - A delimiter is *escaped* when the character immediately before it is the
//!   escape character. Escaped delimiters are part of the field content.
//! - [`split_escaped`] splits on the first unescaped delimiter only; when none
//!   is present the whole input is a single segment. Fewer segments than
//!   expected is never an error at this layer.
//! - [`unescape`] removes the escape character in front of literal delimiter
//!   occurrences. Escape characters in any other position are left alone.

use std::borrow::Cow;

/// The field delimiter used by the node string format.
pub const DELIMITER: char = '.';

/// The escape character that marks a literal delimiter inside a field.
pub const ESCAPE: char = '\\';

/// Splits `input` on the first occurrence of `delimiter` that is not preceded
/// by `escape`.
///
/// Returns the segment before the delimiter and, if an unescaped delimiter was
/// found, the remainder after it (which may itself contain further delimiters,
/// escaped or not). Both segments are still in escaped form; run them through
/// [`unescape`] before handing them to a caller.
///
/// # Examples
///
/// ```rust
/// use permnode::node::escape::{split_escaped, DELIMITER, ESCAPE};
///
/// assert_eq!(split_escaped("100.&a&", DELIMITER, ESCAPE), ("100", Some("&a&")));
/// assert_eq!(split_escaped("a\\.b.c", DELIMITER, ESCAPE), ("a\\.b", Some("c")));
/// assert_eq!(split_escaped("no-delimiter", DELIMITER, ESCAPE), ("no-delimiter", None));
/// ```
pub fn split_escaped(input: &str, delimiter: char, escape: char) -> (&str, Option<&str>) {
    let mut prev_was_escape = false;
    for (idx, c) in input.char_indices() {
        if c == delimiter && !prev_was_escape {
            return (&input[..idx], Some(&input[idx + c.len_utf8()..]));
        }
        prev_was_escape = c == escape;
    }
    (input, None)
}

/// Removes the escape character in front of literal delimiter occurrences.
///
/// Borrows the input unchanged when it contains no escape character at all,
/// which is the common case for well-behaved field content.
pub fn unescape(input: &str, delimiter: char, escape: char) -> Cow<'_, str> {
    if !input.contains(escape) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();
    while let Some(c) = chars.next() {
        if c == escape && chars.peek() == Some(&delimiter) {
            continue;
        }
        out.push(c);
    }
    Cow::Owned(out)
}

/// Inserts the escape character in front of every occurrence of `delimiter`,
/// the inverse of [`unescape`].
pub fn escape(input: &str, delimiter: char, escape: char) -> Cow<'_, str> {
    if !input.contains(delimiter) {
        return Cow::Borrowed(input);
    }

    let mut out = String::with_capacity(input.len() + 2);
    for c in input.chars() {
        if c == delimiter {
            out.push(escape);
        }
        out.push(c);
    }
    Cow::Owned(out)
}
