//! Recognition and parsing of structured payloads in node strings.
//!
//! A node is an opaque permission string; a handful of reserved markers turn
//! one into a structured payload. This module holds those markers, one parser
//! per kind, and the aggregate [`parse_types`] entry point that tries all of
//! them.
//!
//! # Wire format
//!
//! The markers below are a persisted wire format. Their exact spelling,
//! delimiter and casing rules must not change, or previously stored node
//! strings would silently stop being recognized.
//!
//! | Kind | Marker | Payload |
//! |------|--------|---------|
//! | Inheritance | `group.` | group name (lower-cased) |
//! | Meta | `meta.` | `<key>.<value>`, escaped-dot split |
//! | Prefix | `prefix.` | `<priority>.<value>` |
//! | Suffix | `suffix.` | `<priority>.<value>` |
//! | Weight | `weight.` | integer |
//! | DisplayName | `displayname.` | name (original casing) |
//! | Regex | `r=` or `R=` | pattern after the first two characters |
//!
//! Dotted markers match case-insensitively. The regex marker is different: it
//! accepts exactly the two spellings `r=` and `R=`, a legacy asymmetry that is
//! kept bit-for-bit.
//!
//! # Contract
//!
//! Every parser returns [`Option`]: malformed or irrelevant input is a plain
//! [`None`], indistinguishable from "this kind is not present". No parser
//! errors, logs, or inspects anything but its input string, and no kind's
//! outcome influences any other's — a string may match several kinds at once.
//!
//! # Examples
//!
//! ```rust
//! use permnode::node::parse::{parse_types, parse_weight_type};
//!
//! let map = parse_types("group.admin");
//! assert_eq!(map.inheritance().unwrap().group_name(), "admin");
//!
//! // Direct single-kind entry point, skipping the other six attempts.
//! assert_eq!(parse_weight_type("WEIGHT.7").unwrap().weight(), 7);
//! assert!(parse_weight_type("weight.abc").is_none());
//! ```

use strum::IntoEnumIterator;

use crate::node::escape::{split_escaped, unescape, DELIMITER, ESCAPE};
use crate::node::key::NodeTypeKey;
use crate::node::map::NodeTypeMap;
use crate::node::types::{
    DisplayNameType, InheritanceType, MetaType, NodeType, PrefixType, RegexType, SuffixType,
    WeightType,
};

/// Marker prefix of inheritance nodes.
pub const GROUP_NODE_MARKER: &str = "group.";
/// Marker prefix of meta nodes.
pub const META_NODE_MARKER: &str = "meta.";
/// Marker prefix of prefix nodes.
pub const PREFIX_NODE_MARKER: &str = "prefix.";
/// Marker prefix of suffix nodes.
pub const SUFFIX_NODE_MARKER: &str = "suffix.";
/// Marker prefix of weight nodes.
pub const WEIGHT_NODE_MARKER: &str = "weight.";
/// Marker prefix of display name nodes.
pub const DISPLAY_NAME_NODE_MARKER: &str = "displayname.";
/// Lower-case marker prefix of regex nodes.
pub const REGEX_MARKER_1: &str = "r=";
/// Upper-case marker prefix of regex nodes.
pub const REGEX_MARKER_2: &str = "R=";

/// Strips `marker` from the front of `s`, matching ASCII case-insensitively.
///
/// Markers are pure ASCII, so a case-insensitive byte match on the head also
/// proves the cut lands on a char boundary.
fn strip_marker<'a>(s: &'a str, marker: &str) -> Option<&'a str> {
    let head = s.as_bytes().get(..marker.len())?;
    if head.eq_ignore_ascii_case(marker.as_bytes()) {
        Some(&s[marker.len()..])
    } else {
        None
    }
}

/// Splits a marker payload into its two escaped-dot-separated segments.
///
/// Returns [`None`] when fewer than two segments are present; that is a
/// no-match for every kind that calls this, never an error.
fn two_segments(payload: &str) -> Option<(&str, &str)> {
    let (first, rest) = split_escaped(payload, DELIMITER, ESCAPE);
    rest.map(|second| (first, second))
}

/// Parses an inheritance payload from a `group.<name>` node.
///
/// The whole input is lower-cased before matching; the returned group name is
/// therefore always lower-case. An empty group name still matches.
#[must_use]
pub fn parse_inheritance_type(s: &str) -> Option<InheritanceType> {
    let lower = s.to_lowercase();
    let group_name = lower.strip_prefix(GROUP_NODE_MARKER)?;
    Some(InheritanceType::new(group_name))
}

/// Parses a meta payload from a `meta.<key>.<value>` node.
///
/// Both segments are required; each has its escape markers removed. An empty
/// key or value is allowed when it is literally empty after unescaping.
#[must_use]
pub fn parse_meta_type(s: &str) -> Option<MetaType> {
    let payload = strip_marker(s, META_NODE_MARKER)?;
    let (key, value) = two_segments(payload)?;
    Some(MetaType::new(
        unescape(key, DELIMITER, ESCAPE),
        unescape(value, DELIMITER, ESCAPE),
    ))
}

/// Parses a prefix payload from a `prefix.<priority>.<value>` node.
///
/// The priority segment must parse as a signed 32-bit integer, otherwise the
/// kind does not match at all; there is no default priority.
#[must_use]
pub fn parse_prefix_type(s: &str) -> Option<PrefixType> {
    let payload = strip_marker(s, PREFIX_NODE_MARKER)?;
    let (priority, value) = two_segments(payload)?;
    let priority = priority.parse::<i32>().ok()?;
    Some(PrefixType::new(
        priority,
        unescape(value, DELIMITER, ESCAPE),
    ))
}

/// Parses a suffix payload from a `suffix.<priority>.<value>` node.
///
/// Same rules as [`parse_prefix_type`].
#[must_use]
pub fn parse_suffix_type(s: &str) -> Option<SuffixType> {
    let payload = strip_marker(s, SUFFIX_NODE_MARKER)?;
    let (priority, value) = two_segments(payload)?;
    let priority = priority.parse::<i32>().ok()?;
    Some(SuffixType::new(
        priority,
        unescape(value, DELIMITER, ESCAPE),
    ))
}

/// Parses a weight payload from a `weight.<n>` node.
///
/// A remainder that does not parse as a signed 32-bit integer is a no-match,
/// not a weight of zero.
#[must_use]
pub fn parse_weight_type(s: &str) -> Option<WeightType> {
    let payload = strip_marker(s, WEIGHT_NODE_MARKER)?;
    let weight = payload.parse::<i32>().ok()?;
    Some(WeightType::new(weight))
}

/// Parses a display name payload from a `displayname.<name>` node.
///
/// Only the marker is matched case-insensitively; the returned name keeps the
/// original casing of the input.
#[must_use]
pub fn parse_display_name_type(s: &str) -> Option<DisplayNameType> {
    let display_name = strip_marker(s, DISPLAY_NAME_NODE_MARKER)?;
    Some(DisplayNameType::new(display_name))
}

/// Parses a regex payload from an `r=<pattern>` or `R=<pattern>` node.
///
/// Exactly those two spellings are accepted; the marker letter is not matched
/// case-insensitively like the dotted markers are. The first two characters
/// are stripped and the remainder is the raw pattern, which is not compiled
/// here — compilation happens lazily on [`RegexType::pattern`].
#[must_use]
pub fn parse_regex_type(s: &str) -> Option<RegexType> {
    if !s.starts_with(REGEX_MARKER_1) && !s.starts_with(REGEX_MARKER_2) {
        return None;
    }
    Some(RegexType::new(&s[REGEX_MARKER_1.len()..]))
}

/// Parses the payload of a single named kind, the generic form of the
/// `parse_*_type` functions.
#[must_use]
pub fn parse_type(key: NodeTypeKey, s: &str) -> Option<NodeType> {
    match key {
        NodeTypeKey::Inheritance => parse_inheritance_type(s).map(NodeType::from),
        NodeTypeKey::Meta => parse_meta_type(s).map(NodeType::from),
        NodeTypeKey::Prefix => parse_prefix_type(s).map(NodeType::from),
        NodeTypeKey::Suffix => parse_suffix_type(s).map(NodeType::from),
        NodeTypeKey::Weight => parse_weight_type(s).map(NodeType::from),
        NodeTypeKey::DisplayName => parse_display_name_type(s).map(NodeType::from),
        NodeTypeKey::Regex => parse_regex_type(s).map(NodeType::from),
    }
}

/// Attempts every kind's parser against `s` and collects all matches.
///
/// Each kind is tried independently against the full original string; there
/// is no precedence and no kind can suppress another. The returned map holds
/// at most one value per kind and is empty — with no heap allocation — when
/// nothing matched.
///
/// # Examples
///
/// ```rust
/// use permnode::node::parse::parse_types;
///
/// assert!(parse_types("essentials.fly").is_empty());
///
/// let map = parse_types("meta.rank.captain");
/// assert_eq!(map.len(), 1);
/// assert_eq!(map.meta().unwrap().value(), "captain");
/// ```
#[must_use]
pub fn parse_types(s: &str) -> NodeTypeMap {
    let mut results = NodeTypeMap::new();
    for key in NodeTypeKey::iter() {
        if let Some(value) = parse_type(key, s) {
            results.insert(value);
        }
    }
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inheritance_basic() {
        let t = parse_inheritance_type("group.admin").unwrap();
        assert_eq!(t.group_name(), "admin");
    }

    #[test]
    fn test_inheritance_lower_cases_group_name() {
        let t = parse_inheritance_type("GROUP.Admin").unwrap();
        assert_eq!(t.group_name(), "admin");
    }

    #[test]
    fn test_inheritance_empty_group_name_matches() {
        let t = parse_inheritance_type("group.").unwrap();
        assert_eq!(t.group_name(), "");
    }

    #[test]
    fn test_inheritance_no_marker() {
        assert!(parse_inheritance_type("grou.admin").is_none());
        assert!(parse_inheritance_type("group").is_none());
        assert!(parse_inheritance_type("").is_none());
    }

    #[test]
    fn test_meta_basic() {
        let t = parse_meta_type("meta.rank.captain").unwrap();
        assert_eq!(t.key(), "rank");
        assert_eq!(t.value(), "captain");
    }

    #[test]
    fn test_meta_marker_case_insensitive() {
        let t = parse_meta_type("Meta.Key.Value").unwrap();
        assert_eq!(t.key(), "Key");
        assert_eq!(t.value(), "Value");
    }

    #[test]
    fn test_meta_escaped_delimiters_unescape() {
        let t = parse_meta_type("meta.server\\.name.lobby\\.1").unwrap();
        assert_eq!(t.key(), "server.name");
        assert_eq!(t.value(), "lobby.1");
    }

    #[test]
    fn test_meta_value_keeps_extra_delimiters() {
        // Limit-2 split: everything after the first unescaped delimiter is
        // the value, dots and all.
        let t = parse_meta_type("meta.key.a.b.c").unwrap();
        assert_eq!(t.key(), "key");
        assert_eq!(t.value(), "a.b.c");
    }

    #[test]
    fn test_meta_requires_two_segments() {
        assert!(parse_meta_type("meta.keyonly").is_none());
        assert!(parse_meta_type("meta.key\\.still-one-segment").is_none());
    }

    #[test]
    fn test_meta_empty_key_and_value() {
        let t = parse_meta_type("meta..").unwrap();
        assert_eq!(t.key(), "");
        assert_eq!(t.value(), "");
    }

    #[test]
    fn test_prefix_basic() {
        let t = parse_prefix_type("prefix.100.&a[Admin]").unwrap();
        assert_eq!(t.priority(), 100);
        assert_eq!(t.prefix(), "&a[Admin]");
    }

    #[test]
    fn test_prefix_negative_priority() {
        let t = parse_prefix_type("prefix.-5.p").unwrap();
        assert_eq!(t.priority(), -5);
    }

    #[test]
    fn test_prefix_non_numeric_priority_no_match() {
        assert!(parse_prefix_type("prefix.high.p").is_none());
        assert!(parse_prefix_type("prefix..p").is_none());
        assert!(parse_prefix_type("prefix.2147483648.p").is_none());
    }

    #[test]
    fn test_prefix_requires_two_segments() {
        assert!(parse_prefix_type("prefix.100").is_none());
    }

    #[test]
    fn test_prefix_value_unescaped() {
        let t = parse_prefix_type("prefix.10.a\\.b").unwrap();
        assert_eq!(t.prefix(), "a.b");
    }

    #[test]
    fn test_suffix_basic() {
        let t = parse_suffix_type("suffix.50.~hero").unwrap();
        assert_eq!(t.priority(), 50);
        assert_eq!(t.suffix(), "~hero");
        assert!(parse_suffix_type("suffix.x.~hero").is_none());
    }

    #[test]
    fn test_weight_basic() {
        assert_eq!(parse_weight_type("weight.42").unwrap().weight(), 42);
        assert_eq!(parse_weight_type("weight.-1").unwrap().weight(), -1);
    }

    #[test]
    fn test_weight_marker_case_insensitive() {
        assert_eq!(parse_weight_type("WEIGHT.7").unwrap().weight(), 7);
        assert_eq!(parse_weight_type("Weight.7").unwrap().weight(), 7);
    }

    #[test]
    fn test_weight_non_numeric_no_match() {
        assert!(parse_weight_type("weight.abc").is_none());
        assert!(parse_weight_type("weight.").is_none());
        assert!(parse_weight_type("weight.4.5").is_none());
    }

    #[test]
    fn test_display_name_preserves_case() {
        let t = parse_display_name_type("displayname.Admin").unwrap();
        assert_eq!(t.display_name(), "Admin");

        let t = parse_display_name_type("DISPLAYNAME.Admin").unwrap();
        assert_eq!(t.display_name(), "Admin");
    }

    #[test]
    fn test_display_name_empty() {
        let t = parse_display_name_type("displayname.").unwrap();
        assert_eq!(t.display_name(), "");
    }

    #[test]
    fn test_regex_both_markers() {
        let lower = parse_regex_type("r=^abc$").unwrap();
        let upper = parse_regex_type("R=^abc$").unwrap();
        assert_eq!(lower.pattern_string(), "^abc$");
        assert_eq!(upper.pattern_string(), "^abc$");
        assert_eq!(lower, upper);
    }

    #[test]
    fn test_regex_marker_exact_spelling_only() {
        // The marker letter is case-distinguished, not case-folded; no other
        // spelling is valid.
        assert!(parse_regex_type("x=^abc$").is_none());
        assert!(parse_regex_type("r^abc$").is_none());
        assert!(parse_regex_type("=^abc$").is_none());
    }

    #[test]
    fn test_regex_empty_pattern() {
        let t = parse_regex_type("r=").unwrap();
        assert_eq!(t.pattern_string(), "");
    }

    #[test]
    fn test_parse_type_generic_matches_direct() {
        assert_eq!(
            parse_type(NodeTypeKey::Weight, "weight.3"),
            parse_weight_type("weight.3").map(NodeType::from)
        );
        assert!(parse_type(NodeTypeKey::Meta, "weight.3").is_none());
    }

    #[test]
    fn test_parse_types_no_match_is_empty() {
        assert!(parse_types("essentials.fly").is_empty());
        assert!(parse_types("").is_empty());
        assert!(parse_types("Groups.admin").is_empty());
    }

    #[test]
    fn test_parse_types_single_match() {
        let map = parse_types("group.admin");
        assert_eq!(map.len(), 1);
        assert!(map.contains(NodeTypeKey::Inheritance));
        assert_eq!(map.inheritance().unwrap().group_name(), "admin");
    }

    #[test]
    fn test_parse_types_kinds_are_isolated() {
        // A valid weight node is, for every other kind, a plain no-match.
        let map = parse_types("weight.10");
        assert_eq!(map.len(), 1);
        assert!(map.contains(NodeTypeKey::Weight));

        // A broken payload for one kind never disturbs the others.
        let map = parse_types("prefix.not-a-number.value");
        assert!(map.is_empty());
    }

    #[test]
    fn test_parse_types_regex() {
        let map = parse_types("R=worldedit\\..*");
        assert_eq!(map.len(), 1);
        assert_eq!(map.regex().unwrap().pattern_string(), "worldedit\\..*");
    }
}
