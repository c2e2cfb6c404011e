//! Construction of node strings from structured payloads.
//!
//! The inverse of [`crate::node::parse`]: every builder here produces a string
//! the matching parser accepts and round-trips back to the original payload.
//! Field content containing the literal delimiter is escaped with the rules of
//! [`crate::node::escape`], so `meta_node("a.b", "c")` survives a parse.
//!
//! [`NodeType`] implements [`std::fmt::Display`] in terms of [`node_string`].

use std::fmt;

use crate::node::escape::{escape, DELIMITER, ESCAPE};
use crate::node::parse::{
    DISPLAY_NAME_NODE_MARKER, GROUP_NODE_MARKER, META_NODE_MARKER, PREFIX_NODE_MARKER,
    REGEX_MARKER_1, SUFFIX_NODE_MARKER, WEIGHT_NODE_MARKER,
};
use crate::node::types::NodeType;

/// Builds an inheritance node string for `group`.
///
/// The group name is lower-cased, matching what the parser would return.
#[must_use]
pub fn inheritance_node(group: &str) -> String {
    format!("{GROUP_NODE_MARKER}{}", group.to_lowercase())
}

/// Builds a meta node string for a key/value pair, escaping literal
/// delimiters in both.
#[must_use]
pub fn meta_node(key: &str, value: &str) -> String {
    format!(
        "{META_NODE_MARKER}{}{DELIMITER}{}",
        escape(key, DELIMITER, ESCAPE),
        escape(value, DELIMITER, ESCAPE)
    )
}

/// Builds a prefix node string with the given priority.
#[must_use]
pub fn prefix_node(priority: i32, value: &str) -> String {
    format!(
        "{PREFIX_NODE_MARKER}{priority}{DELIMITER}{}",
        escape(value, DELIMITER, ESCAPE)
    )
}

/// Builds a suffix node string with the given priority.
#[must_use]
pub fn suffix_node(priority: i32, value: &str) -> String {
    format!(
        "{SUFFIX_NODE_MARKER}{priority}{DELIMITER}{}",
        escape(value, DELIMITER, ESCAPE)
    )
}

/// Builds a weight node string.
#[must_use]
pub fn weight_node(weight: i32) -> String {
    format!("{WEIGHT_NODE_MARKER}{weight}")
}

/// Builds a display name node string, keeping the name's casing.
#[must_use]
pub fn display_name_node(name: &str) -> String {
    format!("{DISPLAY_NAME_NODE_MARKER}{name}")
}

/// Builds a regex node string using the lower-case marker.
#[must_use]
pub fn regex_node(pattern: &str) -> String {
    format!("{REGEX_MARKER_1}{pattern}")
}

/// Builds the node string encoding `value`.
#[must_use]
pub fn node_string(value: &NodeType) -> String {
    match value {
        NodeType::Inheritance(t) => inheritance_node(t.group_name()),
        NodeType::Meta(t) => meta_node(t.key(), t.value()),
        NodeType::Prefix(t) => prefix_node(t.priority(), t.prefix()),
        NodeType::Suffix(t) => suffix_node(t.priority(), t.suffix()),
        NodeType::Weight(t) => weight_node(t.weight()),
        NodeType::DisplayName(t) => display_name_node(t.display_name()),
        NodeType::Regex(t) => regex_node(t.pattern_string()),
    }
}

impl fmt::Display for NodeType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&node_string(self))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::node::parse::{
        parse_meta_type, parse_prefix_type, parse_types, parse_weight_type,
    };

    #[test]
    fn test_meta_round_trip_with_delimiters() {
        let node = meta_node("server.name", "lobby.1");
        assert_eq!(node, "meta.server\\.name.lobby\\.1");

        let parsed = parse_meta_type(&node).unwrap();
        assert_eq!(parsed.key(), "server.name");
        assert_eq!(parsed.value(), "lobby.1");
    }

    #[test]
    fn test_prefix_round_trip() {
        let node = prefix_node(100, "&a[Admin].");
        let parsed = parse_prefix_type(&node).unwrap();
        assert_eq!(parsed.priority(), 100);
        assert_eq!(parsed.prefix(), "&a[Admin].");
    }

    #[test]
    fn test_weight_round_trip() {
        assert_eq!(parse_weight_type(&weight_node(-3)).unwrap().weight(), -3);
    }

    #[test]
    fn test_inheritance_node_lower_cases() {
        assert_eq!(inheritance_node("Admin"), "group.admin");
    }

    #[test]
    fn test_display_round_trip_every_kind() {
        for node in [
            "group.mod",
            "meta.rank.captain",
            "prefix.10.[Mod]",
            "suffix.5.~",
            "weight.1",
            "displayname.The Moderator",
            "r=^perm\\..*$",
        ] {
            let map = parse_types(node);
            assert_eq!(map.len(), 1, "{node}");
            let (_, value) = map.iter().next().unwrap();
            assert_eq!(value.to_string(), node);
        }
    }
}
