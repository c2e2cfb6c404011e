//! The per-kind result mapping produced by the aggregate parser.
//!
//! [`NodeTypeMap`] holds at most one parsed value for each [`NodeTypeKey`],
//! stored in a fixed array of slots indexed by kind. There is no hashing and
//! no heap allocation in the map itself; an empty map holds no heap data at
//! all, so a parse that matches nothing costs nothing beyond the attempts.
//!
//! The map is immutable from the outside: only the parser inserts into it.
//! Mutating a returned map is therefore not an error path callers can hit —
//! the type system rules it out.

use crate::node::key::NodeTypeKey;
use crate::node::types::{
    DisplayNameType, InheritanceType, MetaType, NodeType, PrefixType, RegexType, SuffixType,
    WeightType,
};
use strum::IntoEnumIterator;

/// An immutable mapping from [`NodeTypeKey`] to the parsed [`NodeType`] value
/// of that kind, with at most one value per kind.
///
/// Produced by [`crate::node::parse::parse_types`]. Slots can be read either
/// generically through [`NodeTypeMap::get`] or through the typed accessors
/// ([`NodeTypeMap::inheritance`], [`NodeTypeMap::prefix`], ...), which skip
/// the enum match at the call site.
///
/// # Examples
///
/// ```rust
/// use permnode::node::parse::parse_types;
///
/// let map = parse_types("prefix.100.&a[Admin]");
/// assert_eq!(map.len(), 1);
///
/// let prefix = map.prefix().unwrap();
/// assert_eq!(prefix.priority(), 100);
/// assert_eq!(prefix.prefix(), "&a[Admin]");
/// ```
#[derive(Clone, PartialEq, Eq, Debug, Default)]
pub struct NodeTypeMap {
    slots: [Option<NodeType>; NodeTypeKey::COUNT],
}

impl NodeTypeMap {
    /// The shared empty mapping.
    pub const EMPTY: NodeTypeMap = NodeTypeMap::new();

    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        NodeTypeMap {
            slots: [None, None, None, None, None, None, None],
        }
    }

    /// Stores `value` in the slot of its own kind, replacing any previous
    /// value of that kind.
    pub(crate) fn insert(&mut self, value: NodeType) {
        let index = value.key().index();
        self.slots[index] = Some(value);
    }

    /// Returns the value of the given kind, if one was parsed.
    #[must_use]
    pub fn get(&self, key: NodeTypeKey) -> Option<&NodeType> {
        self.slots[key.index()].as_ref()
    }

    /// Returns `true` when a value of the given kind is present.
    #[must_use]
    pub fn contains(&self, key: NodeTypeKey) -> bool {
        self.slots[key.index()].is_some()
    }

    /// The number of kinds with a parsed value.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Returns `true` when no kind matched.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.iter().all(Option::is_none)
    }

    /// Iterates over the present entries in kind declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeTypeKey, &NodeType)> {
        NodeTypeKey::iter().filter_map(move |key| self.get(key).map(|value| (key, value)))
    }

    /// The inheritance value, if present.
    #[must_use]
    pub fn inheritance(&self) -> Option<&InheritanceType> {
        self.get(InheritanceType::KEY)?.as_inheritance()
    }

    /// The meta value, if present.
    #[must_use]
    pub fn meta(&self) -> Option<&MetaType> {
        self.get(MetaType::KEY)?.as_meta()
    }

    /// The prefix value, if present.
    #[must_use]
    pub fn prefix(&self) -> Option<&PrefixType> {
        self.get(PrefixType::KEY)?.as_prefix()
    }

    /// The suffix value, if present.
    #[must_use]
    pub fn suffix(&self) -> Option<&SuffixType> {
        self.get(SuffixType::KEY)?.as_suffix()
    }

    /// The weight value, if present.
    #[must_use]
    pub fn weight(&self) -> Option<&WeightType> {
        self.get(WeightType::KEY)?.as_weight()
    }

    /// The display name value, if present.
    #[must_use]
    pub fn display_name(&self) -> Option<&DisplayNameType> {
        self.get(DisplayNameType::KEY)?.as_display_name()
    }

    /// The regex value, if present.
    #[must_use]
    pub fn regex(&self) -> Option<&RegexType> {
        self.get(RegexType::KEY)?.as_regex()
    }
}
