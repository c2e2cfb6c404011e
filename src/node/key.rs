//! The closed set of structured node type kinds.
//!
//! Every structured payload a node string can carry belongs to exactly one of
//! seven kinds. [`NodeTypeKey`] enumerates them as a fieldless enum: variants
//! are process-wide constants, two different kinds can never compare equal,
//! and every place that dispatches over kinds gets exhaustiveness checking
//! from the compiler.
//!
//! The enum also serves as the key space of [`crate::node::map::NodeTypeMap`],
//! which stores at most one parsed value per kind.

use strum::EnumIter;

/// Identifies one of the seven structured node type kinds.
///
/// Each typed payload struct re-exposes its own kind through an associated
/// `KEY` constant (for example [`crate::node::types::PrefixType::KEY`]), which
/// is the idiomatic way to name a kind when working with a
/// [`crate::node::map::NodeTypeMap`].
///
/// # Examples
///
/// ```rust
/// use permnode::node::key::NodeTypeKey;
/// use permnode::node::parse::parse_types;
///
/// let map = parse_types("group.admin");
/// assert!(map.contains(NodeTypeKey::Inheritance));
/// assert!(!map.contains(NodeTypeKey::Weight));
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, EnumIter)]
pub enum NodeTypeKey {
    /// The node names a group this holder inherits from (`group.` marker).
    Inheritance,
    /// The node carries a key/value meta pair (`meta.` marker).
    Meta,
    /// The node carries a chat prefix with a priority (`prefix.` marker).
    Prefix,
    /// The node carries a chat suffix with a priority (`suffix.` marker).
    Suffix,
    /// The node assigns a numeric weight (`weight.` marker).
    Weight,
    /// The node assigns a display name (`displayname.` marker).
    DisplayName,
    /// The node is a regular expression matcher (`r=` / `R=` marker).
    Regex,
}

impl NodeTypeKey {
    /// The number of recognized kinds, the slot count of
    /// [`crate::node::map::NodeTypeMap`].
    pub const COUNT: usize = 7;

    /// The slot index of this kind, stable across a process.
    #[must_use]
    pub(crate) fn index(self) -> usize {
        self as usize
    }

    /// A short lower-case name for this kind, for diagnostics.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            NodeTypeKey::Inheritance => "inheritance",
            NodeTypeKey::Meta => "meta",
            NodeTypeKey::Prefix => "prefix",
            NodeTypeKey::Suffix => "suffix",
            NodeTypeKey::Weight => "weight",
            NodeTypeKey::DisplayName => "displayname",
            NodeTypeKey::Regex => "regex",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn test_keys_are_distinct() {
        let keys: Vec<NodeTypeKey> = NodeTypeKey::iter().collect();
        assert_eq!(keys.len(), NodeTypeKey::COUNT);
        for (i, a) in keys.iter().enumerate() {
            for (j, b) in keys.iter().enumerate() {
                assert_eq!(i == j, a == b, "{a:?} vs {b:?}");
            }
        }
    }

    #[test]
    fn test_index_covers_all_slots() {
        let mut seen = [false; NodeTypeKey::COUNT];
        for key in NodeTypeKey::iter() {
            assert!(key.index() < NodeTypeKey::COUNT);
            seen[key.index()] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_names() {
        assert_eq!(NodeTypeKey::DisplayName.name(), "displayname");
        assert_eq!(NodeTypeKey::Regex.name(), "regex");
    }
}
