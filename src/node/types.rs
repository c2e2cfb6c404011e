//! Immutable typed values extracted from node strings.
//!
//! Each of the seven recognized kinds has its own value struct carrying the
//! parsed payload, plus the [`NodeType`] tagged union that the aggregate
//! parser stores in a [`crate::node::map::NodeTypeMap`]. All values are
//! immutable once constructed and compare structurally; sharing one across
//! threads needs no coordination.
//!
//! The one twist is [`RegexType`]: it stores only the raw pattern string and
//! derives the compiled matcher lazily through the process-wide
//! [`crate::cache::pattern`] cache. A pattern that does not compile is still a
//! perfectly valid regex node — the raw text is preserved losslessly and the
//! compiled form is simply absent.
//!
//! # Key Types
//!
//! - [`InheritanceType`] - group membership, lower-cased group name
//! - [`MetaType`] - key/value meta pair, delimiters unescaped
//! - [`PrefixType`] / [`SuffixType`] - prioritized chat decoration
//! - [`WeightType`] - numeric weight
//! - [`DisplayNameType`] - display name, original casing kept
//! - [`RegexType`] - raw pattern plus lazily compiled matcher
//! - [`NodeType`] - union over all of the above

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use regex::Regex;

use crate::cache::pattern::{lookup, CachedPattern};
use crate::cache::Cache;
use crate::node::key::NodeTypeKey;
use crate::{Error, Result};

/// A group membership payload parsed from a `group.<name>` node.
///
/// The group name is always lower-cased; two inheritance values parsed from
/// differently-cased spellings of the same group compare equal.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct InheritanceType {
    group_name: String,
}

impl InheritanceType {
    /// The registry key of this kind.
    pub const KEY: NodeTypeKey = NodeTypeKey::Inheritance;

    pub(crate) fn new(group_name: impl Into<String>) -> Self {
        InheritanceType {
            group_name: group_name.into(),
        }
    }

    /// The name of the inherited group, lower-cased.
    #[must_use]
    pub fn group_name(&self) -> &str {
        &self.group_name
    }
}

/// A key/value meta pair parsed from a `meta.<key>.<value>` node.
///
/// Key and value have had their escape markers removed; either may be empty
/// if it was literally empty in the node string.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct MetaType {
    key: String,
    value: String,
}

impl MetaType {
    /// The registry key of this kind.
    pub const KEY: NodeTypeKey = NodeTypeKey::Meta;

    pub(crate) fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        MetaType {
            key: key.into(),
            value: value.into(),
        }
    }

    /// The meta key, unescaped.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.key
    }

    /// The meta value, unescaped.
    #[must_use]
    pub fn value(&self) -> &str {
        &self.value
    }
}

/// A prioritized chat prefix parsed from a `prefix.<priority>.<value>` node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct PrefixType {
    priority: i32,
    prefix: String,
}

impl PrefixType {
    /// The registry key of this kind.
    pub const KEY: NodeTypeKey = NodeTypeKey::Prefix;

    pub(crate) fn new(priority: i32, prefix: impl Into<String>) -> Self {
        PrefixType {
            priority,
            prefix: prefix.into(),
        }
    }

    /// The priority of this prefix relative to other prefixes.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The prefix text, unescaped.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// The payload as a `(priority, text)` pair.
    #[must_use]
    pub fn as_entry(&self) -> (i32, &str) {
        (self.priority, &self.prefix)
    }
}

/// A prioritized chat suffix parsed from a `suffix.<priority>.<value>` node.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct SuffixType {
    priority: i32,
    suffix: String,
}

impl SuffixType {
    /// The registry key of this kind.
    pub const KEY: NodeTypeKey = NodeTypeKey::Suffix;

    pub(crate) fn new(priority: i32, suffix: impl Into<String>) -> Self {
        SuffixType {
            priority,
            suffix: suffix.into(),
        }
    }

    /// The priority of this suffix relative to other suffixes.
    #[must_use]
    pub fn priority(&self) -> i32 {
        self.priority
    }

    /// The suffix text, unescaped.
    #[must_use]
    pub fn suffix(&self) -> &str {
        &self.suffix
    }

    /// The payload as a `(priority, text)` pair.
    #[must_use]
    pub fn as_entry(&self) -> (i32, &str) {
        (self.priority, &self.suffix)
    }
}

/// A numeric weight parsed from a `weight.<n>` node.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WeightType {
    weight: i32,
}

impl WeightType {
    /// The registry key of this kind.
    pub const KEY: NodeTypeKey = NodeTypeKey::Weight;

    pub(crate) fn new(weight: i32) -> Self {
        WeightType { weight }
    }

    /// The weight value.
    #[must_use]
    pub fn weight(&self) -> i32 {
        self.weight
    }
}

/// A display name parsed from a `displayname.<name>` node.
///
/// Unlike group names, the payload keeps its original casing; only the marker
/// is matched case-insensitively.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub struct DisplayNameType {
    display_name: String,
}

impl DisplayNameType {
    /// The registry key of this kind.
    pub const KEY: NodeTypeKey = NodeTypeKey::DisplayName;

    pub(crate) fn new(display_name: impl Into<String>) -> Self {
        DisplayNameType {
            display_name: display_name.into(),
        }
    }

    /// The display name, original casing preserved.
    #[must_use]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }
}

/// A regular expression matcher parsed from an `r=<pattern>` or `R=<pattern>`
/// node.
///
/// Construction never compiles anything: only the raw pattern string is
/// stored. The compiled matcher is derived on first call to
/// [`RegexType::pattern`] through the process-wide pattern cache and memoized
/// for the lifetime of this value. A pattern that fails to compile degrades to
/// an absent matcher; [`RegexType::pattern_string`] is lossless either way.
///
/// Equality and hashing consider the pattern string only, never the state of
/// the compile cache.
///
/// # Examples
///
/// ```rust
/// use permnode::node::parse::parse_regex_type;
///
/// let regex = parse_regex_type("r=^essentials\\..*$").unwrap();
/// assert_eq!(regex.pattern_string(), "^essentials\\..*$");
/// assert!(regex.pattern().unwrap().is_match("essentials.fly"));
///
/// let broken = parse_regex_type("R=[unclosed").unwrap();
/// assert!(broken.pattern().is_none());
/// assert_eq!(broken.pattern_string(), "[unclosed");
/// ```
#[derive(Clone, Debug)]
pub struct RegexType {
    pattern_string: String,
    compiled: Cache<Arc<CachedPattern>>,
}

impl RegexType {
    /// The registry key of this kind.
    pub const KEY: NodeTypeKey = NodeTypeKey::Regex;

    pub(crate) fn new(pattern_string: impl Into<String>) -> Self {
        RegexType {
            pattern_string: pattern_string.into(),
            compiled: Cache::new(),
        }
    }

    /// The raw pattern string, exactly as it appeared in the node.
    #[must_use]
    pub fn pattern_string(&self) -> &str {
        &self.pattern_string
    }

    fn cached(&self) -> &CachedPattern {
        self.compiled.get(|| lookup(&self.pattern_string)).as_ref()
    }

    /// The compiled pattern, or [`None`] when the pattern string is not a
    /// valid regular expression.
    #[must_use]
    pub fn pattern(&self) -> Option<&Regex> {
        self.cached().pattern()
    }

    /// The compiled pattern, with the compile error surfaced on failure.
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidPattern`] when the pattern string does not
    /// compile.
    pub fn try_pattern(&self) -> Result<&Regex> {
        self.cached()
            .as_result()
            .map_err(|e| Error::InvalidPattern(e.clone()))
    }
}

impl PartialEq for RegexType {
    fn eq(&self, other: &Self) -> bool {
        self.pattern_string == other.pattern_string
    }
}

impl Eq for RegexType {}

impl Hash for RegexType {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.pattern_string.hash(state);
    }
}

/// A parsed structured payload of any kind.
///
/// This is the value type of [`crate::node::map::NodeTypeMap`]: one variant
/// per [`NodeTypeKey`], tagged so that a slot and its payload can never
/// disagree about the kind.
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum NodeType {
    /// Group membership payload.
    Inheritance(InheritanceType),
    /// Key/value meta payload.
    Meta(MetaType),
    /// Prioritized prefix payload.
    Prefix(PrefixType),
    /// Prioritized suffix payload.
    Suffix(SuffixType),
    /// Numeric weight payload.
    Weight(WeightType),
    /// Display name payload.
    DisplayName(DisplayNameType),
    /// Regular expression payload.
    Regex(RegexType),
}

impl NodeType {
    /// The kind of this payload.
    #[must_use]
    pub fn key(&self) -> NodeTypeKey {
        match self {
            NodeType::Inheritance(_) => NodeTypeKey::Inheritance,
            NodeType::Meta(_) => NodeTypeKey::Meta,
            NodeType::Prefix(_) => NodeTypeKey::Prefix,
            NodeType::Suffix(_) => NodeTypeKey::Suffix,
            NodeType::Weight(_) => NodeTypeKey::Weight,
            NodeType::DisplayName(_) => NodeTypeKey::DisplayName,
            NodeType::Regex(_) => NodeTypeKey::Regex,
        }
    }

    /// The payload as an inheritance value, if it is one.
    #[must_use]
    pub fn as_inheritance(&self) -> Option<&InheritanceType> {
        match self {
            NodeType::Inheritance(t) => Some(t),
            _ => None,
        }
    }

    /// The payload as a meta value, if it is one.
    #[must_use]
    pub fn as_meta(&self) -> Option<&MetaType> {
        match self {
            NodeType::Meta(t) => Some(t),
            _ => None,
        }
    }

    /// The payload as a prefix value, if it is one.
    #[must_use]
    pub fn as_prefix(&self) -> Option<&PrefixType> {
        match self {
            NodeType::Prefix(t) => Some(t),
            _ => None,
        }
    }

    /// The payload as a suffix value, if it is one.
    #[must_use]
    pub fn as_suffix(&self) -> Option<&SuffixType> {
        match self {
            NodeType::Suffix(t) => Some(t),
            _ => None,
        }
    }

    /// The payload as a weight value, if it is one.
    #[must_use]
    pub fn as_weight(&self) -> Option<&WeightType> {
        match self {
            NodeType::Weight(t) => Some(t),
            _ => None,
        }
    }

    /// The payload as a display name value, if it is one.
    #[must_use]
    pub fn as_display_name(&self) -> Option<&DisplayNameType> {
        match self {
            NodeType::DisplayName(t) => Some(t),
            _ => None,
        }
    }

    /// The payload as a regex value, if it is one.
    #[must_use]
    pub fn as_regex(&self) -> Option<&RegexType> {
        match self {
            NodeType::Regex(t) => Some(t),
            _ => None,
        }
    }
}

impl From<InheritanceType> for NodeType {
    fn from(t: InheritanceType) -> Self {
        NodeType::Inheritance(t)
    }
}

impl From<MetaType> for NodeType {
    fn from(t: MetaType) -> Self {
        NodeType::Meta(t)
    }
}

impl From<PrefixType> for NodeType {
    fn from(t: PrefixType) -> Self {
        NodeType::Prefix(t)
    }
}

impl From<SuffixType> for NodeType {
    fn from(t: SuffixType) -> Self {
        NodeType::Suffix(t)
    }
}

impl From<WeightType> for NodeType {
    fn from(t: WeightType) -> Self {
        NodeType::Weight(t)
    }
}

impl From<DisplayNameType> for NodeType {
    fn from(t: DisplayNameType) -> Self {
        NodeType::DisplayName(t)
    }
}

impl From<RegexType> for NodeType {
    fn from(t: RegexType) -> Self {
        NodeType::Regex(t)
    }
}

impl fmt::Display for InheritanceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "InheritanceType{{group_name='{}'}}", self.group_name)
    }
}

impl fmt::Display for MetaType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MetaType{{key='{}', value='{}'}}", self.key, self.value)
    }
}

impl fmt::Display for PrefixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PrefixType{{priority={}, prefix='{}'}}",
            self.priority, self.prefix
        )
    }
}

impl fmt::Display for SuffixType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SuffixType{{priority={}, suffix='{}'}}",
            self.priority, self.suffix
        )
    }
}

impl fmt::Display for WeightType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "WeightType{{weight={}}}", self.weight)
    }
}

impl fmt::Display for DisplayNameType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DisplayNameType{{display_name='{}'}}", self.display_name)
    }
}

impl fmt::Display for RegexType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "RegexType{{pattern='{}'}}", self.pattern_string)
    }
}
