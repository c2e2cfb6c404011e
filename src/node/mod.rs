//! The node-type codec: recognition, parsing, and construction of structured
//! permission node strings.
//!
//! A *node* is a single opaque permission string. Some nodes additionally
//! encode a structured payload — group inheritance, a prefix or suffix with a
//! priority, a key/value meta pair, a weight, a display name, or a regular
//! expression matcher — using reserved marker prefixes. This module is the
//! codec for those payloads.
//!
//! # Architecture
//!
//! - [`escape`] - the shared delimiter splitter and escape rules every
//!   multi-field payload builds on
//! - [`key`] - [`key::NodeTypeKey`], the closed set of recognized kinds
//! - [`types`] - one immutable value struct per kind plus the
//!   [`types::NodeType`] union
//! - [`map`] - [`map::NodeTypeMap`], the per-kind result mapping
//! - [`parse`] - per-kind parsers and the aggregate [`parse::parse_types`]
//! - [`build`] - the inverse direction, payload back to node string
//!
//! # Examples
//!
//! ```rust
//! use permnode::node::parse::parse_types;
//!
//! let map = parse_types("prefix.100.&a[Admin]");
//! let prefix = map.prefix().unwrap();
//! assert_eq!(prefix.as_entry(), (100, "&a[Admin]"));
//! ```

pub mod build;
pub mod escape;
pub mod key;
pub mod map;
pub mod parse;
pub mod types;

pub use key::NodeTypeKey;
pub use map::NodeTypeMap;
pub use types::{
    DisplayNameType, InheritanceType, MetaType, NodeType, PrefixType, RegexType, SuffixType,
    WeightType,
};
