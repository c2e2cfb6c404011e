//! # permnode Prelude
//!
//! This module provides a convenient prelude for the most commonly used types
//! and functions from the permnode library. Import this module to get quick
//! access to the essential pieces of the node-type codec.

// ================================================================================================
// Core Types and Error Handling
// ================================================================================================

/// The main error type for all permnode operations
pub use crate::Error;

/// The result type used throughout permnode
pub use crate::Result;

// ================================================================================================
// Main Entry Points
// ================================================================================================

/// Aggregate parser collecting every kind that matches a node string
pub use crate::node::parse::parse_types;

/// Per-kind direct parsers
pub use crate::node::parse::{
    parse_display_name_type, parse_inheritance_type, parse_meta_type, parse_prefix_type,
    parse_regex_type, parse_suffix_type, parse_type, parse_weight_type,
};

// ================================================================================================
// Node Type System
// ================================================================================================

/// The closed set of recognized structured kinds
pub use crate::node::key::NodeTypeKey;

/// The per-kind result mapping
pub use crate::node::map::NodeTypeMap;

/// Typed immutable payload values
pub use crate::node::types::{
    DisplayNameType, InheritanceType, MetaType, NodeType, PrefixType, RegexType, SuffixType,
    WeightType,
};

// ================================================================================================
// Supporting Types
// ================================================================================================

/// Compute-once lazy cache primitive
pub use crate::cache::Cache;

/// Generic mutation outcome
pub use crate::mutate::MutateResult;
