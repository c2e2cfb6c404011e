// Copyright 2025 The permnode authors
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.
//
// SPDX-License-Identifier: Apache-2.0

#![doc(html_no_source)]
#![deny(missing_docs)]

//! # permnode
//!
//! A small, thread-safe codec for the structured permission node string
//! format. Every grant in the surrounding permissions model is a single
//! opaque string (a *node*); some nodes additionally encode a typed payload
//! behind a reserved marker prefix — group inheritance, a prioritized chat
//! prefix or suffix, a key/value meta pair, a numeric weight, a display name,
//! or a regular expression matcher. `permnode` recognizes those payloads,
//! parses them into strongly typed immutable values, and can build the string
//! form back from the values.
//!
//! ## Features
//!
//! - **Faithful wire format** - markers, delimiter escaping and casing rules
//!   are reproduced bit-for-bit against previously persisted node strings
//! - **Fails soft** - every parser reports "does not match" as [`None`];
//!   malformed payloads never raise, log, or disturb other kinds
//! - **Immutable values** - parsed payloads are plain data with structural
//!   equality, freely shareable across threads
//! - **Lazy regex compilation** - regex nodes store only the raw pattern;
//!   compilation happens once, on first use, through a process-wide cache
//!
//! ## Quick Start
//!
//! ```rust
//! use permnode::prelude::*;
//!
//! // Everything at once:
//! let map = parse_types("prefix.100.&a[Admin]");
//! let prefix = map.prefix().unwrap();
//! assert_eq!(prefix.priority(), 100);
//! assert_eq!(prefix.prefix(), "&a[Admin]");
//!
//! // Or one kind directly, skipping the other six attempts:
//! let weight = parse_weight_type("weight.42").unwrap();
//! assert_eq!(weight.weight(), 42);
//!
//! // A plain permission string is simply not structured:
//! assert!(parse_types("essentials.fly").is_empty());
//! ```
//!
//! ## Architecture
//!
//! - [`node`] - the codec: markers, per-kind parsers, typed values, the
//!   per-kind result map, and node string construction
//! - [`cache`] - the compute-once primitive and the process-wide compiled
//!   pattern cache backing regex nodes
//! - [`mutate`] - the generic success/failure outcome callers use when
//!   applying parsed payloads to permission holders
//! - [`prelude`] - convenient re-exports of the common surface
//!
//! ## Error Handling
//!
//! "Not structured" and "malformed" are deliberately the same observation at
//! the parsing layer, and neither is an error — see the contract notes on
//! [`node::parse`]. The crate-level [`Error`] only surfaces from explicit
//! accessors such as [`node::types::RegexType::try_pattern`].

pub(crate) mod error;

/// Lazy compute-once caching primitives, including the process-wide compiled
/// regex pattern cache.
pub mod cache;

/// Generic success/failure outcome for mutation operations.
pub mod mutate;

/// The node-type codec: recognition, parsing, and construction of structured
/// permission node strings.
pub mod node;

/// Convenient re-exports of the most commonly used types and functions.
///
/// # Example
///
/// ```rust
/// use permnode::prelude::*;
///
/// let map = parse_types("group.admin");
/// assert_eq!(map.inheritance().unwrap().group_name(), "admin");
/// ```
pub mod prelude;

/// The universal `Result` type of this crate.
pub type Result<T> = std::result::Result<T, Error>;

pub use error::Error;
pub use node::parse::{parse_type, parse_types};
pub use node::{
    DisplayNameType, InheritanceType, MetaType, NodeType, NodeTypeKey, NodeTypeMap, PrefixType,
    RegexType, SuffixType, WeightType,
};
