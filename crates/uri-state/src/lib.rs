//! Synchronize application state with the URI query string.
//!
//! This crate keeps a named subset of application state in the query string,
//! so UI state such as the current page, search text or an open panel
//! survives reloads and can be shared as a link. The mapping is
//! bidirectional and minimal: a value appears in the query string only while
//! it differs from its default, which keeps URLs short and shareable.
//!
//! # Core Concepts
//!
//! - **StateMap**: the state shape, an ordered JSON object keyed by state
//!   name
//! - **Keys** / **KeyOptions**: which state keys to manage and, per key, the
//!   query name, codecs and equality to use
//! - **QuerySource**: the host boundary owning the actual query string;
//!   [`MemoryQuerySource`] is the in-memory implementation for tests and
//!   headless use
//! - **get_values_from_uri** / **set_values_to_uri**: one-shot read and
//!   write between a state map and the query string
//! - **state_to_uri**: binds defaults and keys once and returns a
//!   `(get, set)` pair, ready to plug into a state container as its
//!   persistence adapter
//!
//! # Quick Start
//!
//! ```
//! use serde_json::json;
//! use uri_state::{state_to_uri, MemoryQuerySource, QuerySource, StateMap};
//!
//! let source = MemoryQuerySource::new();
//!
//! let mut initial = StateMap::new();
//! initial.insert("page".into(), json!("1"));
//! initial.insert("query".into(), json!(""));
//!
//! let (get, set) = state_to_uri(source.clone(), initial.clone(), None);
//!
//! // A non-default value shows up in the URL.
//! let mut state = initial.clone();
//! state.insert("query".into(), json!("crabs"));
//! set(state.into())?;
//! assert_eq!(source.query()?, "query=crabs");
//!
//! // A fresh read overlays the defaults with the URL values.
//! let restored = get();
//! assert_eq!(restored.get("page"), Some(&json!("1")));
//! assert_eq!(restored.get("query"), Some(&json!("crabs")));
//! # Ok::<(), uri_state::UriStateError>(())
//! ```
//!
//! # Custom Key Bindings
//!
//! Each managed key can rename its query parameter and bring its own codec
//! and equality:
//!
//! ```
//! use serde_json::{json, Value};
//! use uri_state::{
//!     get_values_from_uri, set_values_to_uri, KeyOptions, Keys, MemoryQuerySource,
//!     QuerySource, StateMap, UriStateError,
//! };
//!
//! let keys = Keys::from([(
//!     "page",
//!     KeyOptions::new()
//!         .with_uri_key("p")
//!         .with_from_uri(|raw| {
//!             raw.parse::<i64>()
//!                 .map(Value::from)
//!                 .map_err(|e| UriStateError::decode("p", e.to_string()))
//!         }),
//! )]);
//!
//! let source = MemoryQuerySource::new();
//!
//! let mut defaults = StateMap::new();
//! defaults.insert("page".into(), json!(1));
//!
//! let mut values = StateMap::new();
//! values.insert("page".into(), json!(3));
//!
//! set_values_to_uri(&source, &keys, &values, &defaults)?;
//! assert_eq!(source.query()?, "p=3");
//!
//! let restored = get_values_from_uri(&source, &keys, &defaults);
//! assert_eq!(restored.get("page"), Some(&json!(3)));
//! # Ok::<(), uri_state::UriStateError>(())
//! ```
//!
//! Query pairs for keys that are not managed pass through reads and writes
//! untouched, so the library coexists with other users of the query string.

mod compose;
mod equality;
mod error;
mod keys;
mod query;
mod read;
mod source;
mod write;

// Core operations
pub use compose::{state_to_uri, Update};
pub use read::get_values_from_uri;
pub use write::set_values_to_uri;

// Key configuration
pub use keys::{normalize_keys, ComparatorFn, FromUriFn, KeyOptions, KeySpec, Keys, ToUriFn};

// Query plumbing and host boundary
pub use equality::same_value;
pub use error::{UriStateError, UriStateResult};
pub use query::QueryMap;
pub use source::{MemoryQuerySource, QuerySource};

// Re-export serde_json::Value for convenience
pub use serde_json::Value;

/// A state object: an ordered JSON object keyed by state name.
///
/// Ordering follows insertion, which keeps the managed-key order derived
/// from an initial state deterministic.
pub type StateMap = serde_json::Map<String, serde_json::Value>;
