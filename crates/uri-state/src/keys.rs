//! Key descriptors and their normalization.
//!
//! Callers name the state keys to manage either as a plain list or as a map
//! from key name to per-key options. Both shapes normalize to the same
//! internal [`KeySpec`] list, with identity codecs and same-value equality
//! filled in for anything the caller leaves out.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::equality::same_value;
use crate::error::UriStateResult;

/// Decoder applied to a raw query value for one key.
///
/// The default decoder wraps the raw string as [`Value::String`] unchanged.
pub type FromUriFn = Arc<dyn Fn(&str) -> UriStateResult<Value> + Send + Sync>;

/// Encoder applied to an application value before it is written for one key.
///
/// The default encoder passes string values through bare and renders every
/// other value as compact JSON text (`null`, `true`, `42`, ...).
pub type ToUriFn = Arc<dyn Fn(&Value) -> UriStateResult<String> + Send + Sync>;

/// Equality used to decide whether a value sits at its default and should be
/// elided from the query string.
///
/// Both sides are `None` when the corresponding entry is absent; the default
/// comparator is [`same_value`].
pub type ComparatorFn = Arc<dyn Fn(Option<&Value>, Option<&Value>) -> bool + Send + Sync>;

/// Per-key overrides for how one state key binds to the query string.
///
/// Every field is optional; an omitted field falls back to the defaults
/// described on [`FromUriFn`], [`ToUriFn`] and [`ComparatorFn`].
///
/// # Examples
///
/// A numeric page parameter stored under a short query name:
///
/// ```
/// use serde_json::Value;
/// use uri_state::{KeyOptions, UriStateError};
///
/// let options = KeyOptions::new()
///     .with_uri_key("p")
///     .with_from_uri(|raw| {
///         raw.parse::<i64>()
///             .map(Value::from)
///             .map_err(|e| UriStateError::decode("p", e.to_string()))
///     });
/// ```
#[derive(Clone, Default)]
pub struct KeyOptions {
    /// Name used in the query string instead of the state key.
    pub uri_key: Option<String>,
    /// Decoder for this key's query value.
    pub from_uri: Option<FromUriFn>,
    /// Encoder for this key's state value.
    pub to_uri: Option<ToUriFn>,
    /// Equality deciding when the value is at its default.
    pub comparator: Option<ComparatorFn>,
}

impl KeyOptions {
    /// Create options with every field left at its default.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Use a different name for this key in the query string.
    pub fn with_uri_key(mut self, uri_key: impl Into<String>) -> Self {
        self.uri_key = Some(uri_key.into());
        self
    }

    /// Decode this key's query value with a custom function.
    pub fn with_from_uri<F>(mut self, from_uri: F) -> Self
    where
        F: Fn(&str) -> UriStateResult<Value> + Send + Sync + 'static,
    {
        self.from_uri = Some(Arc::new(from_uri));
        self
    }

    /// Encode this key's state value with a custom function.
    pub fn with_to_uri<F>(mut self, to_uri: F) -> Self
    where
        F: Fn(&Value) -> UriStateResult<String> + Send + Sync + 'static,
    {
        self.to_uri = Some(Arc::new(to_uri));
        self
    }

    /// Compare this key's value to its default with a custom function.
    pub fn with_comparator<F>(mut self, comparator: F) -> Self
    where
        F: Fn(Option<&Value>, Option<&Value>) -> bool + Send + Sync + 'static,
    {
        self.comparator = Some(Arc::new(comparator));
        self
    }
}

impl fmt::Debug for KeyOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyOptions")
            .field("uri_key", &self.uri_key)
            .field("from_uri", &self.from_uri.as_ref().map(|_| "<fn>"))
            .field("to_uri", &self.to_uri.as_ref().map(|_| "<fn>"))
            .field("comparator", &self.comparator.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// The set of state keys to synchronize, in caller order.
///
/// A [`List`] entry gets an all-default [`KeySpec`]; a [`Map`] entry carries
/// per-key [`KeyOptions`]. The shape is structural, so plain string
/// collections convert directly:
///
/// ```
/// use uri_state::Keys;
///
/// let keys = Keys::from(["page", "query"]);
/// ```
///
/// [`List`]: Keys::List
/// [`Map`]: Keys::Map
#[derive(Debug, Clone)]
pub enum Keys {
    /// Plain key names, all-default bindings.
    List(Vec<String>),
    /// Key names paired with per-key options.
    Map(Vec<(String, KeyOptions)>),
}

impl From<Vec<String>> for Keys {
    fn from(names: Vec<String>) -> Self {
        Keys::List(names)
    }
}

impl From<Vec<&str>> for Keys {
    fn from(names: Vec<&str>) -> Self {
        Keys::List(names.into_iter().map(str::to_owned).collect())
    }
}

impl<const N: usize> From<[&str; N]> for Keys {
    fn from(names: [&str; N]) -> Self {
        Keys::List(names.iter().map(|name| (*name).to_owned()).collect())
    }
}

impl From<Vec<(String, KeyOptions)>> for Keys {
    fn from(entries: Vec<(String, KeyOptions)>) -> Self {
        Keys::Map(entries)
    }
}

impl<const N: usize> From<[(&str, KeyOptions); N]> for Keys {
    fn from(entries: [(&str, KeyOptions); N]) -> Self {
        Keys::Map(
            entries
                .into_iter()
                .map(|(name, options)| (name.to_owned(), options))
                .collect(),
        )
    }
}

/// Normalized binding of one state key to the query string.
///
/// Produced by [`normalize_keys`]; every field is concrete, with defaults
/// already substituted.
#[derive(Clone)]
pub struct KeySpec {
    /// Name of the key in the state object.
    pub key: String,
    /// Name of the key in the query string.
    pub uri_key: String,
    /// Decoder for the query value.
    pub from_uri: FromUriFn,
    /// Encoder for the state value.
    pub to_uri: ToUriFn,
    /// Equality against the default value.
    pub equals: ComparatorFn,
}

impl KeySpec {
    fn with_defaults(key: &str) -> Self {
        Self {
            key: key.to_owned(),
            uri_key: key.to_owned(),
            from_uri: default_from_uri(),
            to_uri: default_to_uri(),
            equals: default_comparator(),
        }
    }

    fn from_options(key: &str, options: &KeyOptions) -> Self {
        Self {
            key: key.to_owned(),
            uri_key: options.uri_key.clone().unwrap_or_else(|| key.to_owned()),
            from_uri: options.from_uri.clone().unwrap_or_else(default_from_uri),
            to_uri: options.to_uri.clone().unwrap_or_else(default_to_uri),
            equals: options.comparator.clone().unwrap_or_else(default_comparator),
        }
    }
}

impl fmt::Debug for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeySpec")
            .field("key", &self.key)
            .field("uri_key", &self.uri_key)
            .finish_non_exhaustive()
    }
}

/// Normalize caller input into one [`KeySpec`] per key, preserving order.
///
/// No validation is performed; duplicate keys or shared `uri_key` names pass
/// through, and the later entry wins wherever they collide.
pub fn normalize_keys(keys: &Keys) -> Vec<KeySpec> {
    match keys {
        Keys::List(names) => names.iter().map(|name| KeySpec::with_defaults(name)).collect(),
        Keys::Map(entries) => entries
            .iter()
            .map(|(name, options)| KeySpec::from_options(name, options))
            .collect(),
    }
}

fn default_from_uri() -> FromUriFn {
    Arc::new(|raw| Ok(Value::String(raw.to_owned())))
}

fn default_to_uri() -> ToUriFn {
    Arc::new(|value| {
        Ok(match value {
            Value::String(s) => s.clone(),
            other => other.to_string(),
        })
    })
}

fn default_comparator() -> ComparatorFn {
    Arc::new(same_value)
}
