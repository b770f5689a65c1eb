//! Reading managed state out of the query string.

use crate::keys::{normalize_keys, Keys};
use crate::query::QueryMap;
use crate::source::QuerySource;
use crate::StateMap;

/// Build a state object by overlaying defaults with values from the query
/// string.
///
/// The result starts as a copy of `defaults`. For each managed key present
/// in the query, the raw value is decoded with the key's `from_uri` and
/// compared to the default with the key's `equals`; only values that differ
/// from their default are written into the result. Keys in `defaults` that
/// are not managed pass through untouched.
///
/// This function never fails. When the query string cannot be read, or a
/// decoder rejects its input, the failure is logged at debug level and
/// whatever state had been assembled so far is returned, so a foreign or
/// mangled query string degrades to defaults instead of breaking the
/// caller.
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use uri_state::{get_values_from_uri, Keys, MemoryQuerySource, StateMap};
///
/// let source = MemoryQuerySource::with_query("foo=bar&blerg=hloom");
///
/// let mut defaults = StateMap::new();
/// defaults.insert("foo".into(), json!("kazoo"));
/// defaults.insert("blerg".into(), json!("grunk"));
///
/// let state = get_values_from_uri(&source, &Keys::from(["foo", "blerg"]), &defaults);
/// assert_eq!(state.get("foo"), Some(&json!("bar")));
/// assert_eq!(state.get("blerg"), Some(&json!("hloom")));
/// ```
pub fn get_values_from_uri<S: QuerySource>(
    source: &S,
    keys: &Keys,
    defaults: &StateMap,
) -> StateMap {
    let mut values = defaults.clone();

    let query = match source.query() {
        Ok(query) => query,
        Err(e) => {
            tracing::debug!(error = %e, "query string unavailable, returning defaults");
            return values;
        }
    };
    let params = QueryMap::parse(&query);

    for spec in normalize_keys(keys) {
        let Some(raw) = params.get(&spec.uri_key) else {
            continue;
        };
        let decoded = match (spec.from_uri)(raw) {
            Ok(decoded) => decoded,
            Err(e) => {
                tracing::debug!(
                    key = %spec.key,
                    uri_key = %spec.uri_key,
                    error = %e,
                    "decode failed, keeping state assembled so far"
                );
                return values;
            }
        };
        if !(spec.equals)(Some(&decoded), defaults.get(&spec.key)) {
            values.insert(spec.key, decoded);
        }
    }

    values
}
