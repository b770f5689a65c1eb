//! Writing managed state into the query string.

use serde_json::Value;

use crate::error::UriStateResult;
use crate::keys::{normalize_keys, Keys};
use crate::query::QueryMap;
use crate::source::QuerySource;
use crate::StateMap;

/// Rewrite the query string so it reflects the given state.
///
/// Starts from the current query string, then for each managed key: when the
/// value equals its default under the key's `equals`, every occurrence of
/// `uri_key` is removed (default values never appear in the URL); otherwise
/// `uri_key` is set to the encoded value. Pairs for unmanaged keys are left
/// in place, and the result is committed through
/// [`QuerySource::replace_query`] even when nothing changed.
///
/// An entry missing from `values` is compared as absent; when that still
/// differs from the default, the encoder receives [`Value::Null`].
///
/// # Errors
///
/// Unlike [`get_values_from_uri`], failures here propagate: a failing
/// encoder or an unavailable [`QuerySource`] returns an error and the query
/// string is left as it was.
///
/// [`get_values_from_uri`]: crate::get_values_from_uri
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use uri_state::{set_values_to_uri, Keys, MemoryQuerySource, QuerySource, StateMap};
///
/// let source = MemoryQuerySource::with_query("zumg=borg&donk=wuut");
///
/// let mut values = StateMap::new();
/// values.insert("donk".into(), json!("dink"));
/// values.insert("jang".into(), json!("prung"));
/// values.insert("blutz".into(), json!("qyes"));
///
/// let mut defaults = StateMap::new();
/// defaults.insert("donk".into(), json!("dink"));
/// defaults.insert("jang".into(), json!("karoo"));
/// defaults.insert("blutz".into(), json!("yuam"));
///
/// set_values_to_uri(&source, &Keys::from(["donk", "jang", "blutz"]), &values, &defaults)?;
/// assert_eq!(source.query()?, "zumg=borg&jang=prung&blutz=qyes");
/// # Ok::<(), uri_state::UriStateError>(())
/// ```
pub fn set_values_to_uri<S: QuerySource>(
    source: &S,
    keys: &Keys,
    values: &StateMap,
    defaults: &StateMap,
) -> UriStateResult<()> {
    let mut params = QueryMap::parse(&source.query()?);

    for spec in normalize_keys(keys) {
        let value = values.get(&spec.key);
        if (spec.equals)(value, defaults.get(&spec.key)) {
            params.delete(&spec.uri_key);
        } else {
            let encoded = (spec.to_uri)(value.unwrap_or(&Value::Null))?;
            params.set(spec.uri_key, encoded);
        }
    }

    let serialized = params.to_query_string();
    tracing::trace!(query = %serialized, "replacing query string");
    source.replace_query(&serialized)
}
