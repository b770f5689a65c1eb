//! Binding a state shape to the query string as a get/set pair.

use serde::{Deserialize, Serialize};

use crate::error::UriStateResult;
use crate::keys::Keys;
use crate::read::get_values_from_uri;
use crate::source::QuerySource;
use crate::write::set_values_to_uri;
use crate::StateMap;

/// Payload handed to the setter half of [`state_to_uri`].
///
/// Mirrors the shape state containers hand to their persistence hooks, so
/// the setter can be wired in directly as one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    /// The full current state to synchronize.
    pub state: StateMap,
}

impl From<StateMap> for Update {
    fn from(state: StateMap) -> Self {
        Self { state }
    }
}

/// Bind an initial state shape to the query string, returning a `(get, set)`
/// pair.
///
/// `initial_state` doubles as the defaults object: the getter overlays it
/// with whatever the query string holds, and the setter elides any value
/// still equal to it. When `keys` is `None`, every key of `initial_state`
/// is managed with all-default bindings, in its insertion order.
///
/// The getter never fails (see [`get_values_from_uri`]); the setter returns
/// any encode or source error (see [`set_values_to_uri`]).
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use uri_state::{state_to_uri, MemoryQuerySource, QuerySource, StateMap, Update};
///
/// let source = MemoryQuerySource::new();
///
/// let mut initial = StateMap::new();
/// initial.insert("groo".into(), json!("durk"));
/// initial.insert("froo".into(), json!("gurk"));
///
/// let (get, set) = state_to_uri(source.clone(), initial.clone(), None);
///
/// // Nothing in the query string yet: the getter returns the defaults.
/// assert_eq!(get(), initial);
///
/// // Writing the defaults back leaves the query string empty.
/// set(Update { state: initial.clone() })?;
/// assert_eq!(source.query()?, "");
/// # Ok::<(), uri_state::UriStateError>(())
/// ```
pub fn state_to_uri<S>(
    source: S,
    initial_state: StateMap,
    keys: Option<Keys>,
) -> (
    impl Fn() -> StateMap,
    impl Fn(Update) -> UriStateResult<()>,
)
where
    S: QuerySource + Clone,
{
    let keys = keys.unwrap_or_else(|| Keys::List(initial_state.keys().cloned().collect()));

    let get = {
        let source = source.clone();
        let keys = keys.clone();
        let defaults = initial_state.clone();
        move || get_values_from_uri(&source, &keys, &defaults)
    };

    let set =
        move |update: Update| set_values_to_uri(&source, &keys, &update.state, &initial_state);

    (get, set)
}
