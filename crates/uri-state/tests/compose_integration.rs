//! Integration tests for the composed `(get, set)` pair.

use serde_json::{json, Value};
use uri_state::{
    state_to_uri, KeyOptions, Keys, MemoryQuerySource, QuerySource, StateMap, Update,
};

fn state(entries: &[(&str, Value)]) -> StateMap {
    entries
        .iter()
        .map(|(k, v)| ((*k).to_owned(), v.clone()))
        .collect()
}

// ============================================================================
// Getter
// ============================================================================

#[test]
fn test_get_returns_initial_state_for_empty_query() {
    let source = MemoryQuerySource::new();
    let initial = state(&[("groo", json!("durk")), ("froo", json!("gurk"))]);
    let (get, _set) = state_to_uri(source, initial.clone(), None);
    assert_eq!(get(), initial);
}

#[test]
fn test_get_overlays_query_values() {
    let source = MemoryQuerySource::with_query("groo=mlem");
    let initial = state(&[("groo", json!("durk")), ("froo", json!("gurk"))]);
    let (get, _set) = state_to_uri(source, initial, None);
    assert_eq!(
        get(),
        state(&[("groo", json!("mlem")), ("froo", json!("gurk"))])
    );
}

// ============================================================================
// Setter
// ============================================================================

#[test]
fn test_set_initial_state_produces_empty_query() {
    let source = MemoryQuerySource::with_query("groo=tronk&froo=engum");
    let initial = state(&[("groo", json!("durk")), ("froo", json!("gurk"))]);
    let (_get, set) = state_to_uri(source.clone(), initial.clone(), None);
    set(Update { state: initial }).unwrap();
    assert_eq!(source.query().unwrap(), "");
}

#[test]
fn test_set_clears_stale_managed_pairs() {
    let source = MemoryQuerySource::with_query("groo=stale&keep=1");
    let initial = state(&[("groo", json!("durk"))]);
    let (_get, set) = state_to_uri(source.clone(), initial.clone(), None);
    set(Update { state: initial }).unwrap();
    assert_eq!(source.query().unwrap(), "keep=1");
}

#[test]
fn test_set_writes_in_initial_state_order() {
    let source = MemoryQuerySource::new();
    let initial = state(&[("b", json!("1")), ("a", json!("2"))]);
    let (_get, set) = state_to_uri(source.clone(), initial, None);
    set(state(&[("b", json!("x")), ("a", json!("y"))]).into()).unwrap();
    assert_eq!(source.query().unwrap(), "b=x&a=y");
}

#[test]
fn test_set_replaces_prior_managed_values_in_place() {
    let source = MemoryQuerySource::with_query("groo=zond&froo=uyup");
    let initial = state(&[("groo", json!("durk")), ("froo", json!("gurk"))]);
    let (_get, set) = state_to_uri(source.clone(), initial, None);
    set(state(&[("groo", json!("pockle")), ("froo", json!("burk"))]).into()).unwrap();
    assert_eq!(source.query().unwrap(), "groo=pockle&froo=burk");
}

#[test]
fn test_repeated_sets_last_wins() {
    let source = MemoryQuerySource::new();
    let initial = state(&[("groo", json!("durk"))]);
    let (_get, set) = state_to_uri(source.clone(), initial, None);
    set(state(&[("groo", json!("one"))]).into()).unwrap();
    set(state(&[("groo", json!("two"))]).into()).unwrap();
    assert_eq!(source.query().unwrap(), "groo=two");
}

// ============================================================================
// Full cycles
// ============================================================================

#[test]
fn test_set_then_get_restores_state() {
    let source = MemoryQuerySource::new();
    let initial = state(&[("groo", json!("durk")), ("froo", json!("gurk"))]);
    let (get, set) = state_to_uri(source, initial.clone(), None);

    let changed = state(&[("groo", json!("mlem")), ("froo", json!("gurk"))]);
    set(changed.clone().into()).unwrap();
    assert_eq!(get(), changed);
}

#[test]
fn test_unmanaged_pairs_survive_a_cycle() {
    let source = MemoryQuerySource::with_query("ref=abc");
    let initial = state(&[("groo", json!("durk"))]);
    let (get, set) = state_to_uri(source.clone(), initial, None);

    set(state(&[("groo", json!("mlem"))]).into()).unwrap();
    assert_eq!(source.query().unwrap(), "ref=abc&groo=mlem");
    assert!(!get().contains_key("ref"));
}

#[test]
fn test_explicit_keys_with_options() {
    let source = MemoryQuerySource::new();
    let initial = state(&[("page", json!("1")), ("query", json!(""))]);
    let keys = Keys::from([
        ("page", KeyOptions::new().with_uri_key("p")),
        ("query", KeyOptions::new().with_uri_key("q")),
    ]);
    let (get, set) = state_to_uri(source.clone(), initial, Some(keys));

    let changed = state(&[("page", json!("2")), ("query", json!("crabs"))]);
    set(changed.clone().into()).unwrap();
    assert_eq!(source.query().unwrap(), "p=2&q=crabs");
    assert_eq!(get(), changed);
}

// ============================================================================
// Update payload
// ============================================================================

#[test]
fn test_update_deserializes_from_json() {
    let update: Update = serde_json::from_str(r#"{"state":{"groo":"mlem"}}"#).unwrap();
    assert_eq!(update.state.get("groo"), Some(&json!("mlem")));
}

#[test]
fn test_update_serializes_to_json() {
    let update = Update {
        state: state(&[("groo", json!("mlem"))]),
    };
    assert_eq!(
        serde_json::to_string(&update).unwrap(),
        r#"{"state":{"groo":"mlem"}}"#
    );
}
