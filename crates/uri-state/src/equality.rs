//! Default value equality for elision decisions.
//!
//! The reader and writer elide a key whenever its value "equals" its
//! default. The default notion of equality here is identity-style, not
//! structural: it mirrors what a strict same-value comparison does for
//! primitives, and treats composites as never identical.

use serde_json::Value;

/// Identity-style equality over optional state values.
///
/// This is the default comparator installed by [`KeySpec`] normalization.
/// Its contract, precisely:
///
/// - Two absent entries (`None`) are equal; absent never equals present.
/// - `null`, booleans, and strings compare by value.
/// - Numbers compare as the same mathematical value where exactly
///   representable, with IEEE bit semantics for floats: `1` equals `1.0`,
///   while `+0.0` and `-0.0` are distinct (and an integer `0` sides with
///   `+0.0`). `NaN` cannot arise: [`serde_json`]'s number type has no
///   NaN or infinite representation.
/// - Arrays and objects are **never** equal, not even to structurally
///   identical copies. Owned values have no reference identity, and this
///   comparator deliberately does not substitute structural equality for
///   it. Keys holding structured values need a caller-supplied comparator.
///
/// [`KeySpec`]: crate::KeySpec
///
/// # Examples
///
/// ```
/// use serde_json::json;
/// use uri_state::same_value;
///
/// assert!(same_value(None, None));
/// assert!(!same_value(Some(&json!(null)), None));
/// assert!(same_value(Some(&json!("a")), Some(&json!("a"))));
/// assert!(same_value(Some(&json!(1)), Some(&json!(1.0))));
/// assert!(!same_value(Some(&json!(0.0)), Some(&json!(-0.0))));
/// assert!(!same_value(Some(&json!([1])), Some(&json!([1]))));
/// ```
pub fn same_value(a: Option<&Value>, b: Option<&Value>) -> bool {
    match (a, b) {
        (None, None) => true,
        (Some(a), Some(b)) => present_same_value(a, b),
        _ => false,
    }
}

fn present_same_value(a: &Value, b: &Value) -> bool {
    match (a, b) {
        (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => number_same_value(a, b),
        // Composites carry identity semantics: distinct values never match.
        _ => false,
    }
}

fn number_same_value(a: &serde_json::Number, b: &serde_json::Number) -> bool {
    if let (Some(a), Some(b)) = (a.as_i64(), b.as_i64()) {
        return a == b;
    }
    if let (Some(a), Some(b)) = (a.as_u64(), b.as_u64()) {
        return a == b;
    }
    // At least one side is a float: compare bit patterns so that the two
    // zero signs stay distinct while equal int/float values match.
    match (a.as_f64(), b.as_f64()) {
        (Some(a), Some(b)) => a.to_bits() == b.to_bits(),
        _ => false,
    }
}
