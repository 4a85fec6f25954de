//! Equality and relational operators

use std::cmp::Ordering;
use std::sync::Arc;

use crate::value::Value;

/// `===`: same type and same value; compound values compare by identity.
pub fn strict_equals(left: &Value, right: &Value) -> bool {
    match (left, right) {
        (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
        (Value::Bool(a), Value::Bool(b)) => a == b,
        (Value::Number(a), Value::Number(b)) => a == b,
        (Value::String(a), Value::String(b)) => a == b,
        (Value::Array(a), Value::Array(b)) => Arc::ptr_eq(a, b),
        (Value::Object(a), Value::Object(b)) => Arc::ptr_eq(a, b),
        (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
        _ => false,
    }
}

fn is_compound(value: &Value) -> bool {
    matches!(
        value,
        Value::Array(_) | Value::Object(_) | Value::Function(_)
    )
}

fn same_type(left: &Value, right: &Value) -> bool {
    std::mem::discriminant(left) == std::mem::discriminant(right)
        || (is_compound(left) && is_compound(right))
}

/// `==`: equality after type coercion.
pub fn loose_equals(left: &Value, right: &Value) -> bool {
    if same_type(left, right) {
        return strict_equals(left, right);
    }

    match (left, right) {
        (Value::Undefined | Value::Null, Value::Undefined | Value::Null) => true,
        (Value::Number(a), Value::String(_)) => *a == right.to_number(),
        (Value::String(_), Value::Number(b)) => left.to_number() == *b,
        (Value::Bool(_), _) => loose_equals(&Value::Number(left.to_number()), right),
        (_, Value::Bool(_)) => loose_equals(left, &Value::Number(right.to_number())),
        (l, Value::Number(_) | Value::String(_)) if is_compound(l) => {
            loose_equals(&l.to_primitive(), right)
        }
        (Value::Number(_) | Value::String(_), r) if is_compound(r) => {
            loose_equals(left, &r.to_primitive())
        }
        _ => false,
    }
}

/// Relational comparison; `None` when either side converts to `NaN`.
///
/// Two strings compare by UTF-16 code units, anything else numerically.
fn compare(left: &Value, right: &Value) -> Option<Ordering> {
    let left = left.to_primitive();
    let right = right.to_primitive();

    if let (Value::String(a), Value::String(b)) = (&left, &right) {
        return Some(a.encode_utf16().cmp(b.encode_utf16()));
    }

    left.to_number().partial_cmp(&right.to_number())
}

/// `==`
pub fn loose_eq(left: &Value, right: &Value) -> Value {
    Value::Bool(loose_equals(left, right))
}

/// `!=`
pub fn loose_ne(left: &Value, right: &Value) -> Value {
    Value::Bool(!loose_equals(left, right))
}

/// `===`
pub fn strict_eq(left: &Value, right: &Value) -> Value {
    Value::Bool(strict_equals(left, right))
}

/// `!==`
pub fn strict_ne(left: &Value, right: &Value) -> Value {
    Value::Bool(!strict_equals(left, right))
}

/// `<`
pub fn lt(left: &Value, right: &Value) -> Value {
    Value::Bool(compare(left, right) == Some(Ordering::Less))
}

/// `>`
pub fn gt(left: &Value, right: &Value) -> Value {
    Value::Bool(compare(left, right) == Some(Ordering::Greater))
}

/// `<=`
pub fn le(left: &Value, right: &Value) -> Value {
    Value::Bool(matches!(
        compare(left, right),
        Some(Ordering::Less | Ordering::Equal)
    ))
}

/// `>=`
pub fn ge(left: &Value, right: &Value) -> Value {
    Value::Bool(matches!(
        compare(left, right),
        Some(Ordering::Greater | Ordering::Equal)
    ))
}
