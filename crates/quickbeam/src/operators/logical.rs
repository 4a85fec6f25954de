//! Logical operators
//!
//! As table entries these see both operands already evaluated. The
//! evaluator only calls them after deciding the left operand does not
//! settle the result on its own, so in that path they return the right
//! operand. They only observe both sides in full when reached through a
//! binary override or a direct call.

use crate::value::Value;

/// `||`: the left operand when truthy, otherwise the right.
pub fn or(left: &Value, right: &Value) -> Value {
    if left.is_truthy() {
        left.clone()
    } else {
        right.clone()
    }
}

/// `&&`: the left operand when falsy, otherwise the right.
pub fn and(left: &Value, right: &Value) -> Value {
    if left.is_truthy() {
        right.clone()
    } else {
        left.clone()
    }
}
