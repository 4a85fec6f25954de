//! Arithmetic operators

use crate::value::Value;

/// `+`: string concatenation when either primitive operand is a string,
/// numeric addition otherwise.
pub fn add(left: &Value, right: &Value) -> Value {
    let left = left.to_primitive();
    let right = right.to_primitive();

    if left.is_string() || right.is_string() {
        let mut out = left.to_js_string();
        out.push_str(&right.to_js_string());
        return Value::string(out);
    }

    Value::Number(left.to_number() + right.to_number())
}

/// `-`
pub fn sub(left: &Value, right: &Value) -> Value {
    Value::Number(left.to_number() - right.to_number())
}

/// `*`
pub fn mul(left: &Value, right: &Value) -> Value {
    Value::Number(left.to_number() * right.to_number())
}

/// `/`: division by zero yields an infinity or `NaN`, never an error.
pub fn div(left: &Value, right: &Value) -> Value {
    Value::Number(left.to_number() / right.to_number())
}

/// `%`: truncating remainder, taking the sign of the dividend.
pub fn rem(left: &Value, right: &Value) -> Value {
    Value::Number(left.to_number() % right.to_number())
}
