//! Type coercions and member lookup
//!
//! These follow the dynamic host semantics the expression syntax comes
//! from: truthiness, numeric conversion, string conversion, 32-bit integer
//! wrapping and keyed property access.

use std::sync::Arc;

use super::Value;

/// A property key, as produced by a member access.
///
/// Non-negative integral numbers stay numeric so arrays can be indexed
/// without a string round-trip; everything else becomes a string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PropertyKey {
    /// Canonical array index
    Index(usize),
    /// Named property
    Name(String),
}

impl PropertyKey {
    /// Convert an evaluated value into a property key.
    pub fn from_value(value: &Value) -> Self {
        match value {
            Value::Number(n) if n.fract() == 0.0 && *n >= 0.0 && *n <= u32::MAX as f64 => {
                PropertyKey::Index(*n as usize)
            }
            Value::String(s) => PropertyKey::from_name(s.as_str()),
            other => PropertyKey::from_name(&other.to_js_string()),
        }
    }

    /// Build a key from a property name, recognizing canonical indices.
    pub fn from_name(name: &str) -> Self {
        match name.parse::<usize>() {
            Ok(index) if index.to_string() == name => PropertyKey::Index(index),
            _ => PropertyKey::Name(name.to_string()),
        }
    }

    fn as_name(&self) -> std::borrow::Cow<'_, str> {
        match self {
            PropertyKey::Index(i) => std::borrow::Cow::Owned(i.to_string()),
            PropertyKey::Name(n) => std::borrow::Cow::Borrowed(n.as_str()),
        }
    }
}

impl Value {
    // ═══════════════════════════════════════════════════════════════════
    // Truthiness
    // ═══════════════════════════════════════════════════════════════════

    /// Boolean coercion used by conditionals and short-circuit operators.
    ///
    /// `undefined`, `null`, `false`, `0`, `-0`, `NaN` and `""` are falsy;
    /// everything else (including empty arrays and objects) is truthy.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Undefined | Value::Null => false,
            Value::Bool(b) => *b,
            Value::Number(n) => *n != 0.0 && !n.is_nan(),
            Value::String(s) => !s.is_empty(),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => true,
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Primitive Conversion
    // ═══════════════════════════════════════════════════════════════════

    /// Reduce compound values to a primitive.
    ///
    /// Arrays join their elements with `,`, objects become
    /// `[object Object]` and functions render a native stub.
    pub fn to_primitive(&self) -> Value {
        match self {
            Value::Array(_) | Value::Object(_) | Value::Function(_) => {
                Value::string(self.to_js_string())
            }
            other => other.clone(),
        }
    }

    /// Numeric conversion.
    pub fn to_number(&self) -> f64 {
        match self {
            Value::Undefined => f64::NAN,
            Value::Null => 0.0,
            Value::Bool(true) => 1.0,
            Value::Bool(false) => 0.0,
            Value::Number(n) => *n,
            Value::String(s) => string_to_number(s),
            Value::Array(_) | Value::Object(_) | Value::Function(_) => {
                self.to_primitive().to_number()
            }
        }
    }

    /// String conversion, as used by `+` concatenation and property keys.
    pub fn to_js_string(&self) -> String {
        match self {
            Value::Undefined => "undefined".to_string(),
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(n) => number_to_string(*n),
            Value::String(s) => s.as_str().to_string(),
            Value::Array(items) => items
                .iter()
                .map(|item| match item {
                    Value::Undefined | Value::Null => String::new(),
                    other => other.to_js_string(),
                })
                .collect::<Vec<_>>()
                .join(","),
            Value::Object(_) => "[object Object]".to_string(),
            Value::Function(f) => format!("function {}() {{ [native code] }}", f.name),
        }
    }

    /// Wrap to a signed 32-bit integer (modulo 2^32).
    pub fn to_int32(&self) -> i32 {
        wrap_u32(self.to_number()) as i32
    }

    /// Wrap to an unsigned 32-bit integer (modulo 2^32).
    pub fn to_uint32(&self) -> u32 {
        wrap_u32(self.to_number())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Member Lookup
    // ═══════════════════════════════════════════════════════════════════

    /// Look up a property on this value.
    ///
    /// Absent properties, and any lookup on a receiver that has no
    /// properties (including `undefined` and `null`), yield
    /// [`Value::Undefined`] rather than an error.
    pub fn get_member(&self, key: &PropertyKey) -> Value {
        match (self, key) {
            (Value::Object(obj), key) => obj.get(&key.as_name()).cloned().unwrap_or_default(),

            (Value::Array(items), PropertyKey::Index(i)) => {
                items.get(*i).cloned().unwrap_or_default()
            }
            (Value::Array(items), PropertyKey::Name(name)) if name == "length" => {
                Value::from(items.len())
            }

            (Value::String(s), PropertyKey::Index(i)) => s
                .encode_utf16()
                .nth(*i)
                .map(|unit| Value::string(String::from_utf16_lossy(&[unit])))
                .unwrap_or_default(),
            (Value::String(s), PropertyKey::Name(name)) if name == "length" => {
                Value::from(s.encode_utf16().count())
            }

            (Value::Function(f), PropertyKey::Name(name)) if name == "name" => {
                Value::String(Arc::new(f.name.clone()))
            }

            _ => Value::Undefined,
        }
    }

    /// Look up a property by name.
    pub fn get(&self, name: &str) -> Value {
        self.get_member(&PropertyKey::from_name(name))
    }
}

/// Parse a string the way numeric coercion does: surrounding whitespace is
/// ignored, the empty string is zero and anything malformed is `NaN`.
fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    let radix = match trimmed.get(..2) {
        Some("0x") | Some("0X") => Some(16),
        Some("0o") | Some("0O") => Some(8),
        Some("0b") | Some("0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        return u64::from_str_radix(&trimmed[2..], radix)
            .map(|n| n as f64)
            .unwrap_or(f64::NAN);
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    // Rust's float parser also accepts "inf" and "nan", which are not numbers here
    let valid = trimmed
        .chars()
        .all(|c| c.is_ascii_digit() || matches!(c, '.' | 'e' | 'E' | '+' | '-'));
    if !valid {
        return f64::NAN;
    }
    trimmed.parse::<f64>().unwrap_or(f64::NAN)
}

/// Render a number the way string conversion does.
fn number_to_string(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    format!("{}", n)
}

fn wrap_u32(n: f64) -> u32 {
    if !n.is_finite() {
        return 0;
    }
    n.trunc().rem_euclid(4_294_967_296.0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::Object;

    #[test]
    fn test_truthiness() {
        assert!(!Value::Undefined.is_truthy());
        assert!(!Value::Number(f64::NAN).is_truthy());
        assert!(!Value::from("").is_truthy());
        assert!(Value::from("0").is_truthy());
        assert!(Value::array(vec![]).is_truthy());
    }

    #[test]
    fn test_string_to_number() {
        assert_eq!(string_to_number("  42 "), 42.0);
        assert_eq!(string_to_number(""), 0.0);
        assert_eq!(string_to_number("0x1F"), 31.0);
        assert_eq!(string_to_number("1e3"), 1000.0);
        assert!(string_to_number("inf").is_nan());
        assert!(string_to_number("12px").is_nan());
    }

    #[test]
    fn test_number_to_string() {
        assert_eq!(number_to_string(3.0), "3");
        assert_eq!(number_to_string(-0.0), "0");
        assert_eq!(number_to_string(1.5), "1.5");
        assert_eq!(number_to_string(1e21), "1e+21");
        assert_eq!(number_to_string(1e-7), "1e-7");
        assert_eq!(number_to_string(18_446_744_073_709_551_616.0), "18446744073709552000");
        assert_eq!(number_to_string(1.2345678901234568e20), "123456789012345680000");
    }

    #[test]
    fn test_int32_wrapping() {
        assert_eq!(Value::from(-14).to_uint32(), 4_294_967_282);
        assert_eq!(Value::from(4_294_967_296.0 + 5.0).to_int32(), 5);
        assert_eq!(Value::from(2_147_483_648.0).to_int32(), i32::MIN);
        assert_eq!(Value::Number(f64::NAN).to_int32(), 0);
    }

    #[test]
    fn test_array_to_string() {
        let arr = Value::array(vec![Value::from(1), Value::Null, Value::from("x")]);
        assert_eq!(arr.to_js_string(), "1,,x");
    }

    #[test]
    fn test_property_key_canonical_index() {
        assert_eq!(PropertyKey::from_name("3"), PropertyKey::Index(3));
        assert_eq!(
            PropertyKey::from_name("03"),
            PropertyKey::Name("03".to_string())
        );
        assert_eq!(
            PropertyKey::from_value(&Value::from(1.5)),
            PropertyKey::Name("1.5".to_string())
        );
    }

    #[test]
    fn test_get_member() {
        let obj = Value::object(Object::new().with("3", "three"));
        assert_eq!(
            obj.get_member(&PropertyKey::from_value(&Value::from(3))),
            Value::from("three")
        );
        let list = Value::array(vec![Value::from(1), Value::from(2)]);
        assert_eq!(list.get("length"), Value::from(2));
        assert_eq!(list.get("5"), Value::Undefined);
        assert_eq!(Value::from("héllo").get("1"), Value::from("é"));
        assert_eq!(Value::Undefined.get("anything"), Value::Undefined);
    }
}
