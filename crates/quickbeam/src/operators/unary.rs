//! Unary operators

use crate::value::Value;

/// `-`: numeric negation.
pub fn neg(operand: &Value) -> Value {
    Value::Number(-operand.to_number())
}

/// `+`: numeric conversion.
pub fn plus(operand: &Value) -> Value {
    Value::Number(operand.to_number())
}

/// `~`: bitwise complement of the 32-bit interpretation.
pub fn bit_not(operand: &Value) -> Value {
    Value::from(!operand.to_int32())
}

/// `!`: logical negation of truthiness.
pub fn not(operand: &Value) -> Value {
    Value::Bool(!operand.is_truthy())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_neg() {
        assert_eq!(neg(&Value::from(1)), Value::from(-1));
        assert_eq!(neg(&Value::from("3")), Value::from(-3));
    }

    #[test]
    fn test_plus_converts() {
        assert_eq!(plus(&Value::from("2")), Value::from(2));
        assert_eq!(plus(&Value::from(true)), Value::from(1));
        assert!(plus(&Value::from("abc")).as_f64().unwrap().is_nan());
    }

    #[test]
    fn test_bit_not() {
        assert_eq!(bit_not(&Value::from(15)), Value::from(-16));
    }

    #[test]
    fn test_not() {
        assert_eq!(not(&Value::from(false)), Value::Bool(true));
        assert_eq!(not(&Value::from("")), Value::Bool(true));
        assert_eq!(not(&Value::array(vec![])), Value::Bool(false));
    }
}
