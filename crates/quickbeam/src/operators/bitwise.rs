//! Bitwise and shift operators on 32-bit integer interpretations

use crate::value::Value;

macro_rules! impl_bitwise {
    ($name:ident, $op:tt, $doc:expr) => {
        #[doc = $doc]
        pub fn $name(left: &Value, right: &Value) -> Value {
            Value::from(left.to_int32() $op right.to_int32())
        }
    };
}

impl_bitwise!(bit_or, |, "`|`");
impl_bitwise!(bit_xor, ^, "`^`");
impl_bitwise!(bit_and, &, "`&`");

/// `<<`: the shift count uses its low five bits.
pub fn shl(left: &Value, right: &Value) -> Value {
    Value::from(left.to_int32().wrapping_shl(right.to_uint32() & 31))
}

/// `>>`: sign-propagating right shift.
pub fn shr(left: &Value, right: &Value) -> Value {
    Value::from(left.to_int32().wrapping_shr(right.to_uint32() & 31))
}

/// `>>>`: zero-filling right shift, producing an unsigned result.
pub fn ushr(left: &Value, right: &Value) -> Value {
    Value::from(left.to_uint32().wrapping_shr(right.to_uint32() & 31))
}
