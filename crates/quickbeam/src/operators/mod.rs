//! Default operator implementations
//!
//! Every function here works on already evaluated operands and never
//! fails; coercion rules follow the dynamic host semantics described in
//! [`crate::value`]. The registry seeds each new evaluator from the two
//! tables at the bottom of this module.

pub mod arithmetic;
pub mod bitwise;
pub mod comparison;
pub mod logical;
pub mod unary;

use crate::value::Value;

/// Signature of a default binary operator.
pub type BinaryFn = fn(&Value, &Value) -> Value;

/// Signature of a default unary operator.
pub type UnaryFn = fn(&Value) -> Value;

/// The binary and logical operators every evaluator starts with.
pub const DEFAULT_BINARY: &[(&str, BinaryFn)] = &[
    ("||", logical::or),
    ("&&", logical::and),
    ("|", bitwise::bit_or),
    ("^", bitwise::bit_xor),
    ("&", bitwise::bit_and),
    ("==", comparison::loose_eq),
    ("!=", comparison::loose_ne),
    ("===", comparison::strict_eq),
    ("!==", comparison::strict_ne),
    ("<", comparison::lt),
    (">", comparison::gt),
    ("<=", comparison::le),
    (">=", comparison::ge),
    ("<<", bitwise::shl),
    (">>", bitwise::shr),
    (">>>", bitwise::ushr),
    ("+", arithmetic::add),
    ("-", arithmetic::sub),
    ("*", arithmetic::mul),
    ("/", arithmetic::div),
    ("%", arithmetic::rem),
];

/// The unary operators every evaluator starts with.
pub const DEFAULT_UNARY: &[(&str, UnaryFn)] = &[
    ("-", unary::neg),
    ("+", unary::plus),
    ("~", unary::bit_not),
    ("!", unary::not),
];
