//! Error types for Quickbeam evaluation

use std::fmt;

use thiserror::Error;

use crate::frontend::ParseError;
use crate::value::Value;

/// Which operator table a symbol was looked up in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperatorKind {
    /// Prefix operators such as `-x` or `!x`
    Unary,
    /// Infix operators, including the logical `||` and `&&`
    Binary,
}

impl fmt::Display for OperatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OperatorKind::Unary => write!(f, "unary"),
            OperatorKind::Binary => write!(f, "binary"),
        }
    }
}

/// Errors raised while evaluating an expression tree.
///
/// Evaluation is permissive: missing identifiers, members of missing
/// receivers and calls to non-functions all produce [`Value::Undefined`].
/// Only the conditions below abort an evaluation.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum EvalError {
    /// The tree uses an operator with no implementation and no override
    #[error("unknown {kind} operator `{op}`")]
    UnknownOperator {
        /// The operator symbol
        op: String,
        /// The table that was searched
        kind: OperatorKind,
    },

    /// A registered operator implementation reported a failure
    #[error("operator `{op}` failed: {message}")]
    Operator {
        /// The operator symbol
        op: String,
        /// Message returned by the implementation
        message: String,
    },

    /// A native function reported a failure
    #[error("error in native function `{name}`: {message}")]
    Native {
        /// Function name
        name: String,
        /// Message returned by the function
        message: String,
    },

    /// The configured nesting limit was reached
    #[error("expression nesting exceeds the configured limit of {limit}")]
    DepthExceeded {
        /// The configured limit
        limit: usize,
    },
}

/// Umbrella error for operations that parse and then evaluate.
#[derive(Error, Debug)]
pub enum QuickbeamError {
    /// The frontend rejected the expression text
    #[error(transparent)]
    Parse(#[from] ParseError),

    /// Evaluation of the parsed tree failed
    #[error(transparent)]
    Eval(#[from] EvalError),
}

/// Result type alias for Quickbeam operations
pub type Result<T> = std::result::Result<T, QuickbeamError>;

/// Get the `typeof`-style name of a value for messages.
pub fn type_name(value: &Value) -> &'static str {
    match value {
        Value::Undefined => "undefined",
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
        Value::Function(_) => "function",
    }
}
