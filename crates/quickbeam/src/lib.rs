//! # Quickbeam
//!
//! An evaluator for JavaScript-style expression trees.
//!
//! Quickbeam walks an ESTree-shaped [`Node`] tree and computes a [`Value`]
//! against a caller-supplied context object. It is deliberately small:
//! literals, identifiers, `this`, arrays, member access, calls to native
//! functions, `?:`, and a per-instance table of unary and binary operators
//! that hosts can extend or override.
//!
//! ## Architecture
//!
//! - **Frontend**: turns expression text into a [`Node`] tree. The bundled
//!   [`JsepFrontend`] parses jsep syntax; [`JsonFrontend`] accepts trees
//!   serialized elsewhere.
//! - **Evaluator**: owns an [`OperatorRegistry`] and walks the tree.
//!   Instances never share operator definitions.
//! - **Values**: a dynamic [`Value`] with the host language's coercions.
//!
//! ## Example
//!
//! ```
//! use quickbeam::{Object, Value};
//!
//! let context = Value::object(Object::new().with("one", 1).with("two", 2));
//! let answer = quickbeam::eval_str("(one + two) * 2 > 5 ? 'yes' : 'no'", &context).unwrap();
//! assert_eq!(answer, Value::from("yes"));
//! ```
//!
//! New operators take two steps: teach the parser the symbol, then give it
//! meaning on an evaluator.
//!
//! ```
//! use quickbeam::{Evaluator, Value};
//!
//! quickbeam::add_parser_binary_op("**", 11);
//!
//! let evaluator = Evaluator::new();
//! evaluator.add_binary_operator("**", |a, b| Ok(Value::from(a.to_number().powf(b.to_number()))));
//! assert_eq!(evaluator.eval_str("2 ** 10", &Value::Undefined).unwrap(), Value::from(1024));
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod ast;
pub mod config;
pub mod environment;
pub mod error;
pub mod eval;
pub mod evaluator;
pub mod frontend;
pub mod frontends;
pub mod operators;
pub mod registry;
pub mod value;

// Re-export main types
pub use ast::Node;
pub use config::EvalConfig;
pub use environment::Environment;
pub use error::{EvalError, OperatorKind, QuickbeamError, Result};
pub use eval::Evaluate;
pub use evaluator::{default_evaluator, Compiled, Evaluator};
pub use frontend::{Frontend, ParseError};
pub use frontends::{JsepFrontend, JsonFrontend};
pub use registry::{
    BinaryDispatch, BinaryOpFn, BinaryOverrideFn, OperatorRegistry, ShortCircuit, UnaryDispatch,
    UnaryOpFn, UnaryOverrideFn,
};
pub use value::{NativeFn, NativeFnPtr, Object, PropertyKey, Value};

/// Quickbeam version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// ═══════════════════════════════════════════════════════════════════════
// Shared Default Instance
// ═══════════════════════════════════════════════════════════════════════

/// Parse expression text with the shared parser.
pub fn parse(source: &str) -> std::result::Result<Node, ParseError> {
    frontends::default_frontend().parse(source)
}

/// Evaluate a tree on the shared evaluator.
pub fn evaluate(node: &Node, context: &Value) -> std::result::Result<Value, EvalError> {
    default_evaluator().evaluate(node, context)
}

/// Parse once on the shared evaluator, for repeated evaluation.
pub fn compile(source: &str) -> std::result::Result<Compiled<'static>, ParseError> {
    default_evaluator().compile(source)
}

/// Parse and evaluate on the shared evaluator.
pub fn eval_str(source: &str, context: &Value) -> Result<Value> {
    default_evaluator().eval_str(source, context)
}

/// Define or replace a unary operator on the shared evaluator.
pub fn add_unary_operator<F>(symbol: impl Into<String>, op: F)
where
    F: Fn(&Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
{
    default_evaluator().add_unary_operator(symbol, op);
}

/// Define or replace a binary operator on the shared evaluator.
pub fn add_binary_operator<F>(symbol: impl Into<String>, op: F)
where
    F: Fn(&Value, &Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
{
    default_evaluator().add_binary_operator(symbol, op);
}

/// Teach the shared parser a prefix operator symbol.
///
/// Every evaluator built with [`Evaluator::new`] parses through this
/// parser, so the symbol becomes syntax for all of them; each still needs
/// its own [`Evaluator::add_unary_operator`] to give it meaning.
pub fn add_parser_unary_op(symbol: &str) {
    frontends::default_frontend().add_unary_op(symbol);
}

/// Teach the shared parser an infix operator symbol.
///
/// `precedence` follows the default table, from 1 (`||`) to 10 (`*`).
pub fn add_parser_binary_op(symbol: &str, precedence: u8) {
    frontends::default_frontend().add_binary_op(symbol, precedence);
}
