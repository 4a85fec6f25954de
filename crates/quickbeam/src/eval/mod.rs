//! Expression evaluation

pub mod array;
pub mod binary;
pub mod call;
pub mod conditional;
pub mod identifier;
pub mod literal;
pub mod member;
pub mod unary;

use crate::ast::Node;
use crate::{Environment, EvalError, Value};

/// Trait for evaluating tree nodes to values.
///
/// This is the core abstraction for the tree-walking evaluator. Each node
/// payload implements it; [`Node`] dispatches on its kind.
pub trait Evaluate {
    /// Evaluate this node against the environment's context.
    fn eval(&self, env: &mut Environment<'_>) -> Result<Value, EvalError>;
}

// ═══════════════════════════════════════════════════════════════════════
// Main Node Dispatcher
// ═══════════════════════════════════════════════════════════════════════

impl Evaluate for Node {
    fn eval(&self, env: &mut Environment<'_>) -> Result<Value, EvalError> {
        env.enter()?;
        tracing::trace!(kind = self.kind(), depth = env.depth(), "evaluating node");

        let result = match self {
            Node::Literal(node) => node.eval(env),
            Node::Identifier(node) => node.eval(env),
            Node::This => Ok(env.context().clone()),
            Node::Array(node) => node.eval(env),
            Node::Unary(node) => node.eval(env),
            Node::Binary(node) | Node::Logical(node) => node.eval(env),
            Node::Member(node) => node.eval(env),
            Node::Call(node) => node.eval(env),
            Node::Conditional(node) => node.eval(env),

            // Sequences and node kinds outside the closed set
            Node::Compound(_) | Node::Unknown => Ok(Value::Undefined),
        };

        env.exit();
        result
    }
}

/// Evaluate a list of nodes left to right.
pub fn eval_all(nodes: &[Node], env: &mut Environment<'_>) -> Result<Vec<Value>, EvalError> {
    nodes.iter().map(|node| node.eval(env)).collect()
}
