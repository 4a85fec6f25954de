//! Evaluator instances
//!
//! An [`Evaluator`] bundles an operator registry, a parser frontend and a
//! configuration. Instances are independent: operators registered on one
//! are invisible to every other. The frontend, on the other hand, is shared
//! by default, so symbols taught to the parser are visible to every
//! evaluator built on it.

use std::fmt;
use std::sync::{Arc, OnceLock};

use crate::ast::{MemberExpression, Node};
use crate::config::EvalConfig;
use crate::environment::Environment;
use crate::error::{EvalError, Result};
use crate::eval::member::eval_member;
use crate::eval::Evaluate;
use crate::frontend::{Frontend, ParseError};
use crate::frontends::default_frontend;
use crate::registry::{BinaryOverrideFn, OperatorRegistry, UnaryOverrideFn};
use crate::value::Value;

/// An expression evaluator with its own operator tables.
///
/// # Example
///
/// ```
/// use quickbeam::{Evaluator, Object, Value};
///
/// let evaluator = Evaluator::new();
/// let context = Value::object(Object::new().with("one", 1).with("two", 2));
///
/// let sum = evaluator.eval_str("one + two * 2", &context).unwrap();
/// assert_eq!(sum, Value::from(5));
/// ```
pub struct Evaluator {
    registry: OperatorRegistry,
    frontend: Arc<dyn Frontend>,
    config: EvalConfig,
}

impl Default for Evaluator {
    fn default() -> Self {
        Self::new()
    }
}

impl Evaluator {
    /// Create an evaluator with the default operators, using the shared
    /// process-wide parser.
    pub fn new() -> Self {
        Self::with_frontend(default_frontend())
    }

    /// Create an evaluator with the default operators and its own parser.
    pub fn with_frontend(frontend: Arc<dyn Frontend>) -> Self {
        Self {
            registry: OperatorRegistry::new(),
            frontend,
            config: EvalConfig::default(),
        }
    }

    /// Replace the evaluation configuration.
    pub fn with_config(mut self, config: EvalConfig) -> Self {
        self.config = config;
        self
    }

    /// The operator registry of this instance.
    pub fn registry(&self) -> &OperatorRegistry {
        &self.registry
    }

    /// The parser frontend of this instance.
    pub fn frontend(&self) -> &dyn Frontend {
        self.frontend.as_ref()
    }

    /// The evaluation configuration.
    pub fn config(&self) -> &EvalConfig {
        &self.config
    }

    // ═══════════════════════════════════════════════════════════════════
    // Parsing and Evaluation
    // ═══════════════════════════════════════════════════════════════════

    /// Parse expression text with this instance's frontend.
    pub fn parse(&self, source: &str) -> std::result::Result<Node, ParseError> {
        self.frontend.parse(source)
    }

    /// Evaluate a tree against a context.
    ///
    /// Identifiers resolve to the context's properties and `this` to the
    /// context itself. The tree is only read, so it can be evaluated any
    /// number of times.
    ///
    /// # Errors
    ///
    /// Returns `EvalError` when an operator is unknown or fails, a native
    /// function fails, or the configured depth limit is exceeded.
    #[tracing::instrument(level = "trace", skip_all, fields(kind = node.kind()))]
    pub fn evaluate(&self, node: &Node, context: &Value) -> std::result::Result<Value, EvalError> {
        let mut env = Environment::new(&self.registry, &self.config, context);
        node.eval(&mut env)
    }

    /// Evaluate a member access, returning `(receiver, value)`.
    pub fn evaluate_member(
        &self,
        expr: &MemberExpression,
        context: &Value,
    ) -> std::result::Result<(Value, Value), EvalError> {
        let mut env = Environment::new(&self.registry, &self.config, context);
        eval_member(expr, &mut env)
    }

    /// Parse once, for repeated evaluation against different contexts.
    pub fn compile(&self, source: &str) -> std::result::Result<Compiled<'_>, ParseError> {
        let ast = self.parse(source)?;
        tracing::debug!(source, kind = ast.kind(), "compiled expression");
        Ok(Compiled {
            evaluator: self,
            ast,
        })
    }

    /// Parse and evaluate in one step.
    pub fn eval_str(&self, source: &str, context: &Value) -> Result<Value> {
        let ast = self.parse(source)?;
        Ok(self.evaluate(&ast, context)?)
    }

    // ═══════════════════════════════════════════════════════════════════
    // Operator Registration
    // ═══════════════════════════════════════════════════════════════════

    /// Define or replace a unary operator on this instance only.
    ///
    /// A symbol the parser does not know also needs
    /// [`add_parser_unary_op`](crate::add_parser_unary_op).
    pub fn add_unary_operator<F>(&self, symbol: impl Into<String>, op: F)
    where
        F: Fn(&Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        self.registry.register_unary(symbol, op);
    }

    /// Define or replace a binary operator on this instance only.
    ///
    /// A symbol the parser does not know also needs
    /// [`add_parser_binary_op`](crate::add_parser_binary_op).
    pub fn add_binary_operator<F>(&self, symbol: impl Into<String>, op: F)
    where
        F: Fn(&Value, &Value) -> std::result::Result<Value, String> + Send + Sync + 'static,
    {
        self.registry.register_binary(symbol, op);
    }

    /// Install or clear (`None`) the hook that receives every unary
    /// operator application.
    pub fn set_unary_override(&self, hook: Option<UnaryOverrideFn>) {
        self.registry.set_unary_override(hook);
    }

    /// Install or clear (`None`) the hook that receives every binary and
    /// logical operator application, with both operands evaluated.
    pub fn set_binary_override(&self, hook: Option<BinaryOverrideFn>) {
        self.registry.set_binary_override(hook);
    }
}

impl fmt::Debug for Evaluator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Evaluator")
            .field("frontend", &self.frontend.name())
            .field("registry", &self.registry)
            .field("config", &self.config)
            .finish()
    }
}

/// The shared instance behind the crate-level functions.
pub fn default_evaluator() -> &'static Evaluator {
    static DEFAULT: OnceLock<Evaluator> = OnceLock::new();
    DEFAULT.get_or_init(Evaluator::new)
}

// ═══════════════════════════════════════════════════════════════════════
// Compiled Expressions
// ═══════════════════════════════════════════════════════════════════════

/// A parsed expression bound to the evaluator that compiled it.
#[derive(Debug, Clone)]
pub struct Compiled<'e> {
    evaluator: &'e Evaluator,
    ast: Node,
}

impl<'e> Compiled<'e> {
    /// Evaluate against a context.
    pub fn call(&self, context: &Value) -> std::result::Result<Value, EvalError> {
        self.evaluator.evaluate(&self.ast, context)
    }

    /// The parsed tree.
    pub fn ast(&self) -> &Node {
        &self.ast
    }

    /// Turn into a plain closure.
    pub fn into_fn(self) -> impl Fn(&Value) -> std::result::Result<Value, EvalError> + 'e {
        move |context| self.call(context)
    }
}
