//! Operator registry: symbol tables and override hooks
//!
//! Each [`Evaluator`](crate::Evaluator) owns one registry, seeded with the
//! default operators at construction. Registration goes through `&self`:
//! the tables are concurrent maps, so an evaluator shared between threads
//! can be extended while other threads evaluate. An evaluation resolves
//! each operator when it reaches the node, so a registration that lands
//! mid-evaluation is visible to the nodes evaluated after it.

use std::fmt;
use std::sync::{Arc, PoisonError, RwLock};

use dashmap::DashMap;

use crate::error::{EvalError, OperatorKind};
use crate::operators::{DEFAULT_BINARY, DEFAULT_UNARY};
use crate::value::Value;

/// Implementation of a binary or logical operator.
pub type BinaryOpFn = Arc<dyn Fn(&Value, &Value) -> Result<Value, String> + Send + Sync>;

/// Implementation of a unary operator.
pub type UnaryOpFn = Arc<dyn Fn(&Value) -> Result<Value, String> + Send + Sync>;

/// Override receiving the operator symbol and both evaluated operands.
pub type BinaryOverrideFn =
    Arc<dyn Fn(&str, &Value, &Value) -> Result<Value, String> + Send + Sync>;

/// Override receiving the operator symbol and the evaluated operand.
pub type UnaryOverrideFn = Arc<dyn Fn(&str, &Value) -> Result<Value, String> + Send + Sync>;

/// When a short-circuiting operator can skip its right operand.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShortCircuit {
    /// The left operand is the result when truthy (`||`)
    WhenTruthy,
    /// The left operand is the result when falsy (`&&`)
    WhenFalsy,
}

impl ShortCircuit {
    /// Whether the evaluated left operand already decides the result.
    pub fn settles(self, left: &Value) -> bool {
        match self {
            ShortCircuit::WhenTruthy => left.is_truthy(),
            ShortCircuit::WhenFalsy => !left.is_truthy(),
        }
    }
}

/// A resolved binary operator, ready to apply.
#[derive(Clone)]
pub enum BinaryDispatch {
    /// The installed override
    Override(BinaryOverrideFn),
    /// The symbol's table entry
    Operator(BinaryOpFn),
}

impl BinaryDispatch {
    /// Apply the operator to evaluated operands.
    pub fn apply(&self, op: &str, left: &Value, right: &Value) -> Result<Value, EvalError> {
        let result = match self {
            BinaryDispatch::Override(f) => f(op, left, right),
            BinaryDispatch::Operator(f) => f(left, right),
        };
        result.map_err(|message| EvalError::Operator {
            op: op.to_string(),
            message,
        })
    }
}

impl fmt::Debug for BinaryDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryDispatch::Override(_) => write!(f, "BinaryDispatch::Override"),
            BinaryDispatch::Operator(_) => write!(f, "BinaryDispatch::Operator"),
        }
    }
}

/// A resolved unary operator, ready to apply.
#[derive(Clone)]
pub enum UnaryDispatch {
    /// The installed override
    Override(UnaryOverrideFn),
    /// The symbol's table entry
    Operator(UnaryOpFn),
}

impl UnaryDispatch {
    /// Apply the operator to an evaluated operand.
    pub fn apply(&self, op: &str, operand: &Value) -> Result<Value, EvalError> {
        let result = match self {
            UnaryDispatch::Override(f) => f(op, operand),
            UnaryDispatch::Operator(f) => f(operand),
        };
        result.map_err(|message| EvalError::Operator {
            op: op.to_string(),
            message,
        })
    }
}

impl fmt::Debug for UnaryDispatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UnaryDispatch::Override(_) => write!(f, "UnaryDispatch::Override"),
            UnaryDispatch::Operator(_) => write!(f, "UnaryDispatch::Operator"),
        }
    }
}

/// Per-evaluator operator tables.
///
/// # Example
///
/// ```
/// use quickbeam::{OperatorRegistry, Value};
///
/// let registry = OperatorRegistry::new();
/// registry.register_binary("**", |a, b| Ok(Value::from(a.to_number().powf(b.to_number()))));
///
/// let pow = registry.resolve_binary("**").unwrap();
/// assert_eq!(pow.apply("**", &Value::from(2), &Value::from(10)).unwrap(), Value::from(1024));
/// ```
pub struct OperatorRegistry {
    binary: DashMap<String, BinaryOpFn>,
    unary: DashMap<String, UnaryOpFn>,
    short_circuit: DashMap<String, ShortCircuit>,
    binary_override: RwLock<Option<BinaryOverrideFn>>,
    unary_override: RwLock<Option<UnaryOverrideFn>>,
}

impl Default for OperatorRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl OperatorRegistry {
    /// Create a registry seeded with the default operators.
    pub fn new() -> Self {
        let registry = Self::empty();
        for (symbol, op) in DEFAULT_BINARY {
            let op = *op;
            registry
                .binary
                .insert((*symbol).to_string(), Arc::new(move |l: &Value, r: &Value| Ok::<_, String>(op(l, r))));
        }
        for (symbol, op) in DEFAULT_UNARY {
            let op = *op;
            registry
                .unary
                .insert((*symbol).to_string(), Arc::new(move |v: &Value| Ok::<_, String>(op(v))));
        }
        registry
            .short_circuit
            .insert("||".to_string(), ShortCircuit::WhenTruthy);
        registry
            .short_circuit
            .insert("&&".to_string(), ShortCircuit::WhenFalsy);
        registry
    }

    /// Create a registry with no operators at all.
    pub fn empty() -> Self {
        Self {
            binary: DashMap::new(),
            unary: DashMap::new(),
            short_circuit: DashMap::new(),
            binary_override: RwLock::new(None),
            unary_override: RwLock::new(None),
        }
    }

    // ═══════════════════════════════════════════════════════════════════
    // Registration
    // ═══════════════════════════════════════════════════════════════════

    /// Insert or replace the implementation of a binary operator.
    pub fn register_binary<F>(&self, symbol: impl Into<String>, op: F)
    where
        F: Fn(&Value, &Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        let symbol = symbol.into();
        tracing::debug!(symbol = %symbol, "registering binary operator");
        self.binary.insert(symbol, Arc::new(op));
    }

    /// Insert or replace the implementation of a unary operator.
    pub fn register_unary<F>(&self, symbol: impl Into<String>, op: F)
    where
        F: Fn(&Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        let symbol = symbol.into();
        tracing::debug!(symbol = %symbol, "registering unary operator");
        self.unary.insert(symbol, Arc::new(op));
    }

    /// Mark a binary symbol as short-circuiting.
    ///
    /// The evaluator then evaluates the left operand first and skips the
    /// right one when `mode` says the left already decides the result.
    pub fn register_short_circuit(&self, symbol: impl Into<String>, mode: ShortCircuit) {
        let symbol = symbol.into();
        tracing::debug!(symbol = %symbol, ?mode, "registering short-circuit operator");
        self.short_circuit.insert(symbol, mode);
    }

    /// Route every binary and logical operator through `hook`.
    ///
    /// The hook receives the operator symbol and both operands, already
    /// evaluated; `||` and `&&` lose their short-circuit behavior while it
    /// is installed.
    pub fn install_binary_override<F>(&self, hook: F)
    where
        F: Fn(&str, &Value, &Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.set_binary_override(Some(Arc::new(hook)));
    }

    /// Route every unary operator through `hook`.
    pub fn install_unary_override<F>(&self, hook: F)
    where
        F: Fn(&str, &Value) -> Result<Value, String> + Send + Sync + 'static,
    {
        self.set_unary_override(Some(Arc::new(hook)));
    }

    /// Remove the binary override, restoring symbol-table dispatch.
    pub fn clear_binary_override(&self) {
        self.set_binary_override(None);
    }

    /// Remove the unary override, restoring symbol-table dispatch.
    pub fn clear_unary_override(&self) {
        self.set_unary_override(None);
    }

    /// Install or clear (`None`) the binary override.
    ///
    /// While installed, every binary and logical operator is routed through
    /// the override with both operands already evaluated; `||` and `&&`
    /// lose their short-circuit behavior.
    pub fn set_binary_override(&self, hook: Option<BinaryOverrideFn>) {
        tracing::debug!(installed = hook.is_some(), "setting binary override");
        *self
            .binary_override
            .write()
            .unwrap_or_else(PoisonError::into_inner) = hook;
    }

    /// Install or clear (`None`) the unary override.
    pub fn set_unary_override(&self, hook: Option<UnaryOverrideFn>) {
        tracing::debug!(installed = hook.is_some(), "setting unary override");
        *self
            .unary_override
            .write()
            .unwrap_or_else(PoisonError::into_inner) = hook;
    }

    // ═══════════════════════════════════════════════════════════════════
    // Resolution
    // ═══════════════════════════════════════════════════════════════════

    /// Resolve a binary symbol: the override if installed, else the table.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperator` if neither exists.
    pub fn resolve_binary(&self, symbol: &str) -> Result<BinaryDispatch, EvalError> {
        if let Some(hook) = self.binary_override() {
            return Ok(BinaryDispatch::Override(hook));
        }
        self.binary
            .get(symbol)
            .map(|entry| BinaryDispatch::Operator(Arc::clone(entry.value())))
            .ok_or_else(|| EvalError::UnknownOperator {
                op: symbol.to_string(),
                kind: OperatorKind::Binary,
            })
    }

    /// Resolve a unary symbol: the override if installed, else the table.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperator` if neither exists.
    pub fn resolve_unary(&self, symbol: &str) -> Result<UnaryDispatch, EvalError> {
        if let Some(hook) = self.unary_override() {
            return Ok(UnaryDispatch::Override(hook));
        }
        self.unary
            .get(symbol)
            .map(|entry| UnaryDispatch::Operator(Arc::clone(entry.value())))
            .ok_or_else(|| EvalError::UnknownOperator {
                op: symbol.to_string(),
                kind: OperatorKind::Unary,
            })
    }

    /// Short-circuit mode of a symbol, ignoring any override.
    pub fn short_circuit(&self, symbol: &str) -> Option<ShortCircuit> {
        self.short_circuit.get(symbol).map(|entry| *entry.value())
    }

    // ═══════════════════════════════════════════════════════════════════
    // Inspection
    // ═══════════════════════════════════════════════════════════════════

    /// The installed binary override, if any.
    pub fn binary_override(&self) -> Option<BinaryOverrideFn> {
        self.binary_override
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// The installed unary override, if any.
    pub fn unary_override(&self) -> Option<UnaryOverrideFn> {
        self.unary_override
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Whether a binary override is installed.
    pub fn has_binary_override(&self) -> bool {
        self.binary_override
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Whether a unary override is installed.
    pub fn has_unary_override(&self) -> bool {
        self.unary_override
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .is_some()
    }

    /// Whether the binary table has an entry for `symbol`.
    pub fn contains_binary(&self, symbol: &str) -> bool {
        self.binary.contains_key(symbol)
    }

    /// Whether the unary table has an entry for `symbol`.
    pub fn contains_unary(&self, symbol: &str) -> bool {
        self.unary.contains_key(symbol)
    }
}

impl fmt::Debug for OperatorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut binary: Vec<String> = self.binary.iter().map(|e| e.key().clone()).collect();
        let mut unary: Vec<String> = self.unary.iter().map(|e| e.key().clone()).collect();
        binary.sort();
        unary.sort();
        f.debug_struct("OperatorRegistry")
            .field("binary", &binary)
            .field("unary", &unary)
            .field("binary_override", &self.has_binary_override())
            .field("unary_override", &self.has_unary_override())
            .finish()
    }
}
