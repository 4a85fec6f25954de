//! Per-evaluation state threaded through the tree walk

use crate::config::EvalConfig;
use crate::error::EvalError;
use crate::registry::OperatorRegistry;
use crate::value::{PropertyKey, Value};

/// The state of a single `evaluate` call.
///
/// Borrowed views of the evaluator's registry and configuration, the
/// caller's context, and the current nesting depth. Nothing here outlives
/// the call, so evaluations never leak state into one another.
#[derive(Debug)]
pub struct Environment<'a> {
    registry: &'a OperatorRegistry,
    config: &'a EvalConfig,
    context: &'a Value,
    depth: usize,
}

impl<'a> Environment<'a> {
    /// Create the environment for one evaluation.
    pub fn new(registry: &'a OperatorRegistry, config: &'a EvalConfig, context: &'a Value) -> Self {
        Self {
            registry,
            config,
            context,
            depth: 0,
        }
    }

    /// The operator registry of the owning evaluator.
    pub fn registry(&self) -> &'a OperatorRegistry {
        self.registry
    }

    /// The caller-supplied context (`this`).
    pub fn context(&self) -> &'a Value {
        self.context
    }

    /// Resolve an identifier against the context.
    ///
    /// Missing names yield [`Value::Undefined`].
    pub fn lookup(&self, name: &str) -> Value {
        self.context.get_member(&PropertyKey::from_name(name))
    }

    // ═══════════════════════════════════════════════════════════════════
    // Depth Tracking
    // ═══════════════════════════════════════════════════════════════════

    /// Enter a node. Returns error if the configured limit is exceeded.
    pub fn enter(&mut self) -> Result<(), EvalError> {
        if let Some(limit) = self.config.max_depth {
            if self.depth >= limit {
                return Err(EvalError::DepthExceeded { limit });
            }
        }
        self.depth += 1;
        Ok(())
    }

    /// Leave a node.
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Get current nesting depth.
    pub fn depth(&self) -> usize {
        self.depth
    }
}
