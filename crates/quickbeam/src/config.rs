//! Evaluation configuration

/// Configuration for an [`Evaluator`](crate::Evaluator).
///
/// Evaluation is a plain recursive walk, so the native stack bounds how
/// deeply nested an expression may be. By default no limit is enforced;
/// hosts that evaluate untrusted expression text can set `max_depth` to
/// turn very deep trees into an error instead of a stack overflow.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum node nesting depth, or `None` for no limit
    pub max_depth: Option<usize>,
}

impl EvalConfig {
    /// Create a configuration with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with a nesting limit.
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth),
        }
    }
}
