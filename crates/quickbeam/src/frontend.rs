//! Parser frontend trait for Quickbeam
//!
//! The evaluator never reads expression text itself. A frontend turns text
//! into a [`Node`] tree, and the evaluator walks the tree:
//!
//! ```text
//! Expression text → [Frontend] → Node tree → [Evaluator] → Value
//! ```
//!
//! Frontends own the operator *syntax* (which symbols tokenize as operators
//! and how tightly they bind); the evaluator's registry owns operator
//! *semantics*. Adding a brand new operator therefore takes both an
//! `add_*_op` call on the frontend and a registration on the evaluator.

use std::fmt;

use crate::ast::Node;

// ═══════════════════════════════════════════════════════════════════════
// ERROR TYPES
// ═══════════════════════════════════════════════════════════════════════

/// Error that occurred during parsing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseError {
    /// Human-readable error message
    pub message: String,

    /// Character offset in the source where parsing failed
    pub index: Option<usize>,
}

impl ParseError {
    /// Create a new parse error with just a message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            index: None,
        }
    }

    /// Add the character offset to the error.
    pub fn at(mut self, index: usize) -> Self {
        self.index = Some(index);
        self
    }
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Parse error: {}", self.message)?;
        if let Some(index) = self.index {
            write!(f, " at character {}", index)?;
        }
        Ok(())
    }
}

impl std::error::Error for ParseError {}

// ═══════════════════════════════════════════════════════════════════════
// FRONTEND TRAIT
// ═══════════════════════════════════════════════════════════════════════

/// Expression parser interface.
///
/// Operator registration goes through `&self` so a frontend shared behind
/// an `Arc` can be extended while other threads parse.
///
/// # Example Implementation
///
/// ```
/// use quickbeam::ast::Node;
/// use quickbeam::frontend::{Frontend, ParseError};
///
/// /// Accepts bare identifiers only.
/// struct IdentFrontend;
///
/// impl Frontend for IdentFrontend {
///     fn parse(&self, source: &str) -> Result<Node, ParseError> {
///         let name = source.trim();
///         if !name.is_empty() && name.chars().all(|c| c.is_alphanumeric() || c == '_') {
///             Ok(Node::ident(name))
///         } else {
///             Err(ParseError::new("expected an identifier").at(0))
///         }
///     }
///
///     fn add_unary_op(&self, _symbol: &str) {}
///
///     fn add_binary_op(&self, _symbol: &str, _precedence: u8) {}
///
///     fn name(&self) -> &str {
///         "ident"
///     }
/// }
///
/// assert_eq!(IdentFrontend.parse("foo").unwrap(), Node::ident("foo"));
/// ```
pub trait Frontend: Send + Sync {
    /// Parse expression text into a tree.
    ///
    /// # Errors
    ///
    /// Returns `ParseError` if the text is not a well-formed expression.
    fn parse(&self, source: &str) -> Result<Node, ParseError>;

    /// Teach the tokenizer a new prefix operator symbol.
    fn add_unary_op(&self, symbol: &str);

    /// Teach the tokenizer a new infix operator symbol.
    ///
    /// Higher `precedence` binds tighter; the defaults range from 1 (`||`)
    /// to 10 (`*`).
    fn add_binary_op(&self, symbol: &str, precedence: u8);

    /// Return the name of this frontend.
    fn name(&self) -> &str;
}
