//! Frontend for trees that were parsed elsewhere
//!
//! Accepts the ESTree-shaped JSON that jsep-compatible parsers emit, so a
//! tree produced by another process can be evaluated here unchanged.

use crate::ast::Node;
use crate::frontend::{Frontend, ParseError};

/// Deserializes a JSON-encoded expression tree.
///
/// There is no tokenizer, so operator symbol registration is a no-op: any
/// operator string in the tree is accepted and resolved at evaluation time.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonFrontend;

impl Frontend for JsonFrontend {
    fn parse(&self, source: &str) -> Result<Node, ParseError> {
        serde_json::from_str(source)
            .map_err(|e| ParseError::new(format!("Invalid expression tree: {}", e)))
    }

    fn add_unary_op(&self, _symbol: &str) {}

    fn add_binary_op(&self, _symbol: &str, _precedence: u8) {}

    fn name(&self) -> &str {
        "json"
    }
}
