//! Expression tree consumed by the evaluator
//!
//! The node shapes follow the ESTree-style layout emitted by jsep-compatible
//! parsers, and the serde representation uses the same `type` tags, so a
//! tree produced elsewhere as JSON can be deserialized and evaluated as is.
//!
//! ```
//! use quickbeam::ast::Node;
//!
//! let json = r#"{
//!     "type": "BinaryExpression",
//!     "operator": "+",
//!     "left": { "type": "Literal", "value": 1, "raw": "1" },
//!     "right": { "type": "Identifier", "name": "two" }
//! }"#;
//! let node: Node = serde_json::from_str(json).unwrap();
//! assert_eq!(node.kind(), "BinaryExpression");
//! ```

use serde::{Deserialize, Serialize};

use crate::value::Value;

/// A node of the expression tree.
///
/// The evaluator only reads nodes, so a tree can be parsed once and reused
/// for any number of evaluations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Node {
    /// `42`, `"text"`, `true`, `null`
    #[serde(rename = "Literal")]
    Literal(Literal),

    /// A name resolved against the context
    #[serde(rename = "Identifier")]
    Identifier(Identifier),

    /// `this`: the context itself
    #[serde(rename = "ThisExpression")]
    This,

    /// `[a, b, c]`
    #[serde(rename = "ArrayExpression")]
    Array(ArrayExpression),

    /// `-x`, `!x`, or any registered prefix operator
    #[serde(rename = "UnaryExpression")]
    Unary(UnaryExpression),

    /// `a + b` and every other non-logical infix operator
    #[serde(rename = "BinaryExpression")]
    Binary(BinaryExpression),

    /// `a || b`, `a && b`
    #[serde(rename = "LogicalExpression")]
    Logical(BinaryExpression),

    /// `a.b` or `a[b]`
    #[serde(rename = "MemberExpression")]
    Member(MemberExpression),

    /// `f(x, y)` or `obj.method(x)`
    #[serde(rename = "CallExpression")]
    Call(CallExpression),

    /// `test ? consequent : alternate`
    #[serde(rename = "ConditionalExpression")]
    Conditional(ConditionalExpression),

    /// `a, b`: produced by parsers but not evaluated
    #[serde(rename = "Compound")]
    Compound(Compound),

    /// Any node kind this crate does not know
    #[serde(other)]
    Unknown,
}

/// Literal payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Literal {
    /// The literal value
    pub value: LiteralValue,

    /// Source text of the literal, when the parser recorded it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raw: Option<String>,
}

/// The values a literal can carry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LiteralValue {
    /// `null`
    Null,
    /// `true` or `false`
    Bool(bool),
    /// Any numeric literal
    Number(f64),
    /// Quoted string literal
    String(String),
}

impl LiteralValue {
    /// Convert to a runtime value.
    pub fn to_value(&self) -> Value {
        match self {
            LiteralValue::Null => Value::Null,
            LiteralValue::Bool(b) => Value::Bool(*b),
            LiteralValue::Number(n) => Value::Number(*n),
            LiteralValue::String(s) => Value::string(s.as_str()),
        }
    }
}

/// Identifier payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Identifier {
    /// The identifier's name
    pub name: String,
}

/// Array literal payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ArrayExpression {
    /// Element expressions in source order
    pub elements: Vec<Node>,
}

/// Prefix operator payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UnaryExpression {
    /// Operator symbol
    pub operator: String,
    /// Operand expression
    pub argument: Box<Node>,
    /// Always true for parser output; kept for ESTree compatibility
    #[serde(default = "default_prefix")]
    pub prefix: bool,
}

fn default_prefix() -> bool {
    true
}

/// Infix operator payload, shared by binary and logical nodes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BinaryExpression {
    /// Operator symbol
    pub operator: String,
    /// Left operand
    pub left: Box<Node>,
    /// Right operand
    pub right: Box<Node>,
}

/// Member access payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MemberExpression {
    /// Receiver expression
    pub object: Box<Node>,
    /// Property: an identifier when `computed` is false, any expression otherwise
    pub property: Box<Node>,
    /// `a[b]` (true) versus `a.b` (false)
    pub computed: bool,
}

/// Call payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CallExpression {
    /// Expression producing the function
    pub callee: Box<Node>,
    /// Argument expressions in source order
    pub arguments: Vec<Node>,
}

/// Conditional payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConditionalExpression {
    /// Condition
    pub test: Box<Node>,
    /// Taken when the condition is truthy
    pub consequent: Box<Node>,
    /// Taken when the condition is falsy
    pub alternate: Box<Node>,
}

/// Comma sequence payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Compound {
    /// Sequence members
    pub body: Vec<Node>,
}

// ═══════════════════════════════════════════════════════════════════════
// Construction Helpers
// ═══════════════════════════════════════════════════════════════════════

impl Node {
    /// The ESTree kind name of this node.
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Literal(_) => "Literal",
            Node::Identifier(_) => "Identifier",
            Node::This => "ThisExpression",
            Node::Array(_) => "ArrayExpression",
            Node::Unary(_) => "UnaryExpression",
            Node::Binary(_) => "BinaryExpression",
            Node::Logical(_) => "LogicalExpression",
            Node::Member(_) => "MemberExpression",
            Node::Call(_) => "CallExpression",
            Node::Conditional(_) => "ConditionalExpression",
            Node::Compound(_) => "Compound",
            Node::Unknown => "Unknown",
        }
    }

    /// Literal node without source text.
    pub fn literal(value: LiteralValue) -> Self {
        Node::Literal(Literal { value, raw: None })
    }

    /// Numeric literal.
    pub fn number(n: f64) -> Self {
        Node::literal(LiteralValue::Number(n))
    }

    /// String literal.
    pub fn string(s: impl Into<String>) -> Self {
        Node::literal(LiteralValue::String(s.into()))
    }

    /// Boolean literal.
    pub fn boolean(b: bool) -> Self {
        Node::literal(LiteralValue::Bool(b))
    }

    /// Attach source text to a literal; other nodes are returned unchanged.
    pub fn with_raw(self, raw: impl Into<String>) -> Self {
        match self {
            Node::Literal(Literal { value, .. }) => Node::Literal(Literal {
                value,
                raw: Some(raw.into()),
            }),
            other => other,
        }
    }

    /// Identifier reference.
    pub fn ident(name: impl Into<String>) -> Self {
        Node::Identifier(Identifier { name: name.into() })
    }

    /// Array literal.
    pub fn array(elements: Vec<Node>) -> Self {
        Node::Array(ArrayExpression { elements })
    }

    /// Prefix operator application.
    pub fn unary(operator: impl Into<String>, argument: Node) -> Self {
        Node::Unary(UnaryExpression {
            operator: operator.into(),
            argument: Box::new(argument),
            prefix: true,
        })
    }

    /// Infix operator application.
    ///
    /// `||` and `&&` produce a logical node, everything else a binary node.
    pub fn binary(operator: impl Into<String>, left: Node, right: Node) -> Self {
        let operator = operator.into();
        let is_logical = operator == "||" || operator == "&&";
        let payload = BinaryExpression {
            operator,
            left: Box::new(left),
            right: Box::new(right),
        };
        if is_logical {
            Node::Logical(payload)
        } else {
            Node::Binary(payload)
        }
    }

    /// Static member access `object.name`.
    pub fn member(object: Node, name: impl Into<String>) -> Self {
        Node::Member(MemberExpression {
            object: Box::new(object),
            property: Box::new(Node::ident(name)),
            computed: false,
        })
    }

    /// Computed member access `object[property]`.
    pub fn index(object: Node, property: Node) -> Self {
        Node::Member(MemberExpression {
            object: Box::new(object),
            property: Box::new(property),
            computed: true,
        })
    }

    /// Function call.
    pub fn call(callee: Node, arguments: Vec<Node>) -> Self {
        Node::Call(CallExpression {
            callee: Box::new(callee),
            arguments,
        })
    }

    /// Conditional expression.
    pub fn conditional(test: Node, consequent: Node, alternate: Node) -> Self {
        Node::Conditional(ConditionalExpression {
            test: Box::new(test),
            consequent: Box::new(consequent),
            alternate: Box::new(alternate),
        })
    }
}
