//! jsep-compatible expression parser
//!
//! A hand-written precedence-climbing parser for the JavaScript expression
//! subset: literals, identifiers, `this`, member and call chains, array
//! literals, prefix and infix operators, `?:` and comma-separated
//! sequences. Operator symbols live in concurrent tables so new ones can
//! be taught to a shared parser at any time.

use std::sync::{Arc, OnceLock};

use dashmap::{DashMap, DashSet};

use crate::ast::{Compound, Literal, LiteralValue, Node};
use crate::frontend::{Frontend, ParseError};

/// Default infix operators and their binding power.
const DEFAULT_BINARY_OPS: &[(&str, u8)] = &[
    ("||", 1),
    ("&&", 2),
    ("|", 3),
    ("^", 4),
    ("&", 5),
    ("==", 6),
    ("!=", 6),
    ("===", 6),
    ("!==", 6),
    ("<", 7),
    (">", 7),
    ("<=", 7),
    (">=", 7),
    ("<<", 8),
    (">>", 8),
    (">>>", 8),
    ("+", 9),
    ("-", 9),
    ("*", 10),
    ("/", 10),
    ("%", 10),
];

/// Default prefix operators.
const DEFAULT_UNARY_OPS: &[&str] = &["-", "!", "~", "+"];

/// The jsep expression parser.
#[derive(Debug)]
pub struct JsepFrontend {
    unary_ops: DashSet<String>,
    binary_ops: DashMap<String, u8>,
}

impl Default for JsepFrontend {
    fn default() -> Self {
        Self::new()
    }
}

impl JsepFrontend {
    /// Create a parser that knows the default operators.
    pub fn new() -> Self {
        let unary_ops = DashSet::new();
        for op in DEFAULT_UNARY_OPS {
            unary_ops.insert((*op).to_string());
        }
        let binary_ops = DashMap::new();
        for (op, precedence) in DEFAULT_BINARY_OPS {
            binary_ops.insert((*op).to_string(), *precedence);
        }
        Self {
            unary_ops,
            binary_ops,
        }
    }

    /// Binding power of an infix operator, if the parser knows it.
    pub fn binary_precedence(&self, symbol: &str) -> Option<u8> {
        self.binary_ops.get(symbol).map(|entry| *entry)
    }

    /// Whether the parser knows `symbol` as a prefix operator.
    pub fn has_unary_op(&self, symbol: &str) -> bool {
        self.unary_ops.contains(symbol)
    }

    /// Copy the operator tables, longest symbols first.
    fn snapshot(&self) -> OperatorSnapshot {
        let mut unary: Vec<String> = self.unary_ops.iter().map(|op| op.key().clone()).collect();
        unary.sort_by_key(|op| std::cmp::Reverse(op.chars().count()));

        let mut binary: Vec<(String, u8)> = self
            .binary_ops
            .iter()
            .map(|entry| (entry.key().clone(), *entry.value()))
            .collect();
        binary.sort_by_key(|(op, _)| std::cmp::Reverse(op.chars().count()));

        OperatorSnapshot { unary, binary }
    }
}

impl Frontend for JsepFrontend {
    fn parse(&self, source: &str) -> Result<Node, ParseError> {
        tracing::trace!(source, "parsing expression");
        let ops = self.snapshot();
        Parser::new(source, &ops).parse()
    }

    fn add_unary_op(&self, symbol: &str) {
        tracing::debug!(symbol, "adding unary operator to parser");
        self.unary_ops.insert(symbol.to_string());
    }

    fn add_binary_op(&self, symbol: &str, precedence: u8) {
        tracing::debug!(symbol, precedence, "adding binary operator to parser");
        self.binary_ops.insert(symbol.to_string(), precedence);
    }

    fn name(&self) -> &str {
        "jsep"
    }
}

/// The process-wide parser behind the crate-level parsing functions.
pub fn default_frontend() -> Arc<JsepFrontend> {
    static DEFAULT: OnceLock<Arc<JsepFrontend>> = OnceLock::new();
    Arc::clone(DEFAULT.get_or_init(|| Arc::new(JsepFrontend::new())))
}

struct OperatorSnapshot {
    unary: Vec<String>,
    binary: Vec<(String, u8)>,
}

// ═══════════════════════════════════════════════════════════════════════
// Parser
// ═══════════════════════════════════════════════════════════════════════

struct Parser<'a> {
    chars: Vec<char>,
    pos: usize,
    ops: &'a OperatorSnapshot,
}

impl<'a> Parser<'a> {
    fn new(source: &str, ops: &'a OperatorSnapshot) -> Self {
        Self {
            chars: source.chars().collect(),
            pos: 0,
            ops,
        }
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(message).at(self.pos)
    }

    fn peek(&self) -> Option<char> {
        self.chars.get(self.pos).copied()
    }

    fn next_char(&mut self) -> Option<char> {
        let c = self.peek()?;
        self.pos += 1;
        Some(c)
    }

    fn slice(&self, start: usize) -> String {
        self.chars[start..self.pos].iter().collect()
    }

    fn skip_spaces(&mut self) {
        while matches!(self.peek(), Some(' ' | '\t' | '\n' | '\r')) {
            self.pos += 1;
        }
    }

    fn is_identifier_start(&self, c: char) -> bool {
        c == '$'
            || c == '_'
            || c.is_ascii_alphabetic()
            || (!c.is_ascii() && !self.is_single_char_binary_op(c))
    }

    fn is_identifier_part(&self, c: char) -> bool {
        self.is_identifier_start(c) || c.is_ascii_digit()
    }

    fn is_single_char_binary_op(&self, c: char) -> bool {
        self.ops.binary.iter().any(|(op, _)| {
            let mut chars = op.chars();
            chars.next() == Some(c) && chars.next().is_none()
        })
    }

    /// Whether `symbol` starts at the cursor.
    ///
    /// Word-like symbols must not run into a following identifier
    /// character, so `in` never matches the head of `index`.
    fn at_operator(&self, symbol: &str) -> bool {
        let len = symbol.chars().count();
        if len == 0 || self.pos + len > self.chars.len() {
            return false;
        }
        if !symbol.chars().zip(&self.chars[self.pos..]).all(|(a, b)| a == *b) {
            return false;
        }
        let word_like = symbol
            .chars()
            .next()
            .map_or(false, |c| self.is_identifier_start(c));
        !word_like
            || self
                .chars
                .get(self.pos + len)
                .map_or(true, |c| !self.is_identifier_part(*c))
    }

    /// Top level: one expression, or a `Compound` of several separated by
    /// `,` or `;`.
    fn parse(mut self) -> Result<Node, ParseError> {
        let mut body = Vec::new();
        loop {
            self.skip_spaces();
            match self.peek() {
                None => break,
                Some(',' | ';') => self.pos += 1,
                Some(c) => match self.expression()? {
                    Some(node) => body.push(node),
                    None => return Err(self.error(format!("Unexpected \"{}\"", c))),
                },
            }
        }

        if body.len() == 1 {
            Ok(body.remove(0))
        } else {
            Ok(Node::Compound(Compound { body }))
        }
    }

    fn expression(&mut self) -> Result<Option<Node>, ParseError> {
        let Some(test) = self.binary_expression()? else {
            return Ok(None);
        };
        self.skip_spaces();
        if self.peek() != Some('?') {
            return Ok(Some(test));
        }
        self.pos += 1;

        let consequent = self
            .expression()?
            .ok_or_else(|| self.error("Expected expression"))?;
        self.skip_spaces();
        if self.peek() != Some(':') {
            return Err(self.error("Expected :"));
        }
        self.pos += 1;
        let alternate = self
            .expression()?
            .ok_or_else(|| self.error("Expected expression"))?;

        Ok(Some(Node::conditional(test, consequent, alternate)))
    }

    fn binary_op(&mut self) -> Option<(String, u8)> {
        self.skip_spaces();
        let ops = self.ops;
        let (symbol, precedence) = ops.binary.iter().find(|(op, _)| self.at_operator(op))?;
        self.pos += symbol.chars().count();
        Some((symbol.clone(), *precedence))
    }

    /// Operator-precedence climbing over a pair of stacks.
    ///
    /// Equal precedence reduces first, so every infix operator is
    /// left-associative.
    fn binary_expression(&mut self) -> Result<Option<Node>, ParseError> {
        let Some(left) = self.token()? else {
            return Ok(None);
        };
        let mut operands = vec![left];
        let mut operators: Vec<(String, u8)> = Vec::new();

        while let Some(op) = self.binary_op() {
            while operators.last().map_or(false, |(_, top)| op.1 <= *top) {
                reduce(&mut operands, &mut operators);
            }
            let right = self
                .token()?
                .ok_or_else(|| self.error(format!("Expected expression after {}", op.0)))?;
            operators.push(op);
            operands.push(right);
        }
        while !operators.is_empty() {
            reduce(&mut operands, &mut operators);
        }

        Ok(operands.pop())
    }

    fn token(&mut self) -> Result<Option<Node>, ParseError> {
        self.skip_spaces();
        let Some(ch) = self.peek() else {
            return Ok(None);
        };

        if ch.is_ascii_digit() || ch == '.' {
            return self.numeric_literal().map(Some);
        }

        let node = if ch == '\'' || ch == '"' {
            self.string_literal()?
        } else if ch == '[' {
            self.pos += 1;
            Node::array(self.arguments(']')?)
        } else {
            let ops = self.ops;
            if let Some(symbol) = ops.unary.iter().find(|op| self.at_operator(op)) {
                self.pos += symbol.chars().count();
                let argument = self
                    .token()?
                    .ok_or_else(|| self.error("missing unaryOp argument"))?;
                return Ok(Some(Node::unary(symbol.clone(), argument)));
            }

            if self.is_identifier_start(ch) {
                let name = self.identifier()?;
                keyword(name)
            } else if ch == '(' {
                self.group()?
            } else {
                return Ok(None);
            }
        };

        self.token_property(node).map(Some)
    }

    /// Member access and call suffixes.
    fn token_property(&mut self, mut node: Node) -> Result<Node, ParseError> {
        loop {
            self.skip_spaces();
            match self.peek() {
                Some('.') => {
                    self.pos += 1;
                    self.skip_spaces();
                    let name = self.identifier()?;
                    node = Node::member(node, name);
                }
                Some('[') => {
                    self.pos += 1;
                    let property = self
                        .expression()?
                        .ok_or_else(|| self.error("Expected expression"))?;
                    self.skip_spaces();
                    if self.peek() != Some(']') {
                        return Err(self.error("Unclosed ["));
                    }
                    self.pos += 1;
                    node = Node::index(node, property);
                }
                Some('(') => {
                    self.pos += 1;
                    let arguments = self.arguments(')')?;
                    node = Node::call(node, arguments);
                }
                _ => return Ok(node),
            }
        }
    }

    /// Consume digits, reporting whether there were any.
    fn digits(&mut self) -> bool {
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_digit()) {
            self.pos += 1;
        }
        self.pos > start
    }

    fn numeric_literal(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        self.digits();
        if self.peek() == Some('.') {
            self.pos += 1;
            self.digits();
        }
        if matches!(self.peek(), Some('e' | 'E')) {
            self.pos += 1;
            if matches!(self.peek(), Some('+' | '-')) {
                self.pos += 1;
            }
            if !self.digits() {
                return Err(self.error(format!("Expected exponent ({})", self.slice(start))));
            }
        }

        let raw = self.slice(start);
        if let Some(c) = self.peek() {
            if self.is_identifier_start(c) {
                return Err(self.error(format!(
                    "Variable names cannot start with a number ({}{})",
                    raw, c
                )));
            }
        }
        if raw == "." || self.peek() == Some('.') {
            return Err(self.error("Unexpected period"));
        }

        let value = raw
            .parse::<f64>()
            .map_err(|_| ParseError::new(format!("Invalid number ({})", raw)).at(start))?;
        Ok(Node::Literal(Literal {
            value: LiteralValue::Number(value),
            raw: Some(raw),
        }))
    }

    fn string_literal(&mut self) -> Result<Node, ParseError> {
        let start = self.pos;
        let quote = self.next_char();
        let mut value = String::new();

        while let Some(c) = self.next_char() {
            if Some(c) == quote {
                return Ok(Node::Literal(Literal {
                    value: LiteralValue::String(value),
                    raw: Some(self.slice(start)),
                }));
            }
            if c != '\\' {
                value.push(c);
                continue;
            }
            match self.next_char() {
                Some('n') => value.push('\n'),
                Some('r') => value.push('\r'),
                Some('t') => value.push('\t'),
                Some('b') => value.push('\u{8}'),
                Some('f') => value.push('\u{c}'),
                Some('v') => value.push('\u{b}'),
                Some(other) => value.push(other),
                None => break,
            }
        }

        Err(self.error(format!("Unclosed quote after \"{}\"", value)))
    }

    fn identifier(&mut self) -> Result<String, ParseError> {
        let start = self.pos;
        match self.peek() {
            Some(c) if self.is_identifier_start(c) => self.pos += 1,
            Some(c) => return Err(self.error(format!("Unexpected {}", c))),
            None => return Err(self.error("Unexpected end of expression")),
        }
        while matches!(self.peek(), Some(c) if self.is_identifier_part(c)) {
            self.pos += 1;
        }
        Ok(self.slice(start))
    }

    /// Comma-separated expressions up to `terminator`, which is consumed.
    fn arguments(&mut self, terminator: char) -> Result<Vec<Node>, ParseError> {
        let mut args = Vec::new();
        let mut separators = 0;

        loop {
            self.skip_spaces();
            match self.peek() {
                None => return Err(self.error(format!("Expected {}", terminator))),
                Some(c) if c == terminator => {
                    self.pos += 1;
                    if terminator == ')' && separators > 0 && separators >= args.len() {
                        return Err(self.error(format!("Unexpected token {}", terminator)));
                    }
                    return Ok(args);
                }
                Some(',') => {
                    self.pos += 1;
                    separators += 1;
                    if separators != args.len() {
                        return Err(self.error("Unexpected token ,"));
                    }
                }
                Some(_) if separators != args.len() => return Err(self.error("Expected comma")),
                Some(_) => match self.expression()? {
                    Some(node) => args.push(node),
                    None => return Err(self.error("Expected comma")),
                },
            }
        }
    }

    fn group(&mut self) -> Result<Node, ParseError> {
        self.pos += 1;
        let node = self.expression()?;
        self.skip_spaces();
        if self.peek() != Some(')') {
            return Err(self.error("Unclosed ("));
        }
        self.pos += 1;
        node.ok_or_else(|| self.error("Expected expression"))
    }
}

fn reduce(operands: &mut Vec<Node>, operators: &mut Vec<(String, u8)>) {
    if let (Some(right), Some(left), Some((op, _))) =
        (operands.pop(), operands.pop(), operators.pop())
    {
        operands.push(Node::binary(op, left, right));
    }
}

fn keyword(name: String) -> Node {
    let value = match name.as_str() {
        "true" => LiteralValue::Bool(true),
        "false" => LiteralValue::Bool(false),
        "null" => LiteralValue::Null,
        "this" => return Node::This,
        _ => return Node::ident(name),
    };
    Node::Literal(Literal {
        value,
        raw: Some(name),
    })
}
