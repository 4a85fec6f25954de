//! Binary and logical operator evaluation
//!
//! Symbols registered as short-circuiting (`||` and `&&` by default)
//! evaluate their left operand first and skip the right one when the left
//! already decides the result. An installed binary override sees every
//! operator with both operands evaluated, so it forfeits short-circuiting.

use super::Evaluate;
use crate::ast::BinaryExpression;
use crate::{Environment, EvalError, Value};

impl Evaluate for BinaryExpression {
    fn eval(&self, env: &mut Environment<'_>) -> Result<Value, EvalError> {
        let registry = env.registry();
        let op = self.operator.as_str();

        if !registry.has_binary_override() {
            if let Some(mode) = registry.short_circuit(op) {
                let dispatch = registry.resolve_binary(op)?;
                let left = self.left.eval(env)?;
                if mode.settles(&left) {
                    return Ok(left);
                }
                let right = self.right.eval(env)?;
                return dispatch.apply(op, &left, &right);
            }
        }

        let left = self.left.eval(env)?;
        let right = self.right.eval(env)?;
        registry.resolve_binary(op)?.apply(op, &left, &right)
    }
}
