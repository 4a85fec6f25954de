//! Member access evaluation

use super::Evaluate;
use crate::ast::{MemberExpression, Node};
use crate::value::PropertyKey;
use crate::{Environment, EvalError, Value};

impl Evaluate for MemberExpression {
    fn eval(&self, env: &mut Environment<'_>) -> Result<Value, EvalError> {
        let (_, value) = eval_member(self, env)?;
        Ok(value)
    }
}

/// Evaluate a member access, returning the receiver alongside the value.
///
/// The receiver is what a call through this member binds as `this`.
/// Non-computed access reads the property's identifier name; a
/// non-computed property that is not an identifier yields `Undefined`.
pub fn eval_member(
    expr: &MemberExpression,
    env: &mut Environment<'_>,
) -> Result<(Value, Value), EvalError> {
    let object = expr.object.eval(env)?;

    let key = if expr.computed {
        PropertyKey::from_value(&expr.property.eval(env)?)
    } else {
        match expr.property.as_ref() {
            Node::Identifier(id) => PropertyKey::from_name(&id.name),
            _ => return Ok((object, Value::Undefined)),
        }
    };

    let value = object.get_member(&key);
    Ok((object, value))
}
