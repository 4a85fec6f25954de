//! Function call evaluation

use super::member::eval_member;
use super::{eval_all, Evaluate};
use crate::ast::{CallExpression, Node};
use crate::error::type_name;
use crate::{Environment, EvalError, Value};

impl Evaluate for CallExpression {
    fn eval(&self, env: &mut Environment<'_>) -> Result<Value, EvalError> {
        // A call through a member binds the member's object as `this`
        let (receiver, callee) = match self.callee.as_ref() {
            Node::Member(member) => {
                env.enter()?;
                let pair = eval_member(member, env);
                env.exit();
                pair?
            }
            other => (Value::Undefined, other.eval(env)?),
        };

        let func = match callee {
            Value::Function(func) => func,
            other => {
                tracing::trace!(callee = type_name(&other), "call to a non-function");
                return Ok(Value::Undefined);
            }
        };

        let args = eval_all(&self.arguments, env)?;
        func.call(&receiver, &args)
            .map_err(|message| EvalError::Native {
                name: func.name.clone(),
                message,
            })
    }
}
