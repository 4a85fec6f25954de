//! Unary operator evaluation

use super::Evaluate;
use crate::ast::UnaryExpression;
use crate::{Environment, EvalError, Value};

impl Evaluate for UnaryExpression {
    fn eval(&self, env: &mut Environment<'_>) -> Result<Value, EvalError> {
        let operand = self.argument.eval(env)?;
        env.registry()
            .resolve_unary(&self.operator)?
            .apply(&self.operator, &operand)
    }
}
