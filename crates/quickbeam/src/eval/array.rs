//! Array literal evaluation

use super::{eval_all, Evaluate};
use crate::ast::ArrayExpression;
use crate::{Environment, EvalError, Value};

impl Evaluate for ArrayExpression {
    fn eval(&self, env: &mut Environment<'_>) -> Result<Value, EvalError> {
        Ok(Value::array(eval_all(&self.elements, env)?))
    }
}
