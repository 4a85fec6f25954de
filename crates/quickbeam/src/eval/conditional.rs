//! Conditional (`?:`) evaluation

use super::Evaluate;
use crate::ast::ConditionalExpression;
use crate::{Environment, EvalError, Value};

impl Evaluate for ConditionalExpression {
    fn eval(&self, env: &mut Environment<'_>) -> Result<Value, EvalError> {
        // Only the taken branch is evaluated
        if self.test.eval(env)?.is_truthy() {
            self.consequent.eval(env)
        } else {
            self.alternate.eval(env)
        }
    }
}
