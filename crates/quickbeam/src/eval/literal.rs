//! Literal evaluation

use super::Evaluate;
use crate::ast::Literal;
use crate::{Environment, EvalError, Value};

impl Evaluate for Literal {
    fn eval(&self, _env: &mut Environment<'_>) -> Result<Value, EvalError> {
        Ok(self.value.to_value())
    }
}
