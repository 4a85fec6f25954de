//! Identifier resolution

use super::Evaluate;
use crate::ast::Identifier;
use crate::{Environment, EvalError, Value};

impl Evaluate for Identifier {
    fn eval(&self, env: &mut Environment<'_>) -> Result<Value, EvalError> {
        Ok(env.lookup(&self.name))
    }
}
