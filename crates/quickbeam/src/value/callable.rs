//! Callable values: native functions exposed to expressions

use std::sync::Arc;

use super::Value;

/// Type alias for native function pointers.
///
/// The first argument is the receiver (`this`): the object a method was
/// looked up on, or [`Value::Undefined`] for a plain call.
pub type NativeFnPtr = Arc<dyn Fn(&Value, &[Value]) -> Result<Value, String> + Send + Sync>;

/// A native Rust function callable from expressions.
#[derive(Clone)]
pub struct NativeFn {
    /// Function name (for display/debugging and the `name` property)
    pub name: String,

    /// The actual function pointer
    pub func: NativeFnPtr,
}

impl NativeFn {
    /// Wrap a closure that takes the receiver and positional arguments.
    pub fn new<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&Value, &[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            func: Arc::new(func),
        }
    }

    /// Wrap a closure that ignores its receiver.
    pub fn plain<F>(name: impl Into<String>, func: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value, String> + Send + Sync + 'static,
    {
        Self::new(name, move |_this, args| func(args))
    }

    /// Invoke the function with an explicit receiver.
    pub fn call(&self, this: &Value, args: &[Value]) -> Result<Value, String> {
        (self.func)(this, args)
    }

    /// Whether two handles refer to the same closure.
    pub fn ptr_eq(&self, other: &NativeFn) -> bool {
        Arc::ptr_eq(&self.func, &other.func)
    }
}

impl std::fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NativeFn({})", self.name)
    }
}
