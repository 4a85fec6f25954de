//! Value representation for runtime values

mod callable;
mod coerce;
mod display;
mod impls;
mod json;
mod object;

pub use callable::{NativeFn, NativeFnPtr};
pub use coerce::PropertyKey;
pub use object::Object;

use std::sync::Arc;

/// Runtime value representation for the Quickbeam evaluator.
///
/// The model is dynamically typed, mirroring the host language the
/// expression syntax comes from:
/// - Primitives are stored inline
/// - Arrays and objects are shared behind an `Arc`, so cloning is cheap and
///   identity comparisons (`===`) are pointer comparisons
/// - Functions are native Rust closures
#[derive(Clone, Default)]
pub enum Value {
    /// The missing-value sentinel: absent keys, non-callable calls and
    /// unrecognized nodes all evaluate to this
    #[default]
    Undefined,

    /// The explicit `null` literal
    Null,

    /// Boolean: `true` or `false`
    Bool(bool),

    /// Double precision number (the only numeric type)
    Number(f64),

    /// Immutable string
    String(Arc<String>),

    /// Ordered sequence of values
    Array(Arc<Vec<Value>>),

    /// String-keyed map preserving insertion order
    Object(Arc<Object>),

    /// Native function invocable from expressions
    Function(NativeFn),
}
