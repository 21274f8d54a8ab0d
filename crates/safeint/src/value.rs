//! Dynamic value model for the conversion entry points.
//!
//! The conversion operations accept values whose runtime category is not
//! known statically. [`Value`] enumerates the categories the coercion table
//! dispatches on; [`Object`] carries named members and the `valueOf`
//! value-conversion protocol.

use std::collections::BTreeMap;
use std::fmt;
use std::rc::Rc;

use crate::integer::SafeInteger;

/// A dynamically-typed input value.
///
/// Number payloads are IEEE-754 doubles, like every number in the source
/// semantics; NaN and the infinities are representable and simply fail the
/// conversions.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A numeric value.
    Number(f64),
    /// A string value.
    String(String),
    /// A boolean value.
    Bool(bool),
    /// The null sentinel.
    Null,
    /// The undefined sentinel, distinct from `Null`.
    Undefined,
    /// An array of values.
    Array(Vec<Value>),
    /// An object with named members.
    Object(Object),
    /// A bare callable, not attached to an object.
    Function(NativeFn),
}

impl Value {
    /// Wraps a callable as a function value.
    ///
    /// The callable receives the owning [`Object`] as receiver when invoked
    /// through the `valueOf` protocol.
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(&Object) -> Value + 'static,
    {
        Value::Function(NativeFn::new(f))
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

// Integers of at most 32 bits widen to f64 exactly.
macro_rules! impl_value_from_int {
    ($($int:ty),*) => {$(
        impl From<$int> for Value {
            fn from(value: $int) -> Self {
                Value::Number(f64::from(value))
            }
        }
    )*};
}

impl_value_from_int!(i8, u8, i16, u16, i32, u32);

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Bool(value)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl From<SafeInteger> for Value {
    fn from(value: SafeInteger) -> Self {
        Value::Number(value.to_f64())
    }
}

impl From<Object> for Value {
    fn from(value: Object) -> Self {
        Value::Object(value)
    }
}

impl From<Vec<Value>> for Value {
    fn from(value: Vec<Value>) -> Self {
        Value::Array(value)
    }
}

/// An object value: named members plus the `valueOf` conversion protocol.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Object {
    members: BTreeMap<String, Value>,
}

impl Object {
    /// Name of the value-conversion member.
    pub const VALUE_OF: &'static str = "valueOf";

    /// Creates an empty object.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a member, replacing any existing member of the same name.
    pub fn insert(&mut self, name: impl Into<String>, value: impl Into<Value>) {
        self.members.insert(name.into(), value.into());
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, value);
        self
    }

    /// Looks up a member by name.
    pub fn get(&self, name: &str) -> Option<&Value> {
        self.members.get(name)
    }

    /// Invokes the `valueOf` member with this object as receiver.
    ///
    /// Returns `None` when the member is missing or is not callable (a plain
    /// member under that name does not count). A panic raised by the callable
    /// propagates to the caller.
    pub fn value_of(&self) -> Option<Value> {
        match self.members.get(Self::VALUE_OF) {
            Some(Value::Function(f)) => Some(f.call(self)),
            _ => None,
        }
    }
}

/// A zero-argument callable invoked with its owning object as receiver.
#[derive(Clone)]
pub struct NativeFn(Rc<dyn Fn(&Object) -> Value>);

impl NativeFn {
    /// Wraps a closure.
    pub fn new<F>(f: F) -> Self
    where
        F: Fn(&Object) -> Value + 'static,
    {
        NativeFn(Rc::new(f))
    }

    /// Invokes the callable.
    pub fn call(&self, this: &Object) -> Value {
        (self.0)(this)
    }
}

impl fmt::Debug for NativeFn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("NativeFn")
    }
}

/// Equality is callable identity, like function equality in the source
/// semantics. Two clones of one `NativeFn` are equal; independently built
/// callables are not.
impl PartialEq for NativeFn {
    fn eq(&self, other: &Self) -> bool {
        let a = Rc::as_ptr(&self.0) as *const ();
        let b = Rc::as_ptr(&other.0) as *const ();
        std::ptr::eq(a, b)
    }
}
