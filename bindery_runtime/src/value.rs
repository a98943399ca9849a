//! Tagged runtime value.
//!
//! A plain enum stands in for a real runtime's packed value representation.
//! Instances and callables are reference types held behind `Arc`, so
//! cloning a `Value` never copies object state and equality on instances
//! is identity, not structure.

use crate::object::function::{BoundCallable, FunctionDef};
use crate::object::instance::Instance;
use bindery_core::intern::{InternedString, intern};
use bindery_core::{ObjectError, Result};
use std::sync::Arc;

// =============================================================================
// Value
// =============================================================================

/// A runtime value.
#[derive(Debug, Clone)]
pub enum Value {
    /// The absence of a value.
    None,
    /// Boolean.
    Bool(bool),
    /// Integer.
    Int(i64),
    /// Float.
    Float(f64),
    /// Interned string.
    Str(InternedString),
    /// Plain function, not bound to any instance.
    Function(Arc<FunctionDef>),
    /// Function paired with a receiver instance.
    Method(Arc<BoundCallable>),
    /// Instance of a user-declared class.
    Instance(Instance),
}

impl Value {
    // =========================================================================
    // Constructors
    // =========================================================================

    /// The `None` value.
    #[inline]
    pub fn none() -> Self {
        Self::None
    }

    /// Boolean value.
    #[inline]
    pub fn bool(v: bool) -> Self {
        Self::Bool(v)
    }

    /// Integer value.
    #[inline]
    pub fn int(v: i64) -> Self {
        Self::Int(v)
    }

    /// Float value.
    #[inline]
    pub fn float(v: f64) -> Self {
        Self::Float(v)
    }

    /// Interned string value.
    #[inline]
    pub fn str(s: &str) -> Self {
        Self::Str(intern(s))
    }

    /// Wrap a function definition.
    #[inline]
    pub fn function(func: FunctionDef) -> Self {
        Self::Function(Arc::new(func))
    }

    /// Wrap a bound callable.
    #[inline]
    pub fn method(method: BoundCallable) -> Self {
        Self::Method(Arc::new(method))
    }

    /// Wrap an instance reference.
    #[inline]
    pub fn instance(instance: Instance) -> Self {
        Self::Instance(instance)
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Check for `None`.
    #[inline]
    pub fn is_none(&self) -> bool {
        matches!(self, Self::None)
    }

    /// Extract an integer.
    #[inline]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract a boolean.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Extract string text.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Extract an instance reference.
    #[inline]
    pub fn as_instance(&self) -> Option<&Instance> {
        match self {
            Self::Instance(instance) => Some(instance),
            _ => None,
        }
    }

    /// Type name for error messages, matching CPython's names.
    pub fn type_name(&self) -> &str {
        match self {
            Self::None => "NoneType",
            Self::Bool(_) => "bool",
            Self::Int(_) => "int",
            Self::Float(_) => "float",
            Self::Str(_) => "str",
            Self::Function(_) => "function",
            Self::Method(_) => "method",
            Self::Instance(instance) => instance.class().name(),
        }
    }

    // =========================================================================
    // Invocation
    // =========================================================================

    /// Invoke this value with the given explicit arguments.
    ///
    /// Functions are called as-is; methods prepend their receiver. Any
    /// other value fails with `NotCallable`.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        match self {
            Self::Function(func) => func.invoke(args),
            Self::Method(method) => method.invoke(args),
            other => Err(ObjectError::not_callable(other.type_name())),
        }
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::None, Self::None) => true,
            (Self::Bool(a), Self::Bool(b)) => a == b,
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Str(a), Self::Str(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Arc::ptr_eq(a, b),
            (Self::Method(a), Self::Method(b)) => Arc::ptr_eq(a, b),
            // Instance equality is identity: same object, not same shape.
            (Self::Instance(a), Self::Instance(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::None => f.write_str("None"),
            Self::Bool(true) => f.write_str("True"),
            Self::Bool(false) => f.write_str("False"),
            Self::Int(v) => write!(f, "{}", v),
            Self::Float(v) => write!(f, "{:?}", v),
            Self::Str(s) => f.write_str(s),
            Self::Function(func) => write!(f, "<function {}>", func.name()),
            Self::Method(method) => write!(
                f,
                "<bound method {}.{}>",
                method.receiver().class().name(),
                method.func().name()
            ),
            Self::Instance(instance) => write!(f, "<{} object>", instance.class().name()),
        }
    }
}

// =============================================================================
// Tests
// =============================================================================
