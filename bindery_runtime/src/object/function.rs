//! Behavior definitions and bound callables.
//!
//! A `FunctionDef` is a callable behavior: a name, the declared parameter
//! names, and a native body. Invocation checks arity exactly; there are no
//! defaults, varargs, or keywords in this model.
//!
//! A `BoundCallable` pairs a `FunctionDef` with a receiver instance.
//! Invoking it prepends the receiver to the explicit arguments and hands
//! the result to the underlying function, so a method declared with zero
//! parameters fails the arity check the moment it is called on an
//! instance: the implicit receiver always counts as one given argument.

use crate::object::instance::Instance;
use crate::value::Value;
use bindery_core::Result;
use bindery_core::intern::{InternedString, intern};
use smallvec::SmallVec;
use std::sync::Arc;

/// Native body of a behavior.
///
/// Receives the full argument list: for a bound call, slot 0 is the
/// receiver and explicit arguments follow in order.
pub type NativeFn = Arc<dyn Fn(&[Value]) -> Result<Value> + Send + Sync>;

/// Declared parameter names. Behaviors in this model rarely exceed a
/// receiver plus a couple of inputs, so the list stays inline.
pub type ParamList = SmallVec<[InternedString; 4]>;

// =============================================================================
// Function Definition
// =============================================================================

/// A callable behavior definition.
pub struct FunctionDef {
    /// Behavior name, used in reprs and arity errors.
    name: InternedString,

    /// Declared parameter names, in order. The receiver slot, when the
    /// behavior expects one, is just the first name here ("self" by
    /// convention, but nothing checks the spelling).
    params: ParamList,

    /// Native body.
    body: NativeFn,
}

impl FunctionDef {
    /// Create a behavior definition.
    pub fn new(name: InternedString, params: ParamList, body: NativeFn) -> Self {
        Self { name, params, body }
    }

    /// Create a behavior definition from plain string names and a closure.
    pub fn native<F>(name: &str, params: &[&str], body: F) -> Self
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        Self {
            name: intern(name),
            params: params.iter().map(|p| intern(p)).collect(),
            body: Arc::new(body),
        }
    }

    /// Get the behavior name.
    #[inline]
    pub fn name(&self) -> &InternedString {
        &self.name
    }

    /// Declared parameter names.
    #[inline]
    pub fn params(&self) -> &[InternedString] {
        &self.params
    }

    /// Declared parameter count, receiver slot included.
    #[inline]
    pub fn param_count(&self) -> usize {
        self.params.len()
    }

    /// Invoke as a plain function.
    ///
    /// The argument count must equal the declared parameter count exactly;
    /// no receiver is supplied here. This is also the path a stored
    /// instance attribute takes, which is why such a callable is invoked
    /// with exactly what it declares.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        if args.len() != self.params.len() {
            return Err(bindery_core::ObjectError::arity(
                self.name.clone(),
                self.params.len(),
                args.len(),
            ));
        }
        (self.body)(args)
    }
}

impl std::fmt::Debug for FunctionDef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FunctionDef")
            .field("name", &self.name)
            .field("params", &self.params)
            .finish()
    }
}

// =============================================================================
// Bound Callable
// =============================================================================

/// A behavior paired with the instance that supplied it during lookup.
#[derive(Debug)]
pub struct BoundCallable {
    /// The underlying behavior.
    func: Arc<FunctionDef>,

    /// The receiver injected as the first argument on every invocation.
    receiver: Instance,
}

impl BoundCallable {
    /// Pair a behavior with a receiver.
    pub fn new(func: Arc<FunctionDef>, receiver: Instance) -> Self {
        Self { func, receiver }
    }

    /// Get the underlying behavior.
    #[inline]
    pub fn func(&self) -> &Arc<FunctionDef> {
        &self.func
    }

    /// Get the paired receiver.
    #[inline]
    pub fn receiver(&self) -> &Instance {
        &self.receiver
    }

    /// Invoke with the receiver prepended to `args`.
    ///
    /// The underlying behavior sees `1 + args.len()` inputs, so the arity
    /// check reports the receiver in its "given" count exactly like the
    /// interpreter transcript this models.
    pub fn invoke(&self, args: &[Value]) -> Result<Value> {
        let mut call_args: SmallVec<[Value; 4]> = SmallVec::with_capacity(1 + args.len());
        call_args.push(Value::instance(Arc::clone(&self.receiver)));
        call_args.extend(args.iter().cloned());
        self.func.invoke(&call_args)
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::object::class::ClassTemplate;

    #[test]
    fn test_plain_invoke() {
        let double = FunctionDef::native("double", &["n"], |args| {
            Ok(Value::int(args[0].as_int().unwrap_or(0) * 2))
        });
        assert_eq!(double.invoke(&[Value::int(21)]).unwrap(), Value::int(42));
    }

    #[test]
    fn test_plain_invoke_arity_error() {
        let double = FunctionDef::native("double", &["n"], |args| Ok(args[0].clone()));

        let err = double.invoke(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "double() takes 1 positional argument but 0 were given"
        );

        let err = double.invoke(&[Value::int(1), Value::int(2)]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "double() takes 1 positional argument but 2 were given"
        );
    }

    #[test]
    fn test_bound_invoke_prepends_receiver() {
        let class = ClassTemplate::declare("Dog");
        let dog = class.instantiate();

        // Behavior that just echoes its receiver.
        let this = FunctionDef::native("this", &["self"], |args| Ok(args[0].clone()));
        let bound = BoundCallable::new(Arc::new(this), Arc::clone(&dog));

        let result = bound.invoke(&[]).unwrap();
        assert_eq!(result, Value::instance(dog));
    }

    #[test]
    fn test_bound_invoke_appends_explicit_args() {
        let class = ClassTemplate::declare("Dog");
        let dog = class.instantiate();

        let second = FunctionDef::native("second", &["self", "x"], |args| Ok(args[1].clone()));
        let bound = BoundCallable::new(Arc::new(second), dog);

        let result = bound.invoke(&[Value::int(7)]).unwrap();
        assert_eq!(result, Value::int(7));
    }

    #[test]
    fn test_bound_invoke_clones_reference_args() {
        let class = ClassTemplate::declare("Dog");
        let dog = class.instantiate();

        // Arguments are reference types; the call path must clone them
        // into place behind the receiver without disturbing order.
        let echo = FunctionDef::native("echo", &["self", "a", "b"], |args| {
            assert!(matches!(args[0], Value::Instance(_)));
            Ok(args[2].clone())
        });
        let bound = BoundCallable::new(Arc::new(echo), Arc::clone(&dog));

        let a = Value::str("first");
        let b = Value::instance(class.instantiate());
        let result = bound.invoke(&[a.clone(), b.clone()]).unwrap();
        assert_eq!(result, b);

        // Caller's arguments are untouched and reusable.
        assert_eq!(bound.invoke(&[a, b.clone()]).unwrap(), b);
    }

    #[test]
    fn test_bound_invoke_zero_param_behavior() {
        let class = ClassTemplate::declare("Dog");
        let dog = class.instantiate();

        // Declared with no parameters at all: the implicit receiver makes
        // every bound invocation one argument too many.
        let bark = FunctionDef::native("bark", &[], |_args| Ok(Value::str("Woof!")));
        let bound = BoundCallable::new(Arc::new(bark), dog);

        let err = bound.invoke(&[]).unwrap_err();
        assert_eq!(
            err.to_string(),
            "bark() takes 0 positional arguments but 1 was given"
        );
    }

    #[test]
    fn test_body_error_propagates() {
        let fail = FunctionDef::native("fail", &[], |_args| {
            Err(bindery_core::ObjectError::raised("boom"))
        });
        assert_eq!(fail.invoke(&[]).unwrap_err().to_string(), "boom");
    }
}
