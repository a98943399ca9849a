//! Two-tier attribute resolution.
//!
//! `resolve_attr` is a pure lookup over `(instance attrs, class dict,
//! name)` with no hidden state:
//!
//! 1. The instance's own mapping wins. Whatever is stored there comes
//!    back as-is, so a callable assigned directly onto an instance is a
//!    plain stored function, not a method.
//! 2. Otherwise the class dictionary is consulted. A `Function` found
//!    here is wrapped into a [`BoundCallable`] paired with this instance;
//!    any other class-level value comes back unbound.
//! 3. A miss on both tiers is `AttributeNotFound`, naming the class and
//!    the attribute.

use crate::object::function::BoundCallable;
use crate::object::instance::Instance;
use crate::value::Value;
use bindery_core::intern::InternedString;
use bindery_core::{ObjectError, Result};
use std::sync::Arc;

/// Resolve an attribute on an instance.
pub fn resolve_attr(instance: &Instance, name: &InternedString) -> Result<Value> {
    // Tier 1: per-instance mapping. No binding on this path.
    if let Some(value) = instance.get_own_attr(name) {
        return Ok(value);
    }

    // Tier 2: owning class. Callables are bound to this instance.
    match instance.class().get_attr(name) {
        Some(Value::Function(func)) => Ok(Value::method(BoundCallable::new(
            func,
            Arc::clone(instance),
        ))),
        Some(value) => Ok(value),
        None => Err(ObjectError::attribute(
            instance.class().name().clone(),
            name.clone(),
        )),
    }
}

/// Resolve an attribute and invoke it with the given explicit arguments.
///
/// Fails with `NotCallable` when the resolved value cannot be invoked.
pub fn call_attr(instance: &Instance, name: &InternedString, args: &[Value]) -> Result<Value> {
    resolve_attr(instance, name)?.invoke(args)
}

// =============================================================================
// Tests
// =============================================================================
