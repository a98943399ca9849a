//! Dynamic object model demonstrating Python-style instance methods.
//!
//! This crate provides:
//! - A tagged [`Value`] type covering scalars, strings, callables, and
//!   instances
//! - [`ClassTemplate`] and [`Instance`] with two-tier attribute lookup
//!   (instance mapping first, class mapping second)
//! - [`FunctionDef`] and [`BoundCallable`] with explicit receiver injection
//!   and exact arity checking
//!
//! The binding rule is the whole point: a callable resolved through the
//! class is paired with the instance that supplied it, so invocation
//! prepends that instance as the first argument. A callable stored on the
//! instance itself is returned untouched and called with exactly the
//! arguments it declares.
//!
//! This is a teaching artifact. It makes attribute lookup and method
//! binding explicit and inspectable; it is not production infrastructure
//! and defines no external interfaces.

pub mod object;
pub mod value;

pub use object::class::{ClassId, ClassTemplate};
pub use object::function::{BoundCallable, FunctionDef, NativeFn};
pub use object::instance::{Instance, InstanceObject};
pub use object::resolve::{call_attr, resolve_attr};
pub use value::Value;

// Re-export core items so callers need a single crate.
pub use bindery_core::{InternedString, ObjectError, Result, intern};
