//! Core support for the Bindery object model.
//!
//! This crate provides:
//! - String interning for attribute and class names
//! - The shared error type surfaced by attribute resolution and invocation

pub mod error;
pub mod intern;

pub use error::{ObjectError, Result};
pub use intern::{InternedString, intern};
