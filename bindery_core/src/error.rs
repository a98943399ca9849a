//! Errors surfaced by attribute resolution and callable invocation.
//!
//! Messages follow CPython's wording so transcripts read like the real
//! interpreter. Errors are reported directly to the caller; nothing here
//! is retried or recovered.

use crate::intern::InternedString;

// =============================================================================
// Error Type
// =============================================================================

/// Errors raised by the object model.
#[derive(Debug, Clone, PartialEq)]
pub enum ObjectError {
    /// Attribute exists neither on the instance nor on its class.
    AttributeNotFound {
        class_name: InternedString,
        attribute: InternedString,
    },

    /// Callable invoked with the wrong number of arguments.
    ///
    /// `given` counts the implicit receiver for bound calls, so a method
    /// declared with zero parameters and invoked on an instance reports
    /// `expected: 0, given: 1`.
    ArityMismatch {
        callable: InternedString,
        expected: usize,
        given: usize,
    },

    /// Attempted to invoke a value that is not callable.
    NotCallable { type_name: String },

    /// Error raised from inside a behavior body.
    Raised { message: String },
}

impl ObjectError {
    /// Missing attribute on an instance of the named class.
    pub fn attribute(class_name: InternedString, attribute: InternedString) -> Self {
        Self::AttributeNotFound {
            class_name,
            attribute,
        }
    }

    /// Wrong argument count for the named callable.
    pub fn arity(callable: InternedString, expected: usize, given: usize) -> Self {
        Self::ArityMismatch {
            callable,
            expected,
            given,
        }
    }

    /// Invocation target is not callable.
    pub fn not_callable(type_name: impl Into<String>) -> Self {
        Self::NotCallable {
            type_name: type_name.into(),
        }
    }

    /// Error raised from a behavior body.
    pub fn raised(message: impl Into<String>) -> Self {
        Self::Raised {
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ObjectError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::AttributeNotFound {
                class_name,
                attribute,
            } => {
                write!(
                    f,
                    "'{}' object has no attribute '{}'",
                    class_name, attribute
                )
            }
            Self::ArityMismatch {
                callable,
                expected,
                given,
            } => {
                let noun = if *expected == 1 {
                    "argument"
                } else {
                    "arguments"
                };
                let verb = if *given == 1 { "was" } else { "were" };
                write!(
                    f,
                    "{}() takes {} positional {} but {} {} given",
                    callable, expected, noun, given, verb
                )
            }
            Self::NotCallable { type_name } => {
                write!(f, "'{}' object is not callable", type_name)
            }
            Self::Raised { message } => f.write_str(message),
        }
    }
}

impl std::error::Error for ObjectError {}

/// Result type for object model operations.
pub type Result<T> = std::result::Result<T, ObjectError>;

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intern::intern;

    #[test]
    fn test_attribute_not_found_display() {
        let err = ObjectError::attribute(intern("Dog"), intern("fly"));
        assert_eq!(err.to_string(), "'Dog' object has no attribute 'fly'");
    }

    #[test]
    fn test_arity_mismatch_zero_params() {
        // The zero-parameter method invoked on an instance: the implicit
        // receiver still counts as one given argument.
        let err = ObjectError::arity(intern("bark"), 0, 1);
        assert_eq!(
            err.to_string(),
            "bark() takes 0 positional arguments but 1 was given"
        );
    }

    #[test]
    fn test_arity_mismatch_pluralization() {
        let err = ObjectError::arity(intern("greet"), 1, 3);
        assert_eq!(
            err.to_string(),
            "greet() takes 1 positional argument but 3 were given"
        );
    }

    #[test]
    fn test_not_callable_display() {
        let err = ObjectError::not_callable("int");
        assert_eq!(err.to_string(), "'int' object is not callable");
    }

    #[test]
    fn test_raised_display() {
        let err = ObjectError::raised("name must not be empty");
        assert_eq!(err.to_string(), "name must not be empty");
    }

    #[test]
    fn test_error_equality() {
        let a = ObjectError::attribute(intern("Dog"), intern("fly"));
        let b = ObjectError::attribute(intern("Dog"), intern("fly"));
        assert_eq!(a, b);

        let c = ObjectError::attribute(intern("Cat"), intern("fly"));
        assert_ne!(a, c);
    }
}
