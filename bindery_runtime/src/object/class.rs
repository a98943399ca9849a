//! Class template implementation.
//!
//! A `ClassTemplate` is the shared definition its instances fall back to
//! during attribute lookup: a display name, a unique `ClassId`, and a
//! dictionary of behaviors and class-level values. Templates are declared
//! once and shared by every instance via `Arc`; the dictionary itself is
//! behind an `RwLock` so declaration can happen after the `Arc` exists.
//!
//! There is no inheritance and no resolution order: lookup that misses the
//! class dictionary fails, it does not walk to a base class.

use crate::object::function::FunctionDef;
use crate::object::instance::{Instance, InstanceObject};
use crate::value::Value;
use bindery_core::Result;
use bindery_core::intern::{InternedString, intern};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU32, Ordering};

// =============================================================================
// Class IDs
// =============================================================================

/// Unique identifier for a declared class.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ClassId(pub u32);

/// Global counter for allocating class IDs.
static NEXT_CLASS_ID: AtomicU32 = AtomicU32::new(1);

fn allocate_class_id() -> ClassId {
    ClassId(NEXT_CLASS_ID.fetch_add(1, Ordering::Relaxed))
}

// =============================================================================
// Class Dictionary
// =============================================================================

/// Class attribute dictionary (behaviors and class-level values).
#[derive(Debug, Default)]
pub struct ClassDict {
    attrs: RwLock<FxHashMap<InternedString, Value>>,
}

impl ClassDict {
    /// Create a new empty dictionary.
    pub fn new() -> Self {
        Self {
            attrs: RwLock::new(FxHashMap::default()),
        }
    }

    /// Get an attribute.
    #[inline]
    pub fn get(&self, name: &InternedString) -> Option<Value> {
        self.attrs.read().get(name).cloned()
    }

    /// Set an attribute.
    #[inline]
    pub fn set(&self, name: InternedString, value: Value) {
        self.attrs.write().insert(name, value);
    }

    /// Check if an attribute exists.
    #[inline]
    pub fn contains(&self, name: &InternedString) -> bool {
        self.attrs.read().contains_key(name)
    }

    /// All attribute names.
    pub fn keys(&self) -> Vec<InternedString> {
        self.attrs.read().keys().cloned().collect()
    }

    /// Number of attributes.
    pub fn len(&self) -> usize {
        self.attrs.read().len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.attrs.read().is_empty()
    }
}

// =============================================================================
// Class Template
// =============================================================================

/// Shared definition of behaviors common to all instances built from it.
#[derive(Debug)]
pub struct ClassTemplate {
    /// Class name, used in reprs and error messages.
    name: InternedString,

    /// Unique id for this class.
    class_id: ClassId,

    /// Behaviors and class-level values.
    dict: ClassDict,
}

impl ClassTemplate {
    /// Declare a new class with the given name.
    pub fn new(name: InternedString) -> Arc<Self> {
        Arc::new(Self {
            name,
            class_id: allocate_class_id(),
            dict: ClassDict::new(),
        })
    }

    /// Get the class name.
    #[inline]
    pub fn name(&self) -> &InternedString {
        &self.name
    }

    /// Get the class id.
    #[inline]
    pub fn class_id(&self) -> ClassId {
        self.class_id
    }

    // =========================================================================
    // Attribute Access
    // =========================================================================

    /// Get a class-level attribute.
    #[inline]
    pub fn get_attr(&self, name: &InternedString) -> Option<Value> {
        self.dict.get(name)
    }

    /// Set a class-level attribute.
    #[inline]
    pub fn set_attr(&self, name: InternedString, value: Value) {
        self.dict.set(name, value);
    }

    /// Check if the class defines an attribute.
    #[inline]
    pub fn has_attr(&self, name: &InternedString) -> bool {
        self.dict.contains(name)
    }

    /// All class-level attribute names.
    pub fn attr_names(&self) -> Vec<InternedString> {
        self.dict.keys()
    }

    // =========================================================================
    // Behavior Declaration
    // =========================================================================

    /// Define a behavior on this class.
    ///
    /// `params` are the declared parameter names, including the receiver
    /// slot if the behavior expects one; nothing here treats the first
    /// parameter specially. Binding happens at resolution time, not at
    /// declaration time.
    pub fn define_method<F>(&self, name: &str, params: &[&str], body: F)
    where
        F: Fn(&[Value]) -> Result<Value> + Send + Sync + 'static,
    {
        let func = FunctionDef::native(name, params, body);
        self.dict.set(intern(name), Value::function(func));
    }

    /// Look up a behavior in the class dictionary.
    ///
    /// Returns `None` when the name is missing or names a non-callable
    /// class attribute.
    pub fn get_method(&self, name: &InternedString) -> Option<Arc<FunctionDef>> {
        match self.dict.get(name) {
            Some(Value::Function(func)) => Some(func),
            _ => None,
        }
    }

    /// Define a behavior from an already-built `FunctionDef`.
    pub fn set_method(&self, func: FunctionDef) {
        self.dict.set(func.name().clone(), Value::function(func));
    }

    // =========================================================================
    // Instantiation
    // =========================================================================

    /// Construct a fresh instance of this class.
    ///
    /// The instance starts with an empty attribute mapping and shares this
    /// template; no two instances share attribute storage.
    pub fn instantiate(self: &Arc<Self>) -> Instance {
        InstanceObject::new(Arc::clone(self))
    }
}

impl ClassTemplate {
    /// Declare a class from a plain string name.
    pub fn declare(name: &str) -> Arc<Self> {
        Self::new(intern(name))
    }
}

// =============================================================================
// Tests
// =============================================================================
