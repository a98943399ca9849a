//! Instance object implementation.
//!
//! An `InstanceObject` is a bag of named attributes plus a shared
//! back-reference to the class it was built from. The per-instance mapping
//! shadows the class dictionary during lookup, and each instance owns its
//! mapping outright: mutating one instance never shows up on another.
//!
//! Instances are handled as `Instance = Arc<InstanceObject>` everywhere,
//! so identity is `Arc` pointer identity. A behavior that returns its
//! receiver hands back the very same object it was invoked on.

use crate::object::class::ClassTemplate;
use crate::value::Value;
use bindery_core::intern::InternedString;
use parking_lot::RwLock;
use rustc_hash::FxHashMap;
use std::sync::Arc;

/// Shared reference to an instance.
pub type Instance = Arc<InstanceObject>;

/// An instance of a user-declared class.
pub struct InstanceObject {
    /// Owning class (shared; many instances reference the same template).
    class: Arc<ClassTemplate>,

    /// Per-instance attribute mapping.
    attrs: RwLock<FxHashMap<InternedString, Value>>,
}

impl InstanceObject {
    /// Construct a fresh instance with an empty attribute mapping.
    pub fn new(class: Arc<ClassTemplate>) -> Instance {
        Arc::new(Self {
            class,
            attrs: RwLock::new(FxHashMap::default()),
        })
    }

    /// Get the owning class.
    #[inline]
    pub fn class(&self) -> &Arc<ClassTemplate> {
        &self.class
    }

    // =========================================================================
    // Own Attribute Access
    // =========================================================================

    /// Get an attribute from the instance's own mapping only.
    ///
    /// This never falls back to the class; that two-tier walk lives in
    /// [`resolve_attr`](crate::object::resolve::resolve_attr).
    #[inline]
    pub fn get_own_attr(&self, name: &InternedString) -> Option<Value> {
        self.attrs.read().get(name).cloned()
    }

    /// Set an attribute on the instance's own mapping.
    #[inline]
    pub fn set_attr(&self, name: InternedString, value: Value) {
        self.attrs.write().insert(name, value);
    }

    /// Delete an attribute from the instance's own mapping.
    ///
    /// Returns the removed value, or `None` if the instance never had it.
    /// Class-level attributes are untouched, so a shadowed behavior
    /// becomes resolvable again.
    #[inline]
    pub fn del_attr(&self, name: &InternedString) -> Option<Value> {
        self.attrs.write().remove(name)
    }

    /// Check the instance's own mapping for an attribute.
    #[inline]
    pub fn has_own_attr(&self, name: &InternedString) -> bool {
        self.attrs.read().contains_key(name)
    }

    /// Names in the instance's own mapping.
    pub fn own_attr_names(&self) -> Vec<InternedString> {
        self.attrs.read().keys().cloned().collect()
    }

    /// Number of own attributes.
    pub fn own_attr_count(&self) -> usize {
        self.attrs.read().len()
    }
}

impl std::fmt::Debug for InstanceObject {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InstanceObject")
            .field("class", &self.class.name())
            .field("own_attrs", &self.own_attr_count())
            .finish()
    }
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use bindery_core::intern::intern;

    #[test]
    fn test_new_instance_is_empty() {
        let class = ClassTemplate::declare("Dog");
        let dog = class.instantiate();

        assert_eq!(dog.own_attr_count(), 0);
        assert!(dog.get_own_attr(&intern("name")).is_none());
    }

    #[test]
    fn test_own_attr_set_get_del() {
        let class = ClassTemplate::declare("Dog");
        let dog = class.instantiate();
        let name = intern("name");

        dog.set_attr(name.clone(), Value::str("Rex"));
        assert!(dog.has_own_attr(&name));
        assert_eq!(dog.get_own_attr(&name), Some(Value::str("Rex")));

        let removed = dog.del_attr(&name);
        assert_eq!(removed, Some(Value::str("Rex")));
        assert!(!dog.has_own_attr(&name));
        assert!(dog.del_attr(&name).is_none());
    }

    #[test]
    fn test_attr_overwrite() {
        let class = ClassTemplate::declare("Dog");
        let dog = class.instantiate();
        let age = intern("age");

        dog.set_attr(age.clone(), Value::int(3));
        dog.set_attr(age.clone(), Value::int(4));
        assert_eq!(dog.get_own_attr(&age), Some(Value::int(4)));
        assert_eq!(dog.own_attr_count(), 1);
    }

    #[test]
    fn test_instances_independent() {
        let class = ClassTemplate::declare("Dog");
        let a = class.instantiate();
        let b = class.instantiate();

        a.set_attr(intern("name"), Value::str("Rex"));
        b.set_attr(intern("name"), Value::str("Fido"));

        assert_eq!(a.get_own_attr(&intern("name")), Some(Value::str("Rex")));
        assert_eq!(b.get_own_attr(&intern("name")), Some(Value::str("Fido")));
    }

    #[test]
    fn test_shared_class_reference() {
        let class = ClassTemplate::declare("Dog");
        let a = class.instantiate();
        let b = class.instantiate();

        assert!(Arc::ptr_eq(a.class(), b.class()));
        assert_eq!(a.class().class_id(), b.class().class_id());
    }

    #[test]
    fn test_own_attr_names() {
        let class = ClassTemplate::declare("Dog");
        let dog = class.instantiate();

        dog.set_attr(intern("name"), Value::str("Rex"));
        dog.set_attr(intern("age"), Value::int(3));

        let mut names: Vec<String> = dog
            .own_attr_names()
            .iter()
            .map(|n| n.as_str().to_string())
            .collect();
        names.sort();
        assert_eq!(names, vec!["age", "name"]);
    }
}
