//! The object model: class templates, instances, behaviors, resolution.
//!
//! ```text
//! ClassTemplate            Instance
//! ├── name                 ├── class: Arc<ClassTemplate>   (shared)
//! ├── class_id             └── attrs: {name -> Value}      (owned)
//! └── dict: {name -> Value}
//! ```
//!
//! Lookup on an instance checks its own `attrs` first, then the class
//! `dict`. A `Function` found via the class is wrapped into a
//! `BoundCallable` carrying the instance; everything else comes back
//! untouched.

pub mod class;
pub mod function;
pub mod instance;
pub mod resolve;
