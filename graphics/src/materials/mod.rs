//! Material bindings: a shader program paired with its uniform table.
//!
//! - [`MaterialBinding`] - Owns the current program for a material and the
//!   uniform values pushed to it every time it is bound

mod binding;

pub use binding::MaterialBinding;
