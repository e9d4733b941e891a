//! Material shader bindings.
//!
//! A glTF material may carry a `shader` block in its `extras` naming shader
//! source files and a list of typed uniforms. This module turns that block
//! into data the renderer can use:
//!
//! - [`MaterialDescriptor`] - Typed tree over the raw `extras` JSON
//! - [`parse_material_extras`] - Walks the tree into a [`ShaderMaterial`]
//! - [`UniformTable`] - Name-keyed uniform values, one partition per
//!   [`UniformKind`], type-locked after first declaration
//! - [`UniformValue`] - Int, float or 2/3/4-component float vector
//! - [`apply_uniforms`] - Pushes a table through a [`UniformSink`]
//!
//! # Example
//!
//! ```ignore
//! use extrashade_core::material::*;
//! use std::path::Path;
//!
//! let mut material = ShaderMaterial::from_json_str(
//!     r#"{"shader": {"uniforms": [{"name": "iTime", "type": "Float", "value": [0.0]}]}}"#,
//!     Path::new("assets"),
//! )?;
//! material.uniforms.set(ELAPSED_TIME_UNIFORM, UniformValue::Float(1.5));
//! apply_uniforms(&material.uniforms, &mut sink);
//! ```

mod apply;
mod descriptor;
mod parser;
mod table;
mod types;

pub use apply::{ELAPSED_TIME_UNIFORM, UniformSink, apply_uniforms};
pub use descriptor::MaterialDescriptor;
pub use parser::{ParseDiagnostic, ShaderMaterial, parse_material_extras};
pub use table::{UniformEntry, UniformTable, UpsertOutcome};
pub use types::{UniformKind, UniformValue};
