//! # extrashade Graphics
//!
//! OpenGL ES 3.0 layer on top of [`glow`].
//!
//! ## Overview
//!
//! This crate provides:
//! - [`ShaderProgram`] - Compiled and linked GL program with cached uniform locations
//! - [`ShaderSources`] - GLSL text per stage with built-in fallbacks
//! - [`MaterialBinding`] - Program + [`UniformTable`](extrashade_core::material::UniformTable),
//!   pushed on every bind
//! - [`GpuMesh`] - Vertex array with one buffer per attribute stream
//!
//! All GL objects are owned by these values and deleted on drop. Every call
//! assumes the GL context they were created with is current on this thread.
//!
//! ## Example
//!
//! ```ignore
//! use extrashade_graphics::{AttributeLocations, GpuMesh, MaterialBinding};
//!
//! let mut binding = MaterialBinding::new(gl.clone());
//! if let Err(e) = binding.load(&material.shader) {
//!     log::error!("{e}");
//! }
//! let mesh = GpuMesh::upload(gl.clone(), &cpu_mesh, AttributeLocations::default())?;
//!
//! // Each frame:
//! binding.set_uniform("iTime", UniformValue::Float(elapsed));
//! binding.bind();
//! mesh.draw();
//! ```

pub mod error;
pub mod materials;
pub mod mesh;
pub mod shader;

pub use error::GraphicsError;
pub use materials::MaterialBinding;
pub use mesh::{AttributeLocations, GpuMesh};
pub use shader::{ShaderProgram, ShaderSources, ShaderStage};

/// Graphics library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the graphics subsystem.
///
/// Logs the GL implementation strings of the current context.
pub fn init(gl: &glow::Context) {
    use glow::HasContext;

    let (version, renderer) = unsafe {
        (
            gl.get_parameter_string(glow::VERSION),
            gl.get_parameter_string(glow::RENDERER),
        )
    };
    log::info!("extrashade graphics v{} initialized", VERSION);
    log::info!("GL: {version} ({renderer})");
}
