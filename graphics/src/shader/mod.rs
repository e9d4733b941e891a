//! Shader sources and GL programs.
//!
//! # Overview
//!
//! - [`ShaderSources`] - Vertex + fragment GLSL text, read from a material's
//!   shader files with per-stage fallback to the built-in defaults
//! - [`ShaderProgram`] - A linked GL program that owns its handle and caches
//!   uniform locations
//!
//! # Example
//!
//! ```ignore
//! use extrashade_graphics::shader::{ShaderProgram, ShaderSources};
//!
//! let sources = ShaderSources::for_material(&material);
//! let program = ShaderProgram::new(gl.clone(), &sources)?;
//! program.use_program();
//! ```

pub mod library;
mod program;

use std::fmt;
use std::path::Path;

use extrashade_core::material::ShaderMaterial;

pub use library::{DEFAULT_FRAGMENT_SHADER, DEFAULT_VERTEX_SHADER};
pub use program::{ProgramUniforms, ShaderProgram};

/// Programmable pipeline stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShaderStage {
    /// Vertex stage.
    Vertex,
    /// Fragment stage.
    Fragment,
}

impl ShaderStage {
    /// GL shader type enum for `create_shader`.
    pub fn gl_type(self) -> u32 {
        match self {
            Self::Vertex => glow::VERTEX_SHADER,
            Self::Fragment => glow::FRAGMENT_SHADER,
        }
    }

    /// Built-in source used when no file is supplied.
    pub fn default_source(self) -> &'static str {
        match self {
            Self::Vertex => DEFAULT_VERTEX_SHADER,
            Self::Fragment => DEFAULT_FRAGMENT_SHADER,
        }
    }
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Vertex => write!(f, "vertex"),
            Self::Fragment => write!(f, "fragment"),
        }
    }
}

/// GLSL source text for both stages of a program.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShaderSources {
    /// Vertex stage source.
    pub vertex: String,
    /// Fragment stage source.
    pub fragment: String,
}

impl Default for ShaderSources {
    fn default() -> Self {
        Self {
            vertex: DEFAULT_VERTEX_SHADER.to_string(),
            fragment: DEFAULT_FRAGMENT_SHADER.to_string(),
        }
    }
}

impl ShaderSources {
    /// Sources from explicit text.
    pub fn new(vertex: impl Into<String>, fragment: impl Into<String>) -> Self {
        Self {
            vertex: vertex.into(),
            fragment: fragment.into(),
        }
    }

    /// Sources for a material's shader files.
    ///
    /// Each stage is read from its file when the material names one. A
    /// missing path, or a file that cannot be read, falls back to that
    /// stage's built-in default.
    pub fn for_material(material: &ShaderMaterial) -> Self {
        Self {
            vertex: read_stage(ShaderStage::Vertex, material.vertex_shader.as_deref()),
            fragment: read_stage(ShaderStage::Fragment, material.fragment_shader.as_deref()),
        }
    }

    /// Source text of one stage.
    pub fn stage(&self, stage: ShaderStage) -> &str {
        match stage {
            ShaderStage::Vertex => &self.vertex,
            ShaderStage::Fragment => &self.fragment,
        }
    }
}

fn read_stage(stage: ShaderStage, path: Option<&Path>) -> String {
    let Some(path) = path else {
        return stage.default_source().to_string();
    };
    match std::fs::read_to_string(path) {
        Ok(source) => {
            log::debug!("Read {stage} shader from {}", path.display());
            source
        }
        Err(e) => {
            log::warn!(
                "Cannot read {stage} shader {}: {e}; using built-in default",
                path.display()
            );
            stage.default_source().to_string()
        }
    }
}
