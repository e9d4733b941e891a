//! Material binding: program + uniform table.

use std::rc::Rc;

use extrashade_core::material::{ShaderMaterial, UniformTable, UniformValue, apply_uniforms};
use glow::HasContext;

use crate::error::GraphicsError;
use crate::shader::{ShaderProgram, ShaderSources};

/// The shader program and uniform values used to draw a material.
///
/// A binding starts without a program. [`load`](Self::load) replaces both
/// the program and the uniform table; the previous program is deleted before
/// the new one is built. If building fails the binding is left without a
/// program and draws issued after [`bind`](Self::bind) use no program.
pub struct MaterialBinding {
    gl: Rc<glow::Context>,
    program: Option<ShaderProgram>,
    uniforms: UniformTable,
}

impl MaterialBinding {
    /// Create an empty binding (no program, no uniforms).
    pub fn new(gl: Rc<glow::Context>) -> Self {
        Self {
            gl,
            program: None,
            uniforms: UniformTable::new(),
        }
    }

    /// Build the program for `material` and adopt its uniforms.
    ///
    /// Stages the material has no readable file for use the built-in
    /// sources.
    pub fn load(&mut self, material: &ShaderMaterial) -> Result<(), GraphicsError> {
        self.uniforms = material.uniforms.clone();
        self.load_sources(&ShaderSources::for_material(material))
    }

    /// Build the program from explicit sources, keeping the current uniforms.
    pub fn load_sources(&mut self, sources: &ShaderSources) -> Result<(), GraphicsError> {
        self.program = None;
        self.program = Some(ShaderProgram::new(Rc::clone(&self.gl), sources)?);
        Ok(())
    }

    /// Overwrite a declared uniform. Returns `false` (and changes nothing)
    /// when `name` is undeclared or declared with another kind.
    pub fn set_uniform(&mut self, name: &str, value: UniformValue) -> bool {
        self.uniforms.set(name, value)
    }

    /// Current uniform values.
    pub fn uniforms(&self) -> &UniformTable {
        &self.uniforms
    }

    /// Whether a program is loaded.
    pub fn has_program(&self) -> bool {
        self.program.is_some()
    }

    /// Make the program current and push every uniform to it.
    ///
    /// Returns the number of uniforms pushed. Without a program, unbinds any
    /// current program and pushes nothing.
    pub fn bind(&mut self) -> usize {
        match &mut self.program {
            Some(program) => {
                program.use_program();
                apply_uniforms(&self.uniforms, &mut program.uniform_sink())
            }
            None => {
                unsafe { self.gl.use_program(None) };
                0
            }
        }
    }
}

impl std::fmt::Debug for MaterialBinding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MaterialBinding")
            .field("program", &self.program)
            .field("uniforms", &self.uniforms)
            .finish_non_exhaustive()
    }
}
