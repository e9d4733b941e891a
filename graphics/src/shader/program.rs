//! Linked GL shader programs.

use std::collections::HashMap;
use std::rc::Rc;

use extrashade_core::material::{UniformSink, UniformValue};
use glow::HasContext;

use super::{ShaderSources, ShaderStage};
use crate::error::GraphicsError;

/// A linked shader program.
///
/// Owns the GL program handle and deletes it on drop. Uniform locations are
/// resolved lazily and cached per name, including names the program does
/// not expose.
pub struct ShaderProgram {
    gl: Rc<glow::Context>,
    raw: glow::Program,
    locations: HashMap<String, Option<glow::UniformLocation>>,
}

impl ShaderProgram {
    /// Compile both stages and link them.
    ///
    /// Compile and link failures log the driver info log and return an
    /// error. Intermediate shader objects are released on every path.
    pub fn new(gl: Rc<glow::Context>, sources: &ShaderSources) -> Result<Self, GraphicsError> {
        let raw = link_program(&gl, sources)?;
        log::debug!("Linked shader program {raw:?}");

        Ok(Self {
            gl,
            raw,
            locations: HashMap::new(),
        })
    }

    /// Raw GL handle.
    pub fn raw(&self) -> glow::Program {
        self.raw
    }

    /// Make this the current program.
    pub fn use_program(&self) {
        unsafe { self.gl.use_program(Some(self.raw)) };
    }

    /// Location of an active uniform, cached after the first lookup.
    ///
    /// Names GL cannot represent (interior NUL) resolve to `None`.
    pub fn uniform_location(&mut self, name: &str) -> Option<glow::UniformLocation> {
        let (gl, raw) = (&self.gl, self.raw);
        cached_location(&mut self.locations, name, |name| {
            let location = unsafe { gl.get_uniform_location(raw, name) };
            if location.is_none() {
                log::debug!("Program {raw:?} has no active uniform {name:?}");
            }
            location
        })
    }

    /// Uniform sink writing to this program. The program must be current.
    pub fn uniform_sink(&mut self) -> ProgramUniforms<'_> {
        ProgramUniforms { program: self }
    }
}

impl Drop for ShaderProgram {
    fn drop(&mut self) {
        unsafe { self.gl.delete_program(self.raw) };
    }
}

impl std::fmt::Debug for ShaderProgram {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShaderProgram")
            .field("raw", &self.raw)
            .field("cached_locations", &self.locations.len())
            .finish()
    }
}

/// [`UniformSink`] over the currently bound [`ShaderProgram`].
pub struct ProgramUniforms<'a> {
    program: &'a mut ShaderProgram,
}

impl UniformSink for ProgramUniforms<'_> {
    type Location = glow::UniformLocation;

    fn location(&mut self, name: &str) -> Option<Self::Location> {
        self.program.uniform_location(name)
    }

    fn push(&mut self, location: &Self::Location, value: &UniformValue) {
        let gl = &self.program.gl;
        let location = Some(location);
        unsafe {
            match *value {
                UniformValue::Int(v) => gl.uniform_1_i32(location, v),
                UniformValue::Float(v) => gl.uniform_1_f32(location, v),
                UniformValue::Vec2([x, y]) => gl.uniform_2_f32(location, x, y),
                UniformValue::Vec3([x, y, z]) => gl.uniform_3_f32(location, x, y, z),
                UniformValue::Vec4([x, y, z, w]) => gl.uniform_4_f32(location, x, y, z, w),
            }
        }
    }
}

/// Look `name` up in `cache`, calling `lookup` on a miss.
///
/// Misses are cached too. A name containing NUL is never passed to `lookup`.
fn cached_location<L: Clone>(
    cache: &mut HashMap<String, Option<L>>,
    name: &str,
    lookup: impl FnOnce(&str) -> Option<L>,
) -> Option<L> {
    if let Some(location) = cache.get(name) {
        return location.clone();
    }
    let location = if name.contains('\0') {
        log::warn!("Uniform name {name:?} contains NUL, skipping");
        None
    } else {
        lookup(name)
    };
    cache.insert(name.to_string(), location.clone());
    location
}

fn link_program(
    gl: &glow::Context,
    sources: &ShaderSources,
) -> Result<glow::Program, GraphicsError> {
    let vertex = compile_shader(gl, ShaderStage::Vertex, &sources.vertex)?;
    let fragment = compile_shader(gl, ShaderStage::Fragment, &sources.fragment)?;

    let raw = unsafe { gl.create_program() }.map_err(GraphicsError::ResourceCreationFailed)?;

    let linked = unsafe {
        gl.attach_shader(raw, vertex.raw);
        gl.attach_shader(raw, fragment.raw);
        gl.link_program(raw);
        gl.detach_shader(raw, vertex.raw);
        gl.detach_shader(raw, fragment.raw);
        gl.get_program_link_status(raw)
    };

    if !linked {
        let info = unsafe { gl.get_program_info_log(raw) };
        log::error!("Shader program link failed: {info}");
        unsafe { gl.delete_program(raw) };
        return Err(GraphicsError::ProgramLink(info));
    }

    Ok(raw)
}

/// A compiled shader object, deleted when dropped.
struct CompiledShader<'a> {
    gl: &'a glow::Context,
    raw: glow::Shader,
}

impl Drop for CompiledShader<'_> {
    fn drop(&mut self) {
        unsafe { self.gl.delete_shader(self.raw) };
    }
}

fn compile_shader<'a>(
    gl: &'a glow::Context,
    stage: ShaderStage,
    source: &str,
) -> Result<CompiledShader<'a>, GraphicsError> {
    let raw = unsafe { gl.create_shader(stage.gl_type()) }
        .map_err(GraphicsError::ResourceCreationFailed)?;
    let shader = CompiledShader { gl, raw };

    let compiled = unsafe {
        gl.shader_source(raw, source);
        gl.compile_shader(raw);
        gl.get_shader_compile_status(raw)
    };

    if !compiled {
        let info = unsafe { gl.get_shader_info_log(raw) };
        log::error!("{stage} shader compilation failed: {info}");
        return Err(GraphicsError::ShaderCompilation { stage, log: info });
    }

    Ok(shader)
}
