//! GPU-resident meshes.
//!
//! A [`GpuMesh`] owns a vertex array object, one vertex buffer per populated
//! [`CpuMesh`] stream and an optional element buffer. Streams are tightly
//! packed f32 data, so every attribute uses stride 0 and offset 0.

use std::rc::Rc;

use extrashade_core::mesh::{CpuMesh, VertexAttributeSemantic};
use glow::HasContext;

use super::layout::AttributeLocations;
use crate::error::GraphicsError;

/// A mesh uploaded to GL buffers, drawn as a triangle list.
///
/// All GL objects are deleted when the mesh is dropped.
pub struct GpuMesh {
    gl: Rc<glow::Context>,
    vertex_array: glow::VertexArray,
    vertex_buffers: Vec<glow::Buffer>,
    index_buffer: Option<glow::Buffer>,
    vertex_count: u32,
    index_count: u32,
    locations: AttributeLocations,
    label: Option<String>,
}

impl GpuMesh {
    /// Upload `mesh`, binding each populated stream to its location.
    ///
    /// Empty streams (no normals, no texcoords) leave their location
    /// disabled.
    pub fn upload(
        gl: Rc<glow::Context>,
        mesh: &CpuMesh,
        locations: AttributeLocations,
    ) -> Result<Self, GraphicsError> {
        if !locations.is_distinct() {
            log::warn!("Uploading mesh with overlapping attribute locations {locations:?}");
        }

        let vertex_array =
            unsafe { gl.create_vertex_array() }.map_err(GraphicsError::ResourceCreationFailed)?;

        // Owned from here on, so early returns release what was created.
        let mut gpu = Self {
            gl,
            vertex_array,
            vertex_buffers: Vec::with_capacity(VertexAttributeSemantic::ALL.len()),
            index_buffer: None,
            vertex_count: mesh.vertex_count(),
            index_count: 0,
            locations,
            label: mesh.label().map(String::from),
        };
        let gl = &gpu.gl;

        unsafe { gl.bind_vertex_array(Some(vertex_array)) };

        for semantic in VertexAttributeSemantic::ALL {
            let Some(bytes) = mesh.stream_bytes(semantic) else {
                continue;
            };
            let buffer = create_buffer(gl, glow::ARRAY_BUFFER, bytes)?;
            gpu.vertex_buffers.push(buffer);

            let location = locations.location(semantic);
            unsafe {
                gl.enable_vertex_attrib_array(location);
                gl.vertex_attrib_pointer_f32(
                    location,
                    semantic.component_count() as i32,
                    glow::FLOAT,
                    false,
                    0,
                    0,
                );
            }
        }

        if let Some(indices) = mesh.indices()
            && !indices.is_empty()
        {
            let buffer = create_buffer(
                gl,
                glow::ELEMENT_ARRAY_BUFFER,
                bytemuck::cast_slice(indices),
            )?;
            gpu.index_buffer = Some(buffer);
            gpu.index_count = indices.len() as u32;
        }

        // Element buffer binding is vertex array state; unbind the array first.
        unsafe {
            gl.bind_vertex_array(None);
            gl.bind_buffer(glow::ARRAY_BUFFER, None);
            gl.bind_buffer(glow::ELEMENT_ARRAY_BUFFER, None);
        }

        log::debug!(
            "Uploaded mesh {:?}: {} vertices, {} indices, {} streams",
            gpu.label,
            gpu.vertex_count,
            gpu.index_count,
            gpu.vertex_buffers.len()
        );

        Ok(gpu)
    }

    /// Bind the vertex array and issue the draw call.
    ///
    /// Uses `draw_elements` for indexed meshes, `draw_arrays` otherwise.
    pub fn draw(&self) {
        unsafe {
            self.gl.bind_vertex_array(Some(self.vertex_array));
            if self.index_buffer.is_some() {
                self.gl.draw_elements(
                    glow::TRIANGLES,
                    self.index_count as i32,
                    glow::UNSIGNED_INT,
                    0,
                );
            } else {
                self.gl
                    .draw_arrays(glow::TRIANGLES, 0, self.vertex_count as i32);
            }
            self.gl.bind_vertex_array(None);
        }
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.vertex_count
    }

    /// Number of indices (0 for non-indexed meshes).
    pub fn index_count(&self) -> u32 {
        self.index_count
    }

    /// Whether the mesh has an element buffer.
    pub fn is_indexed(&self) -> bool {
        self.index_buffer.is_some()
    }

    /// Locations the streams are bound to.
    pub fn locations(&self) -> AttributeLocations {
        self.locations
    }

    /// Debug label, taken from the source mesh.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }
}

impl Drop for GpuMesh {
    fn drop(&mut self) {
        unsafe {
            for buffer in self.vertex_buffers.drain(..) {
                self.gl.delete_buffer(buffer);
            }
            if let Some(buffer) = self.index_buffer.take() {
                self.gl.delete_buffer(buffer);
            }
            self.gl.delete_vertex_array(self.vertex_array);
        }
    }
}

impl std::fmt::Debug for GpuMesh {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GpuMesh")
            .field("label", &self.label)
            .field("vertex_count", &self.vertex_count)
            .field("index_count", &self.index_count)
            .field("locations", &self.locations)
            .finish_non_exhaustive()
    }
}

fn create_buffer(
    gl: &glow::Context,
    target: u32,
    data: &[u8],
) -> Result<glow::Buffer, GraphicsError> {
    let buffer = unsafe { gl.create_buffer() }.map_err(GraphicsError::ResourceCreationFailed)?;
    unsafe {
        gl.bind_buffer(target, Some(buffer));
        gl.buffer_data_u8_slice(target, data, glow::STATIC_DRAW);
    }
    Ok(buffer)
}
