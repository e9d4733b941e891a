//! Attribute location assignment for mesh upload.
//!
//! Each [`VertexAttributeSemantic`] stream is bound to a shader attribute
//! location when a mesh is uploaded. The default assignment matches the
//! built-in vertex shader (`position` at location 0):
//!
//! | Stream   | Location | Components |
//! |----------|----------|------------|
//! | Position | 0        | 3          |
//! | Normal   | 1        | 3          |
//! | TexCoord | 2        | 2          |
//!
//! [`AttributeLocations::swapped`] exchanges the position and texcoord
//! locations, so shaders reading location 0 receive texture coordinates.

use extrashade_core::mesh::VertexAttributeSemantic;

/// Attribute locations the mesh streams are bound to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct AttributeLocations {
    /// Location of the position stream.
    pub position: u32,
    /// Location of the normal stream.
    pub normal: u32,
    /// Location of the texture coordinate stream.
    pub tex_coord: u32,
}

impl Default for AttributeLocations {
    fn default() -> Self {
        Self {
            position: 0,
            normal: 1,
            tex_coord: 2,
        }
    }
}

impl AttributeLocations {
    /// Default locations with position and texcoord exchanged.
    pub fn swapped() -> Self {
        let default = Self::default();
        Self {
            position: default.tex_coord,
            tex_coord: default.position,
            ..default
        }
    }

    /// Location assigned to `semantic`.
    pub fn location(&self, semantic: VertexAttributeSemantic) -> u32 {
        match semantic {
            VertexAttributeSemantic::Position => self.position,
            VertexAttributeSemantic::Normal => self.normal,
            VertexAttributeSemantic::TexCoord => self.tex_coord,
        }
    }

    /// Whether no two streams share a location.
    pub fn is_distinct(&self) -> bool {
        self.position != self.normal
            && self.position != self.tex_coord
            && self.normal != self.tex_coord
    }
}
