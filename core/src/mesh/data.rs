//! CPU-side mesh data structures.

/// Semantic of a vertex attribute stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VertexAttributeSemantic {
    /// Vertex position (`vec3`).
    Position,
    /// Vertex normal (`vec3`).
    Normal,
    /// Texture coordinate set 0 (`vec2`).
    TexCoord,
}

impl VertexAttributeSemantic {
    /// All semantics, in stream order.
    pub const ALL: [VertexAttributeSemantic; 3] = [Self::Position, Self::Normal, Self::TexCoord];

    /// Number of f32 components per vertex.
    pub fn component_count(self) -> usize {
        match self {
            Self::Position | Self::Normal => 3,
            Self::TexCoord => 2,
        }
    }
}

/// A CPU-side triangle-list mesh.
///
/// Each attribute is stored in its own stream, mirroring how it is uploaded:
/// one vertex buffer per attribute. Only the position stream is required;
/// normal and texcoord streams are either empty or match its length.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CpuMesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    indices: Option<Vec<u32>>,
    material: Option<usize>,
    label: Option<String>,
}

impl CpuMesh {
    /// Create a mesh from vertex positions.
    pub fn new(positions: Vec<[f32; 3]>) -> Self {
        Self {
            positions,
            ..Self::default()
        }
    }

    /// Set vertex normals. Ignored unless one normal per position is given.
    #[must_use]
    pub fn with_normals(mut self, normals: Vec<[f32; 3]>) -> Self {
        if normals.len() == self.positions.len() {
            self.normals = normals;
        } else {
            log::warn!(
                "Ignoring {} normals for mesh with {} vertices",
                normals.len(),
                self.positions.len()
            );
        }
        self
    }

    /// Set texture coordinates. Ignored unless one per position is given.
    #[must_use]
    pub fn with_tex_coords(mut self, tex_coords: Vec<[f32; 2]>) -> Self {
        if tex_coords.len() == self.positions.len() {
            self.tex_coords = tex_coords;
        } else {
            log::warn!(
                "Ignoring {} texture coordinates for mesh with {} vertices",
                tex_coords.len(),
                self.positions.len()
            );
        }
        self
    }

    /// Set triangle indices.
    #[must_use]
    pub fn with_indices(mut self, indices: Vec<u32>) -> Self {
        self.indices = Some(indices);
        self
    }

    /// Set the material index (into the owning asset's material list).
    #[must_use]
    pub fn with_material(mut self, material: usize) -> Self {
        self.material = Some(material);
        self
    }

    /// Set a debug label.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Vertex positions.
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Vertex normals (empty if absent).
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Texture coordinates (empty if absent).
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    /// Triangle indices, if the mesh is indexed.
    pub fn indices(&self) -> Option<&[u32]> {
        self.indices.as_deref()
    }

    /// Material index, if any.
    pub fn material(&self) -> Option<usize> {
        self.material
    }

    /// Debug label.
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Number of vertices.
    pub fn vertex_count(&self) -> u32 {
        self.positions.len() as u32
    }

    /// Whether the mesh is drawn with indices.
    pub fn is_indexed(&self) -> bool {
        self.indices.as_ref().is_some_and(|i| !i.is_empty())
    }

    /// Number of indices (0 for non-indexed meshes).
    pub fn index_count(&self) -> u32 {
        self.indices.as_ref().map_or(0, |i| i.len() as u32)
    }

    /// Raw bytes of one attribute stream, or `None` if the stream is empty.
    pub fn stream_bytes(&self, semantic: VertexAttributeSemantic) -> Option<&[u8]> {
        let bytes: &[u8] = match semantic {
            VertexAttributeSemantic::Position => bytemuck::cast_slice(&self.positions),
            VertexAttributeSemantic::Normal => bytemuck::cast_slice(&self.normals),
            VertexAttributeSemantic::TexCoord => bytemuck::cast_slice(&self.tex_coords),
        };
        (!bytes.is_empty()).then_some(bytes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn optional_streams() {
        let mesh = CpuMesh::new(vec![[0.0; 3]; 3]).with_label("tri");
        assert_eq!(mesh.vertex_count(), 3);
        assert!(
            mesh.stream_bytes(VertexAttributeSemantic::Position)
                .is_some()
        );
        assert!(mesh.stream_bytes(VertexAttributeSemantic::Normal).is_none());
        assert!(!mesh.is_indexed());
        assert_eq!(mesh.label(), Some("tri"));
    }

    #[test]
    fn mismatched_streams_are_ignored() {
        let mesh = CpuMesh::new(vec![[0.0; 3]; 3])
            .with_normals(vec![[0.0, 0.0, 1.0]; 2])
            .with_tex_coords(vec![[0.0; 2]; 3]);
        assert!(mesh.normals().is_empty());
        assert_eq!(mesh.tex_coords().len(), 3);
    }

    #[test]
    fn stream_byte_sizes() {
        let mesh = CpuMesh::new(vec![[0.0; 3]; 4])
            .with_tex_coords(vec![[0.0; 2]; 4])
            .with_indices(vec![0, 1, 2, 2, 3, 0]);
        assert_eq!(
            mesh.stream_bytes(VertexAttributeSemantic::Position)
                .map(<[u8]>::len),
            Some(4 * 12)
        );
        assert_eq!(
            mesh.stream_bytes(VertexAttributeSemantic::TexCoord)
                .map(<[u8]>::len),
            Some(4 * 8)
        );
        assert!(mesh.is_indexed());
        assert_eq!(mesh.index_count(), 6);
    }
}
