//! Built-in demo geometry, uploaded to the GPU via `GpuMesh::upload`.

use super::data::CpuMesh;

/// Generate the hand-authored demo triangle.
///
/// A triangle on the XY plane, facing +Z, with vertices at
/// `(-0.5, -0.5)`, `(0.5, -0.5)` and `(0.0, 0.5)`. Carries normals and
/// texture coordinates so every attribute stream is populated.
pub fn generate_triangle() -> CpuMesh {
    CpuMesh::new(vec![[-0.5, -0.5, 0.0], [0.5, -0.5, 0.0], [0.0, 0.5, 0.0]])
        .with_normals(vec![[0.0, 0.0, 1.0]; 3])
        .with_tex_coords(vec![[0.25, 0.25], [0.75, 0.25], [0.5, 0.75]])
        .with_label("triangle")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::mesh::VertexAttributeSemantic;

    #[test]
    fn test_generate_triangle() {
        let mesh = generate_triangle();
        assert_eq!(mesh.vertex_count(), 3);
        assert!(!mesh.is_indexed());
        assert_eq!(mesh.normals().len(), 3);
        assert_eq!(mesh.tex_coords()[2], [0.5, 0.75]);
    }

    #[test]
    fn test_triangle_stream_sizes() {
        let mesh = generate_triangle();
        let positions = mesh
            .stream_bytes(VertexAttributeSemantic::Position)
            .unwrap();
        let tex_coords = mesh
            .stream_bytes(VertexAttributeSemantic::TexCoord)
            .unwrap();
        // 3 vertices * 12 bytes, 3 vertices * 8 bytes
        assert_eq!(positions.len(), 3 * 12);
        assert_eq!(tex_coords.len(), 3 * 8);
    }
}
