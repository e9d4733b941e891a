//! Data types for glTF loading results.

use std::path::PathBuf;

use crate::material::ShaderMaterial;
use crate::mesh::CpuMesh;

/// A loaded glTF asset: flattened primitives plus their shader materials.
#[derive(Debug, Clone, Default)]
pub struct GltfAsset {
    /// One mesh per glTF primitive, in document order.
    ///
    /// Each mesh references its material by index via `CpuMesh::material()`.
    pub meshes: Vec<CpuMesh>,
    /// Materials in document order, indexed by `CpuMesh::material()`.
    pub materials: Vec<GltfMaterial>,
    /// Directory the asset was loaded from. Relative paths in the asset
    /// (external buffers, shader files) are resolved against it.
    pub base_dir: PathBuf,
}

impl GltfAsset {
    /// Material of the mesh at `mesh_index`, if it has one.
    pub fn material_of(&self, mesh_index: usize) -> Option<&GltfMaterial> {
        let material = self.meshes.get(mesh_index)?.material()?;
        self.materials.get(material)
    }
}

/// A glTF material reduced to what the renderer consumes.
#[derive(Debug, Clone, Default)]
pub struct GltfMaterial {
    /// Material name from the glTF file.
    pub name: Option<String>,
    /// Shader files and uniforms parsed from the material's `extras`.
    ///
    /// Empty (no shader files, no uniforms) when the material carries no
    /// extras.
    pub shader: ShaderMaterial,
}
