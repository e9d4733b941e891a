//! glTF 2.0 loader.
//!
//! Loads `.gltf`/`.glb` files into CPU-side meshes and the shader materials
//! declared in each material's `extras`:
//!
//! ```json
//! "extras": {
//!   "shader": {
//!     "vertex": "shaders/wave.vert",
//!     "fragment": "shaders/wave.frag",
//!     "uniforms": [{ "name": "iTime", "type": "Float", "value": [0.0] }]
//!   }
//! }
//! ```
//!
//! Other material properties (PBR factors, textures) are ignored, as are
//! scenes, nodes, cameras, skins and animations.
//!
//! # Example
//!
//! ```ignore
//! use extrashade_core::gltf::load_gltf_file;
//!
//! let asset = load_gltf_file("assets/triangle.gltf")?;
//! for (i, mesh) in asset.meshes.iter().enumerate() {
//!     let material = asset.material_of(i);
//!     println!("{:?}: {} vertices, material {:?}", mesh.label(), mesh.vertex_count(),
//!         material.and_then(|m| m.name.as_deref()));
//! }
//! ```

mod error;
mod loader;
#[cfg(test)]
mod tests;
pub mod types;

pub use error::GltfError;
pub use types::*;

use std::path::Path;

/// Load a glTF document from a file.
///
/// The file's directory becomes the asset's base directory.
pub fn load_gltf_file(path: impl AsRef<Path>) -> Result<GltfAsset, GltfError> {
    let path = path.as_ref();
    log::info!("Loading glTF {}", path.display());

    let data = std::fs::read(path).map_err(|source| GltfError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let base_dir = path.parent().unwrap_or_else(|| Path::new(""));

    load_gltf(&data, base_dir)
}

/// Load a glTF document from binary data.
///
/// Supports both binary glTF (`.glb`) and JSON glTF (`.gltf`). Buffers may
/// be the GLB blob, base64 data URIs or files relative to `base_dir`.
///
/// # Arguments
///
/// * `data` - Raw bytes of the `.glb` or `.gltf` file.
/// * `base_dir` - Directory that external buffer URIs and shader paths
///   are resolved against.
pub fn load_gltf(data: &[u8], base_dir: &Path) -> Result<GltfAsset, GltfError> {
    let gltf = gltf_dep::Gltf::from_slice(data)?;
    let blob = gltf.blob.clone();

    let buffers = loader::resolve_buffers(&gltf.document, blob, base_dir)?;
    let ctx = loader::LoadContext::new(gltf.document, buffers, base_dir);

    let materials = ctx.load_materials();
    let meshes = ctx.load_meshes()?;

    log::info!(
        "Loaded glTF: {} meshes, {} materials",
        meshes.len(),
        materials.len()
    );

    Ok(GltfAsset {
        meshes,
        materials,
        base_dir: base_dir.to_path_buf(),
    })
}
