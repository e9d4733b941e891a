//! # extrashade Demos
//!
//! Demo programs rendering glTF material shaders.
//!
//! ## Available Demos
//!
//! - `gltf_material` - Draws the first mesh of a glTF asset with the shader
//!   and uniforms declared in its material extras, feeding `iTime` per frame
//! - `triangle_pair` - Draws the built-in triangle twice with the default
//!   shaders, once with position/texcoord attribute locations swapped
//!
//! Both accept the [`DemoArgs`] command line.

use std::path::PathBuf;

use clap::Parser;
use extrashade_app::{AppArgs, DefaultAppArgs};
use extrashade_core::gltf::GltfAsset;
use extrashade_core::material::ShaderMaterial;
use extrashade_core::mesh::CpuMesh;
use extrashade_core::mesh::generators::generate_triangle;

/// Demos library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Asset loaded when `--gltf` is not given.
pub const DEFAULT_GLTF_PATH: &str = "../example/gltf/01_triangle/export/triangle.gltf";

/// Command line shared by the demos.
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "extrashade demo")]
pub struct DemoArgs {
    #[command(flatten)]
    pub app: DefaultAppArgs,

    /// glTF file to load.
    #[arg(long, default_value = DEFAULT_GLTF_PATH)]
    pub gltf: PathBuf,
}

impl AppArgs for DemoArgs {
    fn parse() -> Self {
        <Self as Parser>::parse()
    }

    fn window_width(&self) -> u32 {
        self.app.window_width()
    }

    fn window_height(&self) -> u32 {
        self.app.window_height()
    }

    fn window_title(&self) -> &str {
        self.app.window_title()
    }

    fn vsync(&self) -> bool {
        self.app.vsync()
    }

    fn max_frames(&self) -> Option<u64> {
        AppArgs::max_frames(&self.app)
    }
}

/// Material to render with: the first mesh's material, else the first
/// material in the asset, else an empty one (built-in shaders, no uniforms).
pub fn demo_material(asset: &GltfAsset) -> ShaderMaterial {
    asset
        .material_of(0)
        .or_else(|| asset.materials.first())
        .map(|material| material.shader.clone())
        .unwrap_or_default()
}

/// Mesh to render: the asset's first mesh, or the built-in triangle.
pub fn demo_mesh(asset: &GltfAsset) -> CpuMesh {
    asset.meshes.first().cloned().unwrap_or_else(|| {
        log::warn!("Asset has no meshes, drawing the built-in triangle");
        generate_triangle()
    })
}

#[cfg(test)]
mod tests {
    use extrashade_core::gltf::GltfMaterial;
    use extrashade_core::material::UniformValue;
    use rstest::rstest;

    use super::*;

    fn material(name: &str, uniform: &str) -> GltfMaterial {
        let mut shader = ShaderMaterial::default();
        shader.uniforms.declare(uniform, UniformValue::Float(0.0));
        GltfMaterial {
            name: Some(name.to_string()),
            shader,
        }
    }

    #[test]
    fn test_default_args() {
        let args = DemoArgs::try_parse_from(["demo"]).unwrap();
        assert_eq!(args.gltf, PathBuf::from(DEFAULT_GLTF_PATH));
        assert_eq!(args.window_width(), 640);
        assert_eq!(args.window_height(), 480);
        assert_eq!(args.window_title(), "Hello World");
    }

    #[rstest]
    #[case::gltf_only(&["demo", "--gltf", "scene.gltf"], "scene.gltf", None)]
    #[case::with_app_flags(
        &["demo", "--max-frames", "5", "--gltf", "a/b.glb"],
        "a/b.glb",
        Some(5)
    )]
    #[case::default_path(&["demo", "--max-frames", "1"], DEFAULT_GLTF_PATH, Some(1))]
    fn test_gltf_override_and_flattened_args(
        #[case] argv: &[&str],
        #[case] gltf: &str,
        #[case] max_frames: Option<u64>,
    ) {
        let args = DemoArgs::try_parse_from(argv).unwrap();
        assert_eq!(args.gltf, PathBuf::from(gltf));
        assert_eq!(AppArgs::max_frames(&args), max_frames);
    }

    #[test]
    fn test_material_of_first_mesh_wins() {
        let asset = GltfAsset {
            meshes: vec![generate_triangle().with_material(1)],
            materials: vec![material("a", "first"), material("b", "second")],
            ..Default::default()
        };
        assert!(demo_material(&asset).uniforms.contains("second"));
    }

    #[test]
    fn test_material_falls_back_to_first_material() {
        let asset = GltfAsset {
            meshes: vec![generate_triangle()],
            materials: vec![material("a", "first")],
            ..Default::default()
        };
        assert!(demo_material(&asset).uniforms.contains("first"));
    }

    #[test]
    fn test_empty_asset() {
        let asset = GltfAsset::default();
        assert!(demo_material(&asset).uniforms.is_empty());
        assert_eq!(demo_mesh(&asset), generate_triangle());
    }
}
