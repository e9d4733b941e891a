//! # Triangle Pair Demo
//!
//! Draws the built-in triangle twice with the default shaders: once with
//! the default attribute locations and once with the position and texcoord
//! locations swapped, so the second draw reads texture coordinates as
//! positions.
//!
//! The glTF asset is still loaded, and a load failure ends the program with
//! exit code 1, but its contents are not drawn.

use extrashade_app::{App, AppArgs, AppContext, AppError, AppHandler};
use extrashade_core::gltf::load_gltf_file;
use extrashade_core::mesh::generators::generate_triangle;
use extrashade_demos::DemoArgs;
use extrashade_graphics::{AttributeLocations, GpuMesh, MaterialBinding, ShaderSources};

struct TrianglePairDemo {
    args: DemoArgs,
    binding: Option<MaterialBinding>,
    meshes: Vec<GpuMesh>,
}

impl AppHandler for TrianglePairDemo {
    fn on_init(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
        let asset = load_gltf_file(&self.args.gltf)?;
        log::info!(
            "Loaded {} meshes from {} (not drawn)",
            asset.meshes.len(),
            self.args.gltf.display()
        );

        let mut binding = MaterialBinding::new(ctx.gl().clone());
        if let Err(e) = binding.load_sources(&ShaderSources::default()) {
            log::error!("Default shaders failed to build: {e}");
        }
        self.binding = Some(binding);

        let triangle = generate_triangle();
        for locations in [AttributeLocations::default(), AttributeLocations::swapped()] {
            self.meshes
                .push(GpuMesh::upload(ctx.gl().clone(), &triangle, locations)?);
        }
        Ok(())
    }

    fn on_draw(&mut self, _ctx: &mut AppContext) {
        if let Some(binding) = &mut self.binding {
            binding.bind();
        }
        for mesh in &self.meshes {
            mesh.draw();
        }
    }

    fn on_shutdown(&mut self, _ctx: &mut AppContext) {
        self.meshes.clear();
        self.binding = None;
    }
}

fn main() {
    let args = <DemoArgs as AppArgs>::parse();
    let demo = TrianglePairDemo {
        args: args.clone(),
        binding: None,
        meshes: Vec::new(),
    };
    std::process::exit(App::run(demo, args).code());
}
