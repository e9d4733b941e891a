//! # glTF Material Demo
//!
//! Loads a glTF asset and draws its first mesh with the shader program and
//! uniforms declared in the mesh's material `extras`. The elapsed time is
//! written to the `iTime` uniform every frame, if the material declares it.
//!
//! ```bash
//! gltf_material --gltf assets/wave/wave.gltf
//! ```

use extrashade_app::{App, AppArgs, AppContext, AppError, AppHandler};
use extrashade_core::gltf::load_gltf_file;
use extrashade_core::material::{ELAPSED_TIME_UNIFORM, UniformValue};
use extrashade_demos::{DemoArgs, demo_material, demo_mesh};
use extrashade_graphics::{AttributeLocations, GpuMesh, MaterialBinding};

/// Frames between frame-time log lines.
const FRAME_LOG_INTERVAL: u64 = 600;

struct GltfMaterialDemo {
    args: DemoArgs,
    binding: Option<MaterialBinding>,
    mesh: Option<GpuMesh>,
}

impl AppHandler for GltfMaterialDemo {
    fn on_init(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
        let asset = load_gltf_file(&self.args.gltf)?;

        let material = demo_material(&asset);
        let mut binding = MaterialBinding::new(ctx.gl().clone());
        if let Err(e) = binding.load(&material) {
            log::error!("Material shader unavailable, drawing without a program: {e}");
        }
        log::info!(
            "Material binding: program={}, {} uniforms",
            binding.has_program(),
            binding.uniforms().len()
        );

        let mesh = GpuMesh::upload(
            ctx.gl().clone(),
            &demo_mesh(&asset),
            AttributeLocations::default(),
        )?;

        self.binding = Some(binding);
        self.mesh = Some(mesh);
        Ok(())
    }

    fn on_update(&mut self, ctx: &mut AppContext) -> bool {
        let frame = ctx.frame_number();
        if frame > 0 && frame % FRAME_LOG_INTERVAL == 0 {
            log::debug!("Frame {frame}: {:.2} ms", ctx.delta_time() * 1000.0);
        }
        if let Some(binding) = &mut self.binding {
            binding.set_uniform(
                ELAPSED_TIME_UNIFORM,
                UniformValue::Float(ctx.elapsed_time()),
            );
        }
        true
    }

    fn on_draw(&mut self, _ctx: &mut AppContext) {
        let (Some(binding), Some(mesh)) = (&mut self.binding, &self.mesh) else {
            return;
        };
        binding.bind();
        mesh.draw();
    }

    fn on_shutdown(&mut self, _ctx: &mut AppContext) {
        self.mesh = None;
        self.binding = None;
    }
}

fn main() {
    let args = <DemoArgs as AppArgs>::parse();
    let demo = GltfMaterialDemo {
        args: args.clone(),
        binding: None,
        mesh: None,
    };
    std::process::exit(App::run(demo, args).code());
}
