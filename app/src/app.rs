//! Main application struct and event loop.

use std::num::NonZeroU32;
use std::rc::Rc;
use std::time::Instant;

use glow::HasContext;
use glutin::config::{Api, ConfigTemplateBuilder};
use glutin::context::{ContextApi, ContextAttributesBuilder, PossiblyCurrentContext, Version};
use glutin::display::{Display, DisplayApiPreference};
use glutin::prelude::*;
use glutin::surface::{Surface, SurfaceAttributesBuilder, SwapInterval, WindowSurface};
use glutin_winit::GlWindow;
use raw_window_handle::{HasDisplayHandle, HasWindowHandle};
use winit::application::ApplicationHandler;
use winit::event::WindowEvent;
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::window::{Window, WindowId};

use crate::args::AppArgs;
use crate::context::{AppContext, CLEAR_COLOR};
use crate::error::{AppError, AppExit};
use crate::handler::AppHandler;

/// A window with a current GLES 3.0 context.
///
/// Fields drop in order: surface and context go before the window.
struct GlWindowState {
    surface: Surface<WindowSurface>,
    context: PossiblyCurrentContext,
    window: Window,
}

impl GlWindowState {
    /// Create the window, an EGL context for it and load GL functions.
    fn create(
        event_loop: &ActiveEventLoop,
        args: &impl AppArgs,
    ) -> Result<(Self, glow::Context), AppError> {
        let attributes = Window::default_attributes()
            .with_title(args.window_title())
            .with_inner_size(winit::dpi::LogicalSize::new(
                args.window_width(),
                args.window_height(),
            ));
        let window = event_loop.create_window(attributes)?;
        let raw_display = window.display_handle()?.as_raw();
        let raw_window = window.window_handle()?.as_raw();

        let display = unsafe { Display::new(raw_display, DisplayApiPreference::Egl) }?;
        let template = ConfigTemplateBuilder::new()
            .with_api(Api::GLES3)
            .compatible_with_native_window(raw_window)
            .build();
        let config = unsafe { display.find_configs(template) }?
            .next()
            .ok_or(AppError::NoConfig)?;

        let context_attributes = ContextAttributesBuilder::new()
            .with_context_api(ContextApi::Gles(Some(Version::new(3, 0))))
            .build(Some(raw_window));
        let not_current = unsafe { display.create_context(&config, &context_attributes) }?;

        let surface_attributes =
            window.build_surface_attributes(SurfaceAttributesBuilder::default())?;
        let surface = unsafe { display.create_window_surface(&config, &surface_attributes) }?;
        let context = not_current.make_current(&surface)?;

        let interval = if args.vsync() {
            SwapInterval::Wait(NonZeroU32::MIN)
        } else {
            SwapInterval::DontWait
        };
        if let Err(e) = surface.set_swap_interval(&context, interval) {
            log::warn!("Failed to set swap interval: {e}");
        }

        let gl = unsafe {
            glow::Context::from_loader_function_cstr(|name| display.get_proc_address(name))
        };

        Ok((
            Self {
                surface,
                context,
                window,
            },
            gl,
        ))
    }
}

/// Main application struct that manages the window and GL context.
///
/// The `App` struct is generic over:
/// - `H`: The handler type that implements [`AppHandler`]
/// - `A`: The arguments type that implements [`AppArgs`]
///
/// # Example
///
/// ```ignore
/// use extrashade_app::{App, AppArgs, AppContext, AppHandler, DefaultAppArgs};
///
/// struct MyApp;
///
/// impl AppHandler for MyApp {
///     fn on_draw(&mut self, ctx: &mut AppContext) {
///         // Render frame
///     }
/// }
///
/// fn main() {
///     let args = DefaultAppArgs::parse();
///     std::process::exit(App::run(MyApp, args).code());
/// }
/// ```
pub struct App<H, A>
where
    H: AppHandler,
    A: AppArgs,
{
    // Declared first: GL objects the handler owns are deleted while the
    // context below is still alive.
    handler: H,
    args: A,
    context: Option<AppContext>,
    gl_window: Option<GlWindowState>,
    start_time: Instant,
    last_frame_time: Instant,
    running: bool,
    initialized: bool,
    exit: AppExit,
}

impl<H, A> App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    /// Create a new application.
    pub fn new(handler: H, args: A) -> Self {
        Self {
            handler,
            args,
            context: None,
            gl_window: None,
            start_time: Instant::now(),
            last_frame_time: Instant::now(),
            running: true,
            initialized: false,
            exit: AppExit::Success,
        }
    }

    /// Run the application with the given handler and arguments.
    ///
    /// This is the main entry point for the application. It initializes
    /// logging, creates the event loop, window and GL context, then runs the
    /// frame loop until the window is closed. Returns how the run ended;
    /// pass [`AppExit::code`] to `std::process::exit`.
    pub fn run(handler: H, args: A) -> AppExit {
        // Initialize logging
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

        extrashade_core::init();
        crate::init();

        let event_loop = match EventLoop::new() {
            Ok(event_loop) => event_loop,
            Err(e) => {
                log::error!("{}", AppError::from(e));
                return AppExit::InitFailed;
            }
        };

        let mut app = Self::new(handler, args);
        if let Err(e) = event_loop.run_app(&mut app) {
            log::error!("{}", AppError::from(e));
            return AppExit::InitFailed;
        }

        log::info!("Exiting with {:?}", app.exit);
        app.exit
    }

    /// Create the window and GL context, then initialize the handler.
    fn init(&mut self, event_loop: &ActiveEventLoop) -> Result<(), AppError> {
        let (state, gl) = GlWindowState::create(event_loop, &self.args)?;
        extrashade_graphics::init(&gl);

        let size = state.window.inner_size();
        unsafe { gl.viewport(0, 0, size.width as i32, size.height as i32) };
        log::info!(
            "Window created: {}x{} physical, scale_factor={}",
            size.width,
            size.height,
            state.window.scale_factor()
        );
        self.gl_window = Some(state);

        let ctx = self
            .context
            .insert(AppContext::new(Rc::new(gl), size.width, size.height));
        self.handler.on_init(ctx)?;

        self.start_time = Instant::now();
        self.last_frame_time = self.start_time;
        self.initialized = true;
        Ok(())
    }

    /// Stop the event loop with the given status.
    fn finish(&mut self, event_loop: &ActiveEventLoop, exit: AppExit) {
        self.exit = exit;
        self.running = false;
        event_loop.exit();
    }

    /// Notify the handler of shutdown once, while the context is current.
    fn shutdown(&mut self) {
        if !self.initialized {
            return;
        }
        self.initialized = false;
        if let Some(ctx) = &mut self.context {
            self.handler.on_shutdown(ctx);
        }
    }

    /// Resize the surface and viewport, then notify the handler.
    fn resize(&mut self, width: u32, height: u32) {
        let (Some(state), Some(ctx)) = (&self.gl_window, &mut self.context) else {
            return;
        };
        let (Some(w), Some(h)) = (NonZeroU32::new(width), NonZeroU32::new(height)) else {
            return;
        };
        if ctx.width == width && ctx.height == height {
            return;
        }

        state.surface.resize(&state.context, w, h);
        unsafe { ctx.gl.viewport(0, 0, width as i32, height as i32) };
        ctx.width = width;
        ctx.height = height;

        self.handler.on_resize(ctx);
    }

    /// Render a frame.
    fn render_frame(&mut self) {
        let (Some(state), Some(ctx)) = (&self.gl_window, &mut self.context) else {
            return;
        };

        let now = Instant::now();
        ctx.delta_time = now.duration_since(self.last_frame_time).as_secs_f32();
        ctx.elapsed_time = now.duration_since(self.start_time).as_secs_f32();
        self.last_frame_time = now;

        if !self.handler.on_update(ctx) {
            self.running = false;
            return;
        }

        let [r, g, b, a] = CLEAR_COLOR;
        unsafe {
            ctx.gl.clear_color(r, g, b, a);
            ctx.gl.clear(glow::COLOR_BUFFER_BIT);
        }

        self.handler.on_draw(ctx);

        if let Err(e) = state.surface.swap_buffers(&state.context) {
            log::error!("Failed to swap buffers: {e}");
        }

        ctx.frame_number += 1;

        // Check max frames limit
        if let Some(max_frames) = self.args.max_frames()
            && ctx.frame_number >= max_frames
        {
            log::info!("Reached max frames limit ({}), exiting", max_frames);
            self.running = false;
        }
    }
}

impl<H, A> ApplicationHandler for App<H, A>
where
    H: AppHandler + 'static,
    A: AppArgs + 'static,
{
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.gl_window.is_some() || !self.running {
            return;
        }

        if let Err(e) = self.init(event_loop) {
            log::error!("Initialization failed: {e}");
            self.finish(event_loop, e.exit());
            return;
        }

        if let Some(state) = &self.gl_window {
            state.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _id: WindowId, event: WindowEvent) {
        match event {
            WindowEvent::CloseRequested => {
                log::info!("Close requested");
                self.shutdown();
                self.finish(event_loop, AppExit::Success);
            }

            WindowEvent::Resized(size) => {
                self.resize(size.width, size.height);
            }

            WindowEvent::RedrawRequested => {
                if self.initialized && self.running {
                    self.render_frame();
                }

                if !self.running {
                    self.shutdown();
                    event_loop.exit();
                } else if let Some(state) = &self.gl_window {
                    state.window.request_redraw();
                }
            }

            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(state) = &self.gl_window {
            state.window.request_redraw();
        }
    }

    fn exiting(&mut self, _event_loop: &ActiveEventLoop) {
        self.shutdown();
    }
}
