//! Application handler trait.

use crate::context::AppContext;
use crate::error::AppError;

/// Trait for handling application events and draw requests.
///
/// Implement this trait to create custom application logic.
///
/// # Lifecycle
///
/// 1. `on_init` - Called once after the GL context is current
/// 2. `on_resize` - Called when the window is resized
/// 3. `on_update` - Called every frame before drawing
/// 4. `on_draw` - Called every frame after the framebuffer is cleared
/// 5. `on_shutdown` - Called when the application is closing
///
/// # Example
///
/// ```ignore
/// use extrashade_app::{AppContext, AppError, AppHandler};
///
/// struct MyApp {
///     frame_count: u64,
/// }
///
/// impl AppHandler for MyApp {
///     fn on_init(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
///         log::info!("Application initialized");
///         Ok(())
///     }
///
///     fn on_draw(&mut self, ctx: &mut AppContext) {
///         self.frame_count += 1;
///     }
/// }
/// ```
pub trait AppHandler {
    /// Called once when the application initializes.
    ///
    /// Use this to load assets and create GL resources. An error ends the
    /// application with [`AppError::exit`](crate::AppError::exit) as its
    /// status.
    fn on_init(&mut self, _ctx: &mut AppContext) -> Result<(), AppError> {
        Ok(())
    }

    /// Called when the window is resized.
    ///
    /// The new size is available in `ctx.width()` and `ctx.height()`; the
    /// viewport has already been updated.
    fn on_resize(&mut self, _ctx: &mut AppContext) {}

    /// Called every frame before drawing.
    ///
    /// Use this to update uniforms from `ctx.elapsed_time()`.
    /// Returns `true` to continue running, `false` to exit.
    fn on_update(&mut self, _ctx: &mut AppContext) -> bool {
        true
    }

    /// Called every frame to render, with the framebuffer already cleared.
    fn on_draw(&mut self, ctx: &mut AppContext);

    /// Called when the application is closing, while the GL context is
    /// still current.
    ///
    /// Use this to release GL resources.
    fn on_shutdown(&mut self, _ctx: &mut AppContext) {}
}
