//! Application context.

use std::rc::Rc;

/// Colour the framebuffer is cleared to before each draw.
pub const CLEAR_COLOR: [f32; 4] = [1.0, 0.54, 0.54, 1.0];

/// Application context providing access to the GL context.
///
/// This context is available during all application callbacks and provides
/// access to the GL function table, window dimensions, and frame timing.
pub struct AppContext {
    /// GL functions for the window's context.
    pub(crate) gl: Rc<glow::Context>,
    /// Current window width in physical pixels.
    pub(crate) width: u32,
    /// Current window height in physical pixels.
    pub(crate) height: u32,
    /// Current frame number.
    pub(crate) frame_number: u64,
    /// Delta time since last frame in seconds.
    pub(crate) delta_time: f32,
    /// Time since application start in seconds.
    pub(crate) elapsed_time: f32,
}

impl AppContext {
    pub(crate) fn new(gl: Rc<glow::Context>, width: u32, height: u32) -> Self {
        Self {
            gl,
            width,
            height,
            frame_number: 0,
            delta_time: 0.0,
            elapsed_time: 0.0,
        }
    }

    /// Get the GL context. Clone the `Rc` to keep it in GPU resources.
    pub fn gl(&self) -> &Rc<glow::Context> {
        &self.gl
    }

    /// Get the current window width.
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Get the current window height.
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Get the current frame number.
    pub fn frame_number(&self) -> u64 {
        self.frame_number
    }

    /// Get the delta time since last frame in seconds.
    pub fn delta_time(&self) -> f32 {
        self.delta_time
    }

    /// Get the elapsed time since application start in seconds.
    pub fn elapsed_time(&self) -> f32 {
        self.elapsed_time
    }
}
