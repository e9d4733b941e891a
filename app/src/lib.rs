//! # extrashade App
//!
//! Application framework for windowed OpenGL ES 3.0 programs.
//!
//! This crate provides a generic `App` struct that handles window creation,
//! the EGL context, the event loop and frame timing. It is designed to be
//! used with custom handlers for initialization and draw requests.
//!
//! ## Overview
//!
//! - [`AppHandler`] - Trait for handling initialization, updates and draws
//! - [`AppArgs`] - Trait for parsing command line arguments
//! - [`App`] - Main application struct that manages the window and GL context
//! - [`AppExit`] - How the run ended, convertible to a process exit code
//!
//! ## Example
//!
//! ```ignore
//! use extrashade_app::{App, AppArgs, AppContext, AppError, AppHandler, DefaultAppArgs};
//!
//! struct MyApp;
//!
//! impl AppHandler for MyApp {
//!     fn on_init(&mut self, ctx: &mut AppContext) -> Result<(), AppError> {
//!         // Load assets, create GL resources
//!         Ok(())
//!     }
//!
//!     fn on_draw(&mut self, ctx: &mut AppContext) {
//!         // Render frame
//!     }
//! }
//!
//! fn main() {
//!     let args = DefaultAppArgs::parse();
//!     std::process::exit(App::run(MyApp, args).code());
//! }
//! ```

mod app;
mod args;
mod context;
mod error;
mod handler;

pub use app::App;
pub use args::{AppArgs, DEFAULT_HEIGHT, DEFAULT_TITLE, DEFAULT_WIDTH, DefaultAppArgs};
pub use context::{AppContext, CLEAR_COLOR};
pub use error::{AppError, AppExit};
pub use handler::AppHandler;

/// App library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize the app subsystem.
pub fn init() {
    log::info!("extrashade app v{} initialized", VERSION);
}
