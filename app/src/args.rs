//! Command line arguments trait and default implementation.
//!
//! Uses clap for CLI parsing with:
//! - Help text (`--help`)
//! - Validation and clear error messages
//!
//! Applications with extra options embed [`DefaultAppArgs`] with
//! `#[command(flatten)]` and forward the [`AppArgs`] methods to it.

use clap::Parser;

/// Default window width in pixels.
pub const DEFAULT_WIDTH: u32 = 640;
/// Default window height in pixels.
pub const DEFAULT_HEIGHT: u32 = 480;
/// Default window title.
pub const DEFAULT_TITLE: &str = "Hello World";

/// Trait for parsing command line arguments.
///
/// The trait provides defaults for all window settings, so an
/// implementation only overrides the options it exposes.
///
/// # Example
///
/// ```ignore
/// use extrashade_app::{AppArgs, DefaultAppArgs};
///
/// #[derive(clap::Parser)]
/// struct MyArgs {
///     #[command(flatten)]
///     app: DefaultAppArgs,
///     #[arg(long)]
///     scene: String,
/// }
///
/// impl AppArgs for MyArgs {
///     fn parse() -> Self {
///         <Self as clap::Parser>::parse()
///     }
///
///     fn window_title(&self) -> &str {
///         self.app.window_title()
///     }
/// }
/// ```
pub trait AppArgs: Sized {
    /// Parse command line arguments.
    fn parse() -> Self;

    /// Get the initial window width.
    ///
    /// Default: 640
    fn window_width(&self) -> u32 {
        DEFAULT_WIDTH
    }

    /// Get the initial window height.
    ///
    /// Default: 480
    fn window_height(&self) -> u32 {
        DEFAULT_HEIGHT
    }

    /// Get the window title.
    ///
    /// Default: "Hello World"
    fn window_title(&self) -> &str {
        DEFAULT_TITLE
    }

    /// Get whether VSync is enabled.
    ///
    /// Default: true
    fn vsync(&self) -> bool {
        true
    }

    /// Get the maximum number of frames to process before auto-exit.
    ///
    /// Useful for automated runs that only check the application starts
    /// and renders without errors.
    ///
    /// Default: `None` (run until the window is closed)
    fn max_frames(&self) -> Option<u64> {
        None
    }
}

/// Default command line arguments.
///
/// # Examples
///
/// ```bash
/// # Show help
/// ./my_app --help
///
/// # Larger window, no vsync
/// ./my_app --width 1280 --height 720 --no-vsync
///
/// # Run for 100 frames then exit (useful for testing)
/// ./my_app --max-frames 100
/// ```
#[derive(Parser, Debug, Clone, PartialEq, Eq)]
#[command(version, about = "extrashade application")]
pub struct DefaultAppArgs {
    /// Initial window width in pixels.
    #[arg(long, default_value_t = DEFAULT_WIDTH)]
    pub width: u32,

    /// Initial window height in pixels.
    #[arg(long, default_value_t = DEFAULT_HEIGHT)]
    pub height: u32,

    /// Window title.
    #[arg(long, default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Disable vertical sync (may cause tearing).
    #[arg(long)]
    pub no_vsync: bool,

    /// Exit after rendering N frames (useful for testing).
    #[arg(long)]
    pub max_frames: Option<u64>,
}

impl Default for DefaultAppArgs {
    fn default() -> Self {
        Self {
            width: DEFAULT_WIDTH,
            height: DEFAULT_HEIGHT,
            title: DEFAULT_TITLE.to_string(),
            no_vsync: false,
            max_frames: None,
        }
    }
}

impl AppArgs for DefaultAppArgs {
    fn parse() -> Self {
        <Self as Parser>::parse()
    }

    fn window_width(&self) -> u32 {
        self.width
    }

    fn window_height(&self) -> u32 {
        self.height
    }

    fn window_title(&self) -> &str {
        &self.title
    }

    fn vsync(&self) -> bool {
        !self.no_vsync
    }

    fn max_frames(&self) -> Option<u64> {
        self.max_frames
    }
}
