//! Application errors and process exit status.

use extrashade_core::gltf::GltfError;
use extrashade_graphics::GraphicsError;
use thiserror::Error;

/// How the application finished.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AppExit {
    /// The window was closed (or the frame limit reached).
    #[default]
    Success,
    /// An asset failed to load during initialization.
    AssetLoadFailed,
    /// The event loop, window or GL context could not be created.
    InitFailed,
}

impl AppExit {
    /// Process exit code: `0`, `1` or `-1`.
    pub fn code(self) -> i32 {
        match self {
            Self::Success => 0,
            Self::AssetLoadFailed => 1,
            Self::InitFailed => -1,
        }
    }
}

/// Errors that end the application before or during initialization.
#[derive(Debug, Error)]
pub enum AppError {
    /// The event loop could not be created or failed.
    #[error("event loop error: {0}")]
    EventLoop(#[from] winit::error::EventLoopError),
    /// The window could not be created.
    #[error("failed to create window: {0}")]
    Window(#[from] winit::error::OsError),
    /// The window's raw handles are unavailable.
    #[error("window handle unavailable: {0}")]
    Handle(#[from] raw_window_handle::HandleError),
    /// EGL display, config, context or surface creation failed.
    #[error("GL context error: {0}")]
    Context(#[from] glutin::error::Error),
    /// The display offers no GLES 3.0 capable config.
    #[error("no GLES 3.0 capable framebuffer config available")]
    NoConfig,
    /// An asset failed to load.
    #[error("failed to load asset: {0}")]
    Asset(#[from] GltfError),
    /// A GPU resource could not be created.
    #[error(transparent)]
    Graphics(#[from] GraphicsError),
}

impl AppError {
    /// Exit status this error ends the process with.
    pub fn exit(&self) -> AppExit {
        match self {
            Self::Asset(_) => AppExit::AssetLoadFailed,
            _ => AppExit::InitFailed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn test_exit_codes() {
        assert_eq!(AppExit::Success.code(), 0);
        assert_eq!(AppExit::AssetLoadFailed.code(), 1);
        assert_eq!(AppExit::InitFailed.code(), -1);
        assert_eq!(AppExit::default(), AppExit::Success);
    }

    #[test]
    fn test_error_exit_mapping() {
        let asset = AppError::from(GltfError::Io {
            path: PathBuf::from("missing.gltf"),
            source: std::io::Error::from(std::io::ErrorKind::NotFound),
        });
        assert_eq!(asset.exit(), AppExit::AssetLoadFailed);
        let expected = "failed to load asset: failed to read missing.gltf";
        assert!(asset.to_string().starts_with(expected));

        assert_eq!(AppError::NoConfig.exit(), AppExit::InitFailed);
        let graphics = AppError::from(GraphicsError::ResourceCreationFailed("vao".into()));
        assert_eq!(graphics.exit(), AppExit::InitFailed);
        assert_eq!(graphics.to_string(), "resource creation failed: vao");
    }
}
