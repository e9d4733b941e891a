//! # extrashade Core
//!
//! GPU-agnostic building blocks: typed uniform values and tables, the
//! material `extras` parser, the uniform applicator seam, CPU mesh data and
//! glTF loading.

#[cfg(feature = "gltf")]
pub mod gltf;
pub mod material;
pub mod mesh;

/// Core library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Log the core version. Called once by the application shell at startup.
pub fn init() {
    log::info!("extrashade core v{} initialized", VERSION);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(!VERSION.is_empty());
    }
}
