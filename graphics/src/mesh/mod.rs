//! GPU mesh upload.
//!
//! - [`GpuMesh`] - Vertex array object plus one buffer per attribute stream
//! - [`AttributeLocations`] - Which shader location each stream feeds

mod data;
mod layout;

pub use data::GpuMesh;
pub use layout::AttributeLocations;
