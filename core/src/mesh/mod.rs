//! CPU-side mesh types and generators.
//!
//! This module provides GPU-agnostic mesh data:
//!
//! - [`CpuMesh`] - Separate position / normal / texcoord streams plus optional indices
//! - [`VertexAttributeSemantic`] - Which stream an attribute reads
//! - Generators for the built-in demo geometry
//!
//! Meshes are uploaded by `extrashade-graphics`, one GPU buffer per stream.

mod data;
pub mod generators;

pub use data::{CpuMesh, VertexAttributeSemantic};
