//! Internal glTF loading logic.
//!
//! The [`LoadContext`] holds all state needed during loading: resolved buffer
//! data, the asset directory, and the parsed glTF document.

use std::path::{Path, PathBuf};

use crate::material::{MaterialDescriptor, ShaderMaterial, parse_material_extras};
use crate::mesh::CpuMesh;

use super::error::GltfError;
use super::types::GltfMaterial;

/// Internal loading context that holds resolved data during loading.
pub(crate) struct LoadContext {
    /// The parsed glTF document.
    document: gltf_dep::Document,
    /// Resolved buffer data (one Vec<u8> per glTF buffer).
    buffers: Vec<Vec<u8>>,
    /// Directory relative paths are resolved against.
    base_dir: PathBuf,
}

impl LoadContext {
    /// Create a new LoadContext from parsed glTF data.
    pub fn new(document: gltf_dep::Document, buffers: Vec<Vec<u8>>, base_dir: &Path) -> Self {
        Self {
            document,
            buffers,
            base_dir: base_dir.to_path_buf(),
        }
    }

    /// Load all materials, parsing the shader block of their extras.
    pub fn load_materials(&self) -> Vec<GltfMaterial> {
        self.document
            .materials()
            .map(|mat| {
                let name = mat.name().map(String::from);
                let shader = match mat.extras() {
                    Some(raw) => parse_extras(raw.get(), name.as_deref(), &self.base_dir),
                    None => ShaderMaterial::default(),
                };
                GltfMaterial { name, shader }
            })
            .collect()
    }

    /// Load all meshes.
    ///
    /// Returns a flat list of `CpuMesh` (one per glTF primitive). Each mesh
    /// carries its material index via `CpuMesh::material()`.
    pub fn load_meshes(&self) -> Result<Vec<CpuMesh>, GltfError> {
        let mut result = Vec::new();

        for (mesh_idx, mesh) in self.document.meshes().enumerate() {
            let primitive_count = mesh.primitives().count();

            for (prim_idx, primitive) in mesh.primitives().enumerate() {
                let Some(pos_accessor) = primitive.get(&gltf_dep::Semantic::Positions) else {
                    return Err(GltfError::MissingPositions {
                        mesh: mesh_idx,
                        primitive: prim_idx,
                    });
                };

                if primitive.mode() != gltf_dep::mesh::Mode::Triangles {
                    return Err(GltfError::UnsupportedTopology(format!(
                        "mesh {mesh_idx} primitive {prim_idx} uses {:?}",
                        primitive.mode()
                    )));
                }

                let mut cpu_mesh = CpuMesh::new(read_vec_accessor(&pos_accessor, &self.buffers)?);

                if let Some(accessor) = primitive.get(&gltf_dep::Semantic::Normals) {
                    cpu_mesh = cpu_mesh.with_normals(read_vec_accessor(&accessor, &self.buffers)?);
                }

                if let Some(accessor) = primitive.get(&gltf_dep::Semantic::TexCoords(0)) {
                    if accessor.data_type() == gltf_dep::accessor::DataType::F32 {
                        cpu_mesh =
                            cpu_mesh.with_tex_coords(read_vec_accessor(&accessor, &self.buffers)?);
                    } else {
                        log::warn!(
                            "mesh {mesh_idx} primitive {prim_idx}: skipping {:?} TEXCOORD_0",
                            accessor.data_type()
                        );
                    }
                }

                if let Some(indices_accessor) = primitive.indices() {
                    let vertex_count = cpu_mesh.vertex_count();
                    let indices = read_indices(&indices_accessor, &self.buffers, vertex_count)?;
                    cpu_mesh = cpu_mesh.with_indices(indices);
                }

                if let Some(name) = mesh.name() {
                    cpu_mesh = cpu_mesh.with_label(if primitive_count > 1 {
                        format!("{name}_prim{prim_idx}")
                    } else {
                        name.to_string()
                    });
                }

                if let Some(mat_idx) = primitive.material().index() {
                    cpu_mesh = cpu_mesh.with_material(mat_idx);
                }

                result.push(cpu_mesh);
            }
        }

        Ok(result)
    }
}

// -- Helper functions --

/// Parse raw extras JSON. Malformed JSON yields an empty material.
fn parse_extras(json: &str, material: Option<&str>, base_dir: &Path) -> ShaderMaterial {
    match MaterialDescriptor::from_json_str(json) {
        Ok(extras) => parse_material_extras(&extras, base_dir),
        Err(e) => {
            log::warn!(
                "Ignoring unreadable extras on material {}: {e}",
                material.unwrap_or("<unnamed>")
            );
            ShaderMaterial::default()
        }
    }
}

/// Parse a data URI (e.g., `data:application/octet-stream;base64,...`) and
/// return the decoded bytes.
fn parse_data_uri(uri: &str) -> Option<Vec<u8>> {
    let rest = uri.strip_prefix("data:")?;
    let base64_start = rest.find(";base64,")?;
    base64_decode(&rest[base64_start + 8..])
}

/// Simple base64 decoder for embedded buffers.
fn base64_decode(input: &str) -> Option<Vec<u8>> {
    const TABLE: &[u8; 64] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789+/";

    fn decode_char(c: u8) -> Option<u8> {
        TABLE.iter().position(|&b| b == c).map(|p| p as u8)
    }

    let input: Vec<u8> = input.bytes().filter(|b| !b.is_ascii_whitespace()).collect();
    let mut result = Vec::with_capacity(input.len() * 3 / 4);

    for chunk in input.chunks(4) {
        let mut buf = [0u8; 4];
        let mut pad = 4 - chunk.len();

        for (i, &byte) in chunk.iter().enumerate() {
            if byte == b'=' {
                pad += 1;
            } else {
                buf[i] = decode_char(byte)?;
            }
        }

        if pad > 2 {
            return None;
        }
        result.push((buf[0] << 2) | (buf[1] >> 4));
        if pad < 2 {
            result.push((buf[1] << 4) | (buf[2] >> 2));
        }
        if pad < 1 {
            result.push((buf[2] << 6) | buf[3]);
        }
    }

    Some(result)
}

/// Locate an accessor's bytes: the backing buffer, first element offset and
/// element stride. Bounds are checked against the buffer length.
fn accessor_bytes<'a>(
    accessor: &gltf_dep::Accessor,
    buffers: &'a [Vec<u8>],
) -> Result<(&'a [u8], usize, usize), GltfError> {
    let view = accessor.view().ok_or_else(|| {
        GltfError::AccessorError(format!("accessor {} has no buffer view", accessor.index()))
    })?;

    let buffer_index = view.buffer().index();
    let buffer_data = buffers.get(buffer_index).ok_or_else(|| {
        GltfError::BufferError(format!("buffer index {buffer_index} out of range"))
    })?;

    let element_size = accessor.size();
    let stride = view.stride().unwrap_or(element_size);
    let count = accessor.count();
    let start = view.offset().checked_add(accessor.offset()).ok_or_else(|| {
        GltfError::AccessorError(format!("accessor {} offset overflows", accessor.index()))
    })?;

    if count > 0 {
        let end = (count - 1)
            .checked_mul(stride)
            .and_then(|span| span.checked_add(start))
            .and_then(|last| last.checked_add(element_size))
            .ok_or_else(|| {
                GltfError::AccessorError(format!(
                    "accessor {} with {count} elements overflows the address space",
                    accessor.index()
                ))
            })?;
        if end > buffer_data.len() {
            return Err(GltfError::AccessorError(format!(
                "accessor {} reads bytes {start}..{end} of a {}-byte buffer",
                accessor.index(),
                buffer_data.len()
            )));
        }
    }

    Ok((buffer_data, start, stride))
}

/// Read a float accessor as fixed-size vectors.
///
/// `N` must match the accessor's component count.
fn read_vec_accessor<const N: usize>(
    accessor: &gltf_dep::Accessor,
    buffers: &[Vec<u8>],
) -> Result<Vec<[f32; N]>, GltfError> {
    if accessor.data_type() != gltf_dep::accessor::DataType::F32 {
        return Err(GltfError::AccessorError(format!(
            "accessor {} has component type {:?}, expected F32",
            accessor.index(),
            accessor.data_type()
        )));
    }
    let component_count = accessor.dimensions().multiplicity();
    if component_count != N {
        return Err(GltfError::AccessorError(format!(
            "accessor {} has {component_count} components, expected {N}",
            accessor.index()
        )));
    }

    let (data, start, stride) = accessor_bytes(accessor, buffers)?;
    let mut result = Vec::with_capacity(accessor.count());

    for i in 0..accessor.count() {
        let offset = start + i * stride;
        let mut element = [0.0f32; N];
        for (c, value) in element.iter_mut().enumerate() {
            let b = offset + c * 4;
            *value = f32::from_le_bytes([data[b], data[b + 1], data[b + 2], data[b + 3]]);
        }
        result.push(element);
    }

    Ok(result)
}

/// Read an index accessor, widening to u32. Indices past `vertex_count`
/// are rejected.
fn read_indices(
    accessor: &gltf_dep::Accessor,
    buffers: &[Vec<u8>],
    vertex_count: u32,
) -> Result<Vec<u32>, GltfError> {
    let (data, start, stride) = accessor_bytes(accessor, buffers)?;
    let count = accessor.count();

    let read: fn(&[u8]) -> u32 = match accessor.data_type() {
        gltf_dep::accessor::DataType::U8 => |b| u32::from(b[0]),
        gltf_dep::accessor::DataType::U16 => |b| u32::from(u16::from_le_bytes([b[0], b[1]])),
        gltf_dep::accessor::DataType::U32 => |b| u32::from_le_bytes([b[0], b[1], b[2], b[3]]),
        other => {
            return Err(GltfError::AccessorError(format!(
                "unsupported index component type {other:?}"
            )));
        }
    };

    let mut indices = Vec::with_capacity(count);
    for i in 0..count {
        let index = read(&data[start + i * stride..]);
        if index >= vertex_count {
            return Err(GltfError::AccessorError(format!(
                "index {index} out of range for {vertex_count} vertices"
            )));
        }
        indices.push(index);
    }

    Ok(indices)
}

/// Resolve all buffer data from the glTF document.
///
/// For binary glTF (.glb), the first buffer is the embedded blob. Data URIs
/// are decoded in place; other URIs are read relative to `base_dir`.
pub(crate) fn resolve_buffers(
    document: &gltf_dep::Document,
    blob: Option<Vec<u8>>,
    base_dir: &Path,
) -> Result<Vec<Vec<u8>>, GltfError> {
    let mut buffers = Vec::new();

    for buffer in document.buffers() {
        let data = match buffer.source() {
            gltf_dep::buffer::Source::Bin => blob.clone().ok_or_else(|| {
                GltfError::BufferError("binary buffer referenced but no blob present".into())
            })?,
            gltf_dep::buffer::Source::Uri(uri) if uri.starts_with("data:") => {
                let index = buffer.index();
                parse_data_uri(uri).ok_or_else(|| {
                    GltfError::BufferError(format!("buffer {index} has a malformed data URI"))
                })?
            }
            gltf_dep::buffer::Source::Uri(uri) => {
                let path = base_dir.join(uri);
                log::debug!("Reading external buffer {}", path.display());
                std::fs::read(&path).map_err(|source| GltfError::Io { path, source })?
            }
        };

        if data.len() < buffer.length() {
            return Err(GltfError::BufferError(format!(
                "buffer {} declares {} bytes but only {} are available",
                buffer.index(),
                buffer.length(),
                data.len()
            )));
        }
        buffers.push(data);
    }

    Ok(buffers)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base64_decode() {
        let encoded = "SGVsbG8gV29ybGQ=";
        let decoded = base64_decode(encoded).unwrap();
        assert_eq!(decoded, b"Hello World");
    }

    #[test]
    fn test_base64_decode_padding() {
        assert_eq!(base64_decode("YQ==").unwrap(), b"a");
        assert_eq!(base64_decode("YWI=").unwrap(), b"ab");
    }

    #[test]
    fn test_base64_decode_rejects_garbage() {
        assert!(base64_decode("Y!==").is_none());
    }

    #[test]
    fn test_parse_data_uri() {
        let uri = "data:application/octet-stream;base64,AQID";
        let data = parse_data_uri(uri).unwrap();
        assert_eq!(data, vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_data_uri_not_data() {
        let uri = "file://some/path";
        assert!(parse_data_uri(uri).is_none());
    }

    #[test]
    fn test_unreadable_extras_yield_empty_material() {
        let material = parse_extras("{not json", Some("broken"), Path::new("."));
        assert!(material.uniforms.is_empty());
        assert!(!material.has_shader_files());
    }
}
