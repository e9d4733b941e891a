use std::path::{Path, PathBuf};


/// Directory holding the test fixtures.
fn fixture_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("src/gltf/tests")
}

/// Minimal glTF JSON with one position-only triangle in a data URI buffer,
/// a single material and the given primitive `mode`.
///
/// `extras` is spliced verbatim into the material (pass `None` to omit it).
fn inline_triangle(extras: Option<&str>, mode: u32) -> String {
    // -0.5,-0.5,0 / 0.5,-0.5,0 / 0,0.5,0 as little-endian f32.
    const POSITIONS: &str = "AAAAvwAAAL8AAAAAAAAAPwAAAL8AAAAAAAAAAAAAAD8AAAAA";
    let extras = extras
        .map(|e| format!(r#", "extras": {e}"#))
        .unwrap_or_default();
    format!(
        r#"{{
  "asset": {{ "version": "2.0" }},
  "meshes": [{{ "primitives": [{{ "attributes": {{ "POSITION": 0 }}, "material": 0, "mode": {mode} }}] }}],
  "materials": [{{ "name": "Inline"{extras} }}],
  "buffers": [{{ "byteLength": 36, "uri": "data:application/octet-stream;base64,{POSITIONS}" }}],
  "bufferViews": [{{ "buffer": 0, "byteLength": 36 }}],
  "accessors": [{{ "bufferView": 0, "componentType": 5126, "count": 3, "type": "VEC3",
                   "min": [-0.5, -0.5, 0.0], "max": [0.5, 0.5, 0.0] }}]
}}"#
    )
}
