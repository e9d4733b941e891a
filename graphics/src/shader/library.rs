//! Built-in shader sources.
//!
//! Used for any stage a material does not supply a file for. Both target
//! GLSL ES 3.00: the vertex stage reads a `vec3` position from attribute
//! location 0 and passes it through unchanged, the fragment stage writes
//! opaque green.

/// Pass-through vertex shader. Reads `position` at location 0.
pub const DEFAULT_VERTEX_SHADER: &str = r"#version 300 es
layout (location = 0) in vec3 position;
void main() {
    gl_Position = vec4(position, 1.0);
}
";

/// Solid green fragment shader.
pub const DEFAULT_FRAGMENT_SHADER: &str = r"#version 300 es
precision mediump float;
out vec4 fragcolour;
void main() {
    fragcolour = vec4(0.0, 1.0, 0.0, 1.0);
}
";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_directive_comes_first() {
        // GLSL ES requires `#version` on the first line.
        assert!(DEFAULT_VERTEX_SHADER.starts_with("#version 300 es\n"));
        assert!(DEFAULT_FRAGMENT_SHADER.starts_with("#version 300 es\n"));
    }

    #[test]
    fn test_default_vertex_reads_location_zero() {
        assert!(DEFAULT_VERTEX_SHADER.contains("layout (location = 0) in vec3 position;"));
    }
}
