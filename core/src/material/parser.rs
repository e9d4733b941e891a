//! Parser for shader bindings declared in material `extras`.
//!
//! The expected shape is:
//!
//! ```json
//! {
//!   "shader": {
//!     "vertex": "shaders/wave.vert",
//!     "fragment": "shaders/wave.frag",
//!     "uniforms": [
//!       { "name": "iTime", "type": "Float", "value": [0.0] },
//!       { "name": "tint", "type": "Vector3", "value": [1.0, 0.5, 0.2] }
//!     ]
//!   }
//! }
//! ```
//!
//! Every field is optional. Problems with a single uniform element skip that
//! element and are reported as [`ParseDiagnostic`]s; they never abort the
//! parse.

use std::fmt;
use std::path::{Path, PathBuf};

use super::descriptor::MaterialDescriptor;
use super::table::{UniformTable, UpsertOutcome};
use super::types::{UniformKind, UniformValue};

/// A recoverable problem with one element of the `uniforms` array.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseDiagnostic {
    /// The name contains a NUL character and cannot be passed to a shader API.
    InvalidName {
        /// Position in the `uniforms` array.
        index: usize,
        /// Uniform name as written.
        name: String,
    },
    /// The element has no `type` string.
    MissingType {
        /// Position in the `uniforms` array.
        index: usize,
        /// Uniform name (empty if absent).
        name: String,
    },
    /// The `type` string is not one of the supported kinds.
    UnknownType {
        /// Position in the `uniforms` array.
        index: usize,
        /// Uniform name (empty if absent).
        name: String,
        /// The unrecognized type string.
        type_name: String,
    },
    /// The element has no `value` array.
    MissingValue {
        /// Position in the `uniforms` array.
        index: usize,
        /// Uniform name (empty if absent).
        name: String,
    },
    /// The `value` array is shorter than the kind's arity.
    InsufficientComponents {
        /// Position in the `uniforms` array.
        index: usize,
        /// Uniform name (empty if absent).
        name: String,
        /// Declared kind.
        kind: UniformKind,
        /// Number of components present.
        found: usize,
    },
    /// One of the required components is not a number.
    InvalidComponent {
        /// Position in the `uniforms` array.
        index: usize,
        /// Uniform name (empty if absent).
        name: String,
        /// Declared kind.
        kind: UniformKind,
    },
    /// The name was already declared with another kind; the element was dropped.
    KindConflict {
        /// Position in the `uniforms` array.
        index: usize,
        /// Uniform name.
        name: String,
        /// Kind the name was first declared with.
        existing: UniformKind,
        /// Kind this element declared.
        declared: UniformKind,
    },
}

impl ParseDiagnostic {
    /// Position of the offending element in the `uniforms` array.
    pub fn index(&self) -> usize {
        match self {
            Self::InvalidName { index, .. }
            | Self::MissingType { index, .. }
            | Self::UnknownType { index, .. }
            | Self::MissingValue { index, .. }
            | Self::InsufficientComponents { index, .. }
            | Self::InvalidComponent { index, .. }
            | Self::KindConflict { index, .. } => *index,
        }
    }
}

impl fmt::Display for ParseDiagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidName { index, name } => {
                write!(f, "uniform #{index} {name:?} contains a NUL character")
            }
            Self::MissingType { index, name } => {
                write!(f, "uniform #{index} '{name}' has no type")
            }
            Self::UnknownType {
                index,
                name,
                type_name,
            } => write!(
                f,
                "uniform #{index} '{name}' has unsupported type '{type_name}'"
            ),
            Self::MissingValue { index, name } => {
                write!(f, "uniform #{index} '{name}' has no value array")
            }
            Self::InsufficientComponents {
                index,
                name,
                kind,
                found,
            } => write!(
                f,
                "uniform #{index} '{name}' of type {kind} needs {} components, found {found}",
                kind.component_count()
            ),
            Self::InvalidComponent { index, name, kind } => write!(
                f,
                "uniform #{index} '{name}' of type {kind} has a non-numeric component"
            ),
            Self::KindConflict {
                index,
                name,
                existing,
                declared,
            } => write!(
                f,
                "uniform #{index} '{name}' declared as {declared} but already exists as {existing}"
            ),
        }
    }
}

/// Shader files and uniform values attached to one material.
#[derive(Debug, Clone, Default)]
pub struct ShaderMaterial {
    /// Vertex shader path, resolved against the asset directory.
    pub vertex_shader: Option<PathBuf>,
    /// Fragment shader path, resolved against the asset directory.
    pub fragment_shader: Option<PathBuf>,
    /// Declared uniforms.
    pub uniforms: UniformTable,
    /// Elements of the `uniforms` array that were skipped.
    pub diagnostics: Vec<ParseDiagnostic>,
}

impl ShaderMaterial {
    /// Parse `extras` JSON text. See [`parse_material_extras`].
    pub fn from_json_str(json: &str, base_dir: &Path) -> Result<Self, serde_json::Error> {
        let extras = MaterialDescriptor::from_json_str(json)?;
        Ok(parse_material_extras(&extras, base_dir))
    }

    /// Whether any shader stage comes from a file.
    pub fn has_shader_files(&self) -> bool {
        self.vertex_shader.is_some() || self.fragment_shader.is_some()
    }
}

/// Parse the `shader` block of a material's `extras`.
///
/// `base_dir` is the directory of the glTF file; shader paths are joined
/// onto it. A tree without a `shader` key yields an empty material.
pub fn parse_material_extras(extras: &MaterialDescriptor, base_dir: &Path) -> ShaderMaterial {
    let mut material = ShaderMaterial::default();

    let Some(shader) = extras.get("shader") else {
        return material;
    };

    material.vertex_shader = shader.get_str("vertex").map(|p| base_dir.join(p));
    material.fragment_shader = shader.get_str("fragment").map(|p| base_dir.join(p));

    if let Some(uniforms) = shader.get_array("uniforms") {
        for (index, element) in uniforms.iter().enumerate() {
            if let Err(diagnostic) = parse_uniform(index, element, &mut material.uniforms) {
                match diagnostic {
                    ParseDiagnostic::InvalidName { .. }
                    | ParseDiagnostic::UnknownType { .. }
                    | ParseDiagnostic::KindConflict { .. } => {
                        log::warn!("Skipping material uniform: {diagnostic}");
                    }
                    _ => log::debug!("Skipping material uniform: {diagnostic}"),
                }
                material.diagnostics.push(diagnostic);
            }
        }
    }

    log::debug!(
        "Parsed material shader block: vertex={:?}, fragment={:?}, {} uniforms, {} skipped",
        material.vertex_shader,
        material.fragment_shader,
        material.uniforms.len(),
        material.diagnostics.len()
    );

    material
}

/// Parse one element of the `uniforms` array and declare it into `table`.
fn parse_uniform(
    index: usize,
    element: &MaterialDescriptor,
    table: &mut UniformTable,
) -> Result<(), ParseDiagnostic> {
    let name = element.get_str("name").unwrap_or_default().to_string();
    if name.contains('\0') {
        return Err(ParseDiagnostic::InvalidName { index, name });
    }

    let Some(type_name) = element.get_str("type") else {
        return Err(ParseDiagnostic::MissingType { index, name });
    };

    let Some(kind) = UniformKind::from_type_name(type_name) else {
        return Err(ParseDiagnostic::UnknownType {
            index,
            name,
            type_name: type_name.to_string(),
        });
    };

    let Some(components) = element.get_array("value") else {
        return Err(ParseDiagnostic::MissingValue { index, name });
    };

    let arity = kind.component_count();
    if components.len() < arity {
        return Err(ParseDiagnostic::InsufficientComponents {
            index,
            name,
            kind,
            found: components.len(),
        });
    }

    let Some(numbers) = components[..arity]
        .iter()
        .map(MaterialDescriptor::as_f64)
        .collect::<Option<Vec<f64>>>()
    else {
        return Err(ParseDiagnostic::InvalidComponent { index, name, kind });
    };

    let Some(value) = UniformValue::from_components(kind, &numbers) else {
        return Err(ParseDiagnostic::InsufficientComponents {
            index,
            name,
            kind,
            found: numbers.len(),
        });
    };

    match table.declare(name.clone(), value) {
        UpsertOutcome::Inserted | UpsertOutcome::Updated => Ok(()),
        UpsertOutcome::KindMismatch { existing } => Err(ParseDiagnostic::KindConflict {
            index,
            name,
            existing,
            declared: kind,
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn parse(json: &str) -> ShaderMaterial {
        ShaderMaterial::from_json_str(json, Path::new("assets")).unwrap()
    }

    #[rstest]
    #[case(r#"{}"#)]
    #[case(r#"null"#)]
    #[case(r#"{"other": {"uniforms": [{"name": "a", "type": "Float", "value": [1]}]}}"#)]
    #[case(r#"[1, 2, 3]"#)]
    fn no_shader_block(#[case] json: &str) {
        let material = parse(json);
        assert!(material.vertex_shader.is_none());
        assert!(material.fragment_shader.is_none());
        assert!(material.uniforms.is_empty());
        assert!(material.diagnostics.is_empty());
        assert!(!material.has_shader_files());
    }

    #[test]
    fn shader_paths_resolve_against_base_dir() {
        let material = parse(r#"{"shader": {"vertex": "wave.vert", "fragment": "sub/wave.frag"}}"#);
        assert_eq!(
            material.vertex_shader.as_deref(),
            Some(Path::new("assets/wave.vert"))
        );
        assert_eq!(
            material.fragment_shader.as_deref(),
            Some(Path::new("assets/sub/wave.frag"))
        );
    }

    #[test]
    fn missing_stage_stays_unset() {
        let material = parse(r#"{"shader": {"fragment": "only.frag"}}"#);
        assert!(material.vertex_shader.is_none());
        assert!(material.fragment_shader.is_some());
        assert!(material.has_shader_files());
    }

    #[rstest]
    #[case("Int", "[7.9, 1]", UniformValue::Int(7))]
    #[case("Float", "[0.25, 9]", UniformValue::Float(0.25))]
    #[case("Vector2", "[1, 2, 3]", UniformValue::Vec2([1.0, 2.0]))]
    #[case("Vector3", "[1, 2, 3, 4]", UniformValue::Vec3([1.0, 2.0, 3.0]))]
    #[case("Vector4", "[1, 2, 3, 4, 5]", UniformValue::Vec4([1.0, 2.0, 3.0, 4.0]))]
    fn recognized_types(#[case] ty: &str, #[case] value: &str, #[case] expected: UniformValue) {
        let json = format!(
            r#"{{"shader": {{"uniforms": [{{"name": "u", "type": "{ty}", "value": {value}}}]}}}}"#
        );
        let material = parse(&json);
        assert_eq!(material.uniforms.get("u"), Some(&expected));
        assert!(material.diagnostics.is_empty());
    }

    #[rstest]
    #[case("Float", "[]")]
    #[case("Vector2", "[1]")]
    #[case("Vector3", "[1, 2]")]
    #[case("Vector4", "[1, 2, 3]")]
    fn short_value_arrays_are_skipped(#[case] ty: &str, #[case] value: &str) {
        let json = format!(
            r#"{{"shader": {{"uniforms": [{{"name": "u", "type": "{ty}", "value": {value}}}]}}}}"#
        );
        let material = parse(&json);
        assert!(material.uniforms.is_empty());
        assert!(matches!(
            material.diagnostics.as_slice(),
            [ParseDiagnostic::InsufficientComponents { .. }]
        ));
    }

    #[test]
    fn unknown_type_is_reported_and_parsing_continues() {
        let material = parse(
            r#"{"shader": {"uniforms": [
                {"name": "before", "type": "Float", "value": [1.0]},
                {"name": "foo", "type": "Matrix4", "value": [1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1, 0, 0, 0, 0, 1]},
                {"name": "after", "type": "Vector2", "value": [3.0, 4.0]}
            ]}}"#,
        );

        assert_eq!(material.uniforms.len(), 2);
        assert!(!material.uniforms.contains("foo"));
        assert_eq!(
            material.uniforms.get("after"),
            Some(&UniformValue::Vec2([3.0, 4.0]))
        );
        assert_eq!(
            material.diagnostics,
            vec![ParseDiagnostic::UnknownType {
                index: 1,
                name: "foo".into(),
                type_name: "Matrix4".into(),
            }]
        );
    }

    #[test]
    fn type_names_are_case_sensitive() {
        let material =
            parse(r#"{"shader": {"uniforms": [{"name": "u", "type": "float", "value": [1]}]}}"#);
        assert!(material.uniforms.is_empty());
        assert!(matches!(
            material.diagnostics.as_slice(),
            [ParseDiagnostic::UnknownType { .. }]
        ));
    }

    #[test]
    fn missing_type_contributes_nothing() {
        let material = parse(r#"{"shader": {"uniforms": [{"name": "u", "value": [1]}]}}"#);
        assert!(material.uniforms.is_empty());
        assert_eq!(
            material.diagnostics,
            vec![ParseDiagnostic::MissingType {
                index: 0,
                name: "u".into()
            }]
        );
    }

    #[test]
    fn missing_name_declares_empty_name() {
        let material = parse(r#"{"shader": {"uniforms": [{"type": "Float", "value": [2]}]}}"#);
        assert_eq!(material.uniforms.get(""), Some(&UniformValue::Float(2.0)));
    }

    #[test]
    fn name_with_nul_is_rejected_and_parsing_continues() {
        let material = parse(
            r#"{"shader": {"uniforms": [
                {"name": "i\u0000Time", "type": "Float", "value": [0.0]},
                {"name": "iTime", "type": "Float", "value": [1.0]}
            ]}}"#,
        );
        assert_eq!(material.uniforms.len(), 1);
        assert_eq!(
            material.uniforms.get("iTime"),
            Some(&UniformValue::Float(1.0))
        );
        assert_eq!(
            material.diagnostics,
            vec![ParseDiagnostic::InvalidName {
                index: 0,
                name: "i\0Time".into()
            }]
        );
    }

    #[test]
    fn missing_or_non_numeric_value() {
        let material = parse(
            r#"{"shader": {"uniforms": [
                {"name": "a", "type": "Float"},
                {"name": "b", "type": "Vector2", "value": [1, "two"]},
                {"name": "c", "type": "Float", "value": 3}
            ]}}"#,
        );
        assert!(material.uniforms.is_empty());
        let indices: Vec<usize> = material.diagnostics.iter().map(|d| d.index()).collect();
        assert_eq!(indices, vec![0, 1, 2]);
        assert!(matches!(
            material.diagnostics[1],
            ParseDiagnostic::InvalidComponent {
                kind: UniformKind::Vec2,
                ..
            }
        ));
    }

    #[test]
    fn duplicate_names_last_write_wins() {
        let material = parse(
            r#"{"shader": {"uniforms": [
                {"name": "alpha", "type": "Float", "value": [1.0]},
                {"name": "alpha", "type": "Float", "value": [2.0]}
            ]}}"#,
        );
        assert_eq!(material.uniforms.len(), 1);
        assert_eq!(
            material.uniforms.get("alpha"),
            Some(&UniformValue::Float(2.0))
        );
    }

    #[test]
    fn duplicate_name_with_other_type_is_dropped() {
        let material = parse(
            r#"{"shader": {"uniforms": [
                {"name": "alpha", "type": "Float", "value": [1.0]},
                {"name": "alpha", "type": "Vector3", "value": [1, 2, 3]}
            ]}}"#,
        );
        assert_eq!(
            material.uniforms.get("alpha"),
            Some(&UniformValue::Float(1.0))
        );
        assert_eq!(material.uniforms.len_of(UniformKind::Vec3), 0);
        assert_eq!(
            material.diagnostics,
            vec![ParseDiagnostic::KindConflict {
                index: 1,
                name: "alpha".into(),
                existing: UniformKind::Float,
                declared: UniformKind::Vec3,
            }]
        );
    }

    #[test]
    fn diagnostics_display() {
        let diag = ParseDiagnostic::InsufficientComponents {
            index: 2,
            name: "tint".into(),
            kind: UniformKind::Vec3,
            found: 1,
        };
        assert_eq!(
            diag.to_string(),
            "uniform #2 'tint' of type Vector3 needs 3 components, found 1"
        );
    }
}
