//! Typed uniform values.
//!
//! A [`UniformValue`] is the payload pushed to a shader uniform. Its
//! [`UniformKind`] decides which partition of a
//! [`UniformTable`](super::UniformTable) it lives in.

use std::fmt;

/// Kind of a uniform value, without the payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum UniformKind {
    /// Signed 32-bit integer.
    Int,
    /// Single f32 value.
    Float,
    /// 2-component float vector.
    Vec2,
    /// 3-component float vector.
    Vec3,
    /// 4-component float vector.
    Vec4,
}

impl UniformKind {
    /// All kinds, in the order tables and applicators walk partitions.
    pub const ALL: [UniformKind; 5] = [
        UniformKind::Int,
        UniformKind::Float,
        UniformKind::Vec2,
        UniformKind::Vec3,
        UniformKind::Vec4,
    ];

    /// Number of scalar components a value of this kind carries.
    pub fn component_count(self) -> usize {
        match self {
            Self::Int | Self::Float => 1,
            Self::Vec2 => 2,
            Self::Vec3 => 3,
            Self::Vec4 => 4,
        }
    }

    /// Resolve a material `type` string.
    ///
    /// Matching is case-sensitive and recognizes exactly `Int`, `Float`,
    /// `Vector2`, `Vector3` and `Vector4`.
    pub fn from_type_name(name: &str) -> Option<Self> {
        match name {
            "Int" => Some(Self::Int),
            "Float" => Some(Self::Float),
            "Vector2" => Some(Self::Vec2),
            "Vector3" => Some(Self::Vec3),
            "Vector4" => Some(Self::Vec4),
            _ => None,
        }
    }

    /// The material `type` string for this kind.
    pub fn type_name(self) -> &'static str {
        match self {
            Self::Int => "Int",
            Self::Float => "Float",
            Self::Vec2 => "Vector2",
            Self::Vec3 => "Vector3",
            Self::Vec4 => "Vector4",
        }
    }
}

impl fmt::Display for UniformKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name())
    }
}

/// A typed uniform value.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum UniformValue {
    /// Signed integer (samplers, flags, counters).
    Int(i32),
    /// Single float (time, intensity).
    Float(f32),
    /// 2-component vector (resolution, offsets).
    Vec2([f32; 2]),
    /// 3-component vector (colors, directions).
    Vec3([f32; 3]),
    /// 4-component vector (colors with alpha).
    Vec4([f32; 4]),
}

impl UniformValue {
    /// The kind of this value.
    pub fn kind(&self) -> UniformKind {
        match self {
            Self::Int(_) => UniformKind::Int,
            Self::Float(_) => UniformKind::Float,
            Self::Vec2(_) => UniformKind::Vec2,
            Self::Vec3(_) => UniformKind::Vec3,
            Self::Vec4(_) => UniformKind::Vec4,
        }
    }

    /// Build a value of `kind` from the leading components of `components`.
    ///
    /// Components past the kind's arity are ignored. Returns `None` when
    /// fewer than [`UniformKind::component_count`] components are given.
    /// `Int` truncates its component toward zero.
    pub fn from_components(kind: UniformKind, components: &[f64]) -> Option<Self> {
        if components.len() < kind.component_count() {
            return None;
        }
        let c = |i: usize| components[i] as f32;
        Some(match kind {
            UniformKind::Int => Self::Int(components[0] as i32),
            UniformKind::Float => Self::Float(c(0)),
            UniformKind::Vec2 => Self::Vec2([c(0), c(1)]),
            UniformKind::Vec3 => Self::Vec3([c(0), c(1), c(2)]),
            UniformKind::Vec4 => Self::Vec4([c(0), c(1), c(2), c(3)]),
        })
    }

    /// Get the integer payload.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the float payload.
    pub fn as_float(&self) -> Option<f32> {
        match self {
            Self::Float(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the vec2 payload.
    pub fn as_vec2(&self) -> Option<[f32; 2]> {
        match self {
            Self::Vec2(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the vec3 payload.
    pub fn as_vec3(&self) -> Option<[f32; 3]> {
        match self {
            Self::Vec3(v) => Some(*v),
            _ => None,
        }
    }

    /// Get the vec4 payload.
    pub fn as_vec4(&self) -> Option<[f32; 4]> {
        match self {
            Self::Vec4(v) => Some(*v),
            _ => None,
        }
    }
}

impl From<i32> for UniformValue {
    fn from(v: i32) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for UniformValue {
    fn from(v: f32) -> Self {
        Self::Float(v)
    }
}

impl From<[f32; 2]> for UniformValue {
    fn from(v: [f32; 2]) -> Self {
        Self::Vec2(v)
    }
}

impl From<[f32; 3]> for UniformValue {
    fn from(v: [f32; 3]) -> Self {
        Self::Vec3(v)
    }
}

impl From<[f32; 4]> for UniformValue {
    fn from(v: [f32; 4]) -> Self {
        Self::Vec4(v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Int", Some(UniformKind::Int))]
    #[case("Float", Some(UniformKind::Float))]
    #[case("Vector2", Some(UniformKind::Vec2))]
    #[case("Vector3", Some(UniformKind::Vec3))]
    #[case("Vector4", Some(UniformKind::Vec4))]
    #[case("float", None)]
    #[case("Vec3", None)]
    #[case("Matrix4", None)]
    #[case("", None)]
    fn type_names(#[case] name: &str, #[case] expected: Option<UniformKind>) {
        assert_eq!(UniformKind::from_type_name(name), expected);
        if let Some(kind) = expected {
            assert_eq!(kind.type_name(), name);
        }
    }

    #[test]
    fn from_components_truncates_to_arity() {
        let v = UniformValue::from_components(UniformKind::Vec2, &[1.0, 2.0, 3.0, 4.0]);
        assert_eq!(v, Some(UniformValue::Vec2([1.0, 2.0])));
    }

    #[test]
    fn from_components_rejects_short_input() {
        assert!(UniformValue::from_components(UniformKind::Vec4, &[1.0, 2.0, 3.0]).is_none());
        assert!(UniformValue::from_components(UniformKind::Float, &[]).is_none());
    }

    #[test]
    fn int_truncates_toward_zero() {
        assert_eq!(
            UniformValue::from_components(UniformKind::Int, &[-2.7]),
            Some(UniformValue::Int(-2))
        );
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(UniformValue::from(1_i32).kind(), UniformKind::Int);
        assert_eq!(UniformValue::from(1.0_f32).kind(), UniformKind::Float);
        assert_eq!(UniformValue::from([0.0_f32; 3]).kind(), UniformKind::Vec3);
        assert_eq!(UniformValue::Vec4([0.0; 4]).as_vec4(), Some([0.0; 4]));
        assert_eq!(UniformValue::Float(2.0).as_vec2(), None);
    }
}
