//! Typed view of free-form material metadata.
//!
//! glTF `extras` blocks are arbitrary JSON. [`MaterialDescriptor`] is the
//! tree the parser walks: every lookup returns an `Option`, so a missing
//! key or a wrongly typed node reads as "absent" rather than failing.

/// A node in a material metadata tree.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum MaterialDescriptor {
    /// JSON `null`, or no metadata at all.
    #[default]
    Null,
    /// Boolean scalar.
    Bool(bool),
    /// Numeric scalar.
    Number(f64),
    /// String scalar.
    String(String),
    /// Indexed children.
    Array(Vec<MaterialDescriptor>),
    /// Named children.
    Object(Vec<(String, MaterialDescriptor)>),
}

impl MaterialDescriptor {
    /// Parse a descriptor from JSON text.
    pub fn from_json_str(json: &str) -> Result<Self, serde_json::Error> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        Ok(Self::from(value))
    }

    /// Child of an object node by key.
    pub fn get(&self, key: &str) -> Option<&MaterialDescriptor> {
        match self {
            Self::Object(children) => children.iter().find(|(k, _)| k == key).map(|(_, v)| v),
            _ => None,
        }
    }

    /// Child of an array node by index.
    pub fn at(&self, index: usize) -> Option<&MaterialDescriptor> {
        self.as_array()?.get(index)
    }

    /// Whether an object node has `key`.
    pub fn has(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// String payload.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// Numeric payload.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Array children.
    pub fn as_array(&self) -> Option<&[MaterialDescriptor]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// String child of an object node.
    pub fn get_str(&self, key: &str) -> Option<&str> {
        self.get(key)?.as_str()
    }

    /// Array child of an object node.
    pub fn get_array(&self, key: &str) -> Option<&[MaterialDescriptor]> {
        self.get(key)?.as_array()
    }

    /// Whether this is the null node.
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }
}

impl From<serde_json::Value> for MaterialDescriptor {
    fn from(value: serde_json::Value) -> Self {
        use serde_json::Value;

        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            // Out-of-range numbers have no f64 form; keep them as null.
            Value::Number(n) => n.as_f64().map(Self::Number).unwrap_or(Self::Null),
            Value::String(s) => Self::String(s),
            Value::Array(items) => Self::Array(items.into_iter().map(Self::from).collect()),
            Value::Object(map) => {
                Self::Object(map.into_iter().map(|(k, v)| (k, Self::from(v))).collect())
            }
        }
    }
}
