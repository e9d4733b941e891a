//! Pushing a [`UniformTable`] to a shader program.
//!
//! The table does not know about GPUs. A [`UniformSink`] resolves uniform
//! names against the bound program and performs the typed upload; the GL
//! implementation lives in the graphics crate.

use super::table::UniformTable;
use super::types::UniformValue;

/// Conventional name of the elapsed-time uniform fed by the render loop.
pub const ELAPSED_TIME_UNIFORM: &str = "iTime";

/// Target of uniform uploads, usually the currently bound shader program.
pub trait UniformSink {
    /// Resolved uniform location.
    type Location;

    /// Resolve `name` in the program. `None` means the program has no active
    /// uniform with that name (never declared, misspelled or optimized out).
    fn location(&mut self, name: &str) -> Option<Self::Location>;

    /// Upload `value` to `location` with the transfer call matching its kind.
    fn push(&mut self, location: &Self::Location, value: &UniformValue);
}

/// Push every entry of `table` to `sink`.
///
/// Partitions are visited in [`UniformKind::ALL`](super::UniformKind::ALL)
/// order, entries in insertion order. Names the sink cannot resolve are
/// skipped. Returns the number of values pushed.
pub fn apply_uniforms<S: UniformSink>(table: &UniformTable, sink: &mut S) -> usize {
    let mut pushed = 0;
    for entry in table.iter() {
        if let Some(location) = sink.location(&entry.name) {
            sink.push(&location, &entry.value);
            pushed += 1;
        }
    }
    pushed
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use std::path::Path;

    use super::*;
    use crate::material::{ShaderMaterial, UniformKind};

    /// Sink that exposes a fixed set of uniforms and records every push.
    struct RecordingSink {
        active: HashMap<String, u32>,
        pushes: Vec<(u32, UniformValue)>,
        lookups: usize,
    }

    impl RecordingSink {
        fn new(active: &[&str]) -> Self {
            Self {
                active: active
                    .iter()
                    .enumerate()
                    .map(|(i, n)| (n.to_string(), i as u32))
                    .collect(),
                pushes: Vec::new(),
                lookups: 0,
            }
        }
    }

    impl UniformSink for RecordingSink {
        type Location = u32;

        fn location(&mut self, name: &str) -> Option<u32> {
            self.lookups += 1;
            self.active.get(name).copied()
        }

        fn push(&mut self, location: &u32, value: &UniformValue) {
            self.pushes.push((*location, *value));
        }
    }

    #[test]
    fn elapsed_time_end_to_end() {
        let mut material = ShaderMaterial::from_json_str(
            r#"{"shader":{"uniforms":[{"name":"iTime","type":"Float","value":[0.0]}]}}"#,
            Path::new("."),
        )
        .unwrap();
        assert!(
            material
                .uniforms
                .set(ELAPSED_TIME_UNIFORM, UniformValue::Float(3.5))
        );

        let mut sink = RecordingSink::new(&["iTime"]);
        assert_eq!(apply_uniforms(&material.uniforms, &mut sink), 1);
        assert_eq!(sink.pushes, vec![(0, UniformValue::Float(3.5))]);

        let mut empty_program = RecordingSink::new(&[]);
        assert_eq!(apply_uniforms(&material.uniforms, &mut empty_program), 0);
        assert!(empty_program.pushes.is_empty());
        assert_eq!(empty_program.lookups, 1);
    }

    #[test]
    fn applying_twice_pushes_the_same_sequence() {
        let mut table = UniformTable::new();
        table.declare("tint", UniformValue::Vec3([1.0, 0.0, 0.0]));
        table.declare("count", UniformValue::Int(3));
        table.declare("iTime", UniformValue::Float(1.0));
        table.declare("unused", UniformValue::Vec4([0.0; 4]));

        let mut sink = RecordingSink::new(&["iTime", "tint", "count"]);
        apply_uniforms(&table, &mut sink);
        let first = std::mem::take(&mut sink.pushes);
        apply_uniforms(&table, &mut sink);

        assert_eq!(first.len(), 3);
        assert_eq!(first, sink.pushes);
    }

    #[test]
    fn partitions_are_pushed_in_kind_order() {
        let mut table = UniformTable::new();
        table.declare("v4", UniformValue::Vec4([1.0; 4]));
        table.declare("f", UniformValue::Float(1.0));
        table.declare("i", UniformValue::Int(1));

        let mut sink = RecordingSink::new(&["v4", "f", "i"]);
        apply_uniforms(&table, &mut sink);

        let kinds: Vec<UniformKind> = sink.pushes.iter().map(|(_, v)| v.kind()).collect();
        assert_eq!(
            kinds,
            vec![UniformKind::Int, UniformKind::Float, UniformKind::Vec4]
        );
    }
}
