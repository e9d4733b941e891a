//! Name-keyed table of typed uniform values.

use std::collections::HashMap;

use super::types::{UniformKind, UniformValue};

/// Result of [`UniformTable::declare`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UpsertOutcome {
    /// The name was new; an entry was created.
    Inserted,
    /// The name existed with the same kind; its value was replaced.
    Updated,
    /// The name existed with another kind; nothing changed.
    KindMismatch {
        /// Kind the entry was first declared with.
        existing: UniformKind,
    },
}

/// A single uniform entry.
#[derive(Debug, Clone, PartialEq)]
pub struct UniformEntry {
    /// Shader uniform identifier.
    pub name: String,
    /// Current value.
    pub value: UniformValue,
}

/// Uniform values keyed by name and partitioned by [`UniformKind`].
///
/// A name belongs to exactly one partition, fixed by its first declaration.
/// Entries are never removed; values are replaced in place.
#[derive(Debug, Clone, Default)]
pub struct UniformTable {
    /// One insertion-ordered partition per kind, indexed by `UniformKind as usize`.
    partitions: [Vec<UniformEntry>; 5],
    /// Name → (kind, index within partition).
    index: HashMap<String, (UniformKind, usize)>,
}

impl UniformTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `name` if unknown, overwrite it if it has the same kind.
    ///
    /// If `name` already exists under a different kind, the table is left
    /// untouched and [`UpsertOutcome::KindMismatch`] is returned.
    pub fn declare(&mut self, name: impl Into<String>, value: UniformValue) -> UpsertOutcome {
        let name = name.into();
        let kind = value.kind();
        match self.index.get(&name) {
            Some(&(existing, slot)) if existing == kind => {
                self.partitions[kind as usize][slot].value = value;
                UpsertOutcome::Updated
            }
            Some(&(existing, _)) => UpsertOutcome::KindMismatch { existing },
            None => {
                let partition = &mut self.partitions[kind as usize];
                self.index.insert(name.clone(), (kind, partition.len()));
                partition.push(UniformEntry { name, value });
                UpsertOutcome::Inserted
            }
        }
    }

    /// Runtime setter: update `name` only if it is already declared with the
    /// kind of `value`.
    ///
    /// Returns `true` if a value was replaced. Unknown names and kind
    /// mismatches are silent no-ops.
    pub fn set(&mut self, name: &str, value: UniformValue) -> bool {
        match self.index.get(name) {
            Some(&(kind, slot)) if kind == value.kind() => {
                self.partitions[kind as usize][slot].value = value;
                true
            }
            _ => false,
        }
    }

    /// Get the current value of `name`.
    pub fn get(&self, name: &str) -> Option<&UniformValue> {
        let &(kind, slot) = self.index.get(name)?;
        Some(&self.partitions[kind as usize][slot].value)
    }

    /// Kind `name` was declared with.
    pub fn kind_of(&self, name: &str) -> Option<UniformKind> {
        self.index.get(name).map(|&(kind, _)| kind)
    }

    /// Whether `name` is declared in any partition.
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Total number of entries.
    pub fn len(&self) -> usize {
        self.index.len()
    }

    /// Whether the table has no entries.
    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }

    /// Number of entries in one partition.
    pub fn len_of(&self, kind: UniformKind) -> usize {
        self.partitions[kind as usize].len()
    }

    /// Entries of one partition in insertion order.
    pub fn iter_kind(&self, kind: UniformKind) -> impl Iterator<Item = &UniformEntry> {
        self.partitions[kind as usize].iter()
    }

    /// All entries, partition by partition in [`UniformKind::ALL`] order.
    pub fn iter(&self) -> impl Iterator<Item = &UniformEntry> {
        self.partitions.iter().flatten()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declare_inserts_then_updates() {
        let mut table = UniformTable::new();
        assert_eq!(
            table.declare("alpha", UniformValue::Float(1.0)),
            UpsertOutcome::Inserted
        );
        assert_eq!(
            table.declare("alpha", UniformValue::Float(3.0)),
            UpsertOutcome::Updated
        );
        assert_eq!(table.len(), 1);
        assert_eq!(table.get("alpha"), Some(&UniformValue::Float(3.0)));
    }

    #[test]
    fn declare_keeps_first_kind() {
        let mut table = UniformTable::new();
        table.declare("alpha", UniformValue::Float(1.0));
        assert_eq!(
            table.declare("alpha", UniformValue::Vec2([0.0, 0.0])),
            UpsertOutcome::KindMismatch {
                existing: UniformKind::Float
            }
        );
        assert_eq!(table.len_of(UniformKind::Vec2), 0);
        assert_eq!(table.get("alpha"), Some(&UniformValue::Float(1.0)));
    }

    #[test]
    fn set_updates_same_kind_only() {
        let mut table = UniformTable::new();
        table.declare("alpha", UniformValue::Float(1.0));

        assert!(table.set("alpha", UniformValue::Float(2.0)));
        assert_eq!(table.get("alpha"), Some(&UniformValue::Float(2.0)));

        assert!(!table.set("alpha", UniformValue::Vec2([0.0, 0.0])));
        assert_eq!(table.get("alpha"), Some(&UniformValue::Float(2.0)));
        assert_eq!(table.len_of(UniformKind::Vec2), 0);
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn set_ignores_unknown_names() {
        let mut table = UniformTable::new();
        assert!(!table.set("iTime", UniformValue::Float(1.0)));
        assert!(table.is_empty());
        assert!(!table.contains("iTime"));
    }

    #[test]
    fn partitions_keep_insertion_order() {
        let mut table = UniformTable::new();
        table.declare("b", UniformValue::Float(1.0));
        table.declare("count", UniformValue::Int(4));
        table.declare("a", UniformValue::Float(2.0));
        table.declare("tint", UniformValue::Vec3([1.0, 0.5, 0.0]));

        let floats: Vec<&str> = table
            .iter_kind(UniformKind::Float)
            .map(|e| e.name.as_str())
            .collect();
        assert_eq!(floats, vec!["b", "a"]);

        let all: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(all, vec!["count", "b", "a", "tint"]);
        assert_eq!(table.kind_of("tint"), Some(UniformKind::Vec3));
    }

    #[test]
    fn update_does_not_move_entry() {
        let mut table = UniformTable::new();
        table.declare("first", UniformValue::Float(0.0));
        table.declare("second", UniformValue::Float(0.0));
        table.set("first", UniformValue::Float(5.0));

        let names: Vec<&str> = table.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second"]);
    }
}
