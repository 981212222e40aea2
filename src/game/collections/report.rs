//! Per-item outcome of a bulk entity operation.

use bevy::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// The handle no longer resolves to a live entity.
    Despawned,
    /// The entity is alive but lacks the component being toggled.
    MissingComponent(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedItem {
    pub entity: Entity,
    /// Entity `Name` at the time of the skip, if it had one.
    pub name: Option<String>,
    pub reason: SkipReason,
}

impl SkippedItem {
    /// Human-readable label for diagnostics: the entity name, or its id.
    pub fn label(&self) -> String {
        match &self.name {
            Some(name) => name.clone(),
            None => format!("{}", self.entity),
        }
    }
}

/// Result of a bulk toggle. Items are listed in traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BulkReport {
    pub applied: Vec<Entity>,
    pub skipped: Vec<SkippedItem>,
}

impl BulkReport {
    pub fn is_complete(&self) -> bool {
        self.skipped.is_empty()
    }

    pub fn total(&self) -> usize {
        self.applied.len() + self.skipped.len()
    }

    pub(crate) fn skip(&mut self, entity: Entity, name: Option<String>, reason: SkipReason) -> &SkippedItem {
        self.skipped.push(SkippedItem { entity, name, reason });
        &self.skipped[self.skipped.len() - 1]
    }
}
