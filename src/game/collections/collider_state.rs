//! Bulk enable/disable of [`Collider2d`] components.
//!
//! Entities without a collider are expected in mixed selections. They are
//! logged and reported, never fatal to the rest of the batch.

use bevy::prelude::*;

use super::components::Collider2d;
use super::report::{BulkReport, SkipReason};

pub fn enable_all_colliders(world: &mut World, entities: impl IntoIterator<Item = Entity>) -> BulkReport {
    set_all_colliders_enabled(world, entities, true)
}

pub fn disable_all_colliders(world: &mut World, entities: impl IntoIterator<Item = Entity>) -> BulkReport {
    set_all_colliders_enabled(world, entities, false)
}

/// Set `Collider2d::enabled` on every entity, in iteration order.
pub fn set_all_colliders_enabled(
    world: &mut World,
    entities: impl IntoIterator<Item = Entity>,
    enabled: bool,
) -> BulkReport {
    let mut report = BulkReport::default();

    for entity in entities {
        let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
            let skipped = report.skip(entity, None, SkipReason::Despawned);
            error!("set_all_colliders_enabled: entity {} no longer exists", skipped.label());
            continue;
        };

        if let Some(mut collider) = entity_mut.get_mut::<Collider2d>() {
            collider.enabled = enabled;
            report.applied.push(entity);
            continue;
        }

        let name = entity_mut.get::<Name>().map(|n| n.as_str().to_string());
        let skipped = report.skip(entity, name, SkipReason::MissingComponent("Collider2d"));
        error!("set_all_colliders_enabled: entity {} has no Collider2d", skipped.label());
    }

    report
}

/// `Command` counterpart of [`set_all_colliders_enabled`].
#[derive(Debug, Clone)]
pub struct SetCollidersEnabled {
    pub entities: Vec<Entity>,
    pub enabled: bool,
}

impl SetCollidersEnabled {
    pub fn new(entities: Vec<Entity>, enabled: bool) -> Self {
        Self { entities, enabled }
    }
}

impl Command for SetCollidersEnabled {
    fn apply(self, world: &mut World) {
        set_all_colliders_enabled(world, self.entities, self.enabled);
    }
}
