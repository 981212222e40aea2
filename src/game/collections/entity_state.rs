//! Bulk activation of scene entities.
//!
//! An entity is inactive while it carries Bevy's [`Disabled`] marker: default
//! queries stop matching it, but it can still be looked up directly and
//! re-activated.

use bevy::ecs::entity_disabling::Disabled;
use bevy::prelude::*;

use super::report::{BulkReport, SkipReason};

/// Activate every entity in `entities`. Despawned handles are skipped.
pub fn enable_all(world: &mut World, entities: impl IntoIterator<Item = Entity>) -> BulkReport {
    set_all_active(world, entities, true)
}

/// Deactivate every entity in `entities`. Despawned handles are skipped.
pub fn disable_all(world: &mut World, entities: impl IntoIterator<Item = Entity>) -> BulkReport {
    set_all_active(world, entities, false)
}

/// Set the activation state of each entity in iteration order.
///
/// Not transactional: a handle that fails to resolve is recorded in the report
/// and the remaining entities are still updated.
pub fn set_all_active(
    world: &mut World,
    entities: impl IntoIterator<Item = Entity>,
    active: bool,
) -> BulkReport {
    let mut report = BulkReport::default();

    for entity in entities {
        let Ok(mut entity_mut) = world.get_entity_mut(entity) else {
            let skipped = report.skip(entity, None, SkipReason::Despawned);
            warn!("set_all_active: entity {} no longer exists", skipped.label());
            continue;
        };

        if active {
            entity_mut.remove::<Disabled>();
        } else {
            entity_mut.insert(Disabled);
        }
        report.applied.push(entity);
    }

    debug!(
        "set_all_active({}): {} applied, {} skipped",
        active,
        report.applied.len(),
        report.skipped.len()
    );
    report
}

/// `Some(true)` if the entity is alive and active, `None` if it was despawned.
pub fn is_active(world: &World, entity: Entity) -> Option<bool> {
    world
        .get_entity(entity)
        .ok()
        .map(|entity_ref| !entity_ref.contains::<Disabled>())
}

/// Drop every handle whose entity has been despawned, keeping the order of the
/// rest. Returns how many handles were removed.
pub fn remove_invalid_entities(world: &World, entities: &mut Vec<Entity>) -> usize {
    let before = entities.len();
    entities.retain(|&entity| world.get_entity(entity).is_ok());
    before - entities.len()
}

/// Collect any sequence into an owned `Vec`.
pub fn clone_all<T: Clone>(items: impl IntoIterator<Item = T>) -> Vec<T> {
    items.into_iter().collect()
}

/// Queues [`set_all_active`] from a system:
///
/// ```rust,ignore
/// commands.queue(SetEntitiesActive::new(doors.iter().collect(), false));
/// ```
#[derive(Debug, Clone)]
pub struct SetEntitiesActive {
    pub entities: Vec<Entity>,
    pub active: bool,
}

impl SetEntitiesActive {
    pub fn new(entities: Vec<Entity>, active: bool) -> Self {
        Self { entities, active }
    }
}

impl Command for SetEntitiesActive {
    fn apply(self, world: &mut World) {
        set_all_active(world, self.entities, self.active);
    }
}
