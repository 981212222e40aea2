//! Bulk and randomized helpers over collections of scene entities and assets.
//!
//! The helpers are free functions over caller-owned data. Nothing here keeps
//! state between calls; randomness comes from a caller-supplied `Rng`
//! (normally the [`GameRng`](crate::game::rng::GameRng) resource).
//!
//! # Example: Quick Start
//!
//! ```rust
//! use bevy::prelude::*;
//! use scene_collections::collections::{disable_all_colliders, join_entity_names, shuffle, Collider2d};
//! use scene_collections::game::rng::GameRng;
//!
//! let mut world = World::new();
//! let a = world.spawn((Name::new("Crate"), Collider2d::default())).id();
//! let b = world.spawn(Name::new("Ghost")).id();
//!
//! // Ghost has no collider; it is skipped and reported, not fatal.
//! let report = disable_all_colliders(&mut world, [a, b]);
//! assert_eq!(report.applied, vec![a]);
//! assert_eq!(report.skipped.len(), 1);
//!
//! assert_eq!(join_entity_names(&world, [a, b], ", "), "Crate, Ghost");
//!
//! let mut rng = GameRng::seeded(7);
//! let mut order = vec![a, b];
//! shuffle(&mut order, &mut *rng);
//! assert_eq!(order.len(), 2);
//! ```

pub mod aggregate;
pub mod collider_state;
pub mod components;
pub mod entity_state;
pub mod error;
pub mod report;
pub mod shuffle;

#[cfg(test)]
mod tests;

pub use aggregate::{join_entity_names, join_names, join_sprite_names, join_strings, HasName, DEFAULT_SEPARATOR};
pub use collider_state::{disable_all_colliders, enable_all_colliders, set_all_colliders_enabled, SetCollidersEnabled};
pub use components::{layers, Collider2d, NamedSprite};
pub use entity_state::{
    clone_all, disable_all, enable_all, is_active, remove_invalid_entities, set_all_active, SetEntitiesActive,
};
pub use error::CollectionError;
pub use report::{BulkReport, SkipReason, SkippedItem};
pub use shuffle::{random_element, random_item, shuffle, shuffle_mapping, ShuffledMap};
