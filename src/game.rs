use bevy::prelude::*;

pub mod collections;
pub mod config;
pub mod rng;

use config::CollectionsConfigPlugin;

/// Registers the shared resources the collection helpers draw on
/// (`CollectionsConfig` and `GameRng`).
pub struct CollectionsPlugin;

impl Plugin for CollectionsPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(CollectionsConfigPlugin);
    }
}
