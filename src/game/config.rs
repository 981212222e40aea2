use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::game::collections::DEFAULT_SEPARATOR;
use crate::game::rng::GameRng;

pub const CONFIG_PATH: &str = "assets/collections_config.ron";

/// Startup configuration for the collection helpers. Loaded once; changing
/// the seed mid-session would make shuffles non-reproducible.
#[derive(Resource, Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct CollectionsConfig {
    /// Seed for the shared `GameRng`. `None` draws from OS entropy.
    pub rng_seed: Option<u64>,
    /// Separator used when aggregating names for display.
    pub name_separator: String,
}

impl Default for CollectionsConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            name_separator: DEFAULT_SEPARATOR.to_string(),
        }
    }
}

impl CollectionsConfig {
    /// Parse a config from RON text.
    pub fn from_ron(contents: &str) -> Result<Self, ron::error::SpannedError> {
        ron::from_str::<CollectionsConfig>(contents)
    }

    /// Read the config at `path`, falling back to defaults on any failure.
    pub fn load_or_default(path: &str) -> Self {
        match std::fs::read_to_string(path) {
            Ok(contents) => match Self::from_ron(&contents) {
                Ok(config) => {
                    info!("Loaded collections config from {}", path);
                    config
                }
                Err(e) => {
                    error!("Failed to parse collections config: {}", e);
                    error!("Using default CollectionsConfig");
                    Self::default()
                }
            },
            Err(e) => {
                error!("Failed to read {}: {}", path, e);
                error!("Using default CollectionsConfig");
                Self::default()
            }
        }
    }
}

pub struct CollectionsConfigPlugin;

impl Plugin for CollectionsConfigPlugin {
    fn build(&self, app: &mut App) {
        // Inserted during build rather than in a Startup system so that other
        // startup systems can already draw from the rng.
        let config = if app.world().contains_resource::<CollectionsConfig>() {
            app.world().resource::<CollectionsConfig>().clone()
        } else {
            CollectionsConfig::load_or_default(CONFIG_PATH)
        };

        let rng = match config.rng_seed {
            Some(seed) => {
                info!("GameRng seeded with {}", seed);
                GameRng::seeded(seed)
            }
            None => GameRng::from_entropy(),
        };

        app.insert_resource(config).insert_resource(rng);
    }
}
