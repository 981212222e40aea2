//! Process-wide randomness provider.
//!
//! Every randomizing helper in [`crate::game::collections`] takes an explicit
//! `&mut R: Rng`, so callers choose the source:
//!
//! - In an app, [`GameRng`] is inserted once at startup by
//!   [`CollectionsPlugin`](crate::game::CollectionsPlugin) and borrowed with
//!   `ResMut<GameRng>`.
//! - In tests, construct `GameRng::seeded(n)` (or a bare `StdRng`) for
//!   reproducible results.
//!
//! `GameRng` is a plain resource, not a lock. Drawing from it on several threads
//! at once requires external synchronization, which Bevy's `ResMut` access
//! rules already give you inside systems.

use bevy::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

#[derive(Resource, Deref, DerefMut, Debug, Clone)]
pub struct GameRng(pub StdRng);

impl GameRng {
    pub fn seeded(seed: u64) -> Self {
        Self(StdRng::seed_from_u64(seed))
    }

    pub fn from_entropy() -> Self {
        Self(StdRng::from_os_rng())
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::from_entropy()
    }
}

// `&mut GameRng` (e.g. from `ResMut<GameRng>`) can be passed wherever an `Rng` is
// expected: rand_core's blanket `impl RngCore for T: DerefMut<Target: RngCore>`
// forwards to the inner `StdRng` via the derived `DerefMut`.
