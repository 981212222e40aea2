//! Randomized reordering and selection.
//!
//! All functions take the random source explicitly. Pass `&mut *game_rng`
//! (a `ResMut<GameRng>`), a seeded `StdRng` in tests, or `&mut rand::rng()`.

use std::hash::Hash;

use rand::Rng;
use rustc_hash::FxHashMap;

use super::error::CollectionError;

/// In-place Fisher-Yates shuffle.
///
/// While more than one element remains unplaced, pick `k` uniformly from the
/// unplaced prefix `[0, remaining)` and swap it into the last unplaced slot.
/// O(n) time, no allocation. Slices of length 0 or 1 are untouched and draw
/// nothing from `rng`.
pub fn shuffle<T, R: Rng + ?Sized>(items: &mut [T], rng: &mut R) {
    let mut remaining = items.len();
    while remaining > 1 {
        let k = rng.random_range(0..remaining);
        remaining -= 1;
        items.swap(k, remaining);
    }
}

/// Copy the pairs of a map into a [`ShuffledMap`] whose iteration order is
/// a uniformly random permutation. The source is not modified.
pub fn shuffle_mapping<'a, K, V, R>(
    source: impl IntoIterator<Item = (&'a K, &'a V)>,
    rng: &mut R,
) -> ShuffledMap<K, V>
where
    K: Clone + Eq + Hash + 'a,
    V: Clone + 'a,
    R: Rng + ?Sized,
{
    let mut entries: Vec<(K, V)> = source
        .into_iter()
        .map(|(k, v)| (k.clone(), v.clone()))
        .collect();
    shuffle(&mut entries, rng);
    ShuffledMap::from_entries(entries)
}

/// Uniformly pick one element of a slice.
pub fn random_element<'a, T, R: Rng + ?Sized>(items: &'a [T], rng: &mut R) -> Result<&'a T, CollectionError> {
    if items.is_empty() {
        return Err(CollectionError::EmptySequence);
    }
    Ok(&items[rng.random_range(0..items.len())])
}

/// Uniformly pick one item of a sequence that cannot be indexed.
///
/// The iterator is walked twice: once to count, once to reach the chosen
/// position.
pub fn random_item<I, R>(items: I, rng: &mut R) -> Result<I::Item, CollectionError>
where
    I: IntoIterator,
    I::IntoIter: Clone,
    R: Rng + ?Sized,
{
    let mut iter = items.into_iter();
    let count = iter.clone().count();
    if count == 0 {
        return Err(CollectionError::EmptySequence);
    }
    iter.nth(rng.random_range(0..count))
        .ok_or(CollectionError::EmptySequence)
}

/// Key/value pairs with a fixed, caller-visible iteration order.
///
/// Produced by [`shuffle_mapping`]. Lookups go through a key index so the map
/// can still be used as a map after shuffling.
#[derive(Debug, Clone)]
pub struct ShuffledMap<K, V> {
    entries: Vec<(K, V)>,
    index: FxHashMap<K, usize>,
}

impl<K: Clone + Eq + Hash, V> ShuffledMap<K, V> {
    /// Build from ordered pairs. A repeated key keeps its first position and
    /// takes the last value.
    pub fn from_entries(pairs: impl IntoIterator<Item = (K, V)>) -> Self {
        let mut entries: Vec<(K, V)> = Vec::new();
        let mut index = FxHashMap::default();
        for (key, value) in pairs {
            match index.get(&key).copied() {
                Some(slot) => entries[slot] = (key, value),
                None => {
                    index.insert(key.clone(), entries.len());
                    entries.push((key, value));
                }
            }
        }
        Self { entries, index }
    }

    pub fn get(&self, key: &K) -> Option<&V> {
        self.index.get(key).map(|&slot| &self.entries[slot].1)
    }

    pub fn contains_key(&self, key: &K) -> bool {
        self.index.contains_key(key)
    }
}

impl<K, V> ShuffledMap<K, V> {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&K, &V)> {
        self.entries.iter().map(|(k, v)| (k, v))
    }

    pub fn keys(&self) -> impl Iterator<Item = &K> {
        self.entries.iter().map(|(k, _)| k)
    }

    pub fn values(&self) -> impl Iterator<Item = &V> {
        self.entries.iter().map(|(_, v)| v)
    }
}

impl<K, V> IntoIterator for ShuffledMap<K, V> {
    type Item = (K, V);
    type IntoIter = std::vec::IntoIter<(K, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}
