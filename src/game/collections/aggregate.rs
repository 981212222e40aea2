//! Joining strings and the names of named things.

use bevy::prelude::*;

use super::components::NamedSprite;

pub const DEFAULT_SEPARATOR: &str = ", ";

/// Concatenate `strings` with `separator` between consecutive items.
///
/// Empty input gives `""` and a single item is returned unchanged.
pub fn join_strings<I>(strings: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: AsRef<str>,
{
    let mut joined = String::new();
    for (i, s) in strings.into_iter().enumerate() {
        if i > 0 {
            joined.push_str(separator);
        }
        joined.push_str(s.as_ref());
    }
    joined
}

/// Anything that may resolve to a display name.
///
/// `None` means the name cannot be resolved (missing `Name`, unloaded asset,
/// absent item). Such items are dropped by [`join_names`].
pub trait HasName {
    fn name(&self) -> Option<&str>;
}

impl HasName for Name {
    fn name(&self) -> Option<&str> {
        Some(self.as_str())
    }
}

impl HasName for NamedSprite {
    fn name(&self) -> Option<&str> {
        Some(&self.name)
    }
}

impl HasName for EntityRef<'_> {
    fn name(&self) -> Option<&str> {
        self.get::<Name>().map(Name::as_str)
    }
}

impl<T: HasName + ?Sized> HasName for &T {
    fn name(&self) -> Option<&str> {
        (**self).name()
    }
}

impl<T: HasName> HasName for Option<T> {
    fn name(&self) -> Option<&str> {
        self.as_ref().and_then(|item| item.name())
    }
}

/// Join the resolvable names of `items`. Unresolvable items are skipped
/// without a placeholder.
pub fn join_names<I>(items: I, separator: &str) -> String
where
    I: IntoIterator,
    I::Item: HasName,
{
    let names: Vec<String> = items
        .into_iter()
        .filter_map(|item| item.name().map(str::to_owned))
        .collect();
    join_strings(&names, separator)
}

/// Join the `Name`s of entities. Despawned or unnamed entities are skipped.
pub fn join_entity_names(world: &World, entities: impl IntoIterator<Item = Entity>, separator: &str) -> String {
    join_names(
        entities.into_iter().filter_map(|entity| world.get_entity(entity).ok()),
        separator,
    )
}

/// Join the names of sprite assets. Handles whose asset is not loaded are skipped.
pub fn join_sprite_names<'a>(
    assets: &Assets<NamedSprite>,
    handles: impl IntoIterator<Item = &'a Handle<NamedSprite>>,
    separator: &str,
) -> String {
    join_names(handles.into_iter().map(|handle| assets.get(handle)), separator)
}
