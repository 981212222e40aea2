//! Tests for the collection helpers

#[cfg(test)]
mod tests {
    use super::super::*;
    use bevy::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashMap;

    fn named(world: &mut World, name: &str) -> Entity {
        world.spawn(Name::new(name.to_string())).id()
    }

    // ------------------------------------------------------------------
    // Entity state
    // ------------------------------------------------------------------

    #[test]
    fn test_disable_then_enable_all() {
        let mut world = World::new();
        let a = named(&mut world, "A");
        let b = named(&mut world, "B");

        let report = disable_all(&mut world, [a, b]);
        assert_eq!(report.applied, vec![a, b]);
        assert!(report.is_complete());
        assert_eq!(is_active(&world, a), Some(false));
        assert_eq!(is_active(&world, b), Some(false));

        enable_all(&mut world, [a, b]);
        assert_eq!(is_active(&world, a), Some(true));
        assert_eq!(is_active(&world, b), Some(true));
    }

    #[test]
    fn test_enable_all_empty_is_noop() {
        let mut world = World::new();
        let report = enable_all(&mut world, Vec::new());
        assert_eq!(report.total(), 0);
    }

    #[test]
    fn test_disable_all_continues_past_despawned() {
        let mut world = World::new();
        let a = named(&mut world, "A");
        let gone = named(&mut world, "Gone");
        let c = named(&mut world, "C");
        world.despawn(gone);

        let report = disable_all(&mut world, [a, gone, c]);

        assert_eq!(report.applied, vec![a, c]);
        assert_eq!(report.skipped.len(), 1);
        assert_eq!(report.skipped[0].entity, gone);
        assert_eq!(report.skipped[0].reason, SkipReason::Despawned);
        assert_eq!(is_active(&world, c), Some(false));
        assert_eq!(is_active(&world, gone), None);
    }

    #[test]
    fn test_remove_invalid_entities_preserves_order() {
        let mut world = World::new();
        let e1 = named(&mut world, "A");
        let e2 = named(&mut world, "B");
        let e3 = named(&mut world, "C");
        let e4 = named(&mut world, "D");
        world.despawn(e2);
        world.despawn(e4);

        let mut handles = vec![e1, e2, e3, e4];
        let removed = remove_invalid_entities(&world, &mut handles);

        assert_eq!(removed, 2);
        assert_eq!(handles, vec![e1, e3]);
    }

    #[test]
    fn test_remove_invalid_entities_keeps_disabled() {
        let mut world = World::new();
        let e1 = named(&mut world, "A");
        disable_all(&mut world, [e1]);

        let mut handles = vec![e1];
        assert_eq!(remove_invalid_entities(&world, &mut handles), 0);
        assert_eq!(handles, vec![e1]);
    }

    #[test]
    fn test_set_entities_active_command() {
        let mut world = World::new();
        let a = named(&mut world, "A");

        SetEntitiesActive::new(vec![a], false).apply(&mut world);
        assert_eq!(is_active(&world, a), Some(false));

        SetEntitiesActive::new(vec![a], true).apply(&mut world);
        assert_eq!(is_active(&world, a), Some(true));
    }

    #[test]
    fn test_clone_all() {
        let source = [1, 2, 3];
        let copy = clone_all(source.iter().copied());
        assert_eq!(copy, vec![1, 2, 3]);
    }

    // ------------------------------------------------------------------
    // Collider state
    // ------------------------------------------------------------------

    #[test]
    fn test_disable_colliders_skips_missing_component() {
        let mut world = World::new();
        let with = world.spawn((Name::new("Crate"), Collider2d::default())).id();
        let without = world.spawn(Name::new("Ghost")).id();

        let report = disable_all_colliders(&mut world, [with, without]);

        assert!(!world.get::<Collider2d>(with).unwrap().enabled);
        assert_eq!(report.applied, vec![with]);
        assert_eq!(report.skipped.len(), 1);

        let skipped = &report.skipped[0];
        assert_eq!(skipped.entity, without);
        assert_eq!(skipped.name.as_deref(), Some("Ghost"));
        assert_eq!(skipped.reason, SkipReason::MissingComponent("Collider2d"));
        assert_eq!(skipped.label(), "Ghost");
    }

    #[test]
    fn test_enable_colliders_after_failure_still_applies_rest() {
        let mut world = World::new();
        let unnamed = world.spawn_empty().id();
        let first = world.spawn(Collider2d { enabled: false, ..default() }).id();
        let second = world.spawn(Collider2d { enabled: false, ..default() }).id();

        let report = enable_all_colliders(&mut world, [unnamed, first, second]);

        assert_eq!(report.applied, vec![first, second]);
        assert!(world.get::<Collider2d>(first).unwrap().enabled);
        assert!(world.get::<Collider2d>(second).unwrap().enabled);
        assert_eq!(report.skipped[0].name, None);
        assert_eq!(report.skipped[0].label(), format!("{}", unnamed));
    }

    #[test]
    fn test_collider_toggle_keeps_shape() {
        let mut world = World::new();
        let collider = Collider2d { radius: 3.0, layer: layers::TRIGGER, mask: layers::PLAYER, enabled: true };
        let e = world.spawn(collider).id();

        SetCollidersEnabled::new(vec![e], false).apply(&mut world);

        let after = world.get::<Collider2d>(e).unwrap();
        assert!(!after.enabled);
        assert_eq!(after.radius, 3.0);
        assert_eq!(after.layer, layers::TRIGGER);
        assert_eq!(after.mask, layers::PLAYER);
    }

    // ------------------------------------------------------------------
    // Randomization
    // ------------------------------------------------------------------

    #[test]
    fn test_shuffle_preserves_elements() {
        let mut rng = StdRng::seed_from_u64(1);
        let mut items: Vec<u32> = (0..50).collect();
        shuffle(&mut items, &mut rng);

        assert_eq!(items.len(), 50);
        let mut sorted = items.clone();
        sorted.sort();
        assert_eq!(sorted, (0..50).collect::<Vec<_>>());
    }

    #[test]
    fn test_shuffle_short_sequences_unchanged() {
        let mut rng = StdRng::seed_from_u64(2);

        let mut empty: Vec<u8> = Vec::new();
        shuffle(&mut empty, &mut rng);
        assert!(empty.is_empty());

        let mut single = vec!["only"];
        shuffle(&mut single, &mut rng);
        assert_eq!(single, vec!["only"]);
    }

    #[test]
    fn test_shuffle_is_reproducible_with_seed() {
        let mut a: Vec<u32> = (0..20).collect();
        let mut b = a.clone();
        shuffle(&mut a, &mut StdRng::seed_from_u64(99));
        shuffle(&mut b, &mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_shuffle_reaches_every_permutation_of_three() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..600 {
            let mut items = [1, 2, 3];
            shuffle(&mut items, &mut rng);
            seen.insert(items);
        }
        assert_eq!(seen.len(), 6);
    }

    #[test]
    fn test_shuffle_mapping_keeps_pairs() {
        let mut rng = StdRng::seed_from_u64(4);
        let source: HashMap<&str, i32> = [("a", 1), ("b", 2), ("c", 3)].into_iter().collect();

        let shuffled = shuffle_mapping(&source, &mut rng);

        assert_eq!(shuffled.len(), 3);
        assert_eq!(shuffled.get(&"b"), Some(&2));
        assert!(!shuffled.contains_key(&"z"));
        let back: HashMap<&str, i32> = shuffled.into_iter().collect();
        assert_eq!(back, source);
        // Source untouched.
        assert_eq!(source.len(), 3);
    }

    #[test]
    fn test_shuffled_map_from_entries_dedups_keys() {
        let map = ShuffledMap::from_entries([("x", 1), ("y", 2), ("x", 3)]);
        assert_eq!(map.len(), 2);
        assert_eq!(map.get(&"x"), Some(&3));
        assert_eq!(map.keys().copied().collect::<Vec<_>>(), vec!["x", "y"]);
        assert_eq!(map.values().copied().collect::<Vec<_>>(), vec![3, 2]);
    }

    #[test]
    fn test_random_element_empty_fails() {
        let mut rng = StdRng::seed_from_u64(5);
        let empty: [i32; 0] = [];
        assert_eq!(random_element(&empty, &mut rng), Err(CollectionError::EmptySequence));
        assert_eq!(random_item(empty.iter(), &mut rng), Err(CollectionError::EmptySequence));
    }

    #[test]
    fn test_random_element_is_member() {
        let mut rng = StdRng::seed_from_u64(6);
        let items = [10, 20, 30];
        for _ in 0..100 {
            assert!(items.contains(random_element(&items, &mut rng).unwrap()));
        }
    }

    #[test]
    fn test_random_item_over_iterator() {
        let mut rng = StdRng::seed_from_u64(7);
        let source = vec!["a", "b", "c", "d"];
        for _ in 0..100 {
            let picked = random_item(source.iter().filter(|s| **s != "c"), &mut rng).unwrap();
            assert_ne!(*picked, "c");
        }
    }

    // ------------------------------------------------------------------
    // Aggregation
    // ------------------------------------------------------------------

    #[test]
    fn test_join_strings() {
        assert_eq!(join_strings(Vec::<String>::new(), ", "), "");
        assert_eq!(join_strings(["a"], ", "), "a");
        assert_eq!(join_strings(["a", "b", "c"], "-"), "a-b-c");
        assert_eq!(join_strings(["a", "b"], DEFAULT_SEPARATOR), "a, b");
    }

    #[test]
    fn test_join_entity_names_skips_unresolvable() {
        let mut world = World::new();
        let foo = named(&mut world, "Foo");
        let anonymous = world.spawn_empty().id();
        let bar = named(&mut world, "Bar");
        let gone = named(&mut world, "Gone");
        world.despawn(gone);

        assert_eq!(join_entity_names(&world, [foo, anonymous, gone, bar], ", "), "Foo, Bar");
    }

    #[test]
    fn test_join_names_over_sprites_and_options() {
        let grass = NamedSprite::new("grass", UVec2::new(16, 16));
        let rock = NamedSprite::new("rock", UVec2::new(32, 32));
        let items = [Some(&grass), None, Some(&rock)];
        assert_eq!(join_names(items, " | "), "grass | rock");
        assert_eq!(join_names([Name::new("Solo")], ", "), "Solo");
    }

    #[test]
    fn test_join_sprite_names_skips_removed_assets() {
        let mut assets = Assets::<NamedSprite>::default();
        let a = assets.add(NamedSprite::new("hero", UVec2::splat(8)));
        let b = assets.add(NamedSprite::new("villain", UVec2::splat(8)));
        let c = assets.add(NamedSprite::new("extra", UVec2::splat(8)));
        assets.remove(&b);

        assert_eq!(join_sprite_names(&assets, [&a, &b, &c], ", "), "hero, extra");
    }
}
