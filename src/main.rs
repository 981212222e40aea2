use bevy::prelude::*;

use scene_collections::collections::{
    disable_all, disable_all_colliders, enable_all, join_entity_names, join_sprite_names, join_strings,
    random_element, remove_invalid_entities, shuffle, shuffle_mapping, Collider2d, NamedSprite,
};
use scene_collections::game::config::CollectionsConfig;
use scene_collections::game::rng::GameRng;
use scene_collections::CollectionsPlugin;

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

fn setup_file_logging() -> String {
    let log_dir = PathBuf::from("logs");
    if let Err(e) = fs::create_dir_all(&log_dir) {
        eprintln!("Failed to create logs directory: {}", e);
    }

    // Clean up old log files, keeping only the last 25
    cleanup_old_logs(&log_dir, 25);

    let now = chrono::Local::now();
    let log_filename = format!("scene_collections_{}.log", now.format("%Y%m%d_%H%M%S"));
    let log_path_str = log_dir.join(&log_filename).to_string_lossy().to_string();

    let file_appender = RollingFileAppender::new(
        Rotation::NEVER, // One file per run
        &log_dir,
        &log_filename,
    );

    let file_layer = fmt::layer()
        .with_writer(file_appender)
        .with_ansi(false);

    let stdout_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(false);

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("bevy_ecs=info,scene_collections=info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .with(stdout_layer)
        .init();

    log_path_str
}

fn cleanup_old_logs(log_dir: &Path, keep_count: usize) {
    if let Ok(entries) = fs::read_dir(log_dir) {
        let mut log_files: Vec<_> = entries
            .filter_map(|e| e.ok())
            .filter(|e| {
                e.path()
                    .file_name()
                    .and_then(|n| n.to_str())
                    .map(|s| s.starts_with("scene_collections") && s.ends_with(".log"))
                    .unwrap_or(false)
            })
            .collect();

        // Oldest first
        log_files.sort_by_key(|e| e.metadata().ok().and_then(|m| m.modified().ok()));

        if log_files.len() > keep_count {
            for file in log_files.iter().take(log_files.len() - keep_count) {
                let _ = fs::remove_file(file.path());
            }
        }
    }
}

fn demo(world: &mut World) {
    let separator = world.resource::<CollectionsConfig>().name_separator.clone();

    let crate_box = world.spawn((Name::new("Crate"), Collider2d::default())).id();
    let barrel = world.spawn((Name::new("Barrel"), Collider2d::default())).id();
    let ghost = world.spawn(Name::new("Ghost")).id();
    let debris = world.spawn(Name::new("Debris")).id();
    world.despawn(debris);

    let mut props = vec![crate_box, barrel, ghost, debris];
    info!("Props: {}", join_entity_names(world, props.iter().copied(), &separator));

    let removed = remove_invalid_entities(world, &mut props);
    info!("Removed {} invalid handles", removed);

    let report = disable_all_colliders(world, props.iter().copied());
    info!(
        "Colliders disabled on {} props, {} skipped",
        report.applied.len(),
        report.skipped.len()
    );

    disable_all(world, props.iter().copied());
    enable_all(world, props.iter().copied());

    let spawn_weights: HashMap<&str, u32> = [("goblin", 5), ("orc", 3), ("troll", 1)].into_iter().collect();

    world.resource_scope(|world, mut rng: Mut<GameRng>| {
        shuffle(&mut props, &mut *rng);
        info!("Shuffled: {}", join_entity_names(world, props.iter().copied(), &separator));

        let order = shuffle_mapping(&spawn_weights, &mut *rng);
        info!("Spawn order: {}", join_strings(order.keys(), &separator));

        match random_element(&props, &mut *rng) {
            Ok(&pick) => info!("Picked: {}", join_entity_names(world, [pick], &separator)),
            Err(e) => error!("Pick failed: {}", e),
        }
    });

    let mut sprites = Assets::<NamedSprite>::default();
    let handles = [
        sprites.add(NamedSprite::new("grass", UVec2::splat(16))),
        sprites.add(NamedSprite::new("water", UVec2::splat(16))),
    ];
    info!("Sprites: {}", join_sprite_names(&sprites, &handles, &separator));
}

fn exit_after_demo(mut exit: MessageWriter<AppExit>) {
    exit.write(AppExit::Success);
}

fn main() {
    let log_file = setup_file_logging();
    println!("Logging to {}", log_file);

    App::new()
        .add_plugins(MinimalPlugins)
        .add_plugins(CollectionsPlugin)
        .add_systems(Startup, demo)
        .add_systems(Update, exit_after_demo)
        .run();
}
