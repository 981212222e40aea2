//! Components and assets the collection helpers operate on.

use bevy::prelude::*;

/// Collision layers for filtering
pub mod layers {
    pub const NONE: u32 = 0;
    pub const PLAYER: u32 = 1 << 0;
    pub const PROP: u32 = 1 << 1;
    pub const TRIGGER: u32 = 1 << 2;
    pub const ALL: u32 = u32::MAX;
}

/// 2D collision shape attached to a scene entity.
///
/// Only `enabled` is touched by the bulk helpers; a disabled collider keeps
/// its shape and layers so it can be re-enabled as-is.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Collider2d {
    pub enabled: bool,
    pub radius: f32,
    pub layer: u32,
    pub mask: u32,
}

impl Default for Collider2d {
    fn default() -> Self {
        Self {
            enabled: true,
            radius: 0.5,
            layer: layers::PROP,
            mask: layers::PLAYER | layers::PROP,
        }
    }
}

/// A named sprite resource. Opaque apart from its name.
#[derive(Asset, TypePath, Debug, Clone, PartialEq)]
pub struct NamedSprite {
    pub name: String,
    pub size: UVec2,
}

impl NamedSprite {
    pub fn new(name: impl Into<String>, size: UVec2) -> Self {
        Self { name: name.into(), size }
    }
}
