// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Boundary, BoundarySide};
use crate::core::config::SandboxConfig;
use crate::core::system::system_order::CommandSet;
use crate::core::viewport::{track_viewport, Viewport};

/// Geometry of one wall: a static cuboid centered at `center`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundarySpec {
    pub side: BoundarySide,
    pub center: Vec2,
    pub half_extents: Vec2,
}

/// Wall dimensions and surface, shared by every rebuild.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallParams {
    pub thickness: f32,
    pub friction: f32,
}

impl WallParams {
    pub fn from_config(cfg: &SandboxConfig) -> Self {
        Self {
            thickness: cfg.world.wall_thickness,
            friction: cfg.material.friction,
        }
    }
}

/// Four walls of `thickness` sitting just outside `(0,0)..(width,height)`.
/// Top and bottom overhang by one thickness on each side so the corners are closed.
pub fn boundary_layout(width: f32, height: f32, thickness: f32) -> [BoundarySpec; 4] {
    let t = thickness;
    let horizontal = Vec2::new(width * 0.5 + t, t * 0.5);
    let vertical = Vec2::new(t * 0.5, height * 0.5);
    BoundarySide::ALL.map(|side| {
        let (center, half_extents) = match side {
            BoundarySide::Top => (Vec2::new(width * 0.5, height + t * 0.5), horizontal),
            BoundarySide::Bottom => (Vec2::new(width * 0.5, -t * 0.5), horizontal),
            BoundarySide::Left => (Vec2::new(-t * 0.5, height * 0.5), vertical),
            BoundarySide::Right => (Vec2::new(width + t * 0.5, height * 0.5), vertical),
        };
        BoundarySpec {
            side,
            center,
            half_extents,
        }
    })
}

pub fn spawn_boundary(commands: &mut Commands, spec: BoundarySpec, friction: f32) -> Entity {
    commands
        .spawn((
            Name::new(spec.side.name()),
            Boundary {
                side: spec.side,
                half_extents: spec.half_extents,
            },
            RigidBody::Fixed,
            Collider::cuboid(spec.half_extents.x, spec.half_extents.y),
            Restitution {
                coefficient: 0.0,
                combine_rule: CoefficientCombineRule::Max,
            },
            Friction::coefficient(friction),
            Transform::from_translation(spec.center.extend(0.0)),
        ))
        .id()
}

/// Removes every existing wall and registers a fresh set of four. Only `existing` is despawned.
pub fn rebuild_boundaries(
    commands: &mut Commands,
    existing: impl IntoIterator<Item = Entity>,
    viewport: &Viewport,
    walls: WallParams,
) -> [Entity; 4] {
    for entity in existing {
        commands.entity(entity).despawn();
    }
    boundary_layout(viewport.width, viewport.height, walls.thickness)
        .map(|spec| spawn_boundary(commands, spec, walls.friction))
}

pub fn rebuild_boundaries_on_resize(
    mut commands: Commands,
    viewport: Res<Viewport>,
    cfg: Res<SandboxConfig>,
    walls: Query<Entity, With<Boundary>>,
) {
    if !viewport.is_changed() {
        return;
    }
    rebuild_boundaries(
        &mut commands,
        walls.iter(),
        &viewport,
        WallParams::from_config(&cfg),
    );
    info!(
        "Boundaries rebuilt for {}x{} viewport",
        viewport.width, viewport.height
    );
}

pub struct BoundaryPlugin;

impl Plugin for BoundaryPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(
            Update,
            (track_viewport, rebuild_boundaries_on_resize)
                .chain()
                .before(CommandSet),
        );
    }
}
