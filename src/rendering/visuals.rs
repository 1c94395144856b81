// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::components::{BodyColor, Boundary, SandboxShape, ShapeKind};

pub const WALL_COLOR: &str = "#333333";

/// Render mesh matching the collider outline. Built per body; the transform carries
/// no scale because Rapier would scale the collider with it.
pub fn shape_mesh(shape: &SandboxShape) -> Mesh {
    let r = shape.radius();
    match shape.kind {
        ShapeKind::Circle => Circle::new(r).into(),
        ShapeKind::Square => Rectangle::new(shape.size, shape.size).into(),
        ShapeKind::Polygon { sides } => RegularPolygon::new(r, sides.max(3)).into(),
    }
}

pub fn attach_body_visuals(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<ColorMaterial>>,
    added: Query<(Entity, &SandboxShape, &BodyColor), Added<SandboxShape>>,
) {
    for (entity, shape, color) in added.iter() {
        commands.entity(entity).try_insert((
            Mesh2d(meshes.add(shape_mesh(shape))),
            MeshMaterial2d(materials.add(color.0)),
        ));
    }
}

pub fn attach_boundary_visuals(
    mut commands: Commands,
    added: Query<(Entity, &Boundary), Added<Boundary>>,
) {
    let color = Srgba::hex(WALL_COLOR).map(Color::from).unwrap_or(Color::BLACK);
    for (entity, wall) in added.iter() {
        if wall.side.is_rendered() {
            commands
                .entity(entity)
                .try_insert(Sprite::from_color(color, wall.half_extents * 2.0));
        }
    }
}
