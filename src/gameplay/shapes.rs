// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Geometry shared by the physics collider and the render mesh of a spawned shape.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use std::f32::consts::{FRAC_PI_2, TAU};

use crate::core::components::{SandboxShape, ShapeKind};

/// Vertices of a regular polygon centered on the origin, first vertex at the top,
/// counter-clockwise. Matches Bevy's `RegularPolygon` mesh winding.
pub fn regular_polygon_vertices(circumradius: f32, sides: u32) -> Vec<Vec2> {
    let sides = sides.max(3);
    (0..sides)
        .map(|i| {
            let angle = FRAC_PI_2 + i as f32 * TAU / sides as f32;
            Vec2::new(angle.cos(), angle.sin()) * circumradius
        })
        .collect()
}

impl SandboxShape {
    pub fn radius(&self) -> f32 {
        self.size * 0.5
    }

    pub fn area(&self) -> f32 {
        let r = self.radius();
        match self.kind {
            ShapeKind::Circle => std::f32::consts::PI * r * r,
            ShapeKind::Square => self.size * self.size,
            ShapeKind::Polygon { sides } => {
                let n = sides.max(3) as f32;
                0.5 * n * r * r * (TAU / n).sin()
            }
        }
    }

    pub fn collider(&self) -> Collider {
        let r = self.radius();
        match self.kind {
            ShapeKind::Circle => Collider::ball(r),
            ShapeKind::Square => Collider::cuboid(r, r),
            ShapeKind::Polygon { sides } => {
                Collider::convex_hull(&regular_polygon_vertices(r, sides))
                    .unwrap_or_else(|| Collider::ball(r))
            }
        }
    }
}
