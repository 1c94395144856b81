// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

/// Marker for a user-spawned dynamic body (anything the material settings and force fields touch).
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct SandboxBody;

/// Shape descriptor of a spawned body. `size` is the diameter / side length in pixels.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct SandboxShape {
    pub kind: ShapeKind,
    pub size: f32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShapeKind {
    Circle,
    /// Axis-aligned square.
    Square,
    /// Regular polygon with 3..=5 sides, first vertex pointing up.
    Polygon { sides: u32 },
}

/// Palette color assigned at spawn; the renderer reads it, physics never does.
#[derive(Component, Debug, Clone, Copy, PartialEq, Deref)]
pub struct BodyColor(pub Color);

/// Which edge of the play area a boundary closes off.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BoundarySide {
    Top,
    Bottom,
    Left,
    Right,
}

impl BoundarySide {
    pub const ALL: [BoundarySide; 4] = [
        BoundarySide::Top,
        BoundarySide::Bottom,
        BoundarySide::Left,
        BoundarySide::Right,
    ];

    pub fn name(self) -> &'static str {
        match self {
            BoundarySide::Top => "WallTop",
            BoundarySide::Bottom => "WallBottom",
            BoundarySide::Left => "WallLeft",
            BoundarySide::Right => "WallRight",
        }
    }

    /// Only the top wall is drawn; the others are physical but invisible.
    pub fn is_rendered(self) -> bool {
        matches!(self, BoundarySide::Top)
    }
}

/// Static wall enclosing the play area. Exactly four exist between frames.
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Boundary {
    pub side: BoundarySide,
    pub half_extents: Vec2,
}
