// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy::window::WindowResized;

/// Size of the visible play area. World space `(0,0)..(width,height)` is exactly what the camera shows.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    pub fn center(&self) -> Vec2 {
        self.size() * 0.5
    }
}

/// Mirrors window resizes into `Viewport`; unchanged sizes do not trigger change detection.
pub fn track_viewport(mut resized: EventReader<WindowResized>, mut viewport: ResMut<Viewport>) {
    let Some(last) = resized.read().last() else {
        return;
    };
    if last.width <= 0.0 || last.height <= 0.0 {
        // Minimised windows report zero; keep the previous arena.
        return;
    }
    viewport.set_if_neq(Viewport::new(last.width, last.height));
}
