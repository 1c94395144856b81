// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Thin presentation layer: camera, meshes for bodies, the top wall sprite, HUD.
//! Nothing here feeds back into the simulation.

pub mod camera;
pub mod hud;
pub mod visuals;

use bevy::prelude::*;

use crate::core::system::system_order::CommandSet;

pub struct RenderingPlugin;

impl Plugin for RenderingPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(camera::CameraPlugin)
            .add_systems(Startup, hud::spawn_hud)
            .add_systems(
                PostUpdate,
                (visuals::attach_body_visuals, visuals::attach_boundary_visuals),
            )
            .add_systems(Update, hud::update_hud.after(CommandSet));
    }
}
