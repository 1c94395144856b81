// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;

use crate::core::viewport::{track_viewport, Viewport};

#[derive(Component, Debug)]
pub struct GameCamera;

pub struct CameraPlugin;

impl Plugin for CameraPlugin {
    fn build(&self, app: &mut App) {
        app.insert_resource(ClearColor(Color::srgb(0.04, 0.04, 0.09)))
            .add_systems(Startup, setup_camera)
            .add_systems(Update, center_camera_on_viewport.after(track_viewport));
    }
}

fn setup_camera(mut commands: Commands, viewport: Res<Viewport>) {
    // Required Components supply the projection; only the position matters here.
    commands.spawn((
        Camera2d,
        GameCamera,
        Transform::from_translation(viewport.center().extend(0.0)),
    ));
}

/// Keeps world `(0,0)` on the bottom-left corner of the window.
fn center_camera_on_viewport(
    viewport: Res<Viewport>,
    mut cameras: Query<&mut Transform, With<GameCamera>>,
) {
    if !viewport.is_changed() {
        return;
    }
    for mut tf in cameras.iter_mut() {
        tf.translation = viewport.center().extend(tf.translation.z);
    }
}
