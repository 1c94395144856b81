// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::input::InputSystem;
use bevy::prelude::*;
use bevy::window::PrimaryWindow;

/// Primary pointer (left mouse button or first touch) in world space.
/// `position` keeps its last value when the cursor leaves the window.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq)]
pub struct PointerState {
    pub position: Option<Vec2>,
    pub pressed: bool,
    pub just_pressed: bool,
    pub just_released: bool,
}

pub struct PointerPlugin;

impl Plugin for PointerPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<PointerState>()
            .add_systems(PreUpdate, track_pointer.after(InputSystem));
    }
}

fn screen_to_world(camera_q: &Query<(&Camera, &GlobalTransform)>, screen: Vec2) -> Option<Vec2> {
    let (camera, cam_tf) = camera_q.iter().next()?;
    camera.viewport_to_world_2d(cam_tf, screen).ok()
}

pub fn track_pointer(
    buttons: Res<ButtonInput<MouseButton>>,
    touches: Res<Touches>,
    windows_q: Query<&Window, With<PrimaryWindow>>,
    camera_q: Query<(&Camera, &GlobalTransform)>,
    mut pointer: ResMut<PointerState>,
) {
    let screen = match touches.iter().next() {
        Some(touch) => Some(touch.position()),
        None => windows_q.single().ok().and_then(|w| w.cursor_position()),
    };
    if let Some(world) = screen.and_then(|s| screen_to_world(&camera_q, s)) {
        pointer.position = Some(world);
    }
    pointer.pressed = buttons.pressed(MouseButton::Left) || touches.iter().next().is_some();
    pointer.just_pressed = buttons.just_pressed(MouseButton::Left)
        || touches.iter_just_pressed().next().is_some();
    pointer.just_released = buttons.just_released(MouseButton::Left)
        || touches.iter_just_released().next().is_some();
}
