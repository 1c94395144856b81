// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::SandboxBody;
use crate::core::config::SandboxConfig;
use crate::physics::settings::{gravity_units, time_scale, SimulationSettings};

#[derive(Component)]
pub struct HudText;

const KEY_HINTS: &str =
    "[Space] batch  [RMB] spawn  [LMB] drag  [A] attract  [P] pulse  [R] reset  [G] zero g\n\
     [Arrows] gravity  [ / ] time  [B / Shift+B] bounce  [D / Shift+D] drag";

pub fn spawn_hud(mut commands: Commands) {
    commands.spawn((
        HudText,
        Text::new(""),
        TextFont {
            font_size: 16.0,
            ..default()
        },
        TextColor(Color::srgb(0.8, 0.9, 1.0)),
        Node {
            position_type: PositionType::Absolute,
            top: Val::Px(8.0),
            left: Val::Px(10.0),
            ..default()
        },
    ));
}

pub fn hud_line(
    gravity: Vec2,
    time_scale: f32,
    settings: &SimulationSettings,
    bodies: usize,
) -> String {
    format!(
        "gravity ({:.1}, {:.1})  time x{:.1}  bounce {:.1}  drag {:.3}  field {}  bodies {}",
        gravity.x,
        gravity.y,
        time_scale,
        settings.bounciness,
        settings.air_drag,
        settings.force_field_mode.label(),
        bodies
    )
}

pub fn update_hud(
    settings: Res<SimulationSettings>,
    timestep: Res<TimestepMode>,
    cfg: Res<SandboxConfig>,
    engines: Query<&RapierConfiguration>,
    bodies: Query<(), With<SandboxBody>>,
    mut texts: Query<&mut Text, With<HudText>>,
) {
    let Ok(mut text) = texts.single_mut() else {
        return;
    };
    let gravity = engines
        .iter()
        .next()
        .map(|e| gravity_units(e.gravity, cfg.world.gravity_scale))
        .unwrap_or(Vec2::ZERO);
    let line = hud_line(gravity, time_scale(&timestep), &settings, bodies.iter().count());
    let content = format!("{line}\n{KEY_HINTS}");
    if text.0 != content {
        text.0 = content;
    }
}
