// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Live simulation parameters. Bounciness and air drag are stored here and pushed onto
//! every existing body; gravity and time scale go straight to the engine.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::commands::{ForceFieldMode, SandboxCommand};
use crate::core::components::SandboxBody;
use crate::core::config::{MaterialConfig, SandboxConfig};
use crate::core::system::system_order::CommandSet;

#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct SimulationSettings {
    pub bounciness: f32,
    pub air_drag: f32,
    pub force_field_mode: ForceFieldMode,
}

impl SimulationSettings {
    pub fn from_config(cfg: &SandboxConfig) -> Self {
        Self {
            bounciness: cfg.material.bounciness,
            air_drag: cfg.material.air_drag,
            force_field_mode: ForceFieldMode::Off,
        }
    }

    pub fn restitution(&self) -> Restitution {
        Restitution {
            coefficient: self.bounciness,
            combine_rule: CoefficientCombineRule::Max,
        }
    }

    pub fn damping(&self, material: &MaterialConfig) -> Damping {
        let d = self.air_drag * material.air_drag_scale;
        Damping {
            linear_damping: d,
            angular_damping: d,
        }
    }
}

pub struct ParameterStorePlugin;

impl Plugin for ParameterStorePlugin {
    fn build(&self, app: &mut App) {
        if !app.world().contains_resource::<SimulationSettings>() {
            let settings = app
                .world()
                .get_resource::<SandboxConfig>()
                .map(SimulationSettings::from_config)
                .unwrap_or_else(|| SimulationSettings::from_config(&SandboxConfig::default()));
            app.insert_resource(settings);
        }
        app.add_systems(Update, apply_settings_commands.in_set(CommandSet));
    }
}

/// Gravity in g units (screen convention, +y down) to engine acceleration (y-up, px/s²).
pub fn engine_gravity(units: Vec2, gravity_scale: f32) -> Vec2 {
    Vec2::new(units.x, -units.y) * gravity_scale
}

/// Inverse of [`engine_gravity`]; zero scale reads back as no gravity.
pub fn gravity_units(engine: Vec2, gravity_scale: f32) -> Vec2 {
    if gravity_scale == 0.0 {
        return Vec2::ZERO;
    }
    Vec2::new(engine.x, -engine.y) / gravity_scale
}

pub fn time_scale(mode: &TimestepMode) -> f32 {
    match *mode {
        TimestepMode::Variable { time_scale, .. } | TimestepMode::Interpolated { time_scale, .. } => {
            time_scale
        }
        TimestepMode::Fixed { .. } => 1.0,
    }
}

/// Fixed mode has no scale; it is converted to a variable step of the same length.
pub fn set_time_scale(mode: &mut TimestepMode, value: f32) {
    match mode {
        TimestepMode::Variable { time_scale, .. } | TimestepMode::Interpolated { time_scale, .. } => {
            *time_scale = value;
        }
        TimestepMode::Fixed { dt, substeps } => {
            let (dt, substeps) = (*dt, *substeps);
            *mode = TimestepMode::Variable {
                max_dt: dt,
                time_scale: value,
                substeps,
            };
        }
    }
}

pub fn apply_settings_commands(
    mut events: EventReader<SandboxCommand>,
    mut settings: ResMut<SimulationSettings>,
    mut bodies: Query<(&mut Restitution, &mut Damping), With<SandboxBody>>,
    mut engines: Query<&mut RapierConfiguration>,
    mut timestep: ResMut<TimestepMode>,
    cfg: Res<SandboxConfig>,
) {
    for ev in events.read() {
        match *ev {
            SandboxCommand::SetBounciness(value) => {
                settings.bounciness = value;
                let restitution = settings.restitution();
                let mut touched = 0;
                for (mut r, _) in bodies.iter_mut() {
                    *r = restitution;
                    touched += 1;
                }
                info!("Bounciness -> {value:.2} ({touched} bodies)");
            }
            SandboxCommand::SetAirDrag(value) => {
                settings.air_drag = value;
                let damping = settings.damping(&cfg.material);
                let mut touched = 0;
                for (_, mut d) in bodies.iter_mut() {
                    *d = damping;
                    touched += 1;
                }
                info!("Air drag -> {value:.3} ({touched} bodies)");
            }
            SandboxCommand::SetGravity(units) => {
                let gravity = engine_gravity(units, cfg.world.gravity_scale);
                for mut engine in engines.iter_mut() {
                    engine.gravity = gravity;
                }
                info!("Gravity -> ({:.1}, {:.1})", units.x, units.y);
            }
            SandboxCommand::ZeroGravity => {
                for mut engine in engines.iter_mut() {
                    engine.gravity = Vec2::ZERO;
                }
                info!("Gravity zeroed");
            }
            SandboxCommand::SetTimeScale(value) => {
                set_time_scale(&mut timestep, value);
                info!("Time scale -> {value:.1}");
            }
            SandboxCommand::SetForceFieldMode(mode) => {
                settings.force_field_mode = mode;
                info!("Force field -> {}", mode.label());
            }
            SandboxCommand::ToggleAttraction => {
                settings.force_field_mode = settings.force_field_mode.toggled();
                info!("Force field -> {}", settings.force_field_mode.label());
            }
            _ => {}
        }
    }
}
