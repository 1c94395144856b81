// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Systems for input action evaluation and translation into `SandboxCommand`s.
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use super::types::*;
use crate::core::commands::SandboxCommand;
use crate::core::config::SandboxConfig;
use crate::interaction::pointer::PointerState;
use crate::physics::settings::{gravity_units, time_scale, SimulationSettings};

/// Slider limits of the control surface. The store itself accepts anything.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl ControlRange {
    pub const GRAVITY: ControlRange = ControlRange { min: -2.0, max: 2.0, step: 0.1 };
    pub const TIME_SCALE: ControlRange = ControlRange { min: 0.0, max: 2.0, step: 0.1 };
    pub const BOUNCINESS: ControlRange = ControlRange { min: 0.0, max: 1.0, step: 0.1 };
    pub const AIR_DRAG: ControlRange = ControlRange { min: 0.0, max: 0.1, step: 0.005 };

    /// Moves `value` by `steps` increments, clamped and snapped to the step grid.
    pub fn nudge(&self, value: f32, steps: f32) -> f32 {
        let raw = (value + steps * self.step).clamp(self.min, self.max);
        ((raw / self.step).round() * self.step).clamp(self.min, self.max)
    }
}

/// Current values the relative actions (up/down) step from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlSnapshot {
    pub gravity: Vec2,
    pub time_scale: f32,
    pub bounciness: f32,
    pub air_drag: f32,
    pub pointer: Option<Vec2>,
}

/// Maps one triggered action to its command. `None` for actions handled elsewhere
/// (debug toggles) or that need a pointer position that is unknown.
pub fn action_command(action: SandboxAction, now: &ControlSnapshot) -> Option<SandboxCommand> {
    let g = ControlRange::GRAVITY;
    let cmd = match action {
        SandboxAction::SpawnBatch => SandboxCommand::SpawnBatch,
        SandboxAction::SpawnAtPointer => SandboxCommand::Spawn(now.pointer?),
        SandboxAction::Pulse => SandboxCommand::Pulse,
        SandboxAction::ToggleAttraction => SandboxCommand::ToggleAttraction,
        SandboxAction::Reset => SandboxCommand::Reset,
        SandboxAction::ZeroGravity => SandboxCommand::ZeroGravity,
        // Gravity is in screen convention, so "up" is negative y.
        SandboxAction::GravityUp => {
            SandboxCommand::SetGravity(Vec2::new(now.gravity.x, g.nudge(now.gravity.y, -1.0)))
        }
        SandboxAction::GravityDown => {
            SandboxCommand::SetGravity(Vec2::new(now.gravity.x, g.nudge(now.gravity.y, 1.0)))
        }
        SandboxAction::GravityLeft => {
            SandboxCommand::SetGravity(Vec2::new(g.nudge(now.gravity.x, -1.0), now.gravity.y))
        }
        SandboxAction::GravityRight => {
            SandboxCommand::SetGravity(Vec2::new(g.nudge(now.gravity.x, 1.0), now.gravity.y))
        }
        SandboxAction::TimeScaleUp => {
            SandboxCommand::SetTimeScale(ControlRange::TIME_SCALE.nudge(now.time_scale, 1.0))
        }
        SandboxAction::TimeScaleDown => {
            SandboxCommand::SetTimeScale(ControlRange::TIME_SCALE.nudge(now.time_scale, -1.0))
        }
        SandboxAction::BouncinessUp => {
            SandboxCommand::SetBounciness(ControlRange::BOUNCINESS.nudge(now.bounciness, 1.0))
        }
        SandboxAction::BouncinessDown => {
            SandboxCommand::SetBounciness(ControlRange::BOUNCINESS.nudge(now.bounciness, -1.0))
        }
        SandboxAction::AirDragUp => {
            SandboxCommand::SetAirDrag(ControlRange::AIR_DRAG.nudge(now.air_drag, 1.0))
        }
        SandboxAction::AirDragDown => {
            SandboxCommand::SetAirDrag(ControlRange::AIR_DRAG.nudge(now.air_drag, -1.0))
        }
        SandboxAction::ToggleDebugRender => return None,
    };
    Some(cmd)
}

pub fn system_evaluate_bindings(
    keyboard: Res<ButtonInput<KeyCode>>,
    mouse_buttons: Res<ButtonInput<MouseButton>>,
    mut input_map: ResMut<InputMap>,
) {
    input_map.evaluate(|token| match token {
        RawBindingToken::Key(k) => keyboard.pressed(k),
        RawBindingToken::MouseBtn(b) => mouse_buttons.pressed(b),
    });
}

pub fn emit_sandbox_commands(
    input_map: Res<InputMap>,
    pointer: Res<PointerState>,
    settings: Res<SimulationSettings>,
    engines: Query<&RapierConfiguration>,
    timestep: Res<TimestepMode>,
    cfg: Res<SandboxConfig>,
    mut writer: EventWriter<SandboxCommand>,
) {
    let gravity = engines
        .iter()
        .next()
        .map(|engine| gravity_units(engine.gravity, cfg.world.gravity_scale))
        .unwrap_or_else(|| cfg.world.gravity.as_vec2());
    let now = ControlSnapshot {
        gravity,
        time_scale: time_scale(&timestep),
        bounciness: settings.bounciness,
        air_drag: settings.air_drag,
        pointer: pointer.position,
    };
    for action in SandboxAction::ALL {
        if !input_map.just_pressed(action) {
            continue;
        }
        if let Some(cmd) = action_command(action, &now) {
            debug!("{} -> {:?}", action.name(), cmd);
            writer.write(cmd);
        }
    }
}
