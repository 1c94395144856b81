// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Synthetic forces on top of the engine: a continuous pull toward the pointer and a
//! one-shot radial pulse. Both scale with body mass so every shape accelerates alike.

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::commands::{ForceFieldMode, SandboxCommand};
use crate::core::components::{SandboxBody, SandboxShape};
use crate::core::config::SandboxConfig;
use crate::core::system::system_order::{CommandSet, PrePhysicsSet};
use crate::core::viewport::Viewport;
use crate::interaction::pointer::PointerState;
use crate::physics::settings::SimulationSettings;

/// Linear in distance: a body twice as far is pulled twice as hard.
pub fn attraction_force(position: Vec2, pointer: Vec2, mass: f32, strength: f32) -> Vec2 {
    (pointer - position) * strength * mass
}

/// Unit direction away from `center`; a body sitting exactly on it gets nothing.
pub fn pulse_impulse(position: Vec2, center: Vec2, mass: f32, strength: f32) -> Vec2 {
    (position - center).normalize_or_zero() * strength * mass
}

pub fn body_mass(props: &ColliderMassProperties, shape: &SandboxShape) -> f32 {
    match props {
        ColliderMassProperties::Mass(mass) => *mass,
        ColliderMassProperties::Density(density) => shape.area() * density,
        ColliderMassProperties::MassProperties(mp) => mp.mass,
    }
}

type FieldBody<'a> = (
    &'a Transform,
    &'a ColliderMassProperties,
    &'a SandboxShape,
    &'a mut ExternalForce,
);

/// Rewrites every body's continuous force for this step. `ExternalForce` persists in the
/// engine, so bodies are zeroed whenever the field is off or the pointer is unknown.
pub fn apply_attraction_field(
    settings: Res<SimulationSettings>,
    pointer: Res<PointerState>,
    cfg: Res<SandboxConfig>,
    mut bodies: Query<FieldBody, With<SandboxBody>>,
) {
    let target = match (settings.force_field_mode, pointer.position) {
        (ForceFieldMode::Attract, Some(p)) => Some(p),
        _ => None,
    };
    for (transform, props, shape, mut force) in bodies.iter_mut() {
        let new_force = match target {
            Some(p) => attraction_force(
                transform.translation.truncate(),
                p,
                body_mass(props, shape),
                cfg.forces.attract_strength,
            ),
            None => Vec2::ZERO,
        };
        // Unchanged forces are left untouched.
        if force.force != new_force || force.torque != 0.0 {
            force.force = new_force;
            force.torque = 0.0;
        }
    }
}

pub fn handle_pulse_commands(
    mut events: EventReader<SandboxCommand>,
    viewport: Res<Viewport>,
    cfg: Res<SandboxConfig>,
    mut bodies: Query<
        (&Transform, &ColliderMassProperties, &SandboxShape, &mut ExternalImpulse),
        With<SandboxBody>,
    >,
) {
    for ev in events.read() {
        if !matches!(ev, SandboxCommand::Pulse) {
            continue;
        }
        let center = viewport.center();
        let mut pushed = 0usize;
        for (transform, props, shape, mut impulse) in bodies.iter_mut() {
            let kick = pulse_impulse(
                transform.translation.truncate(),
                center,
                body_mass(props, shape),
                cfg.forces.pulse_strength,
            );
            if kick != Vec2::ZERO {
                impulse.impulse += kick;
                pushed += 1;
            }
        }
        info!("Pulse from {:?} pushed {} bodies", center, pushed);
    }
}

pub struct ForceFieldPlugin;

impl Plugin for ForceFieldPlugin {
    fn build(&self, app: &mut App) {
        app.add_systems(Update, handle_pulse_commands.in_set(CommandSet))
            .add_systems(Update, apply_attraction_field.in_set(PrePhysicsSet));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn attraction_points_at_pointer_and_grows_with_distance() {
        let near = attraction_force(Vec2::new(90.0, 0.0), Vec2::new(100.0, 0.0), 2.0, 50.0);
        let far = attraction_force(Vec2::new(80.0, 0.0), Vec2::new(100.0, 0.0), 2.0, 50.0);
        assert_eq!(near, Vec2::new(1000.0, 0.0));
        assert_eq!(far, near * 2.0);
        let on_pointer = attraction_force(Vec2::splat(5.0), Vec2::splat(5.0), 3.0, 50.0);
        assert_eq!(on_pointer, Vec2::ZERO);
    }

    #[test]
    fn pulse_magnitude_ignores_distance() {
        let center = Vec2::new(400.0, 300.0);
        let close = pulse_impulse(center + Vec2::new(3.0, 4.0), center, 1.5, 800.0);
        let far = pulse_impulse(center + Vec2::new(300.0, 400.0), center, 1.5, 800.0);
        assert!((close.length() - 1200.0).abs() < 1e-2);
        assert!((close - far).length() < 1e-2);
        assert!(close.x > 0.0 && close.y > 0.0);
    }

    #[test]
    fn pulse_at_center_is_zero() {
        let c = Vec2::new(10.0, 10.0);
        assert_eq!(pulse_impulse(c, c, 5.0, 800.0), Vec2::ZERO);
    }

    #[test]
    fn mass_prefers_explicit_value() {
        let shape = SandboxShape {
            kind: crate::core::components::ShapeKind::Square,
            size: 10.0,
        };
        assert_eq!(body_mass(&ColliderMassProperties::Mass(4.0), &shape), 4.0);
        assert_eq!(body_mass(&ColliderMassProperties::Density(0.5), &shape), 50.0);
    }
}
