// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use common::{headless_app, send};
use neon_sandbox::{
    ForceFieldMode, PointerState, SandboxBody, SandboxCommand, SandboxConfig, SandboxShape,
    ShapeKind,
};

fn probe(app: &mut App, at: Vec2, mass: f32) -> Entity {
    app.world_mut()
        .spawn((
            SandboxBody,
            SandboxShape {
                kind: ShapeKind::Circle,
                size: 20.0,
            },
            Transform::from_translation(at.extend(0.0)),
            ColliderMassProperties::Mass(mass),
            ExternalForce::default(),
            ExternalImpulse::default(),
        ))
        .id()
}

fn force(app: &App, e: Entity) -> Vec2 {
    app.world().get::<ExternalForce>(e).map(|f| f.force).unwrap_or(Vec2::NAN)
}

fn impulse(app: &App, e: Entity) -> Vec2 {
    app.world().get::<ExternalImpulse>(e).map(|i| i.impulse).unwrap_or(Vec2::NAN)
}

#[test]
fn attraction_pulls_toward_pointer_scaled_by_mass() {
    let mut app = headless_app(SandboxConfig::default());
    let body = probe(&mut app, Vec2::new(100.0, 300.0), 2.0);
    app.world_mut().resource_mut::<PointerState>().position = Some(Vec2::new(500.0, 300.0));
    send(&mut app, SandboxCommand::SetForceFieldMode(ForceFieldMode::Attract));
    app.update();
    assert_eq!(force(&app, body), Vec2::new(400.0 * 50.0 * 2.0, 0.0));
}

#[test]
fn attraction_off_clears_forces() {
    let mut app = headless_app(SandboxConfig::default());
    let body = probe(&mut app, Vec2::new(100.0, 300.0), 1.0);
    app.world_mut().resource_mut::<PointerState>().position = Some(Vec2::new(100.0, 0.0));
    send(&mut app, SandboxCommand::ToggleAttraction);
    app.update();
    assert!(force(&app, body).y < 0.0);

    send(&mut app, SandboxCommand::ToggleAttraction);
    app.update();
    assert_eq!(force(&app, body), Vec2::ZERO);
}

#[test]
fn attraction_without_pointer_is_zero() {
    let mut app = headless_app(SandboxConfig::default());
    let body = probe(&mut app, Vec2::new(100.0, 300.0), 1.0);
    send(&mut app, SandboxCommand::SetForceFieldMode(ForceFieldMode::Attract));
    app.update();
    assert_eq!(force(&app, body), Vec2::ZERO);
}

#[test]
fn pulse_pushes_outward_with_fixed_magnitude() {
    let mut app = headless_app(SandboxConfig::default());
    let center = Vec2::new(640.0, 360.0);
    let at_center = probe(&mut app, center, 2.0);
    let offset = probe(&mut app, center + Vec2::new(30.0, 40.0), 2.0);
    let far = probe(&mut app, center - Vec2::new(300.0, 0.0), 2.0);
    send(&mut app, SandboxCommand::Pulse);
    app.update();

    assert_eq!(impulse(&app, at_center), Vec2::ZERO);
    let kick = impulse(&app, offset);
    assert!((kick - Vec2::new(960.0, 1280.0)).length() < 1e-2, "{kick:?}");
    let kick = impulse(&app, far);
    assert!((kick - Vec2::new(-1600.0, 0.0)).length() < 1e-2, "{kick:?}");
}
