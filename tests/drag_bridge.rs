// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

mod common;

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use common::{entities, headless_app, physics_app};
use neon_sandbox::{PointerConstraint, PointerState, SandboxBody, SandboxConfig};

fn anchor(app: &mut App) -> Entity {
    let anchors = entities::<With<PointerConstraint>>(app);
    assert_eq!(anchors.len(), 1, "exactly one drag constraint");
    anchors[0]
}

#[test]
fn anchor_follows_pointer() {
    let mut app = headless_app(SandboxConfig::default());
    let a = anchor(&mut app);
    app.world_mut().resource_mut::<PointerState>().position = Some(Vec2::new(120.0, 80.0));
    app.update();
    let tf = app.world().get::<Transform>(a).copied().unwrap_or_default();
    assert_eq!(tf.translation.truncate(), Vec2::new(120.0, 80.0));
    assert_eq!(
        app.world().get::<RigidBody>(a),
        Some(&RigidBody::KinematicPositionBased)
    );
}

#[test]
fn release_detaches_grabbed_body() {
    let mut app = headless_app(SandboxConfig::default());
    let a = anchor(&mut app);
    let body = app
        .world_mut()
        .spawn((
            SandboxBody,
            Transform::default(),
            ImpulseJoint::new(a, SpringJointBuilder::new(0.0, 200.0, 25.0)),
        ))
        .id();
    if let Some(mut constraint) = app.world_mut().get_mut::<PointerConstraint>(a) {
        constraint.grabbed = Some(body);
    }

    app.world_mut().resource_mut::<PointerState>().just_released = true;
    app.update();

    assert!(app.world().get::<ImpulseJoint>(body).is_none());
    assert_eq!(
        app.world().get::<PointerConstraint>(a).and_then(|c| c.grabbed),
        None
    );
}

#[test]
fn press_without_engine_grabs_nothing() {
    let mut app = headless_app(SandboxConfig::default());
    let a = anchor(&mut app);
    {
        let mut pointer = app.world_mut().resource_mut::<PointerState>();
        pointer.position = Some(Vec2::new(640.0, 360.0));
        pointer.just_pressed = true;
        pointer.pressed = true;
    }
    app.update();
    assert_eq!(
        app.world().get::<PointerConstraint>(a).and_then(|c| c.grabbed),
        None
    );
}

/// Engine-backed world with no gravity, no initial shapes and one ball at `at`.
fn world_with_ball(at: Vec2) -> (App, Entity, Entity) {
    let mut cfg = SandboxConfig::default();
    cfg.spawn.initial_count = 0;
    cfg.world.gravity.y = 0.0;
    let mut app = physics_app(cfg);
    let ball = app
        .world_mut()
        .spawn((
            SandboxBody,
            RigidBody::Dynamic,
            Collider::ball(25.0),
            Transform::from_translation(at.extend(0.0)),
        ))
        .id();
    // Let the engine register the collider before the pointer touches it.
    app.update();
    let a = anchor(&mut app);
    (app, a, ball)
}

fn set_pointer(
    app: &mut App,
    position: Vec2,
    pressed: bool,
    just_pressed: bool,
    just_released: bool,
) {
    let mut pointer = app.world_mut().resource_mut::<PointerState>();
    pointer.position = Some(position);
    pointer.pressed = pressed;
    pointer.just_pressed = just_pressed;
    pointer.just_released = just_released;
}

fn grabbed(app: &App, anchor: Entity) -> Option<Entity> {
    app.world().get::<PointerConstraint>(anchor).and_then(|c| c.grabbed)
}

#[test]
fn press_over_body_attaches_spring_to_anchor() {
    let at = Vec2::new(400.0, 300.0);
    let (mut app, a, ball) = world_with_ball(at);

    set_pointer(&mut app, at + Vec2::new(5.0, 0.0), true, true, false);
    app.update();

    assert_eq!(grabbed(&app, a), Some(ball));
    let joint = app.world().get::<ImpulseJoint>(ball).map(|j| j.parent);
    assert_eq!(joint, Some(a));
}

#[test]
fn press_over_empty_space_grabs_nothing() {
    let (mut app, a, ball) = world_with_ball(Vec2::new(400.0, 300.0));

    set_pointer(&mut app, Vec2::new(900.0, 500.0), true, true, false);
    app.update();

    assert_eq!(grabbed(&app, a), None);
    assert!(app.world().get::<ImpulseJoint>(ball).is_none());
}

#[test]
fn releasing_after_drag_removes_joint() {
    let at = Vec2::new(400.0, 300.0);
    let (mut app, a, ball) = world_with_ball(at);

    set_pointer(&mut app, at, true, true, false);
    app.update();
    set_pointer(&mut app, at + Vec2::new(30.0, 10.0), true, false, false);
    app.update();
    assert_eq!(grabbed(&app, a), Some(ball));

    set_pointer(&mut app, at + Vec2::new(30.0, 10.0), false, false, true);
    app.update();

    assert_eq!(grabbed(&app, a), None);
    assert!(app.world().get::<ImpulseJoint>(ball).is_none());
}

#[test]
fn tap_within_one_frame_leaves_body_free() {
    let at = Vec2::new(400.0, 300.0);
    let (mut app, a, ball) = world_with_ball(at);

    set_pointer(&mut app, at, false, true, true);
    app.update();
    set_pointer(&mut app, at, false, false, false);
    for _ in 0..3 {
        app.update();
    }

    assert_eq!(grabbed(&app, a), None);
    assert!(app.world().get::<ImpulseJoint>(ball).is_none());
}
