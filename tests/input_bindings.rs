// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::ecs::event::EventCursor;
use bevy::prelude::*;
use bevy_rapier2d::prelude::*;
use neon_sandbox::interaction::inputmap::parse::{parse_input_toml, DEFAULT_INPUT_TOML};
use neon_sandbox::interaction::inputmap::systems::{emit_sandbox_commands, system_evaluate_bindings};
use neon_sandbox::{PointerState, SandboxCommand, SandboxConfig, SimulationSettings};

fn input_app() -> App {
    let cfg = SandboxConfig::default();
    let mut app = App::new();
    app.add_plugins(MinimalPlugins)
        .add_event::<SandboxCommand>()
        .insert_resource(ButtonInput::<KeyCode>::default())
        .insert_resource(ButtonInput::<MouseButton>::default())
        .insert_resource(parse_input_toml(DEFAULT_INPUT_TOML, false).input_map)
        .insert_resource(PointerState::default())
        .insert_resource(SimulationSettings::from_config(&cfg))
        .insert_resource(TimestepMode::Variable {
            max_dt: 1.0 / 60.0,
            time_scale: 1.0,
            substeps: 1,
        })
        .insert_resource(cfg)
        .add_systems(Update, (system_evaluate_bindings, emit_sandbox_commands).chain());
    app.world_mut().spawn(RapierConfiguration {
        gravity: Vec2::new(0.0, -980.0),
        ..RapierConfiguration::new(1.0)
    });
    app
}

/// Commands emitted since the previous `drain`.
struct Emitted(EventCursor<SandboxCommand>);

impl Emitted {
    fn new(app: &App) -> Self {
        Self(app.world().resource::<Events<SandboxCommand>>().get_cursor())
    }

    fn drain(&mut self, app: &App) -> Vec<SandboxCommand> {
        let events = app.world().resource::<Events<SandboxCommand>>();
        self.0.read(events).copied().collect()
    }
}

fn press(app: &mut App, keys: &[KeyCode]) {
    let mut input = app.world_mut().resource_mut::<ButtonInput<KeyCode>>();
    for k in keys {
        input.press(*k);
    }
}

#[test]
fn key_press_emits_once_per_press() {
    let mut app = input_app();
    let mut emitted = Emitted::new(&app);
    press(&mut app, &[KeyCode::Space]);
    app.update();
    assert_eq!(emitted.drain(&app), vec![SandboxCommand::SpawnBatch]);

    // Still held: no repeat.
    for _ in 0..4 {
        app.update();
        assert!(emitted.drain(&app).is_empty());
    }

    app.world_mut()
        .resource_mut::<ButtonInput<KeyCode>>()
        .release(KeyCode::Space);
    app.update();
    press(&mut app, &[KeyCode::Space]);
    app.update();
    assert_eq!(emitted.drain(&app), vec![SandboxCommand::SpawnBatch]);
}

#[test]
fn shifted_chord_wins_over_plain_key() {
    let mut app = input_app();
    let mut emitted = Emitted::new(&app);
    press(&mut app, &[KeyCode::ShiftLeft, KeyCode::KeyB]);
    app.update();
    let cmds = emitted.drain(&app);
    assert_eq!(cmds.len(), 1, "{cmds:?}");
    let SandboxCommand::SetBounciness(b) = cmds[0] else {
        panic!("expected SetBounciness, got {cmds:?}");
    };
    assert!((b - 0.8).abs() < 1e-5);
}

#[test]
fn gravity_keys_step_from_engine_value() {
    let mut app = input_app();
    let mut emitted = Emitted::new(&app);
    press(&mut app, &[KeyCode::ArrowRight]);
    app.update();
    let cmds = emitted.drain(&app);
    let [SandboxCommand::SetGravity(g)] = cmds.as_slice() else {
        panic!("expected one SetGravity, got {cmds:?}");
    };
    assert!((g.x - 0.1).abs() < 1e-5);
    assert!((g.y - 1.0).abs() < 1e-5);
}

#[test]
fn spawn_at_pointer_uses_pointer_position() {
    let mut app = input_app();
    let mut emitted = Emitted::new(&app);
    app.world_mut().resource_mut::<PointerState>().position = Some(Vec2::new(40.0, 60.0));
    app.world_mut()
        .resource_mut::<ButtonInput<MouseButton>>()
        .press(MouseButton::Right);
    app.update();
    assert_eq!(emitted.drain(&app), vec![SandboxCommand::Spawn(Vec2::new(40.0, 60.0))]);
}
