// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Headless apps shared by the integration tests. `headless_app` leaves Rapier out, so
//! nothing is stepped and a bare `RapierConfiguration` entity stands in for the engine's
//! global config. `physics_app` runs the real engine without a window.
#![allow(dead_code)]

use bevy::ecs::query::QueryFilter;
use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use bevy_rapier2d::prelude::*;
use neon_sandbox::{SandboxCommand, SandboxConfig, SandboxCorePlugin, SpawnRng};

pub fn headless_app(cfg: SandboxConfig) -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.insert_resource(cfg);
    app.insert_resource(SpawnRng::seeded(7));
    app.add_plugins(SandboxCorePlugin::headless());
    app.world_mut().spawn(RapierConfiguration::new(1.0));
    app.update();
    app
}

pub fn physics_app(cfg: SandboxConfig) -> App {
    let mut app = App::new();
    app.add_plugins((
        MinimalPlugins,
        StatesPlugin,
        TransformPlugin,
        AssetPlugin::default(),
    ));
    app.init_asset::<Mesh>();
    app.insert_resource(cfg);
    app.insert_resource(SpawnRng::seeded(7));
    app.add_plugins(SandboxCorePlugin::default());
    app.update();
    app
}

pub fn count<F: QueryFilter>(app: &mut App) -> usize {
    let mut q = app.world_mut().query_filtered::<(), F>();
    q.iter(app.world()).count()
}

pub fn entities<F: QueryFilter>(app: &mut App) -> Vec<Entity> {
    let mut q = app.world_mut().query_filtered::<Entity, F>();
    q.iter(app.world()).collect()
}

pub fn send(app: &mut App, cmd: SandboxCommand) {
    app.world_mut().send_event(cmd);
}

pub fn engine_gravity(app: &mut App) -> Vec2 {
    let mut q = app.world_mut().query::<&RapierConfiguration>();
    q.single(app.world()).map(|c| c.gravity).unwrap_or(Vec2::NAN)
}
