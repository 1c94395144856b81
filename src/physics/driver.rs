// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Steps the engine once per frame and owns the world lifecycle (populate, reset).

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::app::state::WorldPhase;
use crate::core::commands::SandboxCommand;
use crate::core::components::{Boundary, SandboxBody};
use crate::core::config::SandboxConfig;
use crate::core::system::system_order::{CommandSet, InputSet, PrePhysicsSet};
use crate::core::viewport::Viewport;
use crate::gameplay::spawn::{spawn_batch, SpawnRng};
use crate::interaction::drag::{spawn_pointer_constraint, PointerConstraint};
use crate::physics::boundaries::{rebuild_boundaries, WallParams};
use crate::physics::settings::SimulationSettings;

/// `physics_backend: false` leaves Rapier out so the orchestration runs headless in tests.
pub struct SimulationDriverPlugin {
    pub physics_backend: bool,
}

impl Plugin for SimulationDriverPlugin {
    fn build(&self, app: &mut App) {
        let cfg = app
            .world_mut()
            .get_resource_or_insert_with(SandboxConfig::default)
            .clone();
        if self.physics_backend {
            app.add_plugins(RapierPhysicsPlugin::<NoUserData>::pixels_per_meter(
                cfg.world.pixels_per_meter,
            ));
        }
        // Inserted after the plugin so it replaces Rapier's default timestep.
        app.insert_resource(TimestepMode::Variable {
            max_dt: 1.0 / 60.0,
            time_scale: cfg.world.time_scale,
            substeps: 1,
        })
        .init_state::<WorldPhase>()
        .configure_sets(
            Update,
            (
                InputSet,
                CommandSet.after(InputSet),
                PrePhysicsSet
                    .after(CommandSet)
                    .run_if(in_state(WorldPhase::Running)),
            ),
        )
        .add_systems(Startup, (populate_world, push_initial_gravity))
        .add_systems(Update, request_reset.in_set(CommandSet))
        .add_systems(OnEnter(WorldPhase::Resetting), reset_world);
    }
}

/// Anchor for the drag constraint plus the initial batch of shapes.
fn populate(
    commands: &mut Commands,
    rng: &mut SpawnRng,
    viewport: &Viewport,
    settings: &SimulationSettings,
    cfg: &SandboxConfig,
) -> usize {
    spawn_pointer_constraint(commands, viewport.center());
    spawn_batch(
        commands,
        &mut rng.0,
        cfg.spawn.initial_count,
        cfg.spawn.initial_height_fraction,
        viewport,
        settings,
        cfg,
    )
    .len()
}

pub fn populate_world(
    mut commands: Commands,
    mut rng: ResMut<SpawnRng>,
    viewport: Res<Viewport>,
    settings: Res<SimulationSettings>,
    cfg: Res<SandboxConfig>,
) {
    let spawned = populate(&mut commands, &mut rng, &viewport, &settings, &cfg);
    info!("World populated with {} shapes", spawned);
}

fn push_initial_gravity(cfg: Res<SandboxConfig>, mut writer: EventWriter<SandboxCommand>) {
    writer.write(SandboxCommand::SetGravity(cfg.world.gravity.as_vec2()));
}

pub fn request_reset(
    mut events: EventReader<SandboxCommand>,
    mut next: ResMut<NextState<WorldPhase>>,
) {
    if events.read().any(|ev| matches!(ev, SandboxCommand::Reset)) {
        next.set(WorldPhase::Resetting);
    }
}

/// Clears bodies and the drag constraint, rebuilds the walls, repopulates with the
/// settings active right now, then hands control back to `Running`.
#[allow(clippy::too_many_arguments)]
pub fn reset_world(
    mut commands: Commands,
    bodies: Query<Entity, With<SandboxBody>>,
    anchors: Query<Entity, With<PointerConstraint>>,
    walls: Query<Entity, With<Boundary>>,
    mut rng: ResMut<SpawnRng>,
    viewport: Res<Viewport>,
    settings: Res<SimulationSettings>,
    cfg: Res<SandboxConfig>,
    mut next: ResMut<NextState<WorldPhase>>,
) {
    let cleared = bodies.iter().count();
    for entity in bodies.iter().chain(anchors.iter()) {
        commands.entity(entity).despawn();
    }
    rebuild_boundaries(
        &mut commands,
        walls.iter(),
        &viewport,
        WallParams::from_config(&cfg),
    );
    let spawned = populate(&mut commands, &mut rng, &viewport, &settings, &cfg);
    next.set(WorldPhase::Running);
    info!("World reset: cleared {} shapes, spawned {}", cleared, spawned);
}
