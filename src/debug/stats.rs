// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

use bevy::prelude::*;
use bevy_rapier2d::prelude::*;

use crate::core::components::{Boundary, SandboxBody};
use crate::core::config::SandboxConfig;
use crate::physics::settings::{gravity_units, time_scale, SimulationSettings};

#[derive(Resource, Debug)]
pub struct DebugStats {
    pub frame_counter: u64,
    pub fps: f32,
    pub body_count: usize,
    pub boundary_count: usize,
    pub log_interval: f32,
    pub time_accum: f32,
}

impl Default for DebugStats {
    fn default() -> Self {
        Self {
            frame_counter: 0,
            fps: 0.0,
            body_count: 0,
            boundary_count: 0,
            log_interval: 5.0,
            time_accum: 0.0,
        }
    }
}

pub fn debug_stats_collect_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    bodies: Query<(), With<SandboxBody>>,
    walls: Query<(), With<Boundary>>,
) {
    stats.frame_counter += 1;
    let inst_fps = 1.0 / time.delta_secs().max(1e-6);
    stats.fps = if stats.fps == 0.0 {
        inst_fps
    } else {
        stats.fps * 0.9 + inst_fps * 0.1
    };
    stats.body_count = bodies.iter().count();
    stats.boundary_count = walls.iter().count();
}

pub fn debug_logging_system(
    time: Res<Time>,
    mut stats: ResMut<DebugStats>,
    settings: Res<SimulationSettings>,
    timestep: Res<TimestepMode>,
    cfg: Res<SandboxConfig>,
    engines: Query<&RapierConfiguration>,
) {
    stats.time_accum += time.delta_secs();
    if stats.time_accum < stats.log_interval {
        return;
    }
    stats.time_accum = 0.0;
    let gravity = engines
        .iter()
        .next()
        .map(|e| gravity_units(e.gravity, cfg.world.gravity_scale))
        .unwrap_or(Vec2::ZERO);
    info!(
        "SIM frame={} t={:.1}s fps={:.1} bodies={} walls={} field={} gravity=({:.1},{:.1}) time_scale={:.1}",
        stats.frame_counter,
        time.elapsed_secs(),
        stats.fps,
        stats.body_count,
        stats.boundary_count,
        settings.force_field_mode.label(),
        gravity.x,
        gravity.y,
        time_scale(&timestep)
    );
}
