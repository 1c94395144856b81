// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Every user-facing action funnels through `SandboxCommand`.
//! Input glue only writes these; each variant is consumed by exactly one system.

use bevy::prelude::*;

/// Continuous force field applied every step before integration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ForceFieldMode {
    #[default]
    Off,
    /// Pull every dynamic body toward the pointer.
    Attract,
}

impl ForceFieldMode {
    pub fn toggled(self) -> Self {
        match self {
            ForceFieldMode::Off => ForceFieldMode::Attract,
            ForceFieldMode::Attract => ForceFieldMode::Off,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ForceFieldMode::Off => "Off",
            ForceFieldMode::Attract => "Attract",
        }
    }
}

#[derive(Event, Debug, Clone, Copy, PartialEq)]
pub enum SandboxCommand {
    /// Spawn one random shape at a world position.
    Spawn(Vec2),
    /// Spawn `spawn.batch_count` shapes near the top of the viewport.
    SpawnBatch,
    SetBounciness(f32),
    SetAirDrag(f32),
    /// Gravity in g units, screen convention (+y pulls down).
    SetGravity(Vec2),
    ZeroGravity,
    SetTimeScale(f32),
    SetForceFieldMode(ForceFieldMode),
    ToggleAttraction,
    /// Outward impulse from the viewport center.
    Pulse,
    Reset,
}
