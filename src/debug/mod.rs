// This file is part of Neon Sandbox.
// Copyright (C) 2025 Adam and contributors
// SPDX-License-Identifier: GPL-3.0-or-later

//! Debug module: feature gated stats logging and the Rapier wireframe toggle.
//! Built only when compiled with `--features debug`.

#[cfg(feature = "debug")]
pub mod keys;
#[cfg(feature = "debug")]
mod stats;

#[cfg(feature = "debug")]
pub use stats::DebugStats;

#[cfg(feature = "debug")]
use bevy::prelude::*;

#[cfg(feature = "debug")]
pub struct DebugPlugin;

#[cfg(feature = "debug")]
impl Plugin for DebugPlugin {
    fn build(&self, app: &mut App) {
        use bevy_rapier2d::render::RapierDebugRenderPlugin;
        use keys::debug_key_input_system;
        use stats::{debug_logging_system, debug_stats_collect_system};

        app.add_plugins(RapierDebugRenderPlugin {
            enabled: false,
            ..default()
        })
        .init_resource::<DebugStats>()
        .add_systems(
            Update,
            (
                debug_key_input_system,
                debug_stats_collect_system,
                debug_logging_system.after(debug_stats_collect_system),
            ),
        );
    }
}

#[cfg(not(feature = "debug"))]
pub struct DebugPlugin;

#[cfg(not(feature = "debug"))]
impl bevy::prelude::Plugin for DebugPlugin {
    fn build(&self, _app: &mut bevy::prelude::App) {}
}
